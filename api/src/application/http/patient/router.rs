use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_dashboard::{__path_get_dashboard, get_dashboard},
    get_patient::{__path_get_patient, get_patient},
    get_patients::{__path_get_patients, get_patients},
    register_patient::{__path_register_patient, register_patient},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_patients, register_patient, get_patient, get_dashboard))]
pub struct PatientApiDoc;

pub fn patient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/patients", state.args.server.root_path),
            get(get_patients).post(register_patient),
        )
        .route(
            &format!("{}/patients/{{patient_id}}", state.args.server.root_path),
            get(get_patient),
        )
        .route(
            &format!("{}/me/dashboard", state.args.server.root_path),
            get(get_dashboard),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
