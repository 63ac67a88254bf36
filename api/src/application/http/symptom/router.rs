use axum::{
    Router, middleware,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    add_symptom::{__path_add_symptom, add_symptom},
    delete_symptom::{__path_delete_symptom, delete_symptom},
    get_symptoms::{__path_get_symptoms, get_symptoms},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_symptoms, add_symptom, delete_symptom))]
pub struct SymptomApiDoc;

pub fn symptom_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/patients/{{patient_id}}/symptoms",
                state.args.server.root_path
            ),
            get(get_symptoms).post(add_symptom),
        )
        .route(
            &format!("{}/symptoms/{{symptom_id}}", state.args.server.root_path),
            delete(delete_symptom),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
