use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    generate_prediction::{__path_generate_prediction, generate_prediction},
    get_prediction::{__path_get_prediction, get_prediction},
    get_predictions::{__path_get_predictions, get_predictions},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_predictions, generate_prediction, get_prediction))]
pub struct PredictionApiDoc;

pub fn prediction_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/patients/{{patient_id}}/predictions",
                state.args.server.root_path
            ),
            get(get_predictions).post(generate_prediction),
        )
        .route(
            &format!(
                "{}/predictions/{{prediction_id}}",
                state.args.server.root_path
            ),
            get(get_prediction),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
