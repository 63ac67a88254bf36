use axum::extract::{Path, State};
use medipredict_core::domain::prediction::{
    entities::Prediction, ports::PredictionService, value_objects::GetPredictionsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPredictionsResponse {
    pub data: Vec<Prediction>,
}

#[utoipa::path(
    get,
    path = "/patients/{patient_id}/predictions",
    tag = "prediction",
    summary = "List predictions",
    description = "Newest first.",
    params(
        ("patient_id" = Uuid, Path, description = "Patient id"),
    ),
    responses(
        (status = 200, body = GetPredictionsResponse)
    ),
)]
pub async fn get_predictions(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPredictionsResponse>, ApiError> {
    let predictions = state
        .service
        .get_predictions(identity, GetPredictionsInput { patient_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPredictionsResponse { data: predictions }))
}
