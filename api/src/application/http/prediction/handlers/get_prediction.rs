use axum::extract::{Path, State};
use medipredict_core::domain::prediction::{
    entities::Prediction, ports::PredictionService, value_objects::GetPredictionInput,
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
pub struct GetPredictionResponse {
    pub data: Prediction,
}

#[utoipa::path(
    get,
    path = "/predictions/{prediction_id}",
    tag = "prediction",
    summary = "Get prediction",
    params(
        ("prediction_id" = Uuid, Path, description = "Prediction id"),
    ),
    responses(
        (status = 200, body = GetPredictionResponse),
        (status = 403, description = "Prediction belongs to another patient"),
        (status = 404, description = "Prediction not found")
    ),
)]
pub async fn get_prediction(
    Path(prediction_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPredictionResponse>, ApiError> {
    let prediction = state
        .service
        .get_prediction(identity, GetPredictionInput { prediction_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPredictionResponse { data: prediction }))
}
