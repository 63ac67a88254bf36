use axum::extract::{Path, State};
use medipredict_core::domain::prediction::{
    entities::Prediction, ports::PredictionService, value_objects::GeneratePredictionInput,
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
pub struct GeneratePredictionResponse {
    pub data: Prediction,
}

#[utoipa::path(
    post,
    path = "/patients/{patient_id}/predictions",
    tag = "prediction",
    summary = "Generate prediction",
    description = "Sends the patient's recorded symptoms to the AI model and stores the assessment. \
        AI failures are stored as error assessments with zero confidence instead of failing the request.",
    params(
        ("patient_id" = Uuid, Path, description = "Patient id"),
    ),
    responses(
        (status = 201, body = GeneratePredictionResponse),
        (status = 403, description = "Caller is not staff"),
        (status = 404, description = "Patient not found"),
        (status = 422, description = "Patient has no recorded symptoms")
    ),
)]
pub async fn generate_prediction(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GeneratePredictionResponse>, ApiError> {
    let prediction = state
        .service
        .generate_prediction(identity, GeneratePredictionInput { patient_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(GeneratePredictionResponse { data: prediction }))
}
