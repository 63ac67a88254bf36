use axum::extract::{Path, State};
use medipredict_core::domain::symptom::{
    entities::SymptomEntry, ports::SymptomService, value_objects::GetSymptomsInput,
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
pub struct GetSymptomsResponse {
    pub data: Vec<SymptomEntry>,
}

#[utoipa::path(
    get,
    path = "/patients/{patient_id}/symptoms",
    tag = "symptom",
    summary = "List symptoms",
    description = "Newest entries first.",
    params(
        ("patient_id" = Uuid, Path, description = "Patient id"),
    ),
    responses(
        (status = 200, body = GetSymptomsResponse)
    ),
)]
pub async fn get_symptoms(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetSymptomsResponse>, ApiError> {
    let symptoms = state
        .service
        .get_symptoms(identity, GetSymptomsInput { patient_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSymptomsResponse { data: symptoms }))
}
