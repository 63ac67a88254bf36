use axum::extract::{Path, State};
use medipredict_core::domain::symptom::{
    entities::SymptomEntry, ports::SymptomService, value_objects::AddSymptomInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        symptom::validators::AddSymptomValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddSymptomResponse {
    pub data: SymptomEntry,
}

#[utoipa::path(
    post,
    path = "/patients/{patient_id}/symptoms",
    tag = "symptom",
    summary = "Record symptom",
    description = "Adds a symptom entry to a patient's record. Staff only.",
    params(
        ("patient_id" = Uuid, Path, description = "Patient id"),
    ),
    responses(
        (status = 201, body = AddSymptomResponse),
        (status = 404, description = "Patient not found")
    ),
    request_body = AddSymptomValidator
)]
pub async fn add_symptom(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddSymptomValidator>,
) -> Result<Response<AddSymptomResponse>, ApiError> {
    let symptom = state
        .service
        .add_symptom(
            identity,
            AddSymptomInput {
                patient_id,
                name: payload.name,
                severity: payload.severity,
                duration_days: payload.duration_days,
                notes: payload.notes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddSymptomResponse { data: symptom }))
}
