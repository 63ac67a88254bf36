use axum::extract::{Path, State};
use medipredict_core::domain::patient::{
    entities::PatientDetail, ports::PatientService, value_objects::GetPatientInput,
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
pub struct GetPatientResponse {
    pub data: PatientDetail,
}

#[utoipa::path(
    get,
    path = "/patients/{patient_id}",
    tag = "patient",
    summary = "Get patient",
    description = "Patient account, profile, symptoms and predictions.",
    params(
        ("patient_id" = Uuid, Path, description = "Patient id"),
    ),
    responses(
        (status = 200, body = GetPatientResponse),
        (status = 404, description = "Patient not found")
    ),
)]
pub async fn get_patient(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPatientResponse>, ApiError> {
    let patient = state
        .service
        .get_patient(identity, GetPatientInput { patient_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPatientResponse { data: patient }))
}
