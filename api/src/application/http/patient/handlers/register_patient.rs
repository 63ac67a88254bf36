use axum::extract::State;
use medipredict_core::domain::patient::{
    entities::RegisteredPatient, ports::PatientService, value_objects::RegisterPatientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        patient::validators::RegisterPatientValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegisterPatientResponse {
    pub data: RegisteredPatient,
}

#[utoipa::path(
    post,
    path = "/patients",
    tag = "patient",
    summary = "Register patient",
    description = "Creates a patient account and its profile. Staff only.",
    responses(
        (status = 201, body = RegisterPatientResponse),
        (status = 403, description = "Caller is not staff"),
        (status = 409, description = "Username already taken")
    ),
    request_body = RegisterPatientValidator
)]
pub async fn register_patient(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RegisterPatientValidator>,
) -> Result<Response<RegisterPatientResponse>, ApiError> {
    let registered = state
        .service
        .register_patient(
            identity,
            RegisterPatientInput {
                username: payload.username,
                password: payload.password,
                email: payload.email,
                first_name: payload.first_name,
                last_name: payload.last_name,
                phone_number: payload.phone_number,
                age: payload.age,
                gender: payload.gender,
                date_of_birth: payload.date_of_birth,
                medical_history: payload.medical_history,
                blood_group: payload.blood_group,
                emergency_contact: payload.emergency_contact,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RegisterPatientResponse { data: registered }))
}
