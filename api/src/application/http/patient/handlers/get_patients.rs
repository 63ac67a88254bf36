use axum::extract::{Query, State};
use medipredict_core::domain::patient::{
    entities::PatientList, ports::PatientService, value_objects::GetPatientsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetPatientsQuery {
    /// Case-insensitive match on username, names or phone number.
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPatientsResponse {
    pub data: PatientList,
}

#[utoipa::path(
    get,
    path = "/patients",
    tag = "patient",
    summary = "List patients",
    params(GetPatientsQuery),
    responses(
        (status = 200, body = GetPatientsResponse),
        (status = 403, description = "Caller is not staff")
    ),
)]
pub async fn get_patients(
    Query(query): Query<GetPatientsQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPatientsResponse>, ApiError> {
    let patients = state
        .service
        .get_patients(
            identity,
            GetPatientsInput {
                search: query.search,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPatientsResponse { data: patients }))
}
