use axum::extract::State;
use medipredict_core::domain::patient::{entities::PatientDashboard, ports::PatientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDashboardResponse {
    pub data: PatientDashboard,
}

#[utoipa::path(
    get,
    path = "/me/dashboard",
    tag = "patient",
    summary = "Patient dashboard",
    description = "The calling patient's profile, symptoms and predictions.",
    responses(
        (status = 200, body = GetDashboardResponse),
        (status = 403, description = "Caller is not a patient")
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetDashboardResponse>, ApiError> {
    let dashboard = state
        .service
        .get_dashboard(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDashboardResponse { data: dashboard }))
}
