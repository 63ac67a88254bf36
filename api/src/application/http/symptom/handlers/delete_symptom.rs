use axum::extract::{Path, State};
use medipredict_core::domain::symptom::{ports::SymptomService, value_objects::DeleteSymptomInput};
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
pub struct DeleteSymptomResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/symptoms/{symptom_id}",
    tag = "symptom",
    summary = "Delete symptom",
    params(
        ("symptom_id" = Uuid, Path, description = "Symptom id"),
    ),
    responses(
        (status = 200, body = DeleteSymptomResponse),
        (status = 403, description = "Symptom belongs to another patient"),
        (status = 404, description = "Symptom not found")
    ),
)]
pub async fn delete_symptom(
    Path(symptom_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteSymptomResponse>, ApiError> {
    state
        .service
        .delete_symptom(identity, DeleteSymptomInput { symptom_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteSymptomResponse {
        message: "Symptom deleted successfully".to_string(),
    }))
}
