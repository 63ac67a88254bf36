use axum::extract::State;
use medipredict_core::domain::{
    authentication::{ports::AuthService, value_objects::RegisterAdminInput},
    user::entities::User,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    account::validators::RegisterAdminValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegisterAdminResponse {
    pub data: User,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "account",
    summary = "Register staff account",
    description = "Creates an admin (clinic staff) account.",
    responses(
        (status = 201, body = RegisterAdminResponse),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Username already taken")
    ),
    request_body = RegisterAdminValidator
)]
pub async fn register_admin(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterAdminValidator>,
) -> Result<Response<RegisterAdminResponse>, ApiError> {
    let user = state
        .service
        .register_admin(RegisterAdminInput {
            username: payload.username,
            email: payload.email,
            first_name: payload.first_name,
            last_name: payload.last_name,
            phone_number: payload.phone_number,
            age: payload.age,
            date_of_birth: payload.date_of_birth,
            password: payload.password,
            password_confirmation: payload.password_confirmation,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RegisterAdminResponse { data: user }))
}
