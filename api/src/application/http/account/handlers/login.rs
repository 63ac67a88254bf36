use axum::extract::State;
use medipredict_core::domain::authentication::{
    entities::AuthToken, ports::AuthService, value_objects::LoginInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    account::validators::LoginValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub data: AuthToken,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "account",
    summary = "Log in",
    description = "Exchanges username and password for a Bearer token.",
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    request_body = LoginValidator
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let token = state
        .service
        .login(LoginInput {
            username: payload.username,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse { data: token }))
}
