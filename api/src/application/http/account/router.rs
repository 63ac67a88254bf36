use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    login::{__path_login, login},
    register_admin::{__path_register_admin, register_admin},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(register_admin, login))]
pub struct AccountApiDoc;

pub fn account_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/accounts/register", state.args.server.root_path),
            post(register_admin),
        )
        .route(
            &format!("{}/accounts/login", state.args.server.root_path),
            post(login),
        )
}
