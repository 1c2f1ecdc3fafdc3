use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod contact;
pub mod health;
pub mod lead;

fn error(code: StatusCode, detail: impl serde::Serialize) -> Response {
    (code, Json(ApiError { detail })).into_response()
}
