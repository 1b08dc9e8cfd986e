//! HTTP API
//!
//! | Prefix | Module |
//! |--------|--------|
//! | /health | [`health`] |
//! | /api/menuItems | [`menu_items`] |
//! | /api/customers | [`customers`] |

pub mod customers;
pub mod health;
pub mod menu_items;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;

use crate::utils::{AppError, AppResult};

/// Unwrap a JSON body, turning framework rejections into structured 400s
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| {
            AppError::invalid(format!("Invalid request body: {}", rejection.body_text()))
        })
}

/// Unwrap a path parameter, turning framework rejections into structured 400s
pub(crate) fn path_param<T>(path: Result<Path<T>, PathRejection>) -> AppResult<T> {
    path.map(|Path(value)| value)
        .map_err(|rejection| AppError::invalid(format!("Invalid path: {}", rejection.body_text())))
}
