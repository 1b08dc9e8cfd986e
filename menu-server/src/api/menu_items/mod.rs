//! Menu Item API module
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /api/menuItems | list |
//! | POST | /api/menuItems | create |
//! | GET | /api/menuItems/popular | list_popular |
//! | GET | /api/menuItems/category/{category} | list_by_category |
//! | GET / PUT / DELETE | /api/menuItems/{id} | get_by_id / update / delete |
//! | PATCH | /api/menuItems/{id}/status | update_status |
//! | GET / POST / DELETE | /api/menuItems/{id}/image | get_image / upload_image / remove_image |

mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch},
};

use crate::core::ServerState;
use crate::utils::validation::MAX_IMAGE_SIZE;

/// Request body ceiling for this router
///
/// Leaves room for multipart framing and base64 inflation so oversized
/// images reach the upload rules instead of the transport limit.
const MAX_BODY_SIZE: usize = 4 * MAX_IMAGE_SIZE;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menuItems", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/popular", get(handler::list_popular))
        .route("/category/{category}", get(handler::list_by_category))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/status", patch(handler::update_status))
        .route(
            "/{id}/image",
            get(handler::get_image)
                .post(handler::upload_image)
                .delete(handler::remove_image),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}
