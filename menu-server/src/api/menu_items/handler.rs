//! Menu Item API Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{
        Multipart, Path, State,
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate, StatusUpdate};

use crate::api::{json_body, path_param};
use crate::core::ServerState;
use crate::utils::error::multipart_error;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// Multipart field carrying the upload
const FILE_FIELD: &str = "file";

/// GET /api/menuItems - all menu items
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.catalog.list().await?;
    Ok(Json(items))
}

/// GET /api/menuItems/popular - items with popularity score >= 80
pub async fn list_popular(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.catalog.list_popular().await?;
    Ok(Json(items))
}

/// GET /api/menuItems/category/:category - case-insensitive category filter
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.catalog.list_by_category(&category).await?;
    Ok(Json(items))
}

/// GET /api/menuItems/:id - single menu item
pub async fn get_by_id(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MenuItem>> {
    let id = path_param(id)?;
    let item = state.catalog.get(id).await?;
    Ok(Json(item))
}

/// POST /api/menuItems - create, 201 with Location
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Option<MenuItemCreate>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let item = state.catalog.create(json_body(payload)?).await?;
    let location = format!("/api/menuItems/{}", item.item_id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

/// PUT /api/menuItems/:id - merge update
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Option<MenuItemUpdate>>, JsonRejection>,
) -> AppResult<Json<MenuItem>> {
    let id = path_param(id)?;
    let item = state.catalog.update(id, json_body(payload)?).await?;
    Ok(Json(item))
}

/// PATCH /api/menuItems/:id/status - toggle the active flag
pub async fn update_status(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> AppResult<Json<MenuItem>> {
    let id = path_param(id)?;
    let StatusUpdate { is_active } = json_body(payload)?;
    let item = state.catalog.update_status(id, is_active).await?;
    Ok(Json(item))
}

/// DELETE /api/menuItems/:id
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<ApiResponse> {
    let id = path_param(id)?;
    state.catalog.delete(id).await?;
    Ok(ApiResponse::ok_with_message(format!(
        "Menu item with ID {id} deleted successfully"
    )))
}

/// GET /api/menuItems/:id/image - raw image bytes with their content type
pub async fn get_image(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_param(id)?;
    let image = state.catalog.get_image(id).await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, image.mime_type)],
        Bytes::from(image.data),
    ))
}

/// POST /api/menuItems/:id/image - multipart upload, field `file`
pub async fn upload_image(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<ApiResponse> {
    let id = path_param(id)?;
    let mut multipart = multipart.map_err(|rejection| {
        AppError::with_message(
            ErrorCode::NoFileProvided,
            format!("Expected a multipart upload: {}", rejection.body_text()),
        )
    })?;

    let mut upload: Option<(Vec<u8>, String)> = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default();
        if name == FILE_FIELD || name.is_empty() {
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field.bytes().await.map_err(multipart_error)?;
            upload = Some((data.to_vec(), content_type));
            break;
        }
    }

    let (data, content_type) = upload.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::NoFileProvided,
            format!("No '{FILE_FIELD}' field found in the upload"),
        )
    })?;

    state.catalog.upload_image(id, data, &content_type).await?;
    Ok(ApiResponse::ok_with_message("Image uploaded successfully"))
}

/// DELETE /api/menuItems/:id/image
pub async fn remove_image(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<ApiResponse> {
    let id = path_param(id)?;
    state.catalog.remove_image(id).await?;
    Ok(ApiResponse::ok_with_message("Image removed successfully"))
}
