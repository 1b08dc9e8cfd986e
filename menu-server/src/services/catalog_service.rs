//! Catalog Service - menu item management
//!
//! Owns every rule about menu items that the database cannot express:
//! payload presence, id agreement, text limits, price normalisation and the
//! image upload rules. Each operation is a short sequence of repository
//! calls against the pool; no state is held in memory.

use shared::models::{MenuItem, MenuItemCreate, MenuItemImage, MenuItemUpdate, POPULAR_THRESHOLD};
use sqlx::SqlitePool;

use crate::db::repository::menu_item::{self, MenuItemChanges, NewMenuItem};
use crate::utils::error::internal_with_context;
use crate::utils::money::normalize_price;
use crate::utils::validation::{
    MAX_CATEGORY_LEN, MAX_NAME_LEN, validate_image, validate_image_pair, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

const READ_CONTEXT: &str = "Error retrieving data";
const CREATE_CONTEXT: &str = "Error creating menu item";
const UPDATE_CONTEXT: &str = "Error updating menu item";
const STATUS_CONTEXT: &str = "Error updating menu item status";
const DELETE_CONTEXT: &str = "Error deleting menu item";
const IMAGE_CONTEXT: &str = "Error updating menu item image";

fn not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::MenuItemNotFound,
        format!("Menu item with ID {id} not found"),
    )
    .with_detail("id", id)
}

fn no_image(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::ImageNotFound,
        format!("Menu item with ID {id} has no image"),
    )
    .with_detail("id", id)
}

fn image_from_pair(data: Option<Vec<u8>>, mime_type: Option<String>) -> Option<MenuItemImage> {
    match (data, mime_type) {
        (Some(data), Some(mime_type)) => Some(MenuItemImage {
            data,
            mime_type: mime_type.trim().to_ascii_lowercase(),
        }),
        _ => None,
    }
}

/// Menu item catalog backed by SQLite
#[derive(Clone, Debug)]
pub struct CatalogService {
    pool: SqlitePool,
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All items in store order
    pub async fn list(&self) -> AppResult<Vec<MenuItem>> {
        menu_item::find_all(&self.pool)
            .await
            .map_err(|e| internal_with_context(READ_CONTEXT, e))
    }

    /// Items whose category matches case-insensitively; no match is an empty list
    pub async fn list_by_category(&self, category: &str) -> AppResult<Vec<MenuItem>> {
        menu_item::find_by_category(&self.pool, category)
            .await
            .map_err(|e| internal_with_context(READ_CONTEXT, e))
    }

    /// Items with a popularity score of at least [`POPULAR_THRESHOLD`]
    pub async fn list_popular(&self) -> AppResult<Vec<MenuItem>> {
        menu_item::find_popular(&self.pool, POPULAR_THRESHOLD)
            .await
            .map_err(|e| internal_with_context(READ_CONTEXT, e))
    }

    pub async fn get(&self, id: i64) -> AppResult<MenuItem> {
        menu_item::find_by_id(&self.pool, id)
            .await
            .map_err(|e| internal_with_context(READ_CONTEXT, e))?
            .ok_or_else(|| not_found(id))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub async fn create(&self, payload: Option<MenuItemCreate>) -> AppResult<MenuItem> {
        let data = payload.ok_or_else(|| AppError::new(ErrorCode::MenuItemMissing))?;

        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.category, "category", MAX_CATEGORY_LEN)?;
        let price = normalize_price(data.price)?;
        validate_image_pair(&data.image_data, &data.image_mime_type)?;

        let item = menu_item::create(
            &self.pool,
            NewMenuItem {
                name: data.name,
                description: data.description,
                price,
                category: data.category,
                is_active: data.is_active.unwrap_or(true),
                popularity_score: data.popularity_score.unwrap_or(0),
                image: image_from_pair(data.image_data, data.image_mime_type),
            },
        )
        .await
        .map_err(|e| internal_with_context(CREATE_CONTEXT, e))?;

        tracing::info!(id = item.item_id, name = %item.name, "Menu item created");
        Ok(item)
    }

    /// Field-by-field merge; the active flag is left to [`Self::update_status`]
    pub async fn update(&self, id: i64, payload: Option<MenuItemUpdate>) -> AppResult<MenuItem> {
        let data = payload.ok_or_else(|| AppError::new(ErrorCode::MenuItemMissing))?;
        if data.item_id != id {
            return Err(AppError::new(ErrorCode::MenuItemIdMismatch)
                .with_detail("pathId", id)
                .with_detail("bodyId", data.item_id));
        }

        if let Some(name) = &data.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(category) = &data.category {
            validate_required_text(category, "category", MAX_CATEGORY_LEN)?;
        }
        let price = data.price.map(normalize_price).transpose()?;
        validate_image_pair(&data.image_data, &data.image_mime_type)?;

        let changes = MenuItemChanges {
            name: data.name,
            description: data.description,
            price,
            category: data.category,
            popularity_score: data.popularity_score,
            image: image_from_pair(data.image_data, data.image_mime_type),
        };

        let item = menu_item::update(&self.pool, id, changes)
            .await
            .map_err(|e| internal_with_context(UPDATE_CONTEXT, e))?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(id, "Menu item updated");
        Ok(item)
    }

    pub async fn update_status(&self, id: i64, is_active: bool) -> AppResult<MenuItem> {
        let item = menu_item::update_status(&self.pool, id, is_active)
            .await
            .map_err(|e| internal_with_context(STATUS_CONTEXT, e))?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(id, is_active, "Menu item status updated");
        Ok(item)
    }

    /// Remove an item, clearing any attached image in a separate write first
    ///
    /// Not atomic: a crash between the two writes leaves an image-less item.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let item = menu_item::find_by_id(&self.pool, id)
            .await
            .map_err(|e| internal_with_context(DELETE_CONTEXT, e))?
            .ok_or_else(|| not_found(id))?;

        if item.image_data.is_some() || item.image_mime_type.is_some() {
            menu_item::clear_image(&self.pool, id)
                .await
                .map_err(|e| internal_with_context(DELETE_CONTEXT, e))?;

            let reread = menu_item::find_by_id(&self.pool, id)
                .await
                .map_err(|e| internal_with_context(DELETE_CONTEXT, e))?
                .ok_or_else(|| not_found(id))?;
            if reread.image_data.is_some() || reread.image_mime_type.is_some() {
                tracing::error!(id, "Image still attached after clearing");
                return Err(AppError::database("Failed to delete menu item")
                    .with_detail("error", "image could not be cleared"));
            }
            tracing::debug!(id, "Cleared image before delete");
        }

        let deleted = menu_item::delete(&self.pool, id)
            .await
            .map_err(|e| internal_with_context(DELETE_CONTEXT, e))?;
        if !deleted {
            return Err(AppError::database("Failed to delete menu item"));
        }

        tracing::info!(id, "Menu item deleted");
        Ok(())
    }

    // =========================================================================
    // Images
    // =========================================================================

    pub async fn get_image(&self, id: i64) -> AppResult<MenuItemImage> {
        menu_item::find_image(&self.pool, id)
            .await
            .map_err(|e| internal_with_context(READ_CONTEXT, e))?
            .ok_or_else(|| not_found(id))?
            .ok_or_else(|| no_image(id))
    }

    /// Validate and attach an image, replacing any previous one
    pub async fn upload_image(&self, id: i64, data: Vec<u8>, content_type: &str) -> AppResult<()> {
        validate_image(&data, content_type)?;

        let size = data.len();
        let image = MenuItemImage {
            data,
            mime_type: content_type.trim().to_ascii_lowercase(),
        };
        let stored = menu_item::set_image(&self.pool, id, image)
            .await
            .map_err(|e| internal_with_context(IMAGE_CONTEXT, e))?;
        if !stored {
            return Err(not_found(id));
        }

        tracing::info!(id, size, content_type, "Menu item image uploaded");
        Ok(())
    }

    pub async fn remove_image(&self, id: i64) -> AppResult<()> {
        let image = menu_item::find_image(&self.pool, id)
            .await
            .map_err(|e| internal_with_context(IMAGE_CONTEXT, e))?
            .ok_or_else(|| not_found(id))?;
        if image.is_none() {
            return Err(no_image(id));
        }

        menu_item::clear_image(&self.pool, id)
            .await
            .map_err(|e| internal_with_context(IMAGE_CONTEXT, e))?;

        tracing::info!(id, "Menu item image removed");
        Ok(())
    }
}
