//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemImage};
use sqlx::SqlitePool;

const COLUMNS: &str = "id AS item_id, name, description, price, category, is_active, \
                       popularity_score, image_data, image_mime_type";

/// Row values for an insert; price already normalised, image pair already validated
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub is_active: bool,
    pub popularity_score: i64,
    pub image: Option<MenuItemImage>,
}

/// Field-by-field merge; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct MenuItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub popularity_score: Option<i64>,
    pub image: Option<MenuItemImage>,
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

/// Case-insensitive category match
pub async fn find_by_category(pool: &SqlitePool, category: &str) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item WHERE LOWER(category) = LOWER(?) ORDER BY id"
    ))
    .bind(category)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_popular(pool: &SqlitePool, min_score: i64) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item WHERE popularity_score >= ? ORDER BY id"
    ))
    .bind(min_score)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn create(pool: &SqlitePool, data: NewMenuItem) -> RepoResult<MenuItem> {
    let (image_data, image_mime_type) = split_image(data.image);
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO menu_item (name, description, price, category, is_active, popularity_score, image_data, image_mime_type) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.name)
    .bind(data.description)
    .bind(data.price)
    .bind(data.category)
    .bind(data.is_active)
    .bind(data.popularity_score)
    .bind(image_data)
    .bind(image_mime_type)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

/// Returns `Ok(None)` when no row has `id`
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: MenuItemChanges,
) -> RepoResult<Option<MenuItem>> {
    let (image_data, image_mime_type) = split_image(data.image);
    let rows = sqlx::query(
        "UPDATE menu_item SET \
            name = COALESCE(?1, name), \
            description = COALESCE(?2, description), \
            price = COALESCE(?3, price), \
            category = COALESCE(?4, category), \
            popularity_score = COALESCE(?5, popularity_score), \
            image_data = COALESCE(?6, image_data), \
            image_mime_type = COALESCE(?7, image_mime_type) \
         WHERE id = ?8",
    )
    .bind(data.name)
    .bind(data.description)
    .bind(data.price)
    .bind(data.category)
    .bind(data.popularity_score)
    .bind(image_data)
    .bind(image_mime_type)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Ok(None);
    }
    find_by_id(pool, id).await
}

pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    is_active: bool,
) -> RepoResult<Option<MenuItem>> {
    let rows = sqlx::query("UPDATE menu_item SET is_active = ? WHERE id = ?")
        .bind(is_active)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Ok(None);
    }
    find_by_id(pool, id).await
}

/// Image pair only, without the rest of the row
pub async fn find_image(pool: &SqlitePool, id: i64) -> RepoResult<Option<Option<MenuItemImage>>> {
    let row: Option<(Option<Vec<u8>>, Option<String>)> =
        sqlx::query_as("SELECT image_data, image_mime_type FROM menu_item WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(|(data, mime_type)| match (data, mime_type) {
        (Some(data), Some(mime_type)) => Some(MenuItemImage { data, mime_type }),
        _ => None,
    }))
}

/// Store both halves of the image pair in one statement
pub async fn set_image(pool: &SqlitePool, id: i64, image: MenuItemImage) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE menu_item SET image_data = ?, image_mime_type = ? WHERE id = ?")
        .bind(image.data)
        .bind(image.mime_type)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Clear both halves of the image pair in one statement
pub async fn clear_image(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows =
        sqlx::query("UPDATE menu_item SET image_data = NULL, image_mime_type = NULL WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

fn split_image(image: Option<MenuItemImage>) -> (Option<Vec<u8>>, Option<String>) {
    match image {
        Some(image) => (Some(image.data), Some(image.mime_type)),
        None => (None, None),
    }
}
