//! Catalog API abstraction
//!
//! [`MenuApi`] is the seam between the [`MenuStore`](crate::MenuStore) and the
//! transport. [`NetworkHttpClient`](crate::NetworkHttpClient) implements it over
//! HTTP; tests substitute an in-memory fake.

use async_trait::async_trait;
use shared::models::{MenuItem, MenuItemCreate, MenuItemImage, MenuItemUpdate};

use crate::ClientResult;

#[async_trait]
pub trait MenuApi: Send + Sync {
    /// GET /menuItems
    async fn get_menu_items(&self) -> ClientResult<Vec<MenuItem>>;

    /// GET /menuItems/{id}
    async fn get_menu_item(&self, id: i64) -> ClientResult<MenuItem>;

    /// GET /menuItems/category/{category}
    async fn get_menu_items_by_category(&self, category: &str) -> ClientResult<Vec<MenuItem>>;

    /// GET /menuItems/popular
    async fn get_popular_items(&self) -> ClientResult<Vec<MenuItem>>;

    /// POST /menuItems
    async fn create_menu_item(&self, item: &MenuItemCreate) -> ClientResult<MenuItem>;

    /// PUT /menuItems/{item.item_id}
    async fn update_menu_item(&self, item: &MenuItemUpdate) -> ClientResult<MenuItem>;

    /// PATCH /menuItems/{id}/status
    async fn update_menu_item_status(&self, id: i64, is_active: bool) -> ClientResult<MenuItem>;

    /// DELETE /menuItems/{id}, returns the server's confirmation message
    async fn delete_menu_item(&self, id: i64) -> ClientResult<String>;

    /// GET /menuItems/{id}/image
    async fn get_menu_item_image(&self, id: i64) -> ClientResult<MenuItemImage>;

    /// POST /menuItems/{id}/image as multipart field `file`
    async fn upload_menu_item_image(
        &self,
        id: i64,
        data: Vec<u8>,
        content_type: &str,
    ) -> ClientResult<String>;

    /// DELETE /menuItems/{id}/image
    async fn remove_menu_item_image(&self, id: i64) -> ClientResult<String>;
}
