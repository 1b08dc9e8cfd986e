//! Menu Item Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::option_base64;

/// Popularity score at or above which an item counts as popular
pub const POPULAR_THRESHOLD: i64 = 80;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub item_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub is_active: bool,
    pub popularity_score: i64,
    #[serde(default, with = "option_base64")]
    pub image_data: Option<Vec<u8>>,
    #[serde(default)]
    pub image_mime_type: Option<String>,
}

impl MenuItem {
    pub fn has_image(&self) -> bool {
        self.image_data.is_some() && self.image_mime_type.is_some()
    }

    pub fn is_popular(&self) -> bool {
        self.popularity_score >= POPULAR_THRESHOLD
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    /// Defaults to true
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Defaults to 0
    #[serde(default)]
    pub popularity_score: Option<i64>,
    #[serde(default, with = "option_base64")]
    pub image_data: Option<Vec<u8>>,
    #[serde(default)]
    pub image_mime_type: Option<String>,
}

/// Update menu item payload
///
/// `item_id` must match the addressed record. Absent fields are left
/// unchanged; the active flag is owned by [`StatusUpdate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub item_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity_score: Option<i64>,
    #[serde(
        default,
        with = "option_base64",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_data: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_mime_type: Option<String>,
}

impl From<MenuItem> for MenuItemUpdate {
    /// Full-record update carrying every mergeable field of `item`
    fn from(item: MenuItem) -> Self {
        Self {
            item_id: item.item_id,
            name: Some(item.name),
            description: item.description,
            price: Some(item.price),
            category: Some(item.category),
            popularity_score: Some(item.popularity_score),
            image_data: item.image_data,
            image_mime_type: item.image_mime_type,
        }
    }
}

/// Active flag toggle payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub is_active: bool,
}

/// Binary image attached to a menu item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemImage {
    pub data: Vec<u8>,
    pub mime_type: String,
}
