//! Data models
//!
//! Shared between menu-server and menu-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod customer;
pub mod menu_item;
pub mod serde_helpers;

// Re-exports
pub use customer::*;
pub use menu_item::*;
