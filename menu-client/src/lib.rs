//! Menu Client - HTTP client and catalog cache for the menu server
//!
//! - [`NetworkHttpClient`]: typed calls against the REST API
//! - [`MenuApi`]: the catalog operations, implemented by the network client
//! - [`MenuStore`]: in-memory catalog mirror with a staleness window

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod store;

pub use api::MenuApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::NetworkHttpClient;
pub use store::MenuStore;

// Re-export shared types for convenience
pub use shared::models::{
    Customer, CustomerCreate, MenuItem, MenuItemCreate, MenuItemImage, MenuItemUpdate,
};
