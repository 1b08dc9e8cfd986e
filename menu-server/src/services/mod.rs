//! Services - business rules between the HTTP handlers and the repositories
//!
//! - [`CatalogService`] - menu items and their images
//! - [`CustomerService`] - customers and loyalty points

pub mod catalog_service;
pub mod customer_service;
pub mod http;

pub use catalog_service::CatalogService;
pub use customer_service::CustomerService;
pub use http::{HttpService, build_app};
