//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub marketing_opt_in: bool,
    /// Unix millis
    pub join_date: i64,
    pub loyalty_points: i64,
}

/// Create / full-overwrite customer payload
///
/// `customer_id` is ignored on create and must match the path on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    #[serde(default)]
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub marketing_opt_in: bool,
    /// Unix millis; 0 or absent means "now"
    #[serde(default)]
    pub join_date: Option<i64>,
    #[serde(default)]
    pub loyalty_points: i64,
}
