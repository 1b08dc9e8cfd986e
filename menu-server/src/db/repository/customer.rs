//! Customer Repository

use super::{RepoError, RepoResult};
use shared::models::Customer;
use sqlx::SqlitePool;

const COLUMNS: &str = "id AS customer_id, first_name, last_name, email, phone, \
                       marketing_opt_in, join_date, loyalty_points";

/// Full row values for insert / overwrite
#[derive(Debug, Clone)]
pub struct CustomerRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub marketing_opt_in: bool,
    pub join_date: i64,
    pub loyalty_points: i64,
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Customer>> {
    let customers =
        sqlx::query_as::<_, Customer>(&format!("SELECT {COLUMNS} FROM customer ORDER BY id"))
            .fetch_all(pool)
            .await?;
    Ok(customers)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let customer =
        sqlx::query_as::<_, Customer>(&format!("SELECT {COLUMNS} FROM customer WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(customer)
}

/// Case-insensitive email lookup
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>(&format!(
        "SELECT {COLUMNS} FROM customer WHERE email = ? COLLATE NOCASE LIMIT 1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(customer)
}

pub async fn create(pool: &SqlitePool, data: CustomerRow) -> RepoResult<Customer> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO customer (first_name, last_name, email, phone, marketing_opt_in, join_date, loyalty_points) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.first_name)
    .bind(data.last_name)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.marketing_opt_in)
    .bind(data.join_date)
    .bind(data.loyalty_points)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create customer".into()))
}

/// Overwrite every column; returns `false` when no row has `id`
pub async fn replace(pool: &SqlitePool, id: i64, data: CustomerRow) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE customer SET first_name = ?, last_name = ?, email = ?, phone = ?, \
         marketing_opt_in = ?, join_date = ?, loyalty_points = ? WHERE id = ?",
    )
    .bind(data.first_name)
    .bind(data.last_name)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.marketing_opt_in)
    .bind(data.join_date)
    .bind(data.loyalty_points)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM customer WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn loyalty_points(pool: &SqlitePool, id: i64) -> RepoResult<Option<i64>> {
    let points: Option<i64> =
        sqlx::query_scalar("SELECT loyalty_points FROM customer WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(points)
}

/// Atomic increment; returns `false` when no row has `id`
///
/// A sum outside the i64 range fails the column's integer CHECK and comes
/// back as `RepoError::Validation`.
pub async fn add_loyalty_points(pool: &SqlitePool, id: i64, points: i32) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE customer SET loyalty_points = loyalty_points + ? WHERE id = ?")
        .bind(points)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
