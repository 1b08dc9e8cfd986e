//! Customer Service - customer records and loyalty points

use shared::models::{Customer, CustomerCreate};
use shared::util::now_millis;
use sqlx::SqlitePool;

use crate::db::repository::RepoError;
use crate::db::repository::customer::{self, CustomerRow};
use crate::utils::error::internal_with_context;
use crate::utils::validation::{
    MAX_PERSON_NAME_LEN, MAX_PHONE_LEN, validate_email, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

const READ_CONTEXT: &str = "Error retrieving data";
const CREATE_CONTEXT: &str = "Error creating record";
const UPDATE_CONTEXT: &str = "Error updating record";
const DELETE_CONTEXT: &str = "Error deleting record";

fn not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::CustomerNotFound,
        format!("Customer with ID {id} not found"),
    )
    .with_detail("id", id)
}

fn write_error(context: &str, email: &str, err: RepoError) -> AppError {
    match err {
        RepoError::Duplicate(_) => AppError::with_message(
            ErrorCode::CustomerEmailExists,
            format!("Customer with email {email} already exists"),
        )
        .with_detail("email", email),
        other => internal_with_context(context, other),
    }
}

fn validate(data: &CustomerCreate) -> AppResult<()> {
    validate_required_text(&data.first_name, "firstName", MAX_PERSON_NAME_LEN)?;
    validate_required_text(&data.last_name, "lastName", MAX_PERSON_NAME_LEN)?;
    validate_email(&data.email)?;
    validate_optional_text(&data.phone, "phone", MAX_PHONE_LEN)?;
    Ok(())
}

fn to_row(data: CustomerCreate) -> CustomerRow {
    CustomerRow {
        first_name: data.first_name,
        last_name: data.last_name,
        email: data.email.trim().to_string(),
        phone: data.phone,
        marketing_opt_in: data.marketing_opt_in,
        join_date: data.join_date.filter(|d| *d != 0).unwrap_or_else(now_millis),
        loyalty_points: data.loyalty_points,
    }
}

/// Customer records backed by SQLite
#[derive(Clone, Debug)]
pub struct CustomerService {
    pool: SqlitePool,
}

impl CustomerService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        customer::find_all(&self.pool)
            .await
            .map_err(|e| internal_with_context(READ_CONTEXT, e))
    }

    pub async fn get(&self, id: i64) -> AppResult<Customer> {
        customer::find_by_id(&self.pool, id)
            .await
            .map_err(|e| internal_with_context(READ_CONTEXT, e))?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<Customer> {
        customer::find_by_email(&self.pool, email)
            .await
            .map_err(|e| internal_with_context(READ_CONTEXT, e))?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::CustomerNotFound,
                    format!("Customer with email {email} not found"),
                )
                .with_detail("email", email)
            })
    }

    pub async fn create(&self, payload: Option<CustomerCreate>) -> AppResult<Customer> {
        let data = payload.ok_or_else(|| AppError::new(ErrorCode::CustomerMissing))?;
        validate(&data)?;

        let email = data.email.clone();
        let created = customer::create(&self.pool, to_row(data))
            .await
            .map_err(|e| write_error(CREATE_CONTEXT, &email, e))?;

        tracing::info!(id = created.customer_id, "Customer created");
        Ok(created)
    }

    /// Overwrite the whole record
    pub async fn update(&self, id: i64, payload: Option<CustomerCreate>) -> AppResult<()> {
        let data = payload.ok_or_else(|| AppError::new(ErrorCode::CustomerMissing))?;
        if data.customer_id != id {
            return Err(AppError::new(ErrorCode::CustomerIdMismatch)
                .with_detail("pathId", id)
                .with_detail("bodyId", data.customer_id));
        }
        validate(&data)?;

        let email = data.email.clone();
        let replaced = customer::replace(&self.pool, id, to_row(data))
            .await
            .map_err(|e| write_error(UPDATE_CONTEXT, &email, e))?;
        if !replaced {
            return Err(not_found(id));
        }

        tracing::info!(id, "Customer updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = customer::delete(&self.pool, id)
            .await
            .map_err(|e| internal_with_context(DELETE_CONTEXT, e))?;
        if !deleted {
            return Err(not_found(id));
        }

        tracing::info!(id, "Customer deleted");
        Ok(())
    }

    pub async fn loyalty_points(&self, id: i64) -> AppResult<i64> {
        customer::loyalty_points(&self.pool, id)
            .await
            .map_err(|e| internal_with_context(READ_CONTEXT, e))?
            .ok_or_else(|| not_found(id))
    }

    pub async fn add_loyalty_points(&self, id: i64, points: i32) -> AppResult<()> {
        let updated = customer::add_loyalty_points(&self.pool, id, points)
            .await
            .map_err(|e| match e {
                RepoError::Validation(_) => AppError::with_message(
                    ErrorCode::ValueOutOfRange,
                    "Loyalty points balance out of range",
                )
                .with_detail("id", id)
                .with_detail("points", points),
                other => internal_with_context(UPDATE_CONTEXT, other),
            })?;
        if !updated {
            return Err(not_found(id));
        }

        tracing::info!(id, points, "Loyalty points added");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;

    async fn service() -> CustomerService {
        CustomerService::new(test_pool().await)
    }

    fn payload(email: &str) -> CustomerCreate {
        CustomerCreate {
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_defaults_join_date() {
        let svc = service().await;
        let before = now_millis();
        let created = svc.create(Some(payload("ana@example.com"))).await.unwrap();
        assert!(created.join_date >= before);
        assert_eq!(created.loyalty_points, 0);
        assert!(!created.marketing_opt_in);
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_join_date() {
        let svc = service().await;
        let mut data = payload("ana@example.com");
        data.join_date = Some(1_600_000_000_000);
        let created = svc.create(Some(data)).await.unwrap();
        assert_eq!(created.join_date, 1_600_000_000_000);
    }

    #[tokio::test]
    async fn test_create_rejects_null_and_invalid() {
        let svc = service().await;
        let err = svc.create(None).await.unwrap_err();
        assert_eq!(err.message, "Customer is null");

        let err = svc.create(Some(payload("not-an-email"))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let mut data = payload("ana@example.com");
        data.first_name = "A".repeat(MAX_PERSON_NAME_LEN + 1);
        let err = svc.create(Some(data)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let svc = service().await;
        svc.create(Some(payload("ana@example.com"))).await.unwrap();
        let err = svc.create(Some(payload("ana@example.com"))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerEmailExists);
        assert_eq!(err.http_status(), http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let svc = service().await;
        let created = svc.create(Some(payload("ana@example.com"))).await.unwrap();
        assert_eq!(
            svc.get_by_email("ana@example.com").await.unwrap(),
            created
        );

        let err = svc.get_by_email("nobody@example.com").await.unwrap_err();
        assert_eq!(err.message, "Customer with email nobody@example.com not found");
    }

    #[tokio::test]
    async fn test_update() {
        let svc = service().await;
        let created = svc.create(Some(payload("ana@example.com"))).await.unwrap();

        let mut data = payload("ana@example.com");
        data.customer_id = created.customer_id + 1;
        let err = svc.update(created.customer_id, Some(data)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerIdMismatch);

        let mut data = payload("ana@example.com");
        data.customer_id = created.customer_id;
        data.phone = Some("555-0100".to_string());
        data.marketing_opt_in = true;
        svc.update(created.customer_id, Some(data)).await.unwrap();

        let stored = svc.get(created.customer_id).await.unwrap();
        assert_eq!(stored.phone.as_deref(), Some("555-0100"));
        assert!(stored.marketing_opt_in);

        let mut data = payload("x@example.com");
        data.customer_id = 999;
        let err = svc.update(999, Some(data)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
    }

    #[tokio::test]
    async fn test_loyalty_and_delete() {
        let svc = service().await;
        let created = svc.create(Some(payload("ana@example.com"))).await.unwrap();

        svc.add_loyalty_points(created.customer_id, 100).await.unwrap();
        svc.add_loyalty_points(created.customer_id, 25).await.unwrap();
        assert_eq!(svc.loyalty_points(created.customer_id).await.unwrap(), 125);

        svc.delete(created.customer_id).await.unwrap();
        let err = svc.loyalty_points(created.customer_id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
        let err = svc.add_loyalty_points(created.customer_id, 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
        let err = svc.delete(created.customer_id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
    }

    #[tokio::test]
    async fn test_loyalty_balance_stays_in_range() {
        let svc = service().await;
        let mut data = payload("ana@example.com");
        data.loyalty_points = i64::MAX - 5;
        let created = svc.create(Some(data)).await.unwrap();

        let err = svc
            .add_loyalty_points(created.customer_id, 10)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);

        assert_eq!(
            svc.loyalty_points(created.customer_id).await.unwrap(),
            i64::MAX - 5
        );
        let stored = svc.get(created.customer_id).await.unwrap();
        assert_eq!(stored.loyalty_points, i64::MAX - 5);
    }
}
