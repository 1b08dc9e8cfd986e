//! Customer API Handlers

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use shared::models::{Customer, CustomerCreate};

use crate::api::{json_body, path_param};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/customers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.customers.list().await?;
    Ok(Json(customers))
}

/// GET /api/customers/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Customer>> {
    let id = path_param(id)?;
    let customer = state.customers.get(id).await?;
    Ok(Json(customer))
}

/// GET /api/customers/email/:email
pub async fn get_by_email(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<Customer>> {
    let customer = state.customers.get_by_email(&email).await?;
    Ok(Json(customer))
}

/// POST /api/customers - create, 201 with Location
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Option<CustomerCreate>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let customer = state.customers.create(json_body(payload)?).await?;
    let location = format!("/api/customers/{}", customer.customer_id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(customer)))
}

/// PUT /api/customers/:id - full overwrite, 204
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Option<CustomerCreate>>, JsonRejection>,
) -> AppResult<StatusCode> {
    let id = path_param(id)?;
    state.customers.update(id, json_body(payload)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/customers/:id - 204
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = path_param(id)?;
    state.customers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/customers/:id/loyalty - bare points balance
pub async fn get_loyalty_points(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<i64>> {
    let id = path_param(id)?;
    let points = state.customers.loyalty_points(id).await?;
    Ok(Json(points))
}

/// POST /api/customers/:id/loyalty/add/:points - 204
pub async fn add_loyalty_points(
    State(state): State<ServerState>,
    path: Result<Path<(i64, i32)>, PathRejection>,
) -> AppResult<StatusCode> {
    let (id, points) = path_param(path)?;
    state.customers.add_loyalty_points(id, points).await?;
    Ok(StatusCode::NO_CONTENT)
}
