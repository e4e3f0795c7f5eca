//! Transaction endpoints (borrow records and their items)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::transaction::{
        CreateTransaction, CreateTransactionItem, Transaction, TransactionItem,
        TransactionQuery, UpdateTransaction,
    },
};

use super::{ApiResponse, AuthenticatedStaff};

/// List transactions with optional status filter and pagination
#[utoipa::path(
    get,
    path = "/transactions",
    tag = "transactions",
    security(("bearer_auth" = [])),
    params(TransactionQuery),
    responses(
        (status = 200, description = "Paginated list of transactions"),
        (status = 404, description = "No transactions on this page")
    )
)]
pub async fn list_transactions(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<TransactionQuery>,
) -> AppResult<Json<ApiResponse<Vec<Transaction>>>> {
    let transactions = state.services.transactions.list(&query).await?;
    Ok(Json(ApiResponse::new(
        "Get transactions successful",
        transactions,
    )))
}

/// Open a new borrow transaction
#[utoipa::path(
    post,
    path = "/transactions",
    tag = "transactions",
    security(("bearer_auth" = [])),
    request_body = CreateTransaction,
    responses(
        (status = 201, description = "Transaction created", body = ApiResponse<Transaction>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Staff, member or branch not found")
    )
)]
pub async fn create_transaction(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreateTransaction>,
) -> AppResult<(StatusCode, Json<ApiResponse<Transaction>>)> {
    let transaction = state.services.transactions.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Create transaction successful", transaction)),
    ))
}

/// Attach a book to an existing transaction
#[utoipa::path(
    post,
    path = "/transactions/item",
    tag = "transactions",
    security(("bearer_auth" = [])),
    request_body = CreateTransactionItem,
    responses(
        (status = 201, description = "Transaction item created", body = ApiResponse<TransactionItem>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Transaction or book not found"),
        (status = 409, description = "Book already added to the transaction")
    )
)]
pub async fn create_transaction_item(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreateTransactionItem>,
) -> AppResult<(StatusCode, Json<ApiResponse<TransactionItem>>)> {
    let item = state.services.transactions.create_item(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Create transaction item successful", item)),
    ))
}

/// List the items attached to a transaction
#[utoipa::path(
    get,
    path = "/transactions/{id}/items",
    tag = "transactions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Items of the transaction"),
        (status = 404, description = "Transaction not found")
    )
)]
pub async fn list_transaction_items(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<TransactionItem>>>> {
    let items = state.services.transactions.list_items(id).await?;
    Ok(Json(ApiResponse::new(
        "Get transaction items successful",
        items,
    )))
}

/// Update a transaction's status, deadline or fine
#[utoipa::path(
    put,
    path = "/transactions/{id}",
    tag = "transactions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Transaction ID")),
    request_body = UpdateTransaction,
    responses(
        (status = 200, description = "Transaction updated", body = ApiResponse<Transaction>),
        (status = 404, description = "Transaction not found")
    )
)]
pub async fn update_transaction(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateTransaction>,
) -> AppResult<Json<ApiResponse<Transaction>>> {
    let transaction = state.services.transactions.update(id, &data).await?;
    Ok(Json(ApiResponse::new(
        "Update transaction successful",
        transaction,
    )))
}

/// Hard delete a transaction together with its items
#[utoipa::path(
    delete,
    path = "/transactions/{id}",
    tag = "transactions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction deleted", body = ApiResponse<Transaction>),
        (status = 404, description = "Transaction not found")
    )
)]
pub async fn delete_transaction(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Transaction>>> {
    state.services.transactions.delete(id).await?;
    Ok(Json(ApiResponse::message("Delete transaction successful")))
}
