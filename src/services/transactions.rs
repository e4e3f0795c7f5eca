//! Transactions service: borrow records and their items

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::transaction::{
        CreateTransaction, CreateTransactionItem, Transaction, TransactionItem,
        TransactionQuery, TransactionStatus, UpdateTransaction,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct TransactionsService {
    repository: Repository,
}

impl TransactionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &TransactionQuery) -> AppResult<Vec<Transaction>> {
        if let Some(ref status) = query.status {
            status
                .parse::<TransactionStatus>()
                .map_err(|_| AppError::Validation("Invalid transaction status".to_string()))?;
        }

        let transactions = self.repository.transactions.list(query).await?;
        if transactions.is_empty() {
            return Err(AppError::NotFound("No transactions found".to_string()));
        }
        Ok(transactions)
    }

    pub async fn create(&self, data: &CreateTransaction) -> AppResult<Transaction> {
        let staff_id = data
            .staff_id
            .ok_or_else(|| AppError::Validation("Staff ID is required".to_string()))?;
        let member_id = data
            .member_id
            .ok_or_else(|| AppError::Validation("Member ID is required".to_string()))?;
        let branch_id = data
            .branch_id
            .ok_or_else(|| AppError::Validation("Branch ID is required".to_string()))?;
        let status_raw = data
            .status
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Transaction status is required".to_string()))?;
        let deadline_at = parse_deadline(data.deadline_at.as_deref())?;

        // Foreign entities must exist before the insert
        self.repository.staff.get_by_id(staff_id).await?;
        self.repository.members.get_by_id(member_id).await?;
        self.repository.branches.get_by_id(branch_id).await?;

        let status: TransactionStatus = status_raw
            .parse()
            .map_err(|_| AppError::Validation("Invalid transaction status".to_string()))?;

        self.repository
            .transactions
            .create(staff_id, member_id, branch_id, status, deadline_at)
            .await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateTransaction) -> AppResult<Transaction> {
        let status = match data.status {
            Some(ref raw) => Some(
                raw.parse::<TransactionStatus>()
                    .map_err(|_| AppError::Validation("Invalid transaction status".to_string()))?,
            ),
            None => None,
        };
        let deadline_at = match data.deadline_at {
            Some(ref raw) => Some(parse_deadline(Some(raw))?),
            None => None,
        };

        self.repository
            .transactions
            .update(id, status, deadline_at, data.total_fine)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.transactions.delete(id).await
    }

    // ---- Items ----

    pub async fn list_items(&self, transaction_id: Uuid) -> AppResult<Vec<TransactionItem>> {
        self.repository.transactions.get_by_id(transaction_id).await?;
        self.repository.transactions.list_items(transaction_id).await
    }

    pub async fn create_item(&self, data: &CreateTransactionItem) -> AppResult<TransactionItem> {
        let transaction_id = data
            .transaction_id
            .ok_or_else(|| AppError::Validation("Transaction ID is required".to_string()))?;
        let book_id = data
            .book_id
            .ok_or_else(|| AppError::Validation("Book ID is required".to_string()))?;

        self.repository.transactions.get_by_id(transaction_id).await?;
        self.repository.books.get_by_id(book_id).await?;

        if self
            .repository
            .transactions
            .item_exists(transaction_id, book_id)
            .await?
        {
            return Err(AppError::Conflict(
                "This book already added to the transaction".to_string(),
            ));
        }

        self.repository
            .transactions
            .create_item(
                transaction_id,
                book_id,
                data.transaction_item_note.as_deref(),
            )
            .await
    }
}

/// Parse a borrow deadline: RFC 3339 timestamp, or a bare date at midnight UTC
fn parse_deadline(raw: Option<&str>) -> AppResult<DateTime<Utc>> {
    let raw = raw
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Invalid deadline date".to_string()))?;

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }

    Err(AppError::Validation("Invalid deadline date".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_accepts_rfc3339_and_bare_dates() {
        assert!(parse_deadline(Some("2026-09-01T12:00:00Z")).is_ok());
        assert!(parse_deadline(Some("2026-09-01")).is_ok());
    }

    #[test]
    fn deadline_rejects_garbage() {
        assert!(parse_deadline(None).is_err());
        assert!(parse_deadline(Some("")).is_err());
        assert!(parse_deadline(Some("next tuesday")).is_err());
    }
}
