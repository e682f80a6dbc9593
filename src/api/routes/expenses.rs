//! Expense Routes
//!
//! The three collection endpoints:
//!
//! - POST /api/v1/add-income - Create a record
//! - GET /api/v1/get-incomes - List all records, newest first
//! - DELETE /api/v1/delete-income/:id - Delete a record by id

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{AddExpenseRequest, MessageResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::store::{ExpenseRecord, NewExpense};

/// POST /api/v1/add-income
///
/// Validate and persist a new expense record.
pub async fn add_expense(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddExpenseRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let new = validate_add_request(req)?;

    let record = state.store.insert(new)?;

    tracing::info!(
        record_id = %record.id,
        category = %record.category,
        amount = record.amount,
        "Added expense"
    );

    Ok(Json(MessageResponse::new("Expense Added")))
}

/// GET /api/v1/get-incomes
///
/// All records ordered by descending creation time.
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ExpenseRecord>>> {
    let records = state.store.all()?;
    Ok(Json(records))
}

/// DELETE /api/v1/delete-income/:id
///
/// Remove a record by id. Succeeds even if the id did not exist.
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = state.store.delete(&id)?;

    if removed {
        tracing::info!(record_id = %id, "Deleted expense");
    } else {
        tracing::debug!(record_id = %id, "Delete requested for unknown id");
    }

    Ok(Json(MessageResponse::new("Expense Deleted")))
}

/// Longest accepted title, in characters
const MAX_TITLE_CHARS: usize = 120;

/// Validate an add request, producing the insertable fields.
///
/// Presence of title/category/description/date is checked first, then
/// the title length, then the amount, which must be finite and
/// strictly positive.
fn validate_add_request(req: AddExpenseRequest) -> ApiResult<NewExpense> {
    let title = req
        .title
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("All fields are required!"))?;

    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ApiError::Validation("Title is too long!"));
    }

    let category = req
        .category
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("All fields are required!"))?;
    let description = req
        .description
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("All fields are required!"))?;
    let date = req
        .date
        .ok_or_else(|| ApiError::Validation("All fields are required!"))?;

    let amount = req
        .amount
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or_else(|| ApiError::Validation("Amount must be a positive number!"))?;

    Ok(NewExpense {
        title,
        amount,
        category,
        description,
        date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_request() -> AddExpenseRequest {
        AddExpenseRequest {
            title: Some("Lunch".to_string()),
            amount: Some(12.5),
            category: Some("Food".to_string()),
            description: Some("noodles".to_string()),
            date: NaiveDate::from_ymd_opt(2026, 8, 20),
        }
    }

    #[test]
    fn test_validate_valid_request() {
        let new = validate_add_request(valid_request()).unwrap();
        assert_eq!(new.title, "Lunch");
        assert_eq!(new.amount, 12.5);
    }

    #[test]
    fn test_validate_missing_title() {
        let req = AddExpenseRequest {
            title: None,
            ..valid_request()
        };
        assert!(matches!(
            validate_add_request(req),
            Err(ApiError::Validation("All fields are required!"))
        ));
    }

    #[test]
    fn test_validate_rejects_overlong_title() {
        let boundary = AddExpenseRequest {
            title: Some("x".repeat(120)),
            ..valid_request()
        };
        assert!(validate_add_request(boundary).is_ok());

        let over = AddExpenseRequest {
            title: Some("x".repeat(121)),
            ..valid_request()
        };
        assert!(matches!(
            validate_add_request(over),
            Err(ApiError::Validation("Title is too long!"))
        ));
    }

    #[test]
    fn test_validate_blank_description() {
        let req = AddExpenseRequest {
            description: Some("   ".to_string()),
            ..valid_request()
        };
        assert!(matches!(
            validate_add_request(req),
            Err(ApiError::Validation("All fields are required!"))
        ));
    }

    #[test]
    fn test_validate_missing_date() {
        let req = AddExpenseRequest {
            date: None,
            ..valid_request()
        };
        assert!(validate_add_request(req).is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        for amount in [Some(0.0), Some(-5.0), Some(f64::NAN), Some(f64::INFINITY), None] {
            let req = AddExpenseRequest {
                amount,
                ..valid_request()
            };
            assert!(matches!(
                validate_add_request(req),
                Err(ApiError::Validation("Amount must be a positive number!"))
            ));
        }
    }
}
