//! Core data types for the Outlay document store
//!
//! This module defines the single persisted entity:
//! - `ExpenseRecord`: a stored expense with store-assigned identity
//! - `NewExpense`: the caller-supplied fields before insertion

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single persisted expense record
///
/// Immutable after creation; the only lifecycle transitions are
/// insert and delete-by-id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    /// Store-assigned unique identifier (UUID v4)
    pub id: String,
    /// Short human-readable title
    pub title: String,
    /// Amount spent; always positive and finite
    pub amount: f64,
    /// Category label (e.g. "Food", "Transport")
    pub category: String,
    /// Free-text note
    pub description: String,
    /// Calendar date the expense occurred on
    pub date: NaiveDate,
    /// Server-assigned creation time, Unix milliseconds.
    /// Default list ordering is newest-first on this field.
    pub created_at: i64,
}

impl ExpenseRecord {
    /// Materialize a record from caller-supplied fields, assigning
    /// identity and creation time.
    pub fn from_new(new: NewExpense) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: new.title,
            amount: new.amount,
            category: new.category,
            description: new.description,
            date: new.date,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

/// Caller-supplied fields for a record about to be inserted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewExpense {
        NewExpense::new(
            "Lunch",
            12.0,
            "Food",
            "noodles",
            NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
        )
    }

    #[test]
    fn test_from_new_assigns_identity() {
        let a = ExpenseRecord::from_new(sample());
        let b = ExpenseRecord::from_new(sample());

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(a.created_at > 0);
        assert_eq!(a.title, "Lunch");
        assert_eq!(a.amount, 12.0);
    }

    #[test]
    fn test_record_serialization() {
        let record = ExpenseRecord::from_new(sample());
        let json = serde_json::to_string(&record).unwrap();
        let restored: ExpenseRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, restored);
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let record = ExpenseRecord::from_new(sample());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["date"], "2026-08-20");
    }
}
