//! Outlay Document Store
//!
//! This module provides the persistence layer for expense records:
//!
//! - **record**: Core data structures (ExpenseRecord, NewExpense)
//! - **collection**: SQLite-backed document collection
//! - **error**: Error types
//!
//! # Architecture
//!
//! ```text
//! Write Path:
//!   NewExpense → assign id + created_at → JSON document → SQLite row
//!
//! Read Path:
//!   all() → rows ordered newest-first → JSON → ExpenseRecord
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use outlay::store::{ExpenseCollection, NewExpense, StoreConfig};
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let collection = ExpenseCollection::open(StoreConfig::new("./outlay.db"))?;
//!
//!     let record = collection.insert(NewExpense {
//!         title: "Groceries".to_string(),
//!         amount: 42.5,
//!         category: "Food".to_string(),
//!         description: "weekly shop".to_string(),
//!         date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
//!     })?;
//!
//!     println!("Stored expense {}", record.id);
//!
//!     let records = collection.all()?;
//!     println!("{} records total", records.len());
//!
//!     Ok(())
//! }
//! ```

pub mod collection;
pub mod error;
pub mod record;

// Re-export commonly used types
pub use collection::{ExpenseCollection, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use record::{ExpenseRecord, NewExpense};
