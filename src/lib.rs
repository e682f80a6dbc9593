//! # Outlay
//!
//! Personal Expense Tracking - A full-stack Rust application for recording
//! expenses and rendering dashboard aggregates.
//!
//! ## Features
//!
//! - **Document store**: schema-flexible JSON records over SQLite
//! - **REST API**: create, list and delete endpoints with Axum
//! - **Dashboard-ready**: records ordered newest-first for the UI
//!
//! ## Modules
//!
//! - [`store`]: SQLite-backed document collection for expense records
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML config files with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use outlay::store::{ExpenseCollection, NewExpense, StoreConfig};
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Open the document store
//!     let collection = ExpenseCollection::open(StoreConfig::new("./outlay.db"))?;
//!
//!     // Record an expense
//!     collection.insert(NewExpense::new(
//!         "Groceries",
//!         42.5,
//!         "Food",
//!         "weekly shop",
//!         NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
//!     ))?;
//!
//!     // List newest first
//!     let records = collection.all()?;
//!     println!("Found {} expense records", records.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod store;

// Re-export top-level types for convenience
pub use store::{ExpenseCollection, ExpenseRecord, NewExpense, StoreError, StoreResult};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
