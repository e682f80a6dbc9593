//! State Management
//!
//! Global application state, filter windows and client-side aggregation.

pub mod global;

pub use global::{provide_global_state, Expense, FilterWindow, GlobalState};
