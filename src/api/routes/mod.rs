//! API Routes
//!
//! Route handlers organized by functionality.

pub mod expenses;
pub mod health;
