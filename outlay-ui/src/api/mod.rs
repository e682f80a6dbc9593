//! API Layer
//!
//! HTTP client for the Outlay REST API.

pub mod client;

pub use client::*;
