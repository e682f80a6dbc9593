//! Outlay Dashboard
//!
//! Personal expense tracking dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Spending totals over selectable time windows
//! - Category breakdown and daily bar chart
//! - Expense entry and history with delete
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Outlay API over HTTP; all filtering
//! and aggregation happens in the client.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
