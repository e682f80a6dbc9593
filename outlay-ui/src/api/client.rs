//! HTTP API Client
//!
//! Functions for communicating with the Outlay REST API.

use chrono::NaiveDate;
use gloo_net::http::Request;
use leptos::spawn_local;

use crate::state::global::{Expense, GlobalState};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("outlay_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("outlay_api_url", url);
        }
    }
}

// ============ Response Types ============

/// Message envelope used by add/delete and by error responses
#[derive(Debug, serde::Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
    pub records: u64,
    pub uptime_seconds: u64,
    pub version: String,
}

// ============ API Functions ============

/// Fetch the full expense collection, newest first
pub async fn fetch_expenses() -> Result<Vec<Expense>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/get-incomes", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit a new expense record
pub async fn add_expense(
    title: &str,
    amount: f64,
    category: &str,
    description: &str,
    date: NaiveDate,
) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct AddExpenseRequest {
        title: String,
        amount: f64,
        category: String,
        description: String,
        date: NaiveDate,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/add-income", api_base))
        .json(&AddExpenseRequest {
            title: title.to_string(),
            amount,
            category: category.to_string(),
            description: description.to_string(),
            date,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: ApiMessage = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.message)
}

/// Delete an expense record by id
pub async fn delete_expense(id: &str) -> Result<String, String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/delete-income/{}", api_base, id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: ApiMessage = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.message)
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let api_base = get_api_base();
    let health_url = api_base.replace("/api/v1", "/health");

    let response = Request::get(&health_url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Re-fetch the collection and update global state
///
/// Adds and deletes trigger a full reload rather than patching signals, so
/// the list always reflects the store's newest-first ordering.
pub fn reload_expenses(state: GlobalState) {
    spawn_local(async move {
        state.loading.set(true);

        match fetch_expenses().await {
            Ok(expenses) => {
                state.expenses.set(expenses);
                state
                    .last_refresh
                    .set(Some(chrono::Utc::now().timestamp_millis()));
            }
            Err(e) => {
                state.show_error(&e);
            }
        }

        state.loading.set(false);
    });
}

/// Extract the server's error message from a failed response
async fn error_message(response: gloo_net::http::Response) -> String {
    response
        .json::<ApiMessage>()
        .await
        .map(|m| m.message)
        .unwrap_or_else(|_| "Unknown error".to_string())
}
