//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod chart;
pub mod stat_card;
pub mod expense_form;
pub mod expense_list;
pub mod loading;
pub mod toast;

pub use nav::Nav;
pub use chart::Chart;
pub use stat_card::{StatCards, TopCategories};
pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
pub use loading::Loading;
pub use toast::Toast;
