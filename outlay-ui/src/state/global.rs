//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the pure filter and
//! aggregation functions the dashboard views are built on.

use chrono::{Datelike, Days, NaiveDate};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Expense records from the API, newest first
    pub expenses: RwSignal<Vec<Expense>>,
    /// Active time window for the dashboard views
    pub filter: RwSignal<FilterWindow>,
    /// Last refresh timestamp (ms since epoch)
    pub last_refresh: RwSignal<Option<i64>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Expense record as returned by the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: i64,
}

/// Time window for dashboard filtering
///
/// Matching is a pure function of `(record_date, today)` so every window can
/// be exercised on a fixed clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterWindow {
    Last7Days,
    Last30Days,
    Month(i32, u32),
    AllTime,
}

impl Default for FilterWindow {
    fn default() -> Self {
        Self::Last7Days
    }
}

impl FilterWindow {
    /// Whether a record dated `date` falls inside this window as of `today`
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match *self {
            Self::Last7Days => date >= cutoff(today, 7),
            Self::Last30Days => date >= cutoff(today, 30),
            Self::Month(year, month) => date.year() == year && date.month() == month,
            Self::AllTime => true,
        }
    }

    /// Human-readable label for stat cards
    pub fn label(&self) -> String {
        match *self {
            Self::Last7Days => "Last 7 days".to_string(),
            Self::Last30Days => "Last 30 days".to_string(),
            Self::Month(year, month) => format!("{} {}", month_name(month), year),
            Self::AllTime => "All time".to_string(),
        }
    }
}

fn cutoff(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Filter records through a window on a fixed clock
pub fn filter_expenses(expenses: &[Expense], window: FilterWindow, today: NaiveDate) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| window.matches(e.date, today))
        .cloned()
        .collect()
}

/// Sum of all amounts in the set
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-day sums keyed by formatted date (`%d/%m/%Y`), in first-seen order
///
/// The chart series preserves encounter order rather than sorting by date, so
/// a newest-first record list yields a newest-first series.
pub fn daily_totals(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        let key = expense.date.format("%d/%m/%Y").to_string();
        match totals.iter_mut().find(|(k, _)| *k == key) {
            Some((_, sum)) => *sum += expense.amount,
            None => totals.push((key, expense.amount)),
        }
    }

    totals
}

/// Per-category sums in first-seen (insertion) order
pub fn category_totals(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|(k, _)| *k == expense.category) {
            Some((_, sum)) => *sum += expense.amount,
            None => totals.push((expense.category.clone(), expense.amount)),
        }
    }

    totals
}

/// First three categories by insertion order, not by magnitude
pub fn top_categories(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals = category_totals(expenses);
    totals.truncate(3);
    totals
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        expenses: create_rw_signal(Vec::new()),
        filter: create_rw_signal(FilterWindow::default()),
        last_refresh: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Records inside the active filter window as of the local clock
    pub fn visible_expenses(&self) -> Vec<Expense> {
        let today = chrono::Local::now().date_naive();
        filter_expenses(&self.expenses.get(), self.filter.get(), today)
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
