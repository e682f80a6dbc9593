//! Dashboard Page
//!
//! Main dashboard view: stat cards, daily chart, entry form and history.

use chrono::Datelike;
use leptos::*;

use crate::api;
use crate::components::{Chart, ExpenseForm, ExpenseList, Loading, StatCards};
use crate::state::global::{FilterWindow, GlobalState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the collection on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        api::reload_expenses(state_for_effect.clone());
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your spending at a glance"</p>
                </div>

                <FilterSelect />
            </div>

            // Summary row
            <StatCards />

            // Daily spending chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Daily Spending"</h2>

                {move || {
                    if state.loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <Chart /> }.into_view()
                    }
                }}
            </section>

            // Two column layout for entry and history
            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Add Expense"</h2>
                    <ExpenseForm />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"History"</h2>
                    <ExpenseList />
                </section>
            </div>
        </div>
    }
}

/// Filter window selector with a month picker for the custom-month window
#[component]
fn FilterSelect() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let selected_kind = create_memo(move |_| match state.filter.get() {
        FilterWindow::Last7Days => "7",
        FilterWindow::Last30Days => "30",
        FilterWindow::Month(..) => "month",
        FilterWindow::AllTime => "all",
    });

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let window = match value.as_str() {
            "30" => FilterWindow::Last30Days,
            "month" => {
                // Start the custom window at the current month
                let now = chrono::Local::now().date_naive();
                FilterWindow::Month(now.year(), now.month())
            }
            "all" => FilterWindow::AllTime,
            _ => FilterWindow::Last7Days,
        };
        state.filter.set(window);
    };

    view! {
        <div class="flex items-center space-x-2">
            <select
                on:change=on_change
                prop:value=move || selected_kind.get()
                class="bg-gray-700 rounded-lg px-4 py-2 text-sm
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="7">"Last 7 days"</option>
                <option value="30">"Last 30 days"</option>
                <option value="month">"Month"</option>
                <option value="all">"All time"</option>
            </select>

            // Month picker only for the custom-month window
            {move || {
                if let FilterWindow::Month(year, month) = state.filter.get() {
                    view! { <MonthPicker year=year month=month /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn MonthPicker(year: i32, month: u32) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_input = move |ev: web_sys::Event| {
        // <input type="month"> yields "YYYY-MM"
        let value = event_target_value(&ev);
        if let Some((y, m)) = value.split_once('-') {
            if let (Ok(year), Ok(month)) = (y.parse::<i32>(), m.parse::<u32>()) {
                if (1..=12).contains(&month) {
                    state.filter.set(FilterWindow::Month(year, month));
                }
            }
        }
    };

    view! {
        <input
            type="month"
            prop:value=format!("{:04}-{:02}", year, month)
            on:input=on_input
            class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                   border border-gray-600 focus:border-primary-500 focus:outline-none"
        />
    }
}
