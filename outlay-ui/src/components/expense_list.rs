//! Expense List Component
//!
//! Transaction history for the active window with per-row delete.

use leptos::*;

use crate::api;
use crate::components::loading::ListSkeleton;
use crate::state::global::{Expense, GlobalState};

/// Expense history list component
#[component]
pub fn ExpenseList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="space-y-2">
            {move || {
                // Skeleton rows during the initial fetch
                if state.loading.get() && state.expenses.get().is_empty() {
                    return view! { <ListSkeleton /> }.into_view();
                }

                let visible = state.visible_expenses();

                if visible.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No expenses in this window"</p>
                    }.into_view()
                } else {
                    visible.into_iter().map(|expense| {
                        view! { <ExpenseRow expense=expense /> }
                    }).collect_view()
                }
            }}
        </div>
    }
}

/// Single expense row with a delete button
#[component]
fn ExpenseRow(expense: Expense) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (deleting, set_deleting) = create_signal(false);

    let id = expense.id.clone();
    let on_delete = move |_| {
        set_deleting.set(true);

        let id = id.clone();
        let state_clone = state.clone();
        spawn_local(async move {
            match api::delete_expense(&id).await {
                Ok(message) => {
                    state_clone.show_success(&message);
                    api::reload_expenses(state_clone);
                }
                Err(e) => {
                    state_clone.show_error(&e);
                    set_deleting.set(false);
                }
            }
        });
    };

    let date = expense.date.format("%d/%m/%Y").to_string();

    view! {
        <div class="flex items-center justify-between py-2 px-3 bg-gray-800 rounded-lg border border-gray-700">
            <div class="flex items-center space-x-3 min-w-0">
                <span class="text-2xl">{category_icon(&expense.category)}</span>
                <div class="min-w-0">
                    <div class="flex items-center space-x-2">
                        <span class="font-medium truncate">{expense.title}</span>
                        <span class="text-gray-500 text-xs">{expense.category}</span>
                    </div>
                    <div class="text-gray-400 text-sm truncate">
                        {date}
                        {if expense.description.is_empty() {
                            String::new()
                        } else {
                            format!(" · {}", expense.description)
                        }}
                    </div>
                </div>
            </div>

            <div class="flex items-center space-x-3 shrink-0">
                <span class="font-semibold">{format!("${:.2}", expense.amount)}</span>
                <button
                    on:click=on_delete
                    disabled=move || deleting.get()
                    class="px-2 py-1 text-gray-400 hover:text-red-400 disabled:text-gray-600
                           transition-colors"
                    title="Delete"
                >
                    {move || if deleting.get() { "…" } else { "✕" }}
                </button>
            </div>
        </div>
    }
}

/// Icon for a category
fn category_icon(category: &str) -> &'static str {
    match category {
        "Food" => "🍜",
        "Transport" => "🚌",
        "Health" => "🩺",
        "Shopping" => "🛍️",
        "Bills" => "🧾",
        _ => "💸",
    }
}
