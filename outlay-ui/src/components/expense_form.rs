//! Expense Form Component
//!
//! Form for recording a new expense.

use chrono::NaiveDate;
use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Canonical category choices offered by the form
const CATEGORIES: [&str; 5] = ["Food", "Transport", "Health", "Shopping", "Bills"];

/// Expense entry form component
#[component]
pub fn ExpenseForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (title, set_title) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (category, set_category) = create_signal(CATEGORIES[0].to_string());
    let (description, set_description) = create_signal(String::new());
    let (date, set_date) = create_signal(today_string());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let parsed_amount = match amount.get().trim().parse::<f64>() {
            Ok(a) => a,
            Err(_) => {
                state.show_error("Amount must be a number");
                return;
            }
        };

        let parsed_date = match NaiveDate::parse_from_str(&date.get(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                state.show_error("Pick a valid date");
                return;
            }
        };

        let t = title.get();
        let c = category.get();
        let d = description.get();

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::add_expense(&t, parsed_amount, &c, &d, parsed_date).await {
                Ok(message) => {
                    state_clone.show_success(&message);

                    // Clear the form; keep category and date for repeated entry
                    set_title.set(String::new());
                    set_amount.set(String::new());
                    set_description.set(String::new());

                    api::reload_expenses(state_clone);
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            // Title
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                <input
                    type="text"
                    placeholder="Groceries"
                    maxlength="120"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Amount and date on one row
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Amount"</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Date"</label>
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            // Category
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Category"</label>
                <select
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                    prop:value=move || category.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    {CATEGORIES.into_iter().map(|c| view! {
                        <option value=c>{c}</option>
                    }).collect_view()}
                </select>
            </div>

            // Note
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Note"</label>
                <input
                    type="text"
                    placeholder="What was it for?"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Submit button
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submitting.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Saving..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Add Expense"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}

/// Today's date as an `<input type="date">` value
fn today_string() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
