//! Stat Card Components
//!
//! Summary cards for the active filter window: total spending, transaction
//! count and the top categories panel.

use leptos::*;

use crate::state::global::{top_categories, total_amount, GlobalState};

/// Summary row of stat cards over the visible records
#[component]
pub fn StatCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_total = state.clone();
    let total = create_memo(move |_| total_amount(&state_for_total.visible_expenses()));

    let state_for_count = state.clone();
    let count = create_memo(move |_| state_for_count.visible_expenses().len());

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <StatCard
                name="Total Spending"
                value=Signal::derive(move || format!("${:.2}", total.get()))
                footnote=Signal::derive(move || state.filter.get().label())
            />
            <StatCard
                name="Transactions"
                value=Signal::derive(move || count.get().to_string())
                footnote=Signal::derive(move || {
                    if count.get() == 1 { "entry".to_string() } else { "entries".to_string() }
                })
            />
            <TopCategories />
        </div>
    }
}

/// Single stat card with a label, value and footnote
#[component]
fn StatCard(
    name: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    footnote: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{name}</span>
            <div class="text-3xl font-bold mt-2">{move || value.get()}</div>
            <div class="text-sm text-gray-500 mt-2">{move || footnote.get()}</div>
        </div>
    }
}

/// Top categories panel: first three categories by insertion order
#[component]
pub fn TopCategories() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">"Top Categories"</span>
            <div class="mt-2 space-y-1">
                {move || {
                    let top = top_categories(&state.visible_expenses());

                    if top.is_empty() {
                        view! {
                            <p class="text-gray-500 text-sm">"No expenses yet"</p>
                        }.into_view()
                    } else {
                        top.into_iter().map(|(category, sum)| {
                            view! {
                                <div class="flex items-center justify-between text-sm">
                                    <span class="text-gray-300">{category}</span>
                                    <span class="font-semibold">{format!("${:.2}", sum)}</span>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </div>
    }
}
