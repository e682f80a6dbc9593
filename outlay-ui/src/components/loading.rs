//! Loading Component
//!
//! Placeholders shown while the collection is being fetched.

use leptos::*;

/// Centered spinner sized for a chart-height section
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="h-64 flex items-center justify-center">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Grey placeholder rows matching the history list layout
#[component]
pub fn ListSkeleton(
    #[prop(default = 4)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-2 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 border border-gray-700 rounded-lg h-14" />
            }).collect_view()}
        </div>
    }
}
