//! Toast Notification Component
//!
//! Transient banners fed by the global success/error message signals.
//! Messages clear themselves via the timeouts in `GlobalState`.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast host pinned above the footer
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || state.success.get().map(|msg| banner(msg, "✓", "bg-green-600"))}
            {move || state.error.get().map(|msg| banner(msg, "✕", "bg-red-600"))}
        </div>
    }
}

/// Single banner; success and error share layout and differ only in accent
fn banner(message: String, icon: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
            accent
        )>
            <span class="text-lg font-bold">{icon}</span>
            <span class="text-sm">{message}</span>
        </div>
    }
}
