// web_app/components/dashboard.rs - Statistics cards
//
// Small presentational cards for the aggregate numbers computed from the
// cached product list.

use leptos::prelude::*;

/// Single statistic card with an icon, label, and value.
#[component]
pub fn StatCard(
    /// Card label, e.g. "Total Products"
    title: &'static str,
    /// Pre-formatted value to display
    value: Signal<String>,
    /// Emoji icon shown beside the value
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-gray-100 shadow-sm p-5 flex items-center gap-4">
            <div class="flex h-11 w-11 items-center justify-center rounded-lg bg-blue-50 text-xl">
                {icon}
            </div>
            <div class="min-w-0">
                <p class="text-xs font-medium text-gray-500 uppercase tracking-wide">{title}</p>
                <p class="text-2xl font-bold text-gray-900 truncate">{move || value.get()}</p>
            </div>
        </div>
    }
}
