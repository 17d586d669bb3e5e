//! Header Component

use leptos::*;

const BELL_ICON: &str = "M15 17h5l-1.405-1.405A2.032 2.032 0 0118 14.158V11a6 6 0 00-6-6H9a6 6 0 00-6 6v3.159c0 .538-.214 1.055-.595 1.436L1 17h5m0 0h6m-6 0v3m6-3v3";

/// Top bar with the product title, notifications and user menu
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm z-10">
            <div class="flex items-center justify-between h-16 px-6">
                <h1 class="text-xl font-semibold text-gray-800">"ML Trading System"</h1>
                <div class="flex items-center space-x-4">
                    <button class="p-1 rounded-full text-gray-600 hover:text-gray-900 focus:outline-none">
                        <span class="sr-only">"View notifications"</span>
                        <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=BELL_ICON />
                        </svg>
                    </button>
                    <div class="relative">
                        <button class="flex items-center text-sm font-medium text-gray-700 rounded-full hover:text-gray-900 focus:outline-none">
                            <span class="sr-only">"Open user menu"</span>
                            <div class="h-8 w-8 rounded-full bg-gray-300 flex items-center justify-center text-gray-700">
                                "U"
                            </div>
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
