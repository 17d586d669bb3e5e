//! Sidebar Component
//!
//! Brand and primary navigation.

use leptos::*;
use leptos_router::*;

const HOME_ICON: &str = "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6";
const TABLE_ICON: &str = "M4 6h16M4 10h16M4 14h16M4 18h16";

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="bg-gray-800 text-white w-64 space-y-6 py-7 px-2 absolute inset-y-0 left-0 transform -translate-x-full md:relative md:translate-x-0 transition duration-200 ease-in-out">
            <div class="flex flex-col h-full">
                <div class="space-y-3">
                    <div class="flex items-center justify-center">
                        <h2 class="text-xl font-bold">"ML Trading"</h2>
                    </div>
                    <ul class="pt-2 pb-4 space-y-1 text-sm">
                        <SidebarLink href="/" label="Dashboard" icon=HOME_ICON />
                        <SidebarLink href="/data" label="Data Explorer" icon=TABLE_ICON />
                    </ul>
                </div>
            </div>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn SidebarLink(
    href: &'static str,
    label: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <li class="rounded-sm">
            <A
                href=href
                exact=true
                class="flex items-center p-2 space-x-3 rounded-md hover:bg-gray-700"
                active_class="bg-gray-700"
            >
                <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon />
                </svg>
                <span>{label}</span>
            </A>
        </li>
    }
}
