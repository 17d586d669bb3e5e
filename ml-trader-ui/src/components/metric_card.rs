//! Metric Card Component
//!
//! A single headline figure with a colored icon badge.

use leptos::*;

/// Badge color for a metric card
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accent {
    Orange,
    Green,
    Blue,
    Teal,
}

impl Accent {
    fn badge_class(self) -> &'static str {
        match self {
            Accent::Orange => "text-orange-500 bg-orange-100",
            Accent::Green => "text-green-500 bg-green-100",
            Accent::Blue => "text-blue-500 bg-blue-100",
            Accent::Teal => "text-teal-500 bg-teal-100",
        }
    }
}

/// Metric card component
#[component]
pub fn MetricCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    accent: Accent,
    /// SVG path for the badge icon
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="min-w-0 rounded-lg shadow-xs overflow-hidden bg-white">
            <div class="p-4 flex items-center">
                <div class=format!("p-3 rounded-full mr-4 {}", accent.badge_class())>
                    <svg fill="currentColor" viewBox="0 0 20 20" class="w-5 h-5">
                        <path d=icon />
                    </svg>
                </div>
                <div>
                    <p class="mb-2 text-sm font-medium text-gray-600">{label}</p>
                    <p class="text-lg font-semibold text-gray-700">{value}</p>
                </div>
            </div>
        </div>
    }
}
