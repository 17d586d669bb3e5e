//! Card Component

use leptos::*;

/// White panel with optional title bar and footer
#[component]
pub fn Card(
    #[prop(optional, into)]
    title: Option<String>,
    /// Extra classes for the outer panel
    #[prop(optional, into)]
    class: String,
    #[prop(optional, into)]
    footer: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("bg-white overflow-hidden shadow rounded-lg {}", class)>
            {title.map(|title| view! {
                <div class="border-b border-gray-200 px-4 py-5 sm:px-6">
                    <h3 class="text-lg leading-6 font-medium text-gray-900">{title}</h3>
                </div>
            })}

            <div class="px-4 py-5 sm:p-6">{children()}</div>

            {footer.map(|footer| view! {
                <div class="border-t border-gray-200 px-4 py-4 sm:px-6">{footer}</div>
            })}
        </div>
    }
}
