//! App Root Component
//!
//! Layout shell, routing and the shared API client.

use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::{Header, Sidebar};
use crate::pages::{Dashboard, DataExplorer, NotFound};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Every request hook below picks this up
    let client = ApiClient::from_env();
    log::info!("API base: {}", client.base());
    provide_context(client);

    view! {
        <Router>
            <div class="flex h-screen bg-gray-100">
                <Sidebar />
                <div class="flex flex-col flex-1 overflow-hidden">
                    <Header />
                    <main class="flex-1 overflow-x-hidden overflow-y-auto bg-gray-100 p-6">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/data" view=DataExplorer />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
