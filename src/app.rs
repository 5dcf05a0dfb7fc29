// =============================================================================
// Talevo Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::SiteNav;
use crate::pages::{CareersPage, HomePage, NotFoundPage};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::new();
    log::debug!("Using CRM API at {}", app_state.api_url);
    provide_context(app_state);

    view! {
        <Title text="Talevo | İnsan Kaynakları ve Kariyer" />
        <Router>
            <SiteNav />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/kariyer") view=CareersPage />
                </Routes>
            </main>
        </Router>
    }
}
