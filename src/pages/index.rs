//! Index page — landing view for authenticated sessions.

use leptos::prelude::*;

use crate::pages::{GuardState, use_route_guard};
use crate::routing::routes::INDEX_ROUTE;

/// Index page (protected). Unauthenticated attempts are redirected to the
/// login view; nothing renders until the guard resolves to a Proceed.
#[component]
pub fn IndexPage() -> impl IntoView {
    let guard = use_route_guard(INDEX_ROUTE.path);

    view! {
        <div class="index-page">
            <Show when=move || guard.get() == GuardState::Allowed>
                <h1>"Runway"</h1>
                <p>"Welcome back."</p>
            </Show>
        </div>
    }
}
