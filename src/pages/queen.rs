//! Queen roster page.

use leptos::prelude::*;

use crate::net::api::{self, ApiConfig};
use crate::pages::{GuardState, use_route_guard};
use crate::routing::routes::QUEEN_ROUTE;
use crate::session::store::default_store;

/// Queen roster page (protected). Nothing renders until the guard resolves
/// the attempt to a Proceed.
#[component]
pub fn QueenPage() -> impl IntoView {
    let guard = use_route_guard(QUEEN_ROUTE.path);

    view! {
        <div class="queen-page">
            <Show when=move || guard.get() == GuardState::Allowed>
                <QueenRoster/>
            </Show>
        </div>
    }
}

/// Roster body, mounted only after the guard allows the attempt. Fetches
/// the queens collection with the session header bundle attached.
#[component]
fn QueenRoster() -> impl IntoView {
    let queens = LocalResource::new(|| async {
        api::fetch_queens(&ApiConfig::default(), &default_store()).await
    });

    view! {
        <h1>"Queens"</h1>
        <Suspense fallback=move || view! { <p>"Loading queens..."</p> }>
            {move || {
                queens
                    .get()
                    .map(|list| match list {
                        Some(queens) => {
                            view! {
                                <ul class="queen-page__list">
                                    {queens
                                        .into_iter()
                                        .map(|queen| view! { <li>{queen.name}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                        None => view! { <p>"Could not load queens."</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}
