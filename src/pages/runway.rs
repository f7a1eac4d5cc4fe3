//! Runway schedule page.

use leptos::prelude::*;

use crate::net::api::{self, ApiConfig};
use crate::pages::{GuardState, use_route_guard};
use crate::routing::routes::RUNWAY_ROUTE;
use crate::session::store::default_store;

/// Runway page (protected). Nothing renders until the guard resolves the
/// attempt to a Proceed.
#[component]
pub fn RunwayPage() -> impl IntoView {
    let guard = use_route_guard(RUNWAY_ROUTE.path);

    view! {
        <div class="runway-page">
            <Show when=move || guard.get() == GuardState::Allowed>
                <RunwaySchedule/>
            </Show>
        </div>
    }
}

/// Schedule body, mounted only after the guard allows the attempt. Fetches
/// the runways collection with the session header bundle attached.
#[component]
fn RunwaySchedule() -> impl IntoView {
    let runways = LocalResource::new(|| async {
        api::fetch_runways(&ApiConfig::default(), &default_store()).await
    });

    view! {
        <h1>"Runways"</h1>
        <Suspense fallback=move || view! { <p>"Loading runways..."</p> }>
            {move || {
                runways
                    .get()
                    .map(|list| match list {
                        Some(runways) => {
                            view! {
                                <ul class="runway-page__list">
                                    {runways
                                        .into_iter()
                                        .map(|runway| view! { <li>{runway.name}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                        None => view! { <p>"Could not load runways."</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}
