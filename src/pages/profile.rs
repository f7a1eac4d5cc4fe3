//! Profile page with a display-name rename form.

use leptos::prelude::*;

use crate::net::api::{self, ApiConfig};
use crate::pages::{GuardState, use_route_guard};
use crate::routing::routes::PROFILE_ROUTE;
use crate::session::store::default_store;

/// Profile page (protected). Nothing renders until the guard resolves the
/// attempt to a Proceed.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let guard = use_route_guard(PROFILE_ROUTE.path);

    view! {
        <div class="profile-page">
            <Show when=move || guard.get() == GuardState::Allowed>
                <RenameForm/>
            </Show>
        </div>
    }
}

/// Rename form, mounted only after the guard allows the attempt. Submits
/// through the authenticated rename endpoint.
#[component]
fn RenameForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let status = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let new_name = name.get();
        leptos::task::spawn_local(async move {
            let result =
                api::update_profile_name(&ApiConfig::default(), &default_store(), &new_name).await;
            match result {
                Ok(()) => status.set(Some("Name updated.".to_owned())),
                Err(msg) => status.set(Some(msg)),
            }
        });
    };

    view! {
        <h1>"Profile"</h1>
        <form on:submit=on_submit>
            <input
                type="text"
                placeholder="Display name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn--primary">"Save"</button>
        </form>
        {move || status.get().map(|msg| view! { <p class="profile-page__status">{msg}</p> })}
    }
}
