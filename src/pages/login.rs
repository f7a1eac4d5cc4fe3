//! Login page with an email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, ApiConfig};
use crate::net::types::LoginRequest;
use crate::routing::routes::INDEX_PATH;
use crate::session::repository::{
    ACCESS_LEVEL_KEY, SessionRepository, TOKEN_KEY, default_repository,
};

/// Login page — always reachable; the guard never redirects away from an
/// open route. On success the token and access level are persisted and the
/// session lands on the index.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        let creds = LoginRequest {
            email: email.get(),
            password: password.get(),
        };
        leptos::task::spawn_local(async move {
            match api::login(&ApiConfig::default(), &creds).await {
                Ok(resp) => {
                    let repo = default_repository();
                    let mut persisted = repo.set(TOKEN_KEY, &resp.token).is_ok();
                    if let Some(level) = &resp.access_level {
                        persisted &= repo.set(ACCESS_LEVEL_KEY, level).is_ok();
                    }
                    if persisted {
                        navigate(INDEX_PATH, NavigateOptions::default());
                    } else {
                        error.set(Some("could not persist session".to_owned()));
                    }
                }
                Err(msg) => error.set(Some(msg)),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Runway"</h1>
            <p>"Sign in to continue"</p>
            <form on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">"Sign in"</button>
            </form>
            {move || error.get().map(|msg| view! { <p class="login-page__error">{msg}</p> })}
        </div>
    }
}
