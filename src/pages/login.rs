//! Login page: email + password sign-in against `POST /sessions`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::collections::HashMap;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::form::FormRegistry;
use crate::components::text_input::TextInput;
use crate::session::auth::SessionHandle;

/// Validate credentials locally before the network exchange. Returns the
/// trimmed pair, or a field-name -> message map for the form to display.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), HashMap<String, String>> {
    let email = email.trim();
    let mut errors = HashMap::new();

    if email.is_empty() {
        errors.insert("email".to_owned(), "E-mail obrigatório".to_owned());
    } else if !email.contains('@') {
        errors.insert("email".to_owned(), "Digite um e-mail válido".to_owned());
    }
    if password.is_empty() {
        errors.insert("password".to_owned(), "Senha obrigatória".to_owned());
    }

    if errors.is_empty() {
        Ok((email.to_owned(), password.to_owned()))
    } else {
        Err(errors)
    }
}

/// Extract the `from` query parameter of a guard redirect, e.g.
/// `"?from=/dashboard"`.
fn from_param(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("from="))
        .filter(|path| !path.is_empty())
        .map(ToOwned::to_owned)
}

/// Where to land after a successful sign-in: the originally attempted
/// in-app path when one was carried, the dashboard otherwise.
fn post_login_target(from: Option<String>) -> String {
    match from {
        Some(path) if path.starts_with('/') => path,
        _ => "/dashboard".to_owned(),
    }
}

/// Login page — the public landing route.
#[component]
pub fn LoginPage(
    /// Session handle injected by `App`.
    session: SessionHandle,
) -> impl IntoView {
    let registry = FormRegistry::new();
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();
    let location = use_location();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        registry.clear_errors();
        info.set(String::new());

        let email = registry.value_of("email").unwrap_or_default();
        let password = registry.value_of("password").unwrap_or_default();
        let (email, password) = match validate_credentials(&email, &password) {
            Ok(valid) => valid,
            Err(errors) => {
                registry.set_errors(errors);
                return;
            }
        };

        busy.set(true);
        let target = post_login_target(from_param(&location.search.get_untracked()));

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.sign_in(&email, &password).await {
                    Ok(()) => navigate(&target, NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("sign-in failed: {e}");
                        info.set("Falha no login, confira as credenciais.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, target, &navigate, session);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Barbershop"</h1>
                <p class="login-card__subtitle">"Faça seu logon"</p>
                <form class="login-form" on:submit=on_submit>
                    <TextInput name="email" registry=registry icon="✉" placeholder="E-mail"/>
                    <TextInput
                        name="password"
                        registry=registry
                        kind="password"
                        icon="🔒"
                        placeholder="Senha"
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Entrar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
