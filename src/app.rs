//! Root application component with routing and the session handle.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::routing::guard::Guarded;
use crate::session::auth::SessionHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Rehydrates the session from durable storage exactly once and hands the
/// resulting [`SessionHandle`] to every route as an explicit prop; there is
/// no ambient auth context to forget to provide.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::restore();

    view! {
        <Stylesheet id="leptos" href="/pkg/barbershop-client.css"/>
        <Title text="Barbershop"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || {
                        view! {
                            <Guarded session>
                                <LoginPage session/>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=move || {
                        view! {
                            <Guarded session requires_auth=true>
                                <DashboardPage session/>
                            </Guarded>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
