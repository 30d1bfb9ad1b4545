//! Application shell: the auth gate and the main layout behind it.

use leptos::prelude::*;

use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::query_cache::use_query_cache;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Sidebar plus tabs. Restores the tab named in `?active=` on mount.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
    }
}

/// Shows `LoginPage` until a session exists, then `MainLayout`.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let cache = use_query_cache();

    // Nothing fetched for one user may leak to the next.
    Effect::new(move |was_authenticated: Option<bool>| {
        let authenticated = auth_state.with(|s| s.is_authenticated());
        if was_authenticated == Some(true) && !authenticated {
            log::info!("session ended, dropping cached queries");
            cache.clear();
        }
        authenticated
    });

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
