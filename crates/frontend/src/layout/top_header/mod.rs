//! TopHeader: sidebar toggle, title, language and theme switches, the
//! signed-in user and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::{use_i18n, LanguageSwitch};
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    let user_name = move || {
        auth_state.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_else(|| i18n.t("auth.guest"))
        })
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || i18n.t("header.toggle_sidebar")
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{move || i18n.t("app.title")}</span>
            </div>

            <div class="top-header__actions">
                <LanguageSwitch />
                <ThemeToggle />
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_name}</span>
                    <span class="top-header__role">
                        {move || auth_state.with(|s| s.user.as_ref().and_then(|u| u.role.clone()))}
                    </span>
                </div>
                <button
                    class="top-header__icon-btn"
                    on:click=logout
                    title=move || i18n.t("auth.logout")
                >
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
