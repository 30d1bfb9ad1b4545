pub mod tab_bar;

use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use crate::shared::i18n::use_i18n;
use tab_bar::TabBar;

/// Tab strip plus the content of every opened tab.
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();

    view! {
        <div data-zone="center" class="app-tabs">
            <TabBar />
            <div class="tabs__content">
                <Show when=move || tabs_store.opened.with(Vec::is_empty)>
                    <div class="empty-state">{move || i18n.t("tabs.empty")}</div>
                </Show>
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}
