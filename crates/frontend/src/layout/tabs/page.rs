//! TabPage: keeps an opened tab mounted and hides it while inactive.

use leptos::prelude::*;

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};

/// Content stays alive across tab switches, so form state survives.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let active_key = tab_key.clone();
    let is_active = move || tabs_store.active.with(|a| a.as_deref() == Some(active_key.as_str()));

    log::debug!("tab page mounted: '{tab_key}'");
    let cleanup_key = tab_key.clone();
    on_cleanup(move || log::debug!("tab page dropped: '{cleanup_key}'"));

    let content = render_tab_content(&tab_key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
