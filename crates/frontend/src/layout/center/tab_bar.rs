use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::tab_title;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

#[component]
fn TabButton(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        tabs_store
            .active
            .with(|a| key.with_value(|k| a.as_deref() == Some(k.as_str())))
    });
    let title = move || key.with_value(|k| tab_title(k, &tab.title, &i18n));

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div
            class="tab-bar__tab"
            class:tab-bar__tab--active=is_active
            on:click=move |_| key.with_value(|k| tabs_store.activate_tab(k))
        >
            <span class="tab-bar__title">{title}</span>
            <button class="tab-bar__close" on:click=on_close title=move || i18n.t("common.close")>
                {icon("x")}
            </button>
        </div>
    }
}

/// Strip of opened tabs; clicking activates, the cross closes.
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tab-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabButton tab=tab /> }
            />
        </div>
    }
}
