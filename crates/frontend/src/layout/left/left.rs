use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

/// Collapsible left zone; hidden while `left_open` is off.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <aside data-zone="left" class="app-sidebar" class:app-sidebar--hidden=move || !ctx.left_open.get()>
            {children()}
        </aside>
    }
}
