use leptos::prelude::*;

use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::dialogs::DialogService;
use crate::shared::i18n::I18nProvider;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::query_cache::QueryCache;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Open tabs and the sidebar toggle, shared by the whole app.
    provide_context(AppGlobalContext::new());

    let modal_stack = ModalStackService::new();
    provide_context(modal_stack);
    provide_context(DialogService::new(modal_stack));
    provide_context(QueryCache::new());

    view! {
        <ThemeProvider>
            <I18nProvider>
                <AuthProvider>
                    <AppShell />
                    <ModalHost />
                </AuthProvider>
            </I18nProvider>
        </ThemeProvider>
    }
}
