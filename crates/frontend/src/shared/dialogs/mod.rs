//! Error and confirmation dialogs on top of the modal stack.

use leptos::prelude::*;
use thaw::*;

use crate::shared::api::ApiError;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::modal_stack::{use_modal_stack, ModalOptions, ModalStackService};

#[derive(Clone, Copy)]
pub struct DialogService {
    stack: ModalStackService,
}

impl DialogService {
    pub fn new(stack: ModalStackService) -> Self {
        Self { stack }
    }

    /// Shows `message` in a modal error dialog.
    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("error dialog: {message}");
        self.stack.push_with(ModalOptions::width("440px").class("dialog--error"), move |handle| {
            let message = message.clone();
            view! {
                <ErrorDialog
                    message=message
                    on_close=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    }

    /// Error dialog for a failed backend call. Expired sessions are handled
    /// by the auth layer and need no dialog.
    pub fn api_error(&self, error: &ApiError) {
        if !error.is_unauthorized() {
            self.error(error.to_string());
        }
    }

    pub fn confirm(&self, message: impl Into<String>, on_confirm: Callback<()>) {
        let message = message.into();
        self.stack.push_with(ModalOptions::width("440px"), move |handle| {
            let message = message.clone();
            let close = handle.clone();
            view! {
                <ConfirmDialog
                    message=message
                    on_confirm=Callback::new(move |_| {
                        handle.close();
                        on_confirm.run(());
                    })
                    on_cancel=Callback::new(move |_| close.close())
                />
            }
            .into_any()
        });
    }
}

pub fn use_dialogs() -> DialogService {
    use_context::<DialogService>().unwrap_or_else(|| DialogService::new(use_modal_stack()))
}

#[component]
pub fn ErrorDialog(#[prop(into)] message: String, on_close: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="dialog">
            <div class="dialog__header dialog__header--error">
                {icon("alert-triangle")}
                <h3 class="dialog__title">{move || i18n.t("dialog.error_title")}</h3>
            </div>
            <div class="dialog__body">{message}</div>
            <div class="dialog__actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                    {move || i18n.t("common.ok")}
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn ConfirmDialog(
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    /// Translation key of the confirm button.
    #[prop(optional)]
    confirm_key: Option<&'static str>,
) -> impl IntoView {
    let i18n = use_i18n();
    let confirm_key = confirm_key.unwrap_or("common.confirm");

    view! {
        <div class="dialog">
            <div class="dialog__header">
                {icon("help-circle")}
                <h3 class="dialog__title">{move || i18n.t("dialog.confirm_title")}</h3>
            </div>
            <div class="dialog__body">{message}</div>
            <div class="dialog__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {move || i18n.t("common.cancel")}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                    {move || i18n.t(confirm_key)}
                </Button>
            </div>
        </div>
    }
}
