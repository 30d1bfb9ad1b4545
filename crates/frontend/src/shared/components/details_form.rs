use leptos::prelude::*;
use thaw::*;

use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

/// Body of a details modal: title bar with Save / Cancel and the fields.
#[component]
pub fn DetailsForm(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    /// Extra header buttons shown before Save.
    #[prop(optional)]
    extra_actions: Option<AnyView>,
    children: Children,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="details-form">
            <div class="details-form__header">
                <h2 class="details-form__title">{move || title.get()}</h2>
                <Space>
                    {extra_actions}
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=saving
                        on_click=move |_| on_save.run(())
                    >
                        {icon("save")}
                        {move || if saving.get() { i18n.t("common.saving") } else { i18n.t("common.save") }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                        {move || i18n.t("common.cancel")}
                    </Button>
                </Space>
            </div>
            <div class="details-form__body">{children()}</div>
        </div>
    }
}
