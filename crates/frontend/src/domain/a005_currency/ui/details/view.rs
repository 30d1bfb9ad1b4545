//! Currency Details - View Component

use contracts::domain::a005_currency::aggregate::Currency;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::fetch_currency;
use super::view_model::CurrencyDetailsVm;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::form_field::FormField;
use crate::shared::components::ui::Checkbox;
use crate::shared::dialogs::use_dialogs;
use crate::shared::form_utils::submit_resource;
use crate::shared::i18n::use_i18n;
use crate::shared::query_cache::use_query_cache;

#[component]
pub fn CurrencyDetails(
    id: Signal<Option<i64>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let vm = CurrencyDetailsVm::new();

    Effect::new(move |_| {
        if let Some(currency_id) = id.get() {
            spawn_local(async move {
                match fetch_currency(currency_id).await {
                    Ok(currency) => vm.load(currency),
                    Err(e) => dialogs.api_error(&e),
                }
            });
        }
    });

    let title = Signal::derive(move || {
        i18n.t(if id.get().is_some() { "currency.edit" } else { "currency.new" })
    });

    let handle_save = Callback::new(move |_| {
        submit_resource::<Currency>(vm.build_save_dto(), vm.status, cache, dialogs, on_saved);
    });

    view! {
        <DetailsForm title=title saving=vm.status.saving on_save=handle_save on_cancel=on_cancel>
            <div class="form__row">
                <FormField label_key="currency.code" required=true error=vm.status.error("code")>
                    <Input value=vm.code />
                </FormField>
                <FormField label_key="currency.symbol" error=vm.status.error("symbol")>
                    <Input value=vm.symbol />
                </FormField>
            </div>
            <FormField label_key="currency.name" required=true error=vm.status.error("name")>
                <Input value=vm.name />
            </FormField>
            <FormField
                label_key="currency.exchange_rate"
                required=true
                error=vm.status.error("exchange_rate")
            >
                <Input value=vm.exchange_rate input_type=InputType::Number />
            </FormField>
            <Checkbox label_key="currency.is_default" checked=vm.is_default id="currency-default" />
        </DetailsForm>
    }
}
