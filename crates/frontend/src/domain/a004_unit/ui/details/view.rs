use contracts::domain::a004_unit::aggregate::Unit;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::fetch_unit;
use super::view_model::UnitDetailsVm;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::form_field::FormField;
use crate::shared::dialogs::use_dialogs;
use crate::shared::form_utils::submit_resource;
use crate::shared::i18n::use_i18n;
use crate::shared::query_cache::use_query_cache;

#[component]
pub fn UnitDetails(
    id: Signal<Option<i64>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let vm = UnitDetailsVm::new();

    Effect::new(move |_| {
        if let Some(unit_id) = id.get() {
            spawn_local(async move {
                match fetch_unit(unit_id).await {
                    Ok(unit) => vm.load(unit),
                    Err(e) => dialogs.api_error(&e),
                }
            });
        }
    });

    let title = Signal::derive(move || {
        i18n.t(if id.get().is_some() { "unit.edit" } else { "unit.new" })
    });

    let handle_save = Callback::new(move |_| {
        submit_resource::<Unit>(vm.build_save_dto(), vm.status, cache, dialogs, on_saved);
    });

    view! {
        <DetailsForm title=title saving=vm.status.saving on_save=handle_save on_cancel=on_cancel>
            <FormField label_key="unit.name" required=true error=vm.status.error("name")>
                <Input value=vm.name />
            </FormField>
            <FormField label_key="unit.symbol" error=vm.status.error("symbol")>
                <Input value=vm.symbol />
            </FormField>
        </DetailsForm>
    }
}
