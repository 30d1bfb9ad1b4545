//! Inventory Details - View Component

use contracts::domain::a002_inventory::aggregate::Inventory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::fetch_inventory;
use super::view_model::InventoryDetailsVm;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::form_field::FormField;
use crate::shared::components::ui::Checkbox;
use crate::shared::dialogs::use_dialogs;
use crate::shared::form_utils::submit_resource;
use crate::shared::i18n::use_i18n;
use crate::shared::query_cache::use_query_cache;

#[component]
pub fn InventoryDetails(
    id: Signal<Option<i64>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let vm = InventoryDetailsVm::new();

    Effect::new(move |_| {
        if let Some(inventory_id) = id.get() {
            spawn_local(async move {
                match fetch_inventory(inventory_id).await {
                    Ok(inventory) => vm.load(inventory),
                    Err(e) => dialogs.api_error(&e),
                }
            });
        }
    });

    let title = Signal::derive(move || {
        i18n.t(if id.get().is_some() { "inventory.edit" } else { "inventory.new" })
    });

    let handle_save = Callback::new(move |_| {
        submit_resource::<Inventory>(vm.build_save_dto(), vm.status, cache, dialogs, on_saved);
    });

    view! {
        <DetailsForm title=title saving=vm.status.saving on_save=handle_save on_cancel=on_cancel>
            <FormField label_key="inventory.name" required=true error=vm.status.error("name")>
                <Input value=vm.name />
            </FormField>
            <FormField label_key="inventory.location" error=vm.status.error("location")>
                <Input value=vm.location />
            </FormField>
            <FormField label_key="common.description" error=vm.status.error("description")>
                <Textarea value=vm.description attr:rows=3 />
            </FormField>
            <Checkbox label_key="inventory.is_active" checked=vm.is_active id="inventory-active" />
        </DetailsForm>
    }
}
