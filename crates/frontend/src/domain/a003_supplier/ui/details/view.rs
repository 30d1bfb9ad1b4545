//! Supplier Details - View Component

use contracts::domain::a003_supplier::aggregate::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::fetch_supplier;
use super::view_model::SupplierDetailsVm;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::form_field::FormField;
use crate::shared::dialogs::use_dialogs;
use crate::shared::form_utils::submit_resource;
use crate::shared::i18n::use_i18n;
use crate::shared::query_cache::use_query_cache;

#[component]
pub fn SupplierDetails(
    id: Signal<Option<i64>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let vm = SupplierDetailsVm::new();

    Effect::new(move |_| {
        if let Some(supplier_id) = id.get() {
            spawn_local(async move {
                match fetch_supplier(supplier_id).await {
                    Ok(supplier) => vm.load(supplier),
                    Err(e) => dialogs.api_error(&e),
                }
            });
        }
    });

    let title = Signal::derive(move || {
        i18n.t(if id.get().is_some() { "supplier.edit" } else { "supplier.new" })
    });

    let handle_save = Callback::new(move |_| {
        submit_resource::<Supplier>(vm.build_save_dto(), vm.status, cache, dialogs, on_saved);
    });

    view! {
        <DetailsForm title=title saving=vm.status.saving on_save=handle_save on_cancel=on_cancel>
            <FormField label_key="supplier.name" required=true error=vm.status.error("name")>
                <Input value=vm.name />
            </FormField>
            <div class="form__row">
                <FormField label_key="supplier.phone" error=vm.status.error("phone")>
                    <Input value=vm.phone />
                </FormField>
                <FormField label_key="supplier.email" error=vm.status.error("email")>
                    <Input value=vm.email input_type=InputType::Email />
                </FormField>
            </div>
            <FormField label_key="supplier.address" error=vm.status.error("address")>
                <Input value=vm.address />
            </FormField>
            <FormField label_key="supplier.tax_number" error=vm.status.error("tax_number")>
                <Input value=vm.tax_number />
            </FormField>
            <FormField label_key="common.notes" error=vm.status.error("notes")>
                <Textarea value=vm.notes attr:rows=3 />
            </FormField>
        </DetailsForm>
    }
}
