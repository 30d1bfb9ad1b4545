//! Item Details - View Component

use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a004_unit::aggregate::Unit;
use contracts::domain::a006_item::aggregate::{Item, ItemType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::ingredients_grid::IngredientsGrid;
use super::model::fetch_item;
use super::units_grid::UnitsGrid;
use super::view_model::ItemDetailsVm;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::components::form_field::FormField;
use crate::shared::dialogs::use_dialogs;
use crate::shared::form_utils::submit_resource;
use crate::shared::i18n::use_i18n;
use crate::shared::list_utils::{options_of, use_resource_list};
use crate::shared::query_cache::use_query_cache;
use crate::shared::row_grid::PricingStore;

#[component]
pub fn ItemDetails(
    id: Signal<Option<i64>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let vm = ItemDetailsVm::new();
    let pricing = PricingStore::new();

    spawn_local(async move {
        if let Err(e) = pricing.load_prices().await {
            log::warn!("price table unavailable: {e}");
        }
    });

    Effect::new(move |_| {
        if let Some(item_id) = id.get() {
            spawn_local(async move {
                match fetch_item(item_id).await {
                    Ok(item) => {
                        let ingredient_items: Vec<i64> =
                            item.ingredients.iter().map(|i| i.item_id).collect();
                        vm.load(item);
                        // Unit dropdowns of loaded lines need their item's units.
                        for ingredient_id in ingredient_items {
                            if let Err(e) = pricing.units_for(ingredient_id).await {
                                log::warn!("units of item {ingredient_id}: {e}");
                            }
                        }
                    }
                    Err(e) => dialogs.api_error(&e),
                }
            });
        }
    });

    let categories = options_of(use_resource_list::<Category>(cache), |_| true);
    let unit_options = options_of(use_resource_list::<Unit>(cache), |_| true);
    let item_options = options_of(use_resource_list::<Item>(cache), move |i: &Item| {
        Some(i.id) != id.get()
    });
    let unit_label = Callback::new(move |unit_id: i64| {
        unit_options.with(|opts| {
            opts.iter()
                .find(|(id, _)| *id == unit_id)
                .map(|(_, label)| label.clone())
                .unwrap_or_else(|| unit_id.to_string())
        })
    });

    let title = Signal::derive(move || {
        i18n.t(if id.get().is_some() { "item.edit" } else { "item.new" })
    });

    let handle_save = Callback::new(move |_| {
        submit_resource::<Item>(vm.build_save_dto(), vm.status, cache, dialogs, on_saved);
    });

    view! {
        <DetailsForm title=title saving=vm.status.saving on_save=handle_save on_cancel=on_cancel>
            <div class="form__row">
                <FormField label_key="item.code" required=true error=vm.status.error("code")>
                    <Input value=vm.code />
                </FormField>
                <FormField label_key="item.name" required=true error=vm.status.error("name")>
                    <Input value=vm.name />
                </FormField>
            </div>
            <div class="form__row">
                <FormField label_key="item.type" required=true error=vm.status.error("type")>
                    <select
                        class="form__select"
                        prop:value=move || vm.item_type.get().as_str()
                        on:change=move |ev| {
                            if let Some(t) = ItemType::from_str(&event_target_value(&ev)) {
                                vm.item_type.set(t);
                            }
                        }
                    >
                        {ItemType::ALL
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <option value=t.as_str() selected=move || vm.item_type.get() == t>
                                        {move || i18n.t(t.label_key())}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </FormField>
                <FormField label_key="item.category" error=vm.status.error("category_id")>
                    <EntitySelect options=categories value=vm.category_id />
                </FormField>
                <FormField label_key="item.price" error=vm.status.error("price")>
                    <Input value=vm.price input_type=InputType::Number />
                </FormField>
            </div>
            <FormField label_key="common.description" error=vm.status.error("description")>
                <Textarea value=vm.description attr:rows=2 />
            </FormField>
            <UnitsGrid grid=vm.units unit_options=unit_options status=vm.status />
            <Show when=move || vm.item_type.get().has_ingredients()>
                <IngredientsGrid
                    vm=vm
                    pricing=pricing
                    item_options=item_options
                    unit_label=unit_label
                />
            </Show>
        </DetailsForm>
    }
}
