use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;
use web_sys::KeyboardEvent;

use super::model::calculate_pricing;
use super::view_model::{IngredientRow, ItemDetailsVm};
use crate::shared::dialogs::use_dialogs;
use crate::shared::format::format_money;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::row_grid::{GridInput, GridSelect, PricingStore};

/// Recipe of a produced item: ingredient, unit, quantity and cost.
#[component]
pub fn IngredientsGrid(
    vm: ItemDetailsVm,
    pricing: PricingStore,
    /// Every item except the one being edited.
    #[prop(into)]
    item_options: Signal<Vec<(i64, String)>>,
    /// Label of a unit id.
    unit_label: Callback<i64, String>,
) -> impl IntoView {
    let i18n = use_i18n();
    let dialogs = use_dialogs();
    let grid = vm.ingredients;
    let status = vm.status;

    let keydown = move |key: Uuid, field: &'static str| {
        Callback::new(move |ev: KeyboardEvent| {
            grid.on_keydown(&ev, key, field, i18n.is_rtl_untracked())
        })
    };

    // Item -> units cascade: unit resets to the item's preferred one and the
    // cost follows from the price table.
    let select_item = move |key: Uuid, item_id: Option<i64>| {
        vm.calculated_cost.set(None);
        grid.write(key, |r| {
            r.item_id = item_id;
            r.unit_id = None;
            r.unit_cost = None;
        });
        let Some(item_id) = item_id else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = pricing.units_for(item_id).await {
                dialogs.api_error(&e);
                return;
            }
            let selection = pricing.select_item(item_id);
            grid.write(key, |r| {
                // The user may have picked another item meanwhile.
                if r.item_id != Some(item_id) {
                    return;
                }
                if let Some((unit, price)) = selection {
                    r.unit_id = Some(unit.unit_id);
                    r.unit_cost = price;
                }
            });
        });
    };

    let select_unit = move |key: Uuid, unit_id: Option<i64>| {
        vm.calculated_cost.set(None);
        grid.write(key, |r| {
            r.unit_id = unit_id;
            r.unit_cost = match (r.item_id, unit_id) {
                (Some(item), Some(unit)) => pricing.price_of(item, unit),
                _ => None,
            };
        });
    };

    let unit_options = move |key: Uuid| {
        Signal::derive(move || {
            grid.read(key, |r| r.item_id)
                .flatten()
                .map(|item_id| pricing.unit_options(item_id, |id| unit_label.run(id)))
                .unwrap_or_default()
        })
    };

    let calculate = move |_| {
        let request = vm.pricing_request();
        if request.ingredients.is_empty() {
            return;
        }
        vm.calculating.set(true);
        spawn_local(async move {
            match calculate_pricing(&request).await {
                Ok(response) => {
                    log::debug!("ingredient pricing: total {}", response.total_cost);
                    vm.apply_pricing(&response);
                }
                Err(e) => dialogs.api_error(&e),
            }
            vm.calculating.set(false);
        });
    };

    view! {
        <div class="grid-section">
            <div class="grid-section__header">
                <h3 class="grid-section__title">{move || i18n.t("item.ingredients")}</h3>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| grid.append_and_focus("item_id")
                    >
                        {icon("plus")}
                        {move || i18n.t("grid.add_row")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        disabled=vm.calculating
                        on_click=calculate
                    >
                        {icon("calculator")}
                        {move || i18n.t("item.calculate")}
                    </Button>
                </Space>
            </div>
            <table class="grid">
                <thead>
                    <tr>
                        <th>{move || i18n.t("item.ingredient")}</th>
                        <th>{move || i18n.t("item.unit")}</th>
                        <th>{move || i18n.t("common.quantity")}</th>
                        <th class="grid__number">{move || i18n.t("item.unit_cost")}</th>
                        <th class="grid__number">{move || i18n.t("item.total_cost")}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || grid.keys() key=|key| *key let:key>
                        {
                            let invalid = move |field: &'static str| {
                                Signal::derive(move || {
                                    status.line_invalid("ingredients", grid.index(key), field)
                                })
                            };
                            view! {
                                <tr class="grid__row">
                                    <td>
                                        <GridSelect
                                            id=Signal::derive(move || grid.cell_id(key, "item_id"))
                                            options=item_options
                                            value=Signal::derive(move || grid.read(key, |r| r.item_id).flatten())
                                            on_change=Callback::new(move |item_id| select_item(key, item_id))
                                            on_keydown=keydown(key, "item_id")
                                            invalid=invalid("item_id")
                                        />
                                    </td>
                                    <td>
                                        <GridSelect
                                            id=Signal::derive(move || grid.cell_id(key, "unit_id"))
                                            options=unit_options(key)
                                            value=Signal::derive(move || grid.read(key, |r| r.unit_id).flatten())
                                            on_change=Callback::new(move |unit_id| select_unit(key, unit_id))
                                            on_keydown=keydown(key, "unit_id")
                                            invalid=invalid("unit_id")
                                        />
                                    </td>
                                    <td>
                                        <GridInput
                                            id=Signal::derive(move || grid.cell_id(key, "quantity"))
                                            value=Signal::derive(move || grid.read(key, |r| r.quantity.clone()).unwrap_or_default())
                                            on_input=Callback::new(move |v: String| {
                                                vm.calculated_cost.set(None);
                                                grid.write(key, |r| r.quantity = v);
                                            })
                                            on_keydown=keydown(key, "quantity")
                                            numeric=true
                                            invalid=invalid("quantity")
                                        />
                                    </td>
                                    <td class="grid__number">
                                        {move || grid.read(key, |r| r.unit_cost.map(format_money)).flatten()}
                                    </td>
                                    <td class="grid__number">
                                        {move || grid.read(key, IngredientRow::total_cost).flatten().map(format_money)}
                                    </td>
                                    <td>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| {
                                                vm.calculated_cost.set(None);
                                                grid.remove(key);
                                            }
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
                <tfoot>
                    <tr class="grid__totals">
                        <td colspan="4">{move || i18n.t("item.cost")}</td>
                        <td class="grid__number">{move || format_money(vm.cost())}</td>
                        <td></td>
                    </tr>
                </tfoot>
            </table>
            {move || {
                status
                    .errors
                    .with(|e| e.get("ingredients"))
                    .map(|key| view! { <div class="form__error">{i18n.t(key)}</div> })
            }}
        </div>
    }
}
