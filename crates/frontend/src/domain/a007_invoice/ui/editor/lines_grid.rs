use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;
use web_sys::KeyboardEvent;

use super::view_model::{price_text, InvoiceEditorVm, InvoiceLine};
use crate::shared::dialogs::use_dialogs;
use crate::shared::format::format_money;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::row_grid::{GridInput, GridSelect, PricingStore};

/// Line items of an invoice. Enter/Tab walk the cells and grow the grid
/// from its last cell.
#[component]
pub fn InvoiceLinesGrid(
    vm: InvoiceEditorVm,
    pricing: PricingStore,
    #[prop(into)] item_options: Signal<Vec<(i64, String)>>,
    unit_label: Callback<i64, String>,
) -> impl IntoView {
    let i18n = use_i18n();
    let dialogs = use_dialogs();
    let grid = vm.lines;
    let status = vm.status;
    let with_price = vm.invoice_type.has_price();

    let keydown = move |key: Uuid, field: &'static str| {
        Callback::new(move |ev: KeyboardEvent| {
            grid.on_keydown(&ev, key, field, i18n.is_rtl_untracked())
        })
    };

    let select_item = move |key: Uuid, item_id: Option<i64>| {
        grid.write(key, |l| {
            l.item_id = item_id;
            l.unit_id = None;
            l.price.clear();
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
            grid.write(key, |l| {
                if l.item_id != Some(item_id) {
                    return;
                }
                if let Some((unit, price)) = selection {
                    l.unit_id = Some(unit.unit_id);
                    if with_price {
                        l.price = price_text(price);
                    }
                }
            });
        });
    };

    let select_unit = move |key: Uuid, unit_id: Option<i64>| {
        grid.write(key, |l| {
            let derived = match (with_price, l.item_id, unit_id) {
                (true, Some(item), Some(unit)) => pricing.price_of(item, unit),
                _ => None,
            };
            l.set_unit(unit_id, derived);
        });
    };

    let unit_options = move |key: Uuid| {
        Signal::derive(move || {
            grid.read(key, |l| l.item_id)
                .flatten()
                .map(|item_id| pricing.unit_options(item_id, |id| unit_label.run(id)))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="grid-section">
            <div class="grid-section__header">
                <h3 class="grid-section__title">{move || i18n.t("invoice.lines")}</h3>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| grid.append_and_focus("item_id")
                >
                    {icon("plus")}
                    {move || i18n.t("grid.add_row")}
                </Button>
            </div>
            <table class="grid">
                <thead>
                    <tr>
                        <th class="grid__index">"#"</th>
                        <th>{move || i18n.t("invoice.item")}</th>
                        <th>{move || i18n.t("invoice.unit")}</th>
                        <th>{move || i18n.t("common.quantity")}</th>
                        {with_price
                            .then(|| {
                                view! {
                                    <th>{move || i18n.t("invoice.price")}</th>
                                    <th class="grid__number">{move || i18n.t("invoice.line_total")}</th>
                                }
                            })}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || grid.keys() key=|key| *key let:key>
                        {
                            let invalid = move |field: &'static str| {
                                Signal::derive(move || {
                                    status.line_invalid("details", grid.index(key), field)
                                })
                            };
                            view! {
                                <tr class="grid__row">
                                    <td class="grid__index">
                                        {move || grid.index(key).map(|i| i + 1)}
                                    </td>
                                    <td>
                                        <GridSelect
                                            id=Signal::derive(move || grid.cell_id(key, "item_id"))
                                            options=item_options
                                            value=Signal::derive(move || grid.read(key, |l| l.item_id).flatten())
                                            on_change=Callback::new(move |item_id| select_item(key, item_id))
                                            on_keydown=keydown(key, "item_id")
                                            invalid=invalid("item_id")
                                        />
                                    </td>
                                    <td>
                                        <GridSelect
                                            id=Signal::derive(move || grid.cell_id(key, "unit_id"))
                                            options=unit_options(key)
                                            value=Signal::derive(move || grid.read(key, |l| l.unit_id).flatten())
                                            on_change=Callback::new(move |unit_id| select_unit(key, unit_id))
                                            on_keydown=keydown(key, "unit_id")
                                            invalid=invalid("unit_id")
                                        />
                                    </td>
                                    <td>
                                        <GridInput
                                            id=Signal::derive(move || grid.cell_id(key, "quantity"))
                                            value=Signal::derive(move || grid.read(key, |l| l.quantity.clone()).unwrap_or_default())
                                            on_input=Callback::new(move |v: String| grid.write(key, |l| l.quantity = v))
                                            on_keydown=keydown(key, "quantity")
                                            numeric=true
                                            invalid=invalid("quantity")
                                        />
                                    </td>
                                    {with_price
                                        .then(|| {
                                            view! {
                                                <td>
                                                    <GridInput
                                                        id=Signal::derive(move || grid.cell_id(key, "price"))
                                                        value=Signal::derive(move || grid.read(key, |l| l.price.clone()).unwrap_or_default())
                                                        on_input=Callback::new(move |v: String| grid.write(key, |l| l.price = v))
                                                        on_keydown=keydown(key, "price")
                                                        numeric=true
                                                        invalid=invalid("price")
                                                    />
                                                </td>
                                                <td class="grid__number">
                                                    {move || grid.read(key, InvoiceLine::total).map(format_money)}
                                                </td>
                                            }
                                        })}
                                    <td>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| grid.remove(key)
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
                {with_price
                    .then(|| {
                        view! {
                            <tfoot>
                                <tr class="grid__totals">
                                    <td colspan="4">{move || i18n.t("invoice.total")}</td>
                                    <td></td>
                                    <td class="grid__number">{move || format_money(vm.total())}</td>
                                    <td></td>
                                </tr>
                            </tfoot>
                        }
                    })}
            </table>
            {move || {
                status
                    .errors
                    .with(|e| e.get("details"))
                    .map(|key| view! { <div class="form__error">{i18n.t(key)}</div> })
            }}
        </div>
    }
}
