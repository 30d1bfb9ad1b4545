use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;
use web_sys::KeyboardEvent;

use super::view_model::{mark_unit, UnitRow};
use crate::shared::form_utils::FormStatus;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::row_grid::{GridHandle, GridInput, GridSelect};

/// Units the item is stocked and traded in. Primary and default are
/// exclusive flags chosen with radio buttons.
#[component]
pub fn UnitsGrid(
    grid: GridHandle<UnitRow>,
    #[prop(into)] unit_options: Signal<Vec<(i64, String)>>,
    status: FormStatus,
) -> impl IntoView {
    let i18n = use_i18n();

    let keydown = move |key: Uuid, field: &'static str| {
        Callback::new(move |ev: KeyboardEvent| {
            grid.on_keydown(&ev, key, field, i18n.is_rtl_untracked())
        })
    };

    let add_row = move |_| grid.append_and_focus("unit_id");

    view! {
        <div class="grid-section">
            <div class="grid-section__header">
                <h3 class="grid-section__title">{move || i18n.t("item.units")}</h3>
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=add_row>
                    {icon("plus")}
                    {move || i18n.t("grid.add_row")}
                </Button>
            </div>
            <table class="grid">
                <thead>
                    <tr>
                        <th>{move || i18n.t("item.unit")}</th>
                        <th>{move || i18n.t("item.conversion_factor")}</th>
                        <th>{move || i18n.t("item.unit_price")}</th>
                        <th class="grid__flag">{move || i18n.t("item.primary")}</th>
                        <th class="grid__flag">{move || i18n.t("item.default")}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || grid.keys() key=|key| *key let:key>
                        {
                            let invalid = move |field: &'static str| {
                                Signal::derive(move || {
                                    status.line_invalid("units", grid.index(key), field)
                                })
                            };
                            view! {
                                <tr class="grid__row">
                                    <td>
                                        <GridSelect
                                            id=Signal::derive(move || grid.cell_id(key, "unit_id"))
                                            options=unit_options
                                            value=Signal::derive(move || grid.read(key, |r| r.unit_id).flatten())
                                            on_change=Callback::new(move |unit_id| grid.write(key, |r| r.unit_id = unit_id))
                                            on_keydown=keydown(key, "unit_id")
                                            invalid=invalid("unit_id")
                                        />
                                    </td>
                                    <td>
                                        <GridInput
                                            id=Signal::derive(move || grid.cell_id(key, "conversion_factor"))
                                            value=Signal::derive(move || grid.read(key, |r| r.factor.clone()).unwrap_or_default())
                                            on_input=Callback::new(move |v: String| grid.write(key, |r| r.factor = v))
                                            on_keydown=keydown(key, "conversion_factor")
                                            numeric=true
                                            invalid=invalid("conversion_factor")
                                        />
                                    </td>
                                    <td>
                                        <GridInput
                                            id=Signal::derive(move || grid.cell_id(key, "price"))
                                            value=Signal::derive(move || grid.read(key, |r| r.price.clone()).unwrap_or_default())
                                            on_input=Callback::new(move |v: String| grid.write(key, |r| r.price = v))
                                            on_keydown=keydown(key, "price")
                                            numeric=true
                                        />
                                    </td>
                                    <td class="grid__flag">
                                        <input
                                            type="radio"
                                            name="item-unit-primary"
                                            prop:checked=move || grid.read(key, |r| r.is_primary).unwrap_or(false)
                                            on:change=move |_| grid.lines.update(|g| mark_unit(g, key, true))
                                        />
                                    </td>
                                    <td class="grid__flag">
                                        <input
                                            type="radio"
                                            name="item-unit-default"
                                            prop:checked=move || grid.read(key, |r| r.is_default).unwrap_or(false)
                                            on:change=move |_| grid.lines.update(|g| mark_unit(g, key, false))
                                        />
                                    </td>
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
            </table>
            {move || {
                status
                    .errors
                    .with(|e| e.get("units").or_else(|| e.get("units.default")))
                    .map(|key| view! { <div class="form__error">{i18n.t(key)}</div> })
            }}
        </div>
    }
}
