//! Inventory Count Details - View Component

use contracts::domain::a002_inventory::aggregate::Inventory;
use contracts::domain::a008_inventory_count::aggregate::InventoryCount;
use contracts::domain::ApiResource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::{adjust_count, fetch_count, fetch_stock};
use super::view_model::{
    sheet_from_stock, status_from_value, status_value, InventoryCountDetailsVm, EDITABLE_STATUSES,
};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::components::form_field::FormField;
use crate::shared::components::ui::{Badge, BadgeVariant, Checkbox};
use crate::shared::date_utils::today;
use crate::shared::dialogs::use_dialogs;
use crate::shared::form_utils::submit_resource;
use crate::shared::format::format_quantity;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{options_of, use_resource_list};
use crate::shared::query_cache::use_query_cache;

#[component]
pub fn InventoryCountDetails(
    id: Signal<Option<i64>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let vm = InventoryCountDetailsVm::new(today());

    Effect::new(move |_| {
        if let Some(count_id) = id.get() {
            spawn_local(async move {
                match fetch_count(count_id).await {
                    Ok(count) => vm.load(count),
                    Err(e) => dialogs.api_error(&e),
                }
            });
        }
    });

    let inventories = options_of(use_resource_list::<Inventory>(cache), |_| true);

    let load_stock = move || {
        let Some(inventory_id) = vm.inventory_id.get_untracked() else {
            return;
        };
        vm.loading_stock.set(true);
        spawn_local(async move {
            match fetch_stock(inventory_id).await {
                Ok(stock) => {
                    log::debug!("count sheet: {} lines from inventory {inventory_id}", stock.len());
                    vm.lines.set(sheet_from_stock(&stock));
                }
                Err(e) => dialogs.api_error(&e),
            }
            vm.loading_stock.set(false);
        });
    };

    // Picking a store on a new count fills the sheet with its stock.
    let on_inventory_change = Callback::new(move |_: Option<i64>| {
        if vm.id.get_untracked().is_none() {
            load_stock();
        }
    });

    let handle_save = Callback::new(move |_| {
        submit_resource::<InventoryCount>(vm.build_save_dto(), vm.form, cache, dialogs, on_saved);
    });

    let handle_adjust = move |_| {
        let Some(count_id) = vm.id.get_untracked() else {
            return;
        };
        let message = i18n.t_with(
            "count.adjust_confirm",
            &[("count", &vm.difference_count().to_string())],
        );
        dialogs.confirm(
            message,
            Callback::new(move |_| {
                spawn_local(async move {
                    match adjust_count(count_id).await {
                        Ok(()) => {
                            log::info!("inventory count {count_id} adjusted");
                            cache.invalidate(InventoryCount::COLLECTION);
                            on_saved.run(());
                        }
                        Err(e) => dialogs.api_error(&e),
                    }
                });
            }),
        );
    };

    let title = Signal::derive(move || {
        i18n.t(if id.get().is_some() { "count.edit" } else { "count.new" })
    });
    let locked = Signal::derive(move || vm.is_locked());

    let adjust_button = view! {
        <Show when=move || vm.id.get().is_some() && vm.status.get().can_adjust()>
            <Button appearance=ButtonAppearance::Secondary on_click=handle_adjust>
                {icon("check-circle")}
                {move || i18n.t("count.adjust")}
            </Button>
        </Show>
    }
    .into_any();

    view! {
        <DetailsForm
            title=title
            saving=Signal::derive(move || vm.form.saving.get() || locked.get())
            on_save=handle_save
            on_cancel=on_cancel
            extra_actions=adjust_button
        >
            <div class="form__row">
                <FormField label_key="count.inventory" required=true error=vm.form.error("inventory_id")>
                    <EntitySelect
                        options=inventories
                        value=vm.inventory_id
                        disabled=Signal::derive(move || vm.id.get().is_some())
                        on_change=on_inventory_change
                    />
                </FormField>
                <FormField label_key="count.date" required=true error=vm.form.error("date")>
                    <DateInput value=vm.date id="count-date" />
                </FormField>
                <FormField label_key="count.status" error=vm.form.error("status")>
                    {move || {
                        if locked.get() {
                            return view! {
                                <Badge variant=BadgeVariant::Success label_key=vm.status.get().label_key() />
                            }
                                .into_any();
                        }
                        view! {
                            <select
                                class="form__select"
                                prop:value=move || status_value(vm.status.get())
                                on:change=move |ev| {
                                    if let Some(s) = status_from_value(&event_target_value(&ev)) {
                                        vm.status.set(s);
                                    }
                                }
                            >
                                {EDITABLE_STATUSES
                                    .into_iter()
                                    .map(|s| {
                                        view! {
                                            <option value=status_value(s) selected=move || vm.status.get() == s>
                                                {move || i18n.t(s.label_key())}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        }
                            .into_any()
                    }}
                </FormField>
            </div>
            <FormField label_key="count.notes" error=vm.form.error("notes")>
                <Textarea value=vm.notes attr:rows=2 />
            </FormField>

            <div class="grid-section">
                <div class="grid-section__header">
                    <h3 class="grid-section__title">{move || i18n.t("count.sheet")}</h3>
                    <Space>
                        <Checkbox label_key="count.only_differences" checked=vm.only_differences />
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            disabled=Signal::derive(move || {
                                locked.get() || vm.loading_stock.get() || vm.inventory_id.get().is_none()
                            })
                            on_click=move |_| load_stock()
                        >
                            {icon("refresh")}
                            {move || i18n.t("count.reload_stock")}
                        </Button>
                    </Space>
                </div>
                <table class="grid">
                    <thead>
                        <tr>
                            <th>{move || i18n.t("count.item")}</th>
                            <th>{move || i18n.t("count.unit")}</th>
                            <th class="grid__number">{move || i18n.t("count.expected")}</th>
                            <th class="grid__number">{move || i18n.t("count.counted")}</th>
                            <th class="grid__number">{move || i18n.t("count.difference")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || vm.visible_indices() key=|i| *i let:index>
                            {
                                let line = move || vm.lines.with(|l| l.get(index).cloned());
                                let invalid = move || {
                                    vm.form
                                        .line_invalid("details", Some(index), "counted_quantity")
                                };
                                view! {
                                    <tr class=move || {
                                        if line().map(|l| l.has_difference()).unwrap_or(false) {
                                            "grid__row grid__row--changed"
                                        } else {
                                            "grid__row"
                                        }
                                    }>
                                        <td>
                                            {move || {
                                                line()
                                                    .map(|l| {
                                                        l.detail
                                                            .item_name
                                                            .unwrap_or_else(|| format!("#{}", l.detail.item_id))
                                                    })
                                            }}
                                        </td>
                                        <td>{move || line().and_then(|l| l.detail.unit_name)}</td>
                                        <td class="grid__number">
                                            {move || line().map(|l| format_quantity(l.detail.expected_quantity))}
                                        </td>
                                        <td>
                                            <input
                                                type="text"
                                                inputmode="decimal"
                                                class=move || {
                                                    if invalid() {
                                                        "grid__input grid__input--number grid__input--invalid"
                                                    } else {
                                                        "grid__input grid__input--number"
                                                    }
                                                }
                                                disabled=move || locked.get()
                                                prop:value=move || line().map(|l| l.counted).unwrap_or_default()
                                                on:input=move |ev| vm.set_counted(index, event_target_value(&ev))
                                            />
                                        </td>
                                        <td class="grid__number">
                                            {move || line().map(|l| format_quantity(l.difference()))}
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
                {move || {
                    vm.form
                        .errors
                        .with(|e| e.get("details"))
                        .map(|key| view! { <div class="form__error">{i18n.t(key)}</div> })
                }}
                <div class="grid-section__footer">
                    {move || {
                        i18n.t_with(
                            "count.difference_summary",
                            &[("count", &vm.difference_count().to_string())],
                        )
                    }}
                </div>
            </div>
        </DetailsForm>
    }
}
