//! Invoice Editor - View Component

use contracts::domain::a002_inventory::aggregate::Inventory;
use contracts::domain::a003_supplier::aggregate::Supplier;
use contracts::domain::a004_unit::aggregate::Unit;
use contracts::domain::a005_currency::aggregate::{default_currency, Currency};
use contracts::domain::a006_item::aggregate::{Item, ItemType};
use contracts::domain::a007_invoice::InvoiceType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::lines_grid::InvoiceLinesGrid;
use super::model::store_invoice;
use super::view_model::InvoiceEditorVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{invoice_details_key, invoice_new_key};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::components::form_field::FormField;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::today;
use crate::shared::dialogs::use_dialogs;
use crate::shared::format::format_money;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{options_of, use_resource_list};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::query_cache::use_query_cache;
use crate::shared::row_grid::PricingStore;

/// New invoice of one type, edited in its own tab.
#[component]
pub fn InvoiceEditor(invoice_type: InvoiceType) -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = InvoiceEditorVm::new(invoice_type, today());
    let pricing = PricingStore::new();
    let tab_key = invoice_new_key(invoice_type);

    if invoice_type.has_price() {
        spawn_local(async move {
            if let Err(e) = pricing.load_prices().await {
                log::warn!("price table unavailable: {e}");
            }
        });
    }

    let inventories = options_of(use_resource_list::<Inventory>(cache), |i: &Inventory| {
        i.is_active
    });
    let suppliers = options_of(use_resource_list::<Supplier>(cache), |_| true);
    let units = options_of(use_resource_list::<Unit>(cache), |_| true);
    // Services are never stocked, so they only appear on sell invoices.
    let items = options_of(use_resource_list::<Item>(cache), move |i: &Item| {
        i.item_type != ItemType::Serviceable || invoice_type == InvoiceType::Sell
    });
    let currencies = use_resource_list::<Currency>(cache);
    let currency_options = options_of(currencies, |_| true);

    Effect::new(move |_| {
        if vm.currency_id.get_untracked().is_some() {
            return;
        }
        let default_id = currencies.with_data(|list| {
            list.and_then(|l| default_currency(l)).map(|c| c.id)
        });
        if default_id.is_some() {
            vm.currency_id.set(default_id);
        }
    });

    let unit_label = Callback::new(move |unit_id: i64| {
        units.with(|opts| {
            opts.iter()
                .find(|(id, _)| *id == unit_id)
                .map(|(_, label)| label.clone())
                .unwrap_or_else(|| unit_id.to_string())
        })
    });

    let close_key = tab_key.clone();
    let on_cancel = move |_| ctx.close_tab(&close_key);

    let on_save = move |_| {
        if vm.status.saving.get_untracked() {
            return;
        }
        let dto = vm.build_dto();
        if !vm.status.accept(dto.validate()) {
            return;
        }
        vm.status.saving.set(true);
        let tab_key = tab_key.clone();
        spawn_local(async move {
            let result = store_invoice(&dto).await;
            vm.status.saving.set(false);
            match result {
                Ok(invoice) => {
                    log::info!(
                        "stored {} invoice {} ({} lines)",
                        invoice_type.path_segment(),
                        invoice.id,
                        dto.details.len()
                    );
                    cache.invalidate("invoices");
                    ctx.close_tab(&tab_key);
                    let key = invoice_details_key(invoice.id);
                    ctx.open_tab(&key, &key);
                }
                Err(e) => dialogs.api_error(&e),
            }
        });
    };

    let title = Signal::derive(move || {
        let kind = i18n.t(invoice_type.label_key());
        i18n.t_with("tabs.new_invoice", &[("type", &kind)])
    });
    let saving = vm.status.saving;

    view! {
        <PageFrame page_id=format!("a007_invoice--new-{}", invoice_type.path_segment()) category=PAGE_CAT_DETAIL>
            <PageHeader title=title>
                <Button appearance=ButtonAppearance::Primary disabled=saving on_click=on_save>
                    {icon("save")}
                    {move || if saving.get() { i18n.t("common.saving") } else { i18n.t("common.save") }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                    {icon("x")}
                    {move || i18n.t("common.cancel")}
                </Button>
            </PageHeader>
            <div class="invoice-header">
                <div class="form__row">
                    <FormField label_key="invoice.date" required=true error=vm.status.error("date")>
                        <DateInput value=vm.date id="invoice-date" />
                    </FormField>
                    <FormField
                        label_key=if invoice_type.has_destination() { "invoice.from_inventory" } else { "invoice.inventory" }
                        required=true
                        error=vm.status.error("inventory_id")
                    >
                        <EntitySelect options=inventories value=vm.inventory_id />
                    </FormField>
                    {invoice_type
                        .has_destination()
                        .then(|| {
                            view! {
                                <FormField
                                    label_key="invoice.to_inventory"
                                    required=true
                                    error=vm.status.error("to_inventory_id")
                                >
                                    <EntitySelect options=inventories value=vm.to_inventory_id />
                                </FormField>
                            }
                        })}
                </div>
                <div class="form__row">
                    {invoice_type
                        .requires_supplier()
                        .then(|| {
                            view! {
                                <FormField
                                    label_key="invoice.supplier"
                                    required=true
                                    error=vm.status.error("supplier_id")
                                >
                                    <EntitySelect options=suppliers value=vm.supplier_id />
                                </FormField>
                            }
                        })}
                    {invoice_type
                        .has_customer()
                        .then(|| {
                            view! {
                                <FormField label_key="invoice.customer" error=vm.status.error("customer_name")>
                                    <Input value=vm.customer_name />
                                </FormField>
                            }
                        })}
                    {invoice_type
                        .has_price()
                        .then(|| {
                            view! {
                                <FormField label_key="invoice.currency" error=vm.status.error("currency_id")>
                                    <EntitySelect options=currency_options value=vm.currency_id />
                                </FormField>
                            }
                        })}
                </div>
                <FormField label_key="invoice.notes" error=vm.status.error("notes")>
                    <Textarea value=vm.notes attr:rows=2 />
                </FormField>
            </div>
            <InvoiceLinesGrid vm=vm pricing=pricing item_options=items unit_label=unit_label />
            <div class="invoice-summary">
                <span>
                    {move || i18n.t_with("invoice.line_count", &[("count", &vm.line_count().to_string())])}
                </span>
                {invoice_type
                    .has_price()
                    .then(|| {
                        view! {
                            <strong>
                                {move || i18n.t("invoice.total")} ": " {move || format_money(vm.total())}
                            </strong>
                        }
                    })}
            </div>
        </PageFrame>
    }
}
