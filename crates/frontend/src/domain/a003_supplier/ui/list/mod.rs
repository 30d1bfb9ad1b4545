use contracts::domain::a003_supplier::aggregate::Supplier;
use contracts::domain::ApiResource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_supplier::ui::details::SupplierDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::data_table::{CellValue, Column, DataTable, RowActions};
use crate::shared::dialogs::use_dialogs;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{delete_record, open_details, use_resource_list};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_cache::use_query_cache;

fn columns() -> Vec<Column<Supplier>> {
    vec![
        Column::new("name", "supplier.name", |s: &Supplier| CellValue::text(&s.name)),
        Column::new("phone", "supplier.phone", |s: &Supplier| {
            CellValue::opt_text(s.phone.as_deref())
        }),
        Column::new("email", "supplier.email", |s: &Supplier| {
            CellValue::opt_text(s.email.as_deref())
        }),
        Column::new("tax_number", "supplier.tax_number", |s: &Supplier| {
            CellValue::opt_text(s.tax_number.as_deref())
        }),
    ]
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let modal_stack = use_modal_stack();
    let suppliers = use_resource_list::<Supplier>(cache);

    let open = move |id: Option<i64>| {
        open_details(modal_stack, "640px", move |close| {
            view! {
                <SupplierDetails id=Signal::derive(move || id) on_saved=close on_cancel=close />
            }
            .into_any()
        });
    };

    let actions = RowActions::new()
        .edit(Callback::new(move |s: Supplier| open(Some(s.id))))
        .delete(Callback::new(move |s: Supplier| {
            delete_record::<Supplier>(s.id, cache, dialogs)
        }));

    view! {
        <PageFrame page_id="a003_supplier--list" category=PAGE_CAT_LIST>
            <PageHeader title=Signal::derive(move || i18n.t("menu.suppliers"))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open(None)>
                    {icon("plus")}
                    {move || i18n.t("common.new")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| cache.invalidate(Supplier::COLLECTION)
                >
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </Button>
            </PageHeader>
            <DataTable
                rows=suppliers.signal()
                columns=columns()
                actions=actions
                loading=Signal::derive(move || suppliers.is_loading())
                searchable=true
            />
        </PageFrame>
    }
}
