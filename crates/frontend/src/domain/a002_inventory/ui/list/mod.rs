use contracts::domain::a002_inventory::aggregate::Inventory;
use contracts::domain::ApiResource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_inventory::ui::details::InventoryDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::data_table::{CellValue, Column, DataTable, RowActions};
use crate::shared::dialogs::use_dialogs;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{delete_record, open_details, use_resource_list};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_cache::use_query_cache;

fn active_badge(inventory: &Inventory) -> AnyView {
    if inventory.is_active {
        view! { <Badge variant=BadgeVariant::Success label_key="inventory.active" /> }.into_any()
    } else {
        view! { <Badge label_key="inventory.inactive" /> }.into_any()
    }
}

fn columns() -> Vec<Column<Inventory>> {
    vec![
        Column::new("name", "inventory.name", |i: &Inventory| CellValue::text(&i.name)),
        Column::new("location", "inventory.location", |i: &Inventory| {
            CellValue::opt_text(i.location.as_deref())
        }),
        Column::new("is_active", "inventory.is_active", |i: &Inventory| {
            CellValue::Flag(i.is_active)
        })
        .centered()
        .render(active_badge),
    ]
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let modal_stack = use_modal_stack();
    let inventories = use_resource_list::<Inventory>(cache);

    let open = move |id: Option<i64>| {
        open_details(modal_stack, "560px", move |close| {
            view! {
                <InventoryDetails id=Signal::derive(move || id) on_saved=close on_cancel=close />
            }
            .into_any()
        });
    };

    let actions = RowActions::new()
        .edit(Callback::new(move |i: Inventory| open(Some(i.id))))
        .delete(Callback::new(move |i: Inventory| {
            delete_record::<Inventory>(i.id, cache, dialogs)
        }));

    view! {
        <PageFrame page_id="a002_inventory--list" category=PAGE_CAT_LIST>
            <PageHeader title=Signal::derive(move || i18n.t("menu.inventories"))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open(None)>
                    {icon("plus")}
                    {move || i18n.t("common.new")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| cache.invalidate(Inventory::COLLECTION)
                >
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </Button>
            </PageHeader>
            <DataTable
                rows=inventories.signal()
                columns=columns()
                actions=actions
                loading=Signal::derive(move || inventories.is_loading())
                searchable=true
            />
        </PageFrame>
    }
}
