use contracts::domain::a006_item::aggregate::{Item, ItemType};
use contracts::domain::ApiResource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_item::ui::details::ItemDetails;
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

fn type_variant(item_type: ItemType) -> BadgeVariant {
    match item_type {
        ItemType::Raw => BadgeVariant::Neutral,
        ItemType::Produced => BadgeVariant::Success,
        ItemType::Serviceable => BadgeVariant::Warning,
    }
}

/// Rows of `items` whose type is `item_type`; `None` keeps all.
pub fn filter_by_type(items: &[Item], item_type: Option<ItemType>) -> Vec<Item> {
    items
        .iter()
        .filter(|i| item_type.map_or(true, |t| i.item_type == t))
        .cloned()
        .collect()
}

fn columns() -> Vec<Column<Item>> {
    vec![
        Column::new("code", "item.code", |i: &Item| CellValue::text(&i.code)),
        Column::new("name", "item.name", |i: &Item| CellValue::text(&i.name)),
        Column::new("type", "item.type", |i: &Item| CellValue::text(i.item_type.as_str()))
            .centered()
            .render(|i: &Item| {
                view! { <Badge variant=type_variant(i.item_type) label_key=i.item_type.label_key() /> }
                    .into_any()
            }),
        Column::new("category", "item.category", |i: &Item| {
            CellValue::opt_text(i.category_name.as_deref())
        }),
        Column::new("cost", "item.cost", |i: &Item| CellValue::opt_money(i.cost)).align_end(),
        Column::new("price", "item.price", |i: &Item| CellValue::opt_money(i.price)).align_end(),
    ]
}

#[component]
pub fn ItemList() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let modal_stack = use_modal_stack();
    let items = use_resource_list::<Item>(cache);
    let type_filter = RwSignal::new(None::<ItemType>);

    let rows = Signal::derive(move || {
        let item_type = type_filter.get();
        items.with_data(|list| list.map(|l| filter_by_type(l, item_type)).unwrap_or_default())
    });

    let open = move |id: Option<i64>| {
        open_details(modal_stack, "960px", move |close| {
            view! { <ItemDetails id=Signal::derive(move || id) on_saved=close on_cancel=close /> }
                .into_any()
        });
    };

    let actions = RowActions::new()
        .edit(Callback::new(move |i: Item| open(Some(i.id))))
        .delete(Callback::new(move |i: Item| delete_record::<Item>(i.id, cache, dialogs)));

    view! {
        <PageFrame page_id="a006_item--list" category=PAGE_CAT_LIST>
            <PageHeader title=Signal::derive(move || i18n.t("menu.items"))>
                <select
                    class="form__select"
                    on:change=move |ev| type_filter.set(ItemType::from_str(&event_target_value(&ev)))
                >
                    <option value="">{move || i18n.t("item.all_types")}</option>
                    {ItemType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str()>{move || i18n.t(t.label_key())}</option> })
                        .collect_view()}
                </select>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open(None)>
                    {icon("plus")}
                    {move || i18n.t("common.new")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| cache.invalidate(Item::COLLECTION)
                >
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </Button>
            </PageHeader>
            <DataTable
                rows=rows
                columns=columns()
                actions=actions
                loading=Signal::derive(move || items.is_loading())
                searchable=true
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, item_type: ItemType) -> Item {
        Item {
            id,
            code: format!("I{id}"),
            name: format!("Item {id}"),
            item_type,
            category_id: None,
            category_name: None,
            description: None,
            units: Vec::new(),
            ingredients: Vec::new(),
            cost: None,
            price: None,
        }
    }

    #[test]
    fn type_filter_keeps_matching_items() {
        let items = vec![
            item(1, ItemType::Raw),
            item(2, ItemType::Produced),
            item(3, ItemType::Raw),
        ];
        let raw = filter_by_type(&items, Some(ItemType::Raw));
        assert_eq!(raw.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(filter_by_type(&items, None).len(), 3);
    }
}
