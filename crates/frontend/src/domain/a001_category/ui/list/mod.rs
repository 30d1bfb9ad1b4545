use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::ApiResource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::data_table::{CellValue, Column, DataTable, RowActions};
use crate::shared::dialogs::use_dialogs;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{delete_record, open_details, use_resource_list};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_cache::use_query_cache;

fn columns() -> Vec<Column<Category>> {
    vec![
        Column::new("name", "category.name", |c: &Category| CellValue::text(&c.name)),
        Column::new("parent", "category.parent", |c: &Category| {
            CellValue::opt_text(c.parent_name.as_deref())
        }),
        Column::new("description", "common.description", |c: &Category| {
            CellValue::opt_text(c.description.as_deref())
        })
        .unsortable(),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let modal_stack = use_modal_stack();
    let categories = use_resource_list::<Category>(cache);

    let open = move |id: Option<i64>| {
        open_details(modal_stack, "560px", move |close| {
            view! {
                <CategoryDetails id=Signal::derive(move || id) on_saved=close on_cancel=close />
            }
            .into_any()
        });
    };

    let actions = RowActions::new()
        .edit(Callback::new(move |c: Category| open(Some(c.id))))
        .delete(Callback::new(move |c: Category| {
            delete_record::<Category>(c.id, cache, dialogs)
        }));

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <PageHeader title=Signal::derive(move || i18n.t("menu.categories"))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open(None)>
                    {icon("plus")}
                    {move || i18n.t("common.new")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| cache.invalidate(Category::COLLECTION)
                >
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </Button>
            </PageHeader>
            <DataTable
                rows=categories.signal()
                columns=columns()
                actions=actions
                loading=Signal::derive(move || categories.is_loading())
                searchable=true
            />
        </PageFrame>
    }
}
