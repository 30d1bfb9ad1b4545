use contracts::domain::a004_unit::aggregate::Unit;
use contracts::domain::ApiResource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_unit::ui::details::UnitDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::data_table::{CellValue, Column, DataTable, RowActions};
use crate::shared::dialogs::use_dialogs;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{delete_record, open_details, use_resource_list};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_cache::use_query_cache;

#[component]
pub fn UnitList() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let modal_stack = use_modal_stack();
    let units = use_resource_list::<Unit>(cache);

    let open = move |id: Option<i64>| {
        open_details(modal_stack, "440px", move |close| {
            view! { <UnitDetails id=Signal::derive(move || id) on_saved=close on_cancel=close /> }
                .into_any()
        });
    };

    let columns = vec![
        Column::new("name", "unit.name", |u: &Unit| CellValue::text(&u.name)),
        Column::new("symbol", "unit.symbol", |u: &Unit| CellValue::text(&u.symbol)),
    ];
    let actions = RowActions::new()
        .edit(Callback::new(move |u: Unit| open(Some(u.id))))
        .delete(Callback::new(move |u: Unit| delete_record::<Unit>(u.id, cache, dialogs)));

    view! {
        <PageFrame page_id="a004_unit--list" category=PAGE_CAT_LIST>
            <PageHeader title=Signal::derive(move || i18n.t("menu.units"))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open(None)>
                    {icon("plus")}
                    {move || i18n.t("common.new")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| cache.invalidate(Unit::COLLECTION)
                >
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </Button>
            </PageHeader>
            <DataTable
                rows=units.signal()
                columns=columns
                actions=actions
                loading=Signal::derive(move || units.is_loading())
            />
        </PageFrame>
    }
}
