use contracts::domain::a008_inventory_count::aggregate::{CountStatus, InventoryCount};
use contracts::domain::ApiResource;
use contracts::shared::SortDirection;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a008_inventory_count::ui::details::{adjust_count, InventoryCountDetails};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::data_table::{CellValue, Column, DataTable, RowActions, SortState};
use crate::shared::dialogs::use_dialogs;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{delete_record, open_details, use_resource_list};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_cache::use_query_cache;

pub fn status_variant(status: CountStatus) -> BadgeVariant {
    match status {
        CountStatus::Draft => BadgeVariant::Neutral,
        CountStatus::Completed => BadgeVariant::Warning,
        CountStatus::Adjusted => BadgeVariant::Success,
    }
}

fn columns() -> Vec<Column<InventoryCount>> {
    vec![
        Column::new("date", "count.date", |c: &InventoryCount| CellValue::Date(c.date)),
        Column::new("inventory", "count.inventory", |c: &InventoryCount| {
            CellValue::opt_text(c.inventory_name.as_deref())
        }),
        Column::new("status", "count.status", |c: &InventoryCount| {
            CellValue::text(c.status.label_key())
        })
        .centered()
        .render(|c: &InventoryCount| {
            view! { <Badge variant=status_variant(c.status) label_key=c.status.label_key() /> }
                .into_any()
        }),
        Column::new("lines", "count.lines", |c: &InventoryCount| {
            CellValue::Number(c.details.len() as f64)
        })
        .align_end(),
        Column::new("differences", "count.differences", |c: &InventoryCount| {
            CellValue::Number(c.lines_with_difference() as f64)
        })
        .align_end(),
        Column::new("notes", "count.notes", |c: &InventoryCount| {
            CellValue::opt_text(c.notes.as_deref())
        })
        .unsortable(),
    ]
}

#[component]
pub fn InventoryCountList() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let modal_stack = use_modal_stack();
    let counts = use_resource_list::<InventoryCount>(cache);

    let open = move |id: Option<i64>| {
        open_details(modal_stack, "880px", move |close| {
            view! {
                <InventoryCountDetails id=Signal::derive(move || id) on_saved=close on_cancel=close />
            }
            .into_any()
        });
    };

    let adjust = Callback::new(move |count: InventoryCount| {
        let message = i18n.t_with(
            "count.adjust_confirm",
            &[("count", &count.lines_with_difference().to_string())],
        );
        dialogs.confirm(
            message,
            Callback::new(move |_| {
                let id = count.id;
                spawn_local(async move {
                    match adjust_count(id).await {
                        Ok(()) => {
                            log::info!("inventory count {id} adjusted");
                            cache.invalidate(InventoryCount::COLLECTION);
                        }
                        Err(e) => dialogs.api_error(&e),
                    }
                });
            }),
        );
    });

    let actions = RowActions::new()
        .edit(Callback::new(move |c: InventoryCount| open(Some(c.id))))
        .custom_when("count.adjust", "check-circle", adjust, |c: &InventoryCount| {
            c.status.can_adjust()
        })
        .delete(Callback::new(move |c: InventoryCount| {
            delete_record::<InventoryCount>(c.id, cache, dialogs)
        }));

    view! {
        <PageFrame page_id="a008_inventory_count--list" category=PAGE_CAT_LIST>
            <PageHeader title=Signal::derive(move || i18n.t("menu.inventory_counts"))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open(None)>
                    {icon("plus")}
                    {move || i18n.t("common.new")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| cache.invalidate(InventoryCount::COLLECTION)
                >
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </Button>
            </PageHeader>
            <DataTable
                rows=counts.signal()
                columns=columns()
                actions=actions
                loading=Signal::derive(move || counts.is_loading())
                initial_sort=SortState::by("date", SortDirection::Desc)
            />
        </PageFrame>
    }
}
