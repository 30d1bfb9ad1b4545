use contracts::domain::a005_currency::aggregate::{default_currency, Currency};
use contracts::domain::ApiResource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_currency::ui::details::{make_default, CurrencyDetails};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::data_table::{CellValue, Column, DataTable, RowActions};
use crate::shared::dialogs::use_dialogs;
use crate::shared::format::format_number_with_decimals;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{delete_record, open_details, use_resource_list};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_cache::use_query_cache;

/// Rows as displayed: only the effective default carries the flag, even if
/// the backend reports none or several.
pub fn with_single_default(currencies: &[Currency]) -> Vec<Currency> {
    let default_id = default_currency(currencies).map(|c| c.id);
    currencies
        .iter()
        .cloned()
        .map(|mut c| {
            c.is_default = Some(c.id) == default_id;
            c
        })
        .collect()
}

fn columns() -> Vec<Column<Currency>> {
    vec![
        Column::new("code", "currency.code", |c: &Currency| CellValue::text(&c.code)),
        Column::new("name", "currency.name", |c: &Currency| CellValue::text(&c.name)),
        Column::new("symbol", "currency.symbol", |c: &Currency| {
            CellValue::opt_text(c.symbol.as_deref())
        }),
        Column::new("exchange_rate", "currency.exchange_rate", |c: &Currency| {
            CellValue::Number(c.exchange_rate)
        })
        .align_end()
        .render(|c: &Currency| format_number_with_decimals(c.exchange_rate, 4).into_any()),
        Column::new("is_default", "currency.is_default", |c: &Currency| {
            CellValue::Flag(c.is_default)
        })
        .centered()
        .render(|c: &Currency| {
            if c.is_default {
                view! { <Badge variant=BadgeVariant::Primary label_key="currency.default" /> }
                    .into_any()
            } else {
                ().into_any()
            }
        }),
    ]
}

#[component]
pub fn CurrencyList() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let modal_stack = use_modal_stack();
    let currencies = use_resource_list::<Currency>(cache);

    let rows = Signal::derive(move || {
        currencies.with_data(|list| list.map(|l| with_single_default(l)).unwrap_or_default())
    });

    let open = move |id: Option<i64>| {
        open_details(modal_stack, "560px", move |close| {
            view! {
                <CurrencyDetails id=Signal::derive(move || id) on_saved=close on_cancel=close />
            }
            .into_any()
        });
    };

    let set_default = Callback::new(move |c: Currency| {
        spawn_local(async move {
            match make_default(&c).await {
                Ok(_) => {
                    log::info!("default currency set to {}", c.code);
                    cache.invalidate(Currency::COLLECTION);
                }
                Err(e) => dialogs.api_error(&e),
            }
        });
    });

    let actions = RowActions::new()
        .edit(Callback::new(move |c: Currency| open(Some(c.id))))
        .custom_when("currency.make_default", "star", set_default, |c: &Currency| {
            !c.is_default
        })
        .delete(Callback::new(move |c: Currency| {
            delete_record::<Currency>(c.id, cache, dialogs)
        }));

    view! {
        <PageFrame page_id="a005_currency--list" category=PAGE_CAT_LIST>
            <PageHeader title=Signal::derive(move || i18n.t("menu.currencies"))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open(None)>
                    {icon("plus")}
                    {move || i18n.t("common.new")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| cache.invalidate(Currency::COLLECTION)
                >
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </Button>
            </PageHeader>
            <DataTable
                rows=rows
                columns=columns()
                actions=actions
                loading=Signal::derive(move || currencies.is_loading())
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(id: i64, is_default: bool) -> Currency {
        Currency {
            id,
            code: format!("C{id}"),
            name: format!("Currency {id}"),
            symbol: None,
            exchange_rate: 1.0,
            is_default,
        }
    }

    #[test]
    fn exactly_one_default_is_shown() {
        let shown = with_single_default(&[currency(1, true), currency(2, true)]);
        assert_eq!(shown.iter().filter(|c| c.is_default).count(), 1);
        assert!(shown[0].is_default);

        let none_flagged = with_single_default(&[currency(5, false), currency(6, false)]);
        assert!(none_flagged[0].is_default);
        assert!(!none_flagged[1].is_default);
    }
}
