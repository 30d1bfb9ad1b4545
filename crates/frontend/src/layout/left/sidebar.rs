//! Sidebar with collapsible menu groups. Every entry opens a tab.

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::tab_label_for_key;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label_key: &'static str,
    icon: &'static str,
    /// `(tab key, icon)`; labels come from the tab key.
    items: Vec<(&'static str, &'static str)>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "references",
            label_key: "menu.group.references",
            icon: "folder",
            items: vec![
                ("a001_category", "folder"),
                ("a002_inventory", "warehouse"),
                ("a003_supplier", "truck"),
                ("a004_unit", "ruler"),
                ("a005_currency", "dollar-sign"),
            ],
        },
        MenuGroup {
            id: "stock",
            label_key: "menu.group.stock",
            icon: "layers",
            items: vec![
                ("a006_item", "package"),
                ("a007_invoice", "file-text"),
                ("a008_inventory_count", "clipboard"),
            ],
        },
        MenuGroup {
            id: "reports",
            label_key: "menu.group.reports",
            icon: "bar-chart",
            items: vec![
                ("r101_supplier_transactions", "truck"),
                ("r102_cost_analysis", "trending-up"),
                ("r103_item_movements", "layers"),
                ("r104_stock_balance", "bar-chart"),
            ],
        },
    ]
}

fn toggle(groups: &mut Vec<&'static str>, id: &'static str) {
    if let Some(pos) = groups.iter().position(|g| *g == id) {
        groups.remove(pos);
    } else {
        groups.push(id);
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();
    let groups = menu_groups();
    let expanded = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <nav class="app-sidebar__content">
            {groups
                .into_iter()
                .map(|group| {
                    let id = group.id;
                    view! {
                        <div class="app-sidebar__group">
                            <div
                                class="app-sidebar__item app-sidebar__item--group"
                                on:click=move |_| expanded.update(|g| toggle(g, id))
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{move || i18n.t(group.label_key)}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded.with(|g| g.contains(&id))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=move || expanded.with(|g| g.contains(&id))>
                                <div class="app-sidebar__children">
                                    {group
                                        .items
                                        .iter()
                                        .map(|&(key, icon_name)| {
                                            let label_key = tab_label_for_key(key).unwrap_or(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.with(|a| a.as_deref() == Some(key))
                                                    }
                                                    on:click=move |_| ctx.open_tab(key, &i18n.t(label_key))
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{move || i18n.t(label_key)}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_entry_has_a_label() {
        for group in menu_groups() {
            for (key, _) in group.items {
                assert!(tab_label_for_key(key).is_some(), "{key}");
            }
        }
    }

    #[test]
    fn toggling_twice_restores_groups() {
        let mut groups = vec!["references"];
        toggle(&mut groups, "reports");
        assert_eq!(groups, vec!["references", "reports"]);
        toggle(&mut groups, "reports");
        assert_eq!(groups, vec!["references"]);
    }
}
