//! Category Details - View Component

use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::fetch_category;
use super::view_model::CategoryDetailsVm;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::components::form_field::FormField;
use crate::shared::dialogs::use_dialogs;
use crate::shared::form_utils::submit_resource;
use crate::shared::i18n::use_i18n;
use crate::shared::list_utils::{options_of, use_resource_list};
use crate::shared::query_cache::use_query_cache;

#[component]
pub fn CategoryDetails(
    id: Signal<Option<i64>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let vm = CategoryDetailsVm::new();

    Effect::new(move |_| {
        if let Some(category_id) = id.get() {
            spawn_local(async move {
                match fetch_category(category_id).await {
                    Ok(category) => vm.load(category),
                    Err(e) => dialogs.api_error(&e),
                }
            });
        }
    });

    // A category cannot be nested under itself.
    let parents = options_of(use_resource_list::<Category>(cache), move |c: &Category| {
        Some(c.id) != id.get()
    });

    let title = Signal::derive(move || {
        if id.get().is_some() {
            i18n.t("category.edit")
        } else {
            i18n.t("category.new")
        }
    });

    let handle_save = Callback::new(move |_| {
        submit_resource::<Category>(vm.build_save_dto(), vm.status, cache, dialogs, on_saved);
    });

    view! {
        <DetailsForm title=title saving=vm.status.saving on_save=handle_save on_cancel=on_cancel>
            <FormField label_key="category.name" required=true error=vm.status.error("name")>
                <Input value=vm.name />
            </FormField>
            <FormField label_key="category.parent" error=vm.status.error("parent_id")>
                <EntitySelect
                    options=parents
                    value=vm.parent_id
                    placeholder_key="category.no_parent"
                />
            </FormField>
            <FormField label_key="common.description" error=vm.status.error("description")>
                <Textarea value=vm.description attr:rows=3 />
            </FormField>
        </DetailsForm>
    }
}
