//! Helpers shared by the resource list pages.

use contracts::domain::ApiResource;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::resource::{fetch_all, list_key, remove};
use crate::shared::dialogs::DialogService;
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use crate::shared::query_cache::{QueryCache, QueryHandle};

/// Cached full list of a resource, watched until the calling component
/// unmounts.
pub fn use_resource_list<R: ApiResource + Send + Sync>(cache: QueryCache) -> QueryHandle<Vec<R>> {
    let key = list_key::<R>();
    let handle = cache.query(key.clone(), fetch_all::<R>);
    on_cleanup(move || cache.release(&key));
    handle
}

/// `(id, name)` pairs for dropdowns, optionally filtered.
pub fn options_of<R>(
    handle: QueryHandle<Vec<R>>,
    keep: impl Fn(&R) -> bool + Send + Sync + 'static,
) -> Signal<Vec<(i64, String)>>
where
    R: ApiResource + Clone + Send + Sync,
{
    Signal::derive(move || {
        handle.with_data(|rows| {
            rows.map(|rows| {
                rows.iter()
                    .filter(|r| keep(r))
                    .map(|r| (r.id(), r.display_name()))
                    .collect()
            })
            .unwrap_or_default()
        })
    })
}

/// Deletes `id` and refreshes every query of the collection. Failures go
/// to the error dialog.
pub fn delete_record<R: ApiResource>(id: i64, cache: QueryCache, dialogs: DialogService) {
    spawn_local(async move {
        match remove::<R>(id).await {
            Ok(()) => {
                log::info!("deleted {}/{}", R::COLLECTION, id);
                cache.invalidate(R::COLLECTION);
            }
            Err(e) => dialogs.api_error(&e),
        }
    });
}

/// Opens a details form in a modal `width` wide. `form` receives the
/// callback that closes the modal, used for both save and cancel.
pub fn open_details<F>(stack: ModalStackService, width: &str, form: F)
where
    F: Fn(Callback<()>) -> AnyView + Send + Sync + 'static,
{
    stack.push_with(ModalOptions::width(width), move |handle| {
        form(Callback::new(move |_| handle.close()))
    });
}

/// Case-insensitive match of `needle` in any of `fields`; blank matches all.
pub fn matches_any(needle: &str, fields: &[&str]) -> bool {
    let needle = needle.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_needle_matches_everything() {
        assert!(matches_any("  ", &["anything"]));
        assert!(matches_any("", &[]));
    }

    #[test]
    fn match_ignores_case() {
        assert!(matches_any("FLO", &["Wheat flour", "F-01"]));
        assert!(!matches_any("sugar", &["Wheat flour"]));
    }
}
