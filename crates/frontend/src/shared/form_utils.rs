//! Helpers shared by the resource details forms.

use contracts::domain::{ApiResource, ResourceDto};
use contracts::shared::validation::line_field;
use contracts::shared::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::resource::save;
use crate::shared::dialogs::DialogService;
use crate::shared::query_cache::QueryCache;

/// Validation result and in-flight flag of one form.
#[derive(Clone, Copy)]
pub struct FormStatus {
    pub errors: RwSignal<ValidationErrors>,
    pub saving: RwSignal<bool>,
}

impl Default for FormStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStatus {
    pub fn new() -> Self {
        Self {
            errors: RwSignal::new(ValidationErrors::new()),
            saving: RwSignal::new(false),
        }
    }

    /// Inline error of `field`, as a translation key.
    pub fn error(&self, field: impl Into<String>) -> Signal<Option<&'static str>> {
        let errors = self.errors;
        let field = field.into();
        Signal::derive(move || errors.with(|e| e.get(&field)))
    }

    /// Whether line `index` of `collection` has an error on `field`; tracked.
    pub fn line_invalid(&self, collection: &str, index: Option<usize>, field: &str) -> bool {
        let Some(index) = index else {
            return false;
        };
        let key = line_field(collection, index, field);
        self.errors.with(|e| e.get(&key).is_some())
    }

    /// Records `result` and reports whether the form may be sent.
    pub fn accept(&self, result: Result<(), ValidationErrors>) -> bool {
        match result {
            Ok(()) => {
                self.errors.set(ValidationErrors::new());
                true
            }
            Err(errors) => {
                log::debug!("form rejected: {errors}");
                self.errors.set(errors);
                false
            }
        }
    }
}

/// Validates `dto`, then creates or updates it. On success the collection's
/// queries are refreshed and `on_saved` runs; failures open the error
/// dialog.
pub fn submit_resource<R: ApiResource>(
    dto: R::Dto,
    status: FormStatus,
    cache: QueryCache,
    dialogs: DialogService,
    on_saved: Callback<()>,
) {
    if status.saving.get_untracked() || !status.accept(dto.validate()) {
        return;
    }
    status.saving.set(true);
    spawn_local(async move {
        let result = save::<R>(&dto).await;
        status.saving.set(false);
        match result {
            Ok(saved) => {
                log::info!("saved {}/{}", R::COLLECTION, saved.id());
                cache.invalidate(R::COLLECTION);
                on_saved.run(());
            }
            Err(e) => dialogs.api_error(&e),
        }
    });
}
