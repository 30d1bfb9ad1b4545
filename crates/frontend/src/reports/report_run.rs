//! State of one report page: the fetched rows and the last run's outcome.

use contracts::shared::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api::client::get_data_with;
use crate::shared::dialogs::DialogService;
use crate::shared::form_utils::FormStatus;

pub struct ReportRun<T: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<T>>,
    /// Set once the first run came back; the empty state differs before that.
    pub ran: RwSignal<bool>,
    pub form: FormStatus,
}

impl<T: Send + Sync + 'static> Clone for ReportRun<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ReportRun<T> {}

impl<T> ReportRun<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            ran: RwSignal::new(false),
            form: FormStatus::new(),
        }
    }

    pub fn loading(&self) -> Signal<bool> {
        self.form.saving.into()
    }

    /// Fetches `path` with `query` unless `check` failed or a run is in flight.
    pub fn run<Q>(
        &self,
        path: &'static str,
        query: Q,
        check: Result<(), ValidationErrors>,
        dialogs: DialogService,
    ) where
        Q: Serialize + 'static,
    {
        let form = self.form;
        if form.saving.get_untracked() || !form.accept(check) {
            return;
        }
        form.saving.set(true);
        let rows = self.rows;
        let ran = self.ran;
        spawn_local(async move {
            let result = get_data_with::<Q, Vec<T>>(path, &query).await;
            form.saving.set(false);
            match result {
                Ok(data) => {
                    log::debug!("report {path}: {} rows", data.len());
                    rows.set(data);
                    ran.set(true);
                }
                Err(e) => dialogs.api_error(&e),
            }
        });
    }
}
