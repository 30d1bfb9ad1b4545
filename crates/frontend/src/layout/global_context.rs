use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open tabs, the active one and the sidebar toggle, shared app-wide.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named by `?active=` and keeps the query string in
    /// sync with the active tab afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            self.open_tab(&active_key, &active_key);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        if let Err(e) = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        ) {
                            log::warn!("history.replaceState failed: {e:?}");
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}'", key);
        self.opened.update(|tabs| open_in(tabs, key, title));
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        let mut next_active = None;
        self.opened
            .update(|tabs| next_active = close_in(tabs, key, was_active));
        if was_active {
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    /// Shown when the key has no translated label.
    pub title: String,
}

fn open_in(tabs: &mut Vec<Tab>, key: &str, title: &str) {
    if !tabs.iter().any(|tab| tab.key == key) {
        tabs.push(Tab {
            key: key.to_string(),
            title: title.to_string(),
        });
    }
}

/// Removes `key`; when it was active, the last remaining tab takes over.
fn close_in(tabs: &mut Vec<Tab>, key: &str, was_active: bool) -> Option<String> {
    tabs.retain(|tab| tab.key != key);
    if was_active {
        tabs.last().map(|t| t.key.clone())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_twice_keeps_one_tab() {
        let mut tabs = Vec::new();
        open_in(&mut tabs, "a001_category", "Categories");
        open_in(&mut tabs, "a001_category", "Categories");
        open_in(&mut tabs, "a003_supplier", "Suppliers");
        assert_eq!(tabs.len(), 2);
    }

    #[test]
    fn closing_active_tab_activates_last() {
        let mut tabs = Vec::new();
        for key in ["a", "b", "c"] {
            open_in(&mut tabs, key, key);
        }
        assert_eq!(close_in(&mut tabs, "b", true).as_deref(), Some("c"));
        assert_eq!(close_in(&mut tabs, "c", false), None);
        assert_eq!(tabs.len(), 1);
        assert_eq!(close_in(&mut tabs, "a", true), None);
    }
}
