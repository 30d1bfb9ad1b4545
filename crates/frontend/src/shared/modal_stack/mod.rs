//! Stack of open modals rendered at the application root.
//!
//! Escape and overlay clicks close only the topmost entry. An entry may carry
//! a guard that vetoes closing, e.g. while a save is in flight.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::shared::modal_frame::ModalFrame;

type Builder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Builder,
    style: Option<String>,
    class: Option<String>,
    can_close: Option<CloseGuard>,
}

impl ModalEntry {
    fn may_close(&self) -> bool {
        self.can_close.as_ref().map(|f| f()).unwrap_or(true)
    }
}

/// Lets a modal's content close its own entry.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Surface options of a pushed modal.
#[derive(Clone, Default)]
pub struct ModalOptions {
    pub style: Option<String>,
    pub class: Option<String>,
    pub can_close: Option<CloseGuard>,
}

impl ModalOptions {
    pub fn width(max: &str) -> Self {
        Self {
            style: Some(format!("width: min({max}, 95vw); max-width: min({max}, 95vw);")),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn guard(mut self, can_close: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.can_close = Some(Arc::new(can_close));
        self
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with(ModalOptions::default(), builder)
    }

    pub fn push_with<F>(&self, options: ModalOptions, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                style: options.style,
                class: options.class,
                can_close: options.can_close,
            });
        });

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    /// Closes on the next tick, so the handler that triggered the close is
    /// not dropped while the browser is still dispatching to it.
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    fn close_top_if_allowed(&self) {
        let top = self
            .stack
            .with_untracked(|s| s.last().map(|e| (e.id, e.may_close())));
        if let Some((id, true)) = top {
            self.close_deferred(id);
        }
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)")
}

/// Stack position to CSS z-index; later entries sit on top.
fn layer_z_index(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX).saturating_add(1000)
}

/// Renders the stack; mount exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal_stack();

    let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            if key_event.key() == "Escape" {
                svc.close_top_if_allowed();
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        if let Err(e) =
            window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        {
            log::warn!("modal host: Escape listener not installed: {e:?}");
        }
    }
    // The host lives as long as the app.
    on_keydown.forget();

    view! {
        <For
            each=move || { svc.stack.get().into_iter().enumerate().collect::<Vec<_>>() }
            key=|(_, entry)| entry.id
            children=move |(index, entry): (usize, ModalEntry)| {
                let id = entry.id;
                let guard = entry.clone();
                let on_close = Callback::new(move |_| {
                    if guard.may_close() {
                        svc.close_deferred(id);
                    }
                });
                let content = (entry.builder)(ModalHandle { id, svc });
                view! {
                    <ModalFrame
                        z_index=layer_z_index(index)
                        on_close=on_close
                        modal_style=entry.style.clone().unwrap_or_default()
                        modal_class=entry.class.clone().unwrap_or_default()
                    >
                        {content}
                    </ModalFrame>
                }
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_entries_stack_above_earlier_ones() {
        assert_eq!(layer_z_index(0), 1000);
        assert!(layer_z_index(2) > layer_z_index(1));
        assert_eq!(layer_z_index(usize::MAX), i32::MAX);
    }
}
