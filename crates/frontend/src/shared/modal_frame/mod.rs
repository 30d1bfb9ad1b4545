use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlay plus positioned surface. Renders no header or buttons: forms and
/// dialogs bring their own so they look the same in a modal and in a tab.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    /// Close when the overlay is clicked (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    /// Extra inline style for the surface, typically a width.
    #[prop(optional, into)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    let pressed_on_overlay = RwSignal::new(false);

    let on_overlay = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Both press and release must land on the overlay, so a text selection
    // dragged out of the surface does not close it.
    let handle_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_overlay.set(on_overlay(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let should_close = close_on_overlay && pressed_on_overlay.get() && on_overlay(&ev);
        pressed_on_overlay.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let surface_style = format!("position: relative; {}", modal_style.unwrap_or_default());

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div
                class=surface_class
                style=surface_style
                role="dialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
