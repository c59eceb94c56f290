use icondata as i;
use leptos::{ev, portal::Portal, prelude::*, reactive::wrappers::write::SignalSetter};
use leptos_icons::*;

/// Overlay dialog. Clicking the backdrop, the close button or pressing escape hides it.
#[component]
pub fn Modal(
    children: ChildrenFn,
    #[prop(into)] title: String,
    #[prop(into)] set_visible: SignalSetter<bool>,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            set_visible.set(false);
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Portal>
            <div
                class="modal-backdrop show"
                on:click=move |_| set_visible.set(false)
            ></div>
            <div
                class="modal d-block"
                tabindex="-1"
                role="dialog"
                aria-modal="true"
                on:click=move |_| set_visible.set(false)
            >
                <div
                    class="modal-dialog modal-dialog-centered"
                    on:click=move |e| {
                        e.stop_propagation();
                    }
                >
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{title.clone()}</h5>
                            <button
                                type="button"
                                class="btn btn-link text-secondary p-1"
                                on:click=move |_| set_visible.set(false)
                                aria-label="Close modal"
                            >
                                <Icon icon=i::CgClose width="1.5em" height="1.5em" />
                            </button>
                        </div>
                        {children()}
                    </div>
                </div>
            </div>
        </Portal>
    }
}
