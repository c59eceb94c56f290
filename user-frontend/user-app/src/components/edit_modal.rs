use leptos::prelude::*;
use leptos::reactive::wrappers::write::SignalSetter;

use crate::components::modal::Modal;
use crate::components::user_form::UserFormFields;
use crate::config::use_config;
use crate::global_state::users::use_users_state;

#[component]
pub fn EditUserModal() -> impl IntoView {
    let state = use_users_state().expect("Users state not found");
    let config = StoredValue::new(use_config());
    let set_visible = SignalSetter::map(move |visible: bool| {
        if !visible {
            state.close_edit();
        }
    });

    view! {
        <Show when=move || state.editing.with(Option::is_some)>
            <Modal title="Edit user" set_visible>
                <div class="modal-body">
                    {move || {
                        state
                            .editing
                            .get()
                            .map(|session| view! { <UserFormFields form=session.form /> })
                    }}
                </div>
                <div class="modal-footer">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| state.close_edit()
                    >
                        "Close"
                    </button>
                    <button
                        type="button"
                        class="btn btn-primary"
                        data-user-id=move || {
                            state.editing.get().map(|session| session.user_id.to_string())
                        }
                        on:click=move |_| state.save_edit(config.get_value())
                    >
                        "Save changes"
                    </button>
                </div>
            </Modal>
        </Show>
    }
}
