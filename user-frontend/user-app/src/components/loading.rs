use leptos::prelude::*;

use crate::global_state::users::use_users_state;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="spinner-border text-primary" role="status">
            <span class="visually-hidden">"Loading..."</span>
        </div>
    }
}

/// Spinner that is only on screen while the user list is loading.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let state = use_users_state().expect("Users state not found");
    view! {
        <Show when=move || state.loading.get()>
            <div class="d-flex justify-content-center my-4">
                <Loading />
            </div>
        </Show>
    }
}
