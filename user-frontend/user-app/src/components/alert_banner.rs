use crate::global_state::alert::{Alert, AlertLevel};
use crate::global_state::users::use_users_state;
use icondata as i;
use leptos::prelude::*;
use leptos_icons::*;

#[component]
fn AlertItem(alert: Alert) -> impl IntoView {
    let state = use_users_state().expect("Users state not found");
    let icon = match alert.level {
        AlertLevel::Info => i::BsInfoCircle,
        AlertLevel::Warning => i::BsExclamationTriangle,
        AlertLevel::Danger => i::BsExclamationCircle,
    };
    let class = alert.class();

    view! {
        <div class=format!("{class} d-flex align-items-center gap-2") role="alert">
            <Icon icon width="1.2em" height="1.2em" />
            <div class="flex-grow-1">{alert.message}</div>
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| state.alert.set(None)
            ></button>
        </div>
    }
}

/// Shows the current banner, if there is one.
#[component]
pub fn AlertBanner() -> impl IntoView {
    let state = use_users_state().expect("Users state not found");

    move || {
        state
            .alert
            .get()
            .map(|alert| view! { <AlertItem alert /> })
    }
}
