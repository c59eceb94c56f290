pub(crate) mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod global_state;

use crate::components::{
    alert_banner::AlertBanner, edit_modal::EditUserModal, loading::LoadingIndicator,
    user_list::UserList,
};
use crate::config::use_config;
use crate::global_state::users::provide_users_state;
use leptos::prelude::*;
use leptos_meta::*;

pub use crate::config::{provide_config, AppConfig};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let state = provide_users_state();
    let config = StoredValue::new(use_config());

    state.load_data(config.get_value());

    view! {
        <Title text="Users" />
        <Stylesheet
            id="bootstrap"
            href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
        />
        <main class="container py-4">
            <header class="d-flex align-items-center justify-content-between mb-4">
                <h1 class="h3 mb-0">"Users"</h1>
                <button
                    type="button"
                    class="btn btn-outline-secondary"
                    disabled=move || state.loading.get()
                    on:click=move |_| state.load_data(config.get_value())
                >
                    "Reload"
                </button>
            </header>
            <AlertBanner />
            <LoadingIndicator />
            <UserList />
            <EditUserModal />
        </main>
    }
}
