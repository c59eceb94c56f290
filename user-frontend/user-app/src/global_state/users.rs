use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use user_api_types::{User, UserCache, UserUpdate};
use wasm_bindgen::JsCast;

use crate::api::{get_users, put_user};
use crate::components::user_form::UserForm;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::global_state::alert::Alert;

/// The user whose edit form is currently open.
#[derive(Clone, Copy, Debug)]
pub struct EditSession {
    pub user_id: i64,
    pub form: UserForm,
}

/// Page wide state: the cached users plus the transient bits of UI around them.
#[derive(Clone, Copy, Debug)]
pub struct UsersState {
    pub users: RwSignal<UserCache>,
    pub alert: RwSignal<Option<Alert>>,
    pub loading: RwSignal<bool>,
    pub editing: RwSignal<Option<EditSession>>,
}

pub fn provide_users_state() -> UsersState {
    let state = UsersState {
        users: RwSignal::new(UserCache::default()),
        alert: RwSignal::new(None),
        loading: RwSignal::new(false),
        editing: RwSignal::new(None),
    };
    provide_context(state);
    state
}

pub fn use_users_state() -> Option<UsersState> {
    use_context::<UsersState>()
}

/// Turns the result of a load into the new cache and the banner to show, if any.
pub(crate) fn load_outcome(result: AppResult<Vec<User>>) -> (UserCache, Option<Alert>) {
    match result {
        Ok(users) if users.is_empty() => (UserCache::default(), Some(Alert::warning("No users found"))),
        Ok(users) => (UserCache::new(users), None),
        Err(e) => (
            UserCache::default(),
            Some(Alert::danger(format!("Failed to load data: {e}"))),
        ),
    }
}

/// Applies a finished save to the cache and picks the banner for it. The edit is merged
/// whether or not the api accepted it.
pub(crate) fn save_outcome(
    result: AppResult<Value>,
    cache: &mut UserCache,
    update: &UserUpdate,
) -> Option<Alert> {
    let alert = match result {
        Ok(response) => {
            log::info!("updated user {}: {response}", update.id);
            Alert::info(format!("Saved changes to user {}", update.id))
        }
        Err(e) => {
            log::error!("Failed to save user {}: {e}", update.id);
            Alert::danger(format!("Failed to save user: {e}"))
        }
    };
    if !cache.apply_update(update) {
        log::warn!("saved user {} is no longer cached", update.id);
    }
    Some(alert)
}

impl UsersState {
    pub fn load_data(&self, config: AppConfig) {
        let state = *self;
        state.loading.set(true);
        state.alert.set(None);
        spawn_local(async move {
            let result = get_users(&config).await;
            match &result {
                Ok(users) => log::debug!("loaded {} users from {}", users.len(), config.users_url()),
                Err(e) => log::error!("Failed to load data: {e}"),
            }
            let (cache, alert) = load_outcome(result);
            state.users.set(cache);
            state.alert.set(alert);
            state.loading.set(false);
        });
    }

    /// Opens the edit modal with a fresh form filled from the cached user.
    pub fn start_edit(&self, user_id: i64) {
        let form = UserForm::new();
        let found = self.users.with_untracked(|cache| {
            cache.find(user_id).map(|user| form.fill(user)).is_some()
        });
        if !found {
            log::warn!("edit requested for unknown user {user_id}");
            return;
        }
        self.editing.set(Some(EditSession { user_id, form }));
    }

    pub fn close_edit(&self) {
        self.editing.set(None);
    }

    /// Sends the open form to the api, then patches the cache whatever the api said.
    pub fn save_edit(&self, config: AppConfig) {
        let Some(session) = self.editing.get_untracked() else {
            log::debug!("save clicked with no form open");
            return;
        };
        let update = session.form.values().into_update(session.user_id);
        let state = *self;
        spawn_local(async move {
            let result = put_user(config.update_url(), &update, &config).await;
            let mut alert = None;
            state
                .users
                .update(|cache| alert = save_outcome(result, cache, &update));
            state.alert.set(alert);
            state.close_edit();
            blur_active_element();
        });
    }
}

fn blur_active_element() {
    let active = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element());
    if let Some(element) = active.and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok()) {
        let _ = element.blur();
    }
}
