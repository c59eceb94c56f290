use leptos::prelude::*;

use crate::components::user_card::UserCard;
use crate::global_state::users::use_users_state;

/// One card per cached user. The whole grid is rebuilt whenever the cache changes.
#[component]
pub fn UserList() -> impl IntoView {
    let state = use_users_state().expect("Users state not found");

    view! {
        <div id="users-container" class="row g-4">
            {move || {
                state
                    .users
                    .with(|cache| {
                        cache
                            .users()
                            .iter()
                            .enumerate()
                            .map(|(index, user)| view! { <UserCard index user=user.clone() /> })
                            .collect_view()
                    })
            }}
        </div>
    }
}
