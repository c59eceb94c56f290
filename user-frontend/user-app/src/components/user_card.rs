use leptos::prelude::*;
use user_api_types::User;

use crate::global_state::users::use_users_state;

pub const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/200";
const MISSING: &str = "–";

/// Display strings for one card, with every fallback already applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub avatar_src: String,
    pub avatar_alt: String,
    pub title: String,
    pub email: String,
    pub age: String,
    pub gender: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl From<&User> for CardView {
    fn from(user: &User) -> Self {
        Self {
            avatar_src: non_empty(&user.avatar_url)
                .unwrap_or(PLACEHOLDER_AVATAR)
                .to_string(),
            avatar_alt: non_empty(&user.name).unwrap_or("No name").to_string(),
            title: non_empty(&user.name).unwrap_or("Unnamed").to_string(),
            email: non_empty(&user.email).unwrap_or(MISSING).to_string(),
            age: user
                .age
                .filter(|age| *age != 0.0 && !age.is_nan())
                .map(|age| age.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            gender: non_empty(&user.gender).unwrap_or(MISSING).to_string(),
        }
    }
}

/// A record without an id can't be matched on save, so its card has no Edit button.
#[component]
pub fn UserCard(index: usize, user: User) -> impl IntoView {
    let state = use_users_state().expect("Users state not found");
    let user_id = user.id;
    let card = CardView::from(&user);

    view! {
        <div class="col-12 col-sm-6 col-lg-4">
            <article class="card glass-card h-100 text-center">
                <div class="p-3">
                    <img
                        src=card.avatar_src
                        alt=card.avatar_alt
                        class="card-img-top object-fit-contain mb-3"
                        width="120"
                        height="120"
                    />
                </div>
                <div class="card-body">
                    <h5 class="card-title mb-2">{card.title}</h5>
                    <ul class="list-group list-group-flush text-start">
                        <li class="list-group-item">"Email: " {card.email}</li>
                        <li class="list-group-item">"Age: " {card.age}</li>
                        <li class="list-group-item">"Gender: " {card.gender}</li>
                    </ul>
                    {user_id
                        .map(|user_id| {
                            view! {
                                <button
                                    type="button"
                                    class="btn btn-primary mt-3 edit-btn"
                                    data-index=index.to_string()
                                    data-user-id=user_id.to_string()
                                    on:click=move |_| state.start_edit(user_id)
                                >
                                    "Edit"
                                </button>
                            }
                        })}
                </div>
            </article>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_user() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "name": "Ann",
            "age": 33,
            "email": "ann@example.com",
            "gender": "female",
            "avatar_url": "https://example.com/ann.png"
        }))
        .unwrap();
        let card = CardView::from(&user);
        assert_eq!(card.title, "Ann");
        assert_eq!(card.avatar_alt, "Ann");
        assert_eq!(card.avatar_src, "https://example.com/ann.png");
        assert_eq!(card.email, "ann@example.com");
        assert_eq!(card.age, "33");
        assert_eq!(card.gender, "female");
    }

    #[test]
    fn missing_fields_fall_back() {
        let user: User = serde_json::from_value(json!({"id": 2})).unwrap();
        let card = CardView::from(&user);
        assert_eq!(card.title, "Unnamed");
        assert_eq!(card.avatar_alt, "No name");
        assert_eq!(card.avatar_src, PLACEHOLDER_AVATAR);
        assert_eq!(card.email, "–");
        assert_eq!(card.age, "–");
        assert_eq!(card.gender, "–");
    }

    #[test]
    fn empty_and_zero_count_as_missing() {
        let user: User = serde_json::from_value(json!({
            "id": 3,
            "name": "",
            "age": 0,
            "gender": "",
            "email": ""
        }))
        .unwrap();
        let card = CardView::from(&user);
        assert_eq!(card.title, "Unnamed");
        assert_eq!(card.age, "–");
        assert_eq!(card.gender, "–");
        assert_eq!(card.email, "–");
    }

    #[test]
    fn record_without_id_still_renders() {
        let users = user_api_types::normalize_users(json!({"name": 5, "age": "12"}));
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, None);
        let card = CardView::from(&users[0]);
        assert_eq!(card.title, "Unnamed");
        assert_eq!(card.age, "12");
    }
}
