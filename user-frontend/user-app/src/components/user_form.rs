use leptos::prelude::*;
use user_api_types::{User, UserUpdate};

/// Backing signals for one edit form. A fresh set is made every time the modal opens.
#[derive(Clone, Copy, Debug)]
pub struct UserForm {
    pub name: RwSignal<String>,
    pub age: RwSignal<String>,
    pub avatar_url: RwSignal<String>,
    pub gender: RwSignal<String>,
}

impl UserForm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            age: RwSignal::new(String::new()),
            avatar_url: RwSignal::new(String::new()),
            gender: RwSignal::new(String::new()),
        }
    }

    pub fn fill(&self, user: &User) {
        let values = UserFormValues::from(user);
        self.name.set(values.name);
        self.age.set(values.age);
        self.avatar_url.set(values.avatar_url);
        self.gender.set(values.gender);
    }

    pub fn values(&self) -> UserFormValues {
        UserFormValues {
            name: self.name.get_untracked(),
            age: self.age.get_untracked(),
            avatar_url: self.avatar_url.get_untracked(),
            gender: self.gender.get_untracked(),
        }
    }
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw text of the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFormValues {
    pub name: String,
    pub age: String,
    pub avatar_url: String,
    pub gender: String,
}

impl From<&User> for UserFormValues {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone().unwrap_or_default(),
            age: user
                .age
                .filter(|age| *age != 0.0 && !age.is_nan())
                .map(|age| age.to_string())
                .unwrap_or_default(),
            avatar_url: user.avatar_url.clone().unwrap_or_default(),
            gender: user.gender.clone().unwrap_or_default(),
        }
    }
}

impl UserFormValues {
    pub fn into_update(self, id: i64) -> UserUpdate {
        UserUpdate {
            id,
            name: self.name.trim().to_string(),
            age: parse_age(&self.age),
            avatar_url: self.avatar_url.trim().to_string(),
            gender: self.gender.trim().to_string(),
        }
    }
}

/// Blank or unparseable ages save as 0.
pub fn parse_age(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|age| age.is_finite())
        .unwrap_or(0.0)
}

/// Name, age, avatar and gender inputs bound to `form`.
#[component]
pub fn UserFormFields(form: UserForm) -> impl IntoView {
    view! {
        <form name="userForm" on:submit=|ev| ev.prevent_default()>
            <div class="mb-3">
                <label for="userName" class="form-label">"Name"</label>
                <input
                    id="userName"
                    name="userName"
                    type="text"
                    class="form-control"
                    prop:value=move || form.name.get()
                    on:input=move |ev| form.name.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label for="userAge" class="form-label">"Age"</label>
                <input
                    id="userAge"
                    name="userAge"
                    type="number"
                    class="form-control"
                    prop:value=move || form.age.get()
                    on:input=move |ev| form.age.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label for="userImg" class="form-label">"Avatar URL"</label>
                <input
                    id="userImg"
                    name="userImg"
                    type="url"
                    class="form-control"
                    prop:value=move || form.avatar_url.get()
                    on:input=move |ev| form.avatar_url.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label for="userGender" class="form-label">"Gender"</label>
                <input
                    id="userGender"
                    name="userGender"
                    type="text"
                    class="form-control"
                    prop:value=move || form.gender.get()
                    on:input=move |ev| form.gender.set(event_target_value(&ev))
                />
            </div>
        </form>
    }
}
