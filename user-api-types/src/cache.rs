use crate::user::{User, UserUpdate};

/// Client side copy of the user list. Rebuilt on every load, patched in place on save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserCache {
    users: Vec<User>,
}

impl UserCache {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|user| user.id == Some(id))
    }

    /// Merges `update` into the first user with a matching id.
    /// Returns false when no user matched, in which case nothing changes.
    pub fn apply_update(&mut self, update: &UserUpdate) -> bool {
        match self.users.iter_mut().find(|user| user.id == Some(update.id)) {
            Some(user) => {
                user.apply(update);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cache() -> UserCache {
        UserCache::new(
            serde_json::from_value(json!([
                {"id": 1, "name": "Ann", "age": 20, "gender": "female"},
                {"id": 2, "name": "Ben", "age": 30, "email": "ben@example.com"},
                {"id": 3, "name": "Cal"},
                {"name": "Nobody"}
            ]))
            .unwrap(),
        )
    }

    #[test]
    fn find_by_id() {
        let cache = cache();
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.find(2).and_then(|u| u.name.as_deref()), Some("Ben"));
        assert!(cache.find(99).is_none());
    }

    #[test]
    fn update_touches_only_the_matching_user() {
        let mut cache = cache();
        let before = cache.clone();
        let applied = cache.apply_update(&UserUpdate {
            id: 2,
            name: "Benjamin".to_string(),
            age: 0.0,
            avatar_url: String::new(),
            gender: "male".to_string(),
        });
        assert!(applied);
        assert_eq!(cache.users()[0], before.users()[0]);
        assert_eq!(cache.users()[2], before.users()[2]);
        assert_eq!(cache.users()[3], before.users()[3]);
        let ben = cache.find(2).unwrap();
        assert_eq!(ben.name.as_deref(), Some("Benjamin"));
        assert_eq!(ben.age, Some(0.0));
        assert_eq!(ben.email.as_deref(), Some("ben@example.com"));
    }

    #[test]
    fn users_without_an_id_never_match() {
        let mut cache = cache();
        assert!(cache.find(0).is_none());
        assert!(!cache.apply_update(&UserUpdate::default()));
        assert_eq!(cache.users()[3].name.as_deref(), Some("Nobody"));
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut cache = cache();
        let before = cache.clone();
        assert!(!cache.apply_update(&UserUpdate {
            id: 42,
            ..Default::default()
        }));
        assert_eq!(cache, before);
    }
}
