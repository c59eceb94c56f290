use serde_json::Value;

use crate::user::User;

/// Flattens whatever the users endpoint returned into a list of users.
///
/// Accepted shapes, checked in order:
/// - a bare array of users
/// - an object with a `data` array
/// - an object with a `users` array
/// - any other object, treated as a single user
///
/// Anything else (null, strings, numbers) produces an empty list. Every entry of the list
/// becomes a card: fields that are missing or mistyped read as absent, and an entry that
/// isn't an object at all becomes an empty user.
pub fn normalize_users(response: Value) -> Vec<User> {
    match response {
        Value::Array(items) => collect_users(items),
        Value::Object(mut object) => {
            for key in ["data", "users"] {
                if matches!(object.get(key), Some(Value::Array(_))) {
                    if let Some(Value::Array(items)) = object.remove(key) {
                        return collect_users(items);
                    }
                }
            }
            collect_users(vec![Value::Object(object)])
        }
        _ => Vec::new(),
    }
}

fn collect_users(items: Vec<Value>) -> Vec<User> {
    items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<User>(item)
                .map_err(|e| log::warn!("user record is not an object: {e}"))
                .unwrap_or_default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(users: &[User]) -> Vec<Option<i64>> {
        users.iter().map(|u| u.id).collect()
    }

    #[test]
    fn bare_array() {
        let users = normalize_users(json!([{"id": 1}, {"id": 2, "name": "Two"}]));
        assert_eq!(ids(&users), vec![Some(1), Some(2)]);
        assert_eq!(users[1].name.as_deref(), Some("Two"));
    }

    #[test]
    fn data_and_users_wrappers() {
        assert_eq!(ids(&normalize_users(json!({"data": [{"id": 5}]}))), vec![Some(5)]);
        assert_eq!(
            ids(&normalize_users(json!({"users": [{"id": 6}, {"id": 7}]}))),
            vec![Some(6), Some(7)]
        );
        // data wins when both are present
        assert_eq!(
            ids(&normalize_users(json!({"data": [{"id": 1}], "users": [{"id": 2}]}))),
            vec![Some(1)]
        );
    }

    #[test]
    fn single_object_is_wrapped() {
        let users = normalize_users(json!({"id": 12, "name": "Solo"}));
        assert_eq!(ids(&users), vec![Some(12)]);
        assert_eq!(users[0].name.as_deref(), Some("Solo"));
    }

    #[test]
    fn non_array_data_key_is_a_single_user() {
        let users = normalize_users(json!({"id": 3, "data": "not a list"}));
        assert_eq!(ids(&users), vec![Some(3)]);
        assert_eq!(users[0].extra.get("data"), Some(&json!("not a list")));
    }

    #[test]
    fn anything_else_is_empty() {
        assert!(normalize_users(json!(null)).is_empty());
        assert!(normalize_users(json!("users")).is_empty());
        assert!(normalize_users(json!(42)).is_empty());
        assert!(normalize_users(json!(true)).is_empty());
        assert!(normalize_users(json!([])).is_empty());
        assert!(normalize_users(json!({"data": []})).is_empty());
    }

    #[test]
    fn bundled_fallback_file() {
        let json: Value = serde_json::from_str(include_str!(
            "../../user-frontend/user-client/data/response.json"
        ))
        .unwrap();
        let users = normalize_users(json);
        assert_eq!(ids(&users), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(users[2].age, None);
    }

    #[test]
    fn single_object_without_id_is_kept() {
        let users = normalize_users(json!({"name": "Solo", "age": 30}));
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, None);
        assert_eq!(users[0].name.as_deref(), Some("Solo"));
        assert_eq!(users[0].age, Some(30.0));
    }

    #[test]
    fn string_and_float_ids_are_kept() {
        let users = normalize_users(json!([{"id": "7", "name": "A"}, {"id": 8.0, "name": "B"}]));
        assert_eq!(ids(&users), vec![Some(7), Some(8)]);
    }

    #[test]
    fn every_array_entry_becomes_a_user() {
        let users = normalize_users(json!([{"id": 1}, {"name": 5}, "junk", {"id": 2}]));
        assert_eq!(ids(&users), vec![Some(1), None, None, Some(2)]);
        assert_eq!(users[1].name, None);
        assert_eq!(users[2], User::default());
        assert_eq!(normalize_users(json!({"error": "nope"})).len(), 1);
    }
}
