use serde::{Deserialize, Serialize};

/// A user record as stored and as sent over the wire.
///
/// Every field defaults to an empty string, so `{}` decodes to a blank user.
/// The `id` in a request body is never trusted; the store assigns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let user: User = serde_json::from_str(r#"{"username":"ana"}"#).unwrap();
        assert_eq!(user.username, "ana");
        assert!(user.id.is_empty());
        assert!(user.email.is_empty());
    }

    #[test]
    fn test_empty_user_serializes_all_fields() {
        let json = serde_json::to_value(User::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "", "username": "", "email": "" }));
    }
}
