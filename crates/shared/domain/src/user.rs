//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// User domain entity.
///
/// A `User` always carries the id assigned by the store. The id never
/// changes after assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// Login name
    #[cfg_attr(feature = "openapi", schema(example = "alice"))]
    pub username: String,
    /// Contact email address
    #[cfg_attr(feature = "openapi", schema(example = "a@x.com"))]
    pub email: String,
}

impl User {
    pub fn new(id: i32, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
        }
    }

    /// Overwrite the mutable fields with the payload's values.
    ///
    /// The id is left untouched, including when the payload carries one.
    pub fn apply(&mut self, payload: UserPayload) {
        self.username = payload.username;
        self.email = payload.email;
    }
}

/// Request body for create and update.
///
/// Shares the `User` JSON shape. A client-sent `id` is accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserPayload {
    /// Ignored; the store owns id assignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[cfg_attr(feature = "openapi", schema(example = "alice"))]
    pub username: String,
    #[cfg_attr(feature = "openapi", schema(example = "a@x.com"))]
    pub email: String,
}

impl UserPayload {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
        }
    }
}

/// A user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl From<UserPayload> for NewUser {
    fn from(payload: UserPayload) -> Self {
        Self {
            username: payload.username,
            email: payload.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_id() {
        let mut user = User::new(7, "alice".to_string(), "a@x.com".to_string());
        let mut payload = UserPayload::new("bob", "b@x.com");
        payload.id = Some(99);

        user.apply(payload);

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "bob");
        assert_eq!(user.email, "b@x.com");
    }

    #[test]
    fn test_payload_id_is_optional() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"username":"alice","email":"a@x.com"}"#).unwrap();
        assert_eq!(payload.id, None);

        let payload: UserPayload =
            serde_json::from_str(r#"{"id":3,"username":"alice","email":"a@x.com"}"#).unwrap();
        assert_eq!(payload.id, Some(3));
    }

    #[test]
    fn test_payload_requires_fields() {
        let result = serde_json::from_str::<UserPayload>(r#"{"username":"alice"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_json_shape() {
        let user = User::new(1, "alice".to_string(), "a@x.com".to_string());
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "username": "alice", "email": "a@x.com"})
        );
    }

    #[test]
    fn test_new_user_from_payload_drops_id() {
        let mut payload = UserPayload::new("alice", "a@x.com");
        payload.id = Some(5);
        let new_user = NewUser::from(payload);
        assert_eq!(new_user.username, "alice");
        assert_eq!(new_user.email, "a@x.com");
    }
}
