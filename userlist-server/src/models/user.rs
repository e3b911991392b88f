//! User record and name validation

use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// A row of the `users` table.
///
/// `id` is assigned by the store (SERIAL in Postgres) and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
}

/// Body of `GET /api/users`
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// Validated user name.
///
/// The only rule is non-emptiness; names are not unique and are stored as
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name.
    ///
    /// # Example
    /// ```
    /// use userlist_server::models::UserName;
    ///
    /// assert!(UserName::new("Ada").is_ok());
    /// assert!(UserName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_non_empty_name() {
        assert_eq!(UserName::new("Ada").unwrap().as_str(), "Ada");
        assert_eq!(UserName::new("  ").unwrap().as_str(), "  ");
        assert!(UserName::new("<b>bold</b>").is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = UserName::new("").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn empty_users_serialize_as_array() {
        let body = serde_json::to_string(&UsersResponse { users: Vec::new() }).unwrap();
        assert_eq!(body, r#"{"users":[]}"#);
    }

    #[test]
    fn user_serializes_id_and_name() {
        let body = serde_json::to_value(User {
            id: 3,
            name: "Grace".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"id": 3, "name": "Grace"}));
    }
}
