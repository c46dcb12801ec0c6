use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Credential record. Not part of the scoring domain; consumed by the auth
/// gate and listed read-mostly in the admin console.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: String,
    pub last_login_at: Option<DateTime<Utc>>,
    pub current_login_at: Option<DateTime<Utc>>,
    pub last_login_ip: Option<String>,
    pub current_login_ip: Option<String>,
    pub login_count: i32,
    pub active: bool,
    #[serde(skip_serializing)]
    pub fs_uniquifier: String,
    pub confirmed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Admin-console edits to a user: contact fields and the active flag only
#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub username: Option<String>,
    pub active: Option<bool>,
}

impl UserPatch {
    pub fn apply(&self, user: &mut User) {
        if let Some(v) = &self.email {
            user.email = v.clone();
        }
        if let Some(v) = &self.username {
            user.username = Some(v.clone());
        }
        if let Some(v) = self.active {
            user.active = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_and_uniquifier_never_serialize() {
        let user = User {
            id: Uuid::new_v4(),
            email: "golfer@example.com".to_string(),
            username: None,
            password: "$2b$12$secret-hash".to_string(),
            last_login_at: None,
            current_login_at: None,
            last_login_ip: None,
            current_login_ip: None,
            login_count: 0,
            active: true,
            fs_uniquifier: "uniq".to_string(),
            confirmed_at: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("fs_uniquifier").is_none());
        assert_eq!(json["email"], "golfer@example.com");
    }
}
