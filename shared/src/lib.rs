use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SYSTEM_ADMIN_ROLE: &str = "system_admin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub roles: String, // space separated, e.g. "system_user system_admin"
    #[serde(default)]
    pub last_picture_update: i64,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub update_at: Option<DateTime<Utc>>,
}

impl User {
    /// "First Last", falling back to whichever half is set.
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    pub fn is_system_admin(&self) -> bool {
        self.roles.split_whitespace().any(|role| role == SYSTEM_ADMIN_ROLE)
    }

    pub fn display_position(&self) -> Option<&str> {
        self.position.as_deref().filter(|p| !p.is_empty())
    }
}

/// Presence of a user as reported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Online,
    Away,
    #[serde(rename = "dnd")]
    DoNotDisturb,
    #[default]
    #[serde(other)]
    Offline,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Online => "online",
            UserStatus::Away => "away",
            UserStatus::DoNotDisturb => "dnd",
            UserStatus::Offline => "offline",
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, UserStatus::Offline)
    }
}

/// Flat string map of client-visible server settings.
///
/// Booleans travel as the strings `"true"` / `"false"`; anything other than
/// an exact `"true"` counts as disabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientConfig(HashMap<String, String>);

impl ClientConfig {
    pub const ENABLE_WEBRTC: &'static str = "EnableWebrtc";
    pub const SHOW_EMAIL_ADDRESS: &'static str = "ShowEmailAddress";
    pub const SITE_NAME: &'static str = "SiteName";

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_true(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    pub fn enable_webrtc(&self) -> bool {
        self.is_true(Self::ENABLE_WEBRTC)
    }

    pub fn show_email_address(&self) -> bool {
        self.is_true(Self::SHOW_EMAIL_ADDRESS)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

/// A one-on-one call the local viewer is engaged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSession {
    pub id: Uuid,
    pub peer_id: String,
    pub outgoing: bool,
    pub started_at: DateTime<Utc>,
}

impl CallSession {
    pub fn start(peer_id: impl Into<String>, outgoing: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            peer_id: peer_id.into(),
            outgoing,
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str) -> User {
        User {
            id: "u1".to_string(),
            username: "jdoe".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            nickname: String::new(),
            email: "jdoe@example.com".to_string(),
            position: None,
            roles: "system_user".to_string(),
            last_picture_update: 0,
            update_at: None,
        }
    }

    #[test]
    fn test_full_name_formats() {
        assert_eq!(user("Jane", "Doe").full_name(), "Jane Doe");
        assert_eq!(user("Jane", "").full_name(), "Jane");
        assert_eq!(user("", "Doe").full_name(), "Doe");
        assert_eq!(user("", "").full_name(), "");
    }

    #[test]
    fn test_system_admin_role() {
        let mut admin = user("Jane", "Doe");
        assert!(!admin.is_system_admin());

        admin.roles = "system_user system_admin".to_string();
        assert!(admin.is_system_admin());

        // Substring of another role must not count
        admin.roles = "system_admin_readonly".to_string();
        assert!(!admin.is_system_admin());
    }

    #[test]
    fn test_empty_position_is_absent() {
        let mut u = user("Jane", "Doe");
        u.position = Some(String::new());
        assert_eq!(u.display_position(), None);

        u.position = Some("Engineer".to_string());
        assert_eq!(u.display_position(), Some("Engineer"));
    }

    #[test]
    fn test_user_deserializes_server_payload() {
        let json = r#"{
            "id": "abc",
            "username": "jdoe",
            "first_name": "Jane",
            "email": "jdoe@example.com",
            "roles": "system_user",
            "update_at": 1480000000000
        }"#;

        let u: User = serde_json::from_str(json).unwrap();
        assert_eq!(u.id, "abc");
        assert_eq!(u.last_name, "");
        assert_eq!(u.position, None);
        assert_eq!(u.update_at.unwrap().timestamp_millis(), 1_480_000_000_000);
    }

    #[test]
    fn test_status_wire_format() {
        let statuses: Vec<UserStatus> =
            serde_json::from_str(r#"["online", "away", "dnd", "offline", "bogus"]"#).unwrap();
        assert_eq!(
            statuses,
            vec![
                UserStatus::Online,
                UserStatus::Away,
                UserStatus::DoNotDisturb,
                UserStatus::Offline,
                UserStatus::Offline,
            ]
        );
        assert_eq!(serde_json::to_string(&UserStatus::DoNotDisturb).unwrap(), "\"dnd\"");
        assert!(UserStatus::Offline.is_offline());
        assert!(!UserStatus::Away.is_offline());
    }

    #[test]
    fn test_client_config_flags() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"EnableWebrtc": "true", "ShowEmailAddress": "TRUE"}"#).unwrap();

        assert!(config.enable_webrtc());
        assert!(!config.show_email_address());
        assert!(!ClientConfig::default().enable_webrtc());
        assert_eq!(config.get(ClientConfig::SITE_NAME), None);
    }

    #[test]
    fn test_call_session_start() {
        let a = CallSession::start("peer", true);
        let b = CallSession::start("peer", true);

        assert_eq!(a.peer_id, "peer");
        assert!(a.outgoing);
        assert_ne!(a.id, b.id);
    }
}
