use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::UserRole;

/// Участник команды (GET /Users)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_defaults() {
        let json = r#"{"id":1,"username":"amal","role":"Reviewer"}"#;
        let m: TeamMember = serde_json::from_str(json).unwrap();
        assert!(m.is_active);
        assert!(m.languages.is_empty());
        assert_eq!(m.role, UserRole::Reviewer);
    }
}
