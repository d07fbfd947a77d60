use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, WorkflowStatus};

/// Статус проекта перевода
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    #[default]
    Draft,
    Active,
    InReview,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub fn all() -> [ProjectStatus; 5] {
        [
            ProjectStatus::Draft,
            ProjectStatus::Active,
            ProjectStatus::InReview,
            ProjectStatus::Completed,
            ProjectStatus::Archived,
        ]
    }
}

impl WorkflowStatus for ProjectStatus {
    fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Active => "Active",
            ProjectStatus::InReview => "InReview",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Archived => "Archived",
        }
    }

    fn allowed_transitions(&self) -> &'static [Self] {
        use ProjectStatus::*;
        match self {
            Draft => &[Active, Archived],
            Active => &[InReview, Archived],
            InReview => &[Active, Completed],
            Completed => &[Archived],
            Archived => &[],
        }
    }
}

/// Проект перевода: исходный текст, языковая пара и ответственный рецензент
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub source_language: String,
    pub target_language: String,
    #[serde(default)]
    pub status: ProjectStatus,
    /// User notified when a translator submits work on this project
    #[serde(default)]
    pub reviewer_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": 7,
            "name": "Annual report",
            "sourceLanguage": "en",
            "targetLanguage": "ar",
            "status": "Active",
            "reviewerId": 12,
            "createdAt": "2024-03-15T14:02:26Z"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 7);
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.reviewer_id, Some(12));
        assert!(project.deadline.is_none());
        assert!(project.description.is_none());
    }

    #[test]
    fn test_archived_is_terminal() {
        assert!(ProjectStatus::Archived.is_terminal());
        assert!(ProjectStatus::InReview.can_transition_to(ProjectStatus::Active));
        assert!(!ProjectStatus::Draft.can_transition_to(ProjectStatus::Completed));
    }
}
