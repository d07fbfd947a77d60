use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, WorkflowStatus};

/// Роль исполнителя в назначении
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AssignmentRole {
    #[default]
    Translator,
    Reviewer,
    Approver,
}

impl AssignmentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentRole::Translator => "Translator",
            AssignmentRole::Reviewer => "Reviewer",
            AssignmentRole::Approver => "Approver",
        }
    }

    pub fn all() -> [AssignmentRole; 3] {
        [
            AssignmentRole::Translator,
            AssignmentRole::Reviewer,
            AssignmentRole::Approver,
        ]
    }
}

/// Статус назначения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AssignmentStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl AssignmentStatus {
    pub fn all() -> [AssignmentStatus; 4] {
        [
            AssignmentStatus::Pending,
            AssignmentStatus::InProgress,
            AssignmentStatus::Completed,
            AssignmentStatus::Cancelled,
        ]
    }
}

impl WorkflowStatus for AssignmentStatus {
    fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "Pending",
            AssignmentStatus::InProgress => "InProgress",
            AssignmentStatus::Completed => "Completed",
            AssignmentStatus::Cancelled => "Cancelled",
        }
    }

    fn allowed_transitions(&self) -> &'static [Self] {
        use AssignmentStatus::*;
        match self {
            Pending => &[InProgress, Completed, Cancelled],
            InProgress => &[Completed, Cancelled],
            Completed => &[],
            Cancelled => &[],
        }
    }
}

/// One person's duty on a project: (user, project, target language, role)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: EntityId,
    pub user_id: EntityId,
    pub project_id: EntityId,
    pub target_language: String,
    #[serde(default)]
    pub role: AssignmentRole,
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Denormalized by the backend for list views
    #[serde(default)]
    pub project_name: Option<String>,
}
