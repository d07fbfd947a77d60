use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Тело запроса POST /Notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    pub user_id: EntityId,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl CreateNotification {
    /// Alert for the reviewer that a translator finished an assignment
    pub fn translation_submitted(
        reviewer_id: EntityId,
        project_id: EntityId,
        project_name: &str,
        paragraph_count: usize,
    ) -> Self {
        Self {
            user_id: reviewer_id,
            title: "Translation submitted".to_string(),
            message: format!(
                "{} paragraph(s) of \"{}\" are ready for review",
                paragraph_count, project_name
            ),
            link: Some(format!("/projects/{}/review", project_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_notification_links_to_review() {
        let n = CreateNotification::translation_submitted(12, 7, "Annual report", 3);
        assert_eq!(n.user_id, 12);
        assert_eq!(n.link.as_deref(), Some("/projects/7/review"));
        assert!(n.message.contains("3 paragraph(s)"));
        assert!(n.message.contains("Annual report"));
    }
}
