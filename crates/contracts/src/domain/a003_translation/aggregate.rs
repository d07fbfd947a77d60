use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, WorkflowStatus};
use crate::shared::text::count_words;

/// Статус перевода абзаца
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TranslationStatus {
    #[default]
    Draft,
    InProgress,
    Submitted,
    Approved,
    Rejected,
    Completed,
}

impl TranslationStatus {
    pub fn all() -> [TranslationStatus; 6] {
        [
            TranslationStatus::Draft,
            TranslationStatus::InProgress,
            TranslationStatus::Submitted,
            TranslationStatus::Approved,
            TranslationStatus::Rejected,
            TranslationStatus::Completed,
        ]
    }

    /// The translator may still change the text
    pub fn is_editable(&self) -> bool {
        self.can_transition_to(TranslationStatus::Draft)
    }
}

impl WorkflowStatus for TranslationStatus {
    fn as_str(&self) -> &'static str {
        match self {
            TranslationStatus::Draft => "Draft",
            TranslationStatus::InProgress => "InProgress",
            TranslationStatus::Submitted => "Submitted",
            TranslationStatus::Approved => "Approved",
            TranslationStatus::Rejected => "Rejected",
            TranslationStatus::Completed => "Completed",
        }
    }

    fn allowed_transitions(&self) -> &'static [Self] {
        use TranslationStatus::*;
        match self {
            Draft => &[Draft, InProgress, Submitted],
            InProgress => &[Draft, InProgress, Submitted],
            Submitted => &[Approved, Rejected],
            Rejected => &[Draft, InProgress, Submitted],
            Approved => &[Completed, Rejected],
            Completed => &[],
        }
    }
}

impl std::fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Перевод абзаца, выполненный в рамках одного назначения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub id: EntityId,
    pub paragraph_id: EntityId,
    pub assignment_id: EntityId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub status: TranslationStatus,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Тело запроса POST /Translations и PUT /Translations/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationUpsert {
    pub paragraph_id: EntityId,
    pub assignment_id: EntityId,
    pub text: String,
    pub status: TranslationStatus,
    pub word_count: usize,
}

impl TranslationUpsert {
    pub fn new(
        paragraph_id: EntityId,
        assignment_id: EntityId,
        text: String,
        status: TranslationStatus,
    ) -> Self {
        let word_count = count_words(&text);
        Self {
            paragraph_id,
            assignment_id,
            text,
            status,
            word_count,
        }
    }

    /// Same text and links as `translation`, moved to `status`
    pub fn with_status(translation: &Translation, status: TranslationStatus) -> Self {
        Self::new(
            translation.paragraph_id,
            translation.assignment_id,
            translation.text.clone(),
            status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_can_be_saved_again_and_submitted() {
        assert!(TranslationStatus::Draft.can_transition_to(TranslationStatus::Draft));
        assert!(TranslationStatus::Draft.can_transition_to(TranslationStatus::Submitted));
        assert!(!TranslationStatus::Draft.can_transition_to(TranslationStatus::Approved));
    }

    #[test]
    fn test_submitted_is_locked_for_translator() {
        let err = TranslationStatus::Submitted
            .transition(TranslationStatus::Draft)
            .unwrap_err();
        assert_eq!(err.from, "Submitted");
        assert_eq!(err.to, "Draft");
        assert!(!TranslationStatus::Submitted.is_editable());
        assert!(TranslationStatus::Rejected.is_editable());
    }

    #[test]
    fn test_completed_is_terminal() {
        assert!(TranslationStatus::Completed.is_terminal());
        for status in TranslationStatus::all() {
            assert!(!TranslationStatus::Completed.can_transition_to(status));
        }
    }

    #[test]
    fn test_upsert_wire_format() {
        let body = TranslationUpsert::new(3, 9, "مرحبا بالعالم".to_string(), TranslationStatus::Submitted);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["paragraphId"], 3);
        assert_eq!(json["assignmentId"], 9);
        assert_eq!(json["status"], "Submitted");
        assert_eq!(json["wordCount"], 2);
    }
}
