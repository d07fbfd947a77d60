//! Single place that maps a workflow status string to a badge.
//!
//! Every page renders statuses through [`classify_status`], so the label and
//! colour of e.g. `Submitted` are identical in assignment, review and project
//! lists.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Neutral,
    Info,
    Warning,
    Success,
    Error,
}

impl Severity {
    /// BEM modifier of the `badge` block
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Neutral => "badge--neutral",
            Severity::Info => "badge--primary",
            Severity::Warning => "badge--warning",
            Severity::Success => "badge--success",
            Severity::Error => "badge--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub label: String,
    pub severity: Severity,
}

impl StatusBadge {
    fn new(label: &str, severity: Severity) -> Self {
        Self {
            label: label.to_string(),
            severity,
        }
    }
}

/// Classifies translation, assignment and project statuses.
///
/// Matching ignores case, spaces, `_` and `-`, so `"InProgress"`,
/// `"in_progress"` and `"In progress"` are the same status. Unknown values
/// keep their raw text with [`Severity::Neutral`].
pub fn classify_status(status: &str) -> StatusBadge {
    let normalized: String = status
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect();

    match normalized.as_str() {
        "draft" => StatusBadge::new("Draft", Severity::Neutral),
        "pending" => StatusBadge::new("Pending", Severity::Neutral),
        "inprogress" => StatusBadge::new("In progress", Severity::Info),
        "active" => StatusBadge::new("Active", Severity::Info),
        "submitted" => StatusBadge::new("Submitted", Severity::Warning),
        "inreview" => StatusBadge::new("In review", Severity::Warning),
        "approved" => StatusBadge::new("Approved", Severity::Success),
        "completed" => StatusBadge::new("Completed", Severity::Success),
        "rejected" => StatusBadge::new("Rejected", Severity::Error),
        "cancelled" | "canceled" => StatusBadge::new("Cancelled", Severity::Error),
        "archived" => StatusBadge::new("Archived", Severity::Neutral),
        _ => StatusBadge::new(status.trim(), Severity::Neutral),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_translation::aggregate::TranslationStatus;
    use crate::domain::common::WorkflowStatus;

    #[test]
    fn test_spelling_variants() {
        assert_eq!(classify_status("InProgress"), classify_status("in_progress"));
        assert_eq!(classify_status("In progress").severity, Severity::Info);
        assert_eq!(classify_status("canceled").label, "Cancelled");
    }

    #[test]
    fn test_every_translation_status_is_known() {
        for status in TranslationStatus::all() {
            let badge = classify_status(status.as_str());
            assert_ne!(badge.label, "", "{:?}", status);
        }
        assert_eq!(classify_status("Rejected").severity, Severity::Error);
        assert_eq!(classify_status("Approved").severity.css_class(), "badge--success");
    }

    #[test]
    fn test_unknown_status_is_neutral() {
        let badge = classify_status(" OnHold ");
        assert_eq!(badge.label, "OnHold");
        assert_eq!(badge.severity, Severity::Neutral);
    }
}
