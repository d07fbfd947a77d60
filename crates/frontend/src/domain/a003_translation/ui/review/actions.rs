use contracts::domain::a003_translation::aggregate::TranslationStatus;
use contracts::domain::common::WorkflowStatus;
use contracts::enums::UserRole;

/// A status change offered on the review page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewAction {
    pub label: &'static str,
    pub target: TranslationStatus,
}

const APPROVE: ReviewAction = ReviewAction {
    label: "Approve",
    target: TranslationStatus::Approved,
};
const REJECT: ReviewAction = ReviewAction {
    label: "Reject",
    target: TranslationStatus::Rejected,
};
const COMPLETE: ReviewAction = ReviewAction {
    label: "Complete",
    target: TranslationStatus::Completed,
};

/// Actions `role` may take on a translation in `status`.
///
/// Reviewers approve or reject; supervisors and managers also complete
/// approved work. Every action must be allowed by the status table.
pub fn review_actions(role: UserRole, status: TranslationStatus) -> Vec<ReviewAction> {
    let offered: &[ReviewAction] = match role {
        UserRole::Reviewer => &[APPROVE, REJECT],
        UserRole::Supervisor | UserRole::Manager => &[APPROVE, REJECT, COMPLETE],
        UserRole::DataEntry | UserRole::Translator => &[],
    };
    offered
        .iter()
        .copied()
        .filter(|a| status.can_transition_to(a.target))
        .collect()
}
