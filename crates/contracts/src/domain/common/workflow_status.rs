use thiserror::Error;

/// Запрещённый переход статуса
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("status cannot change from {from} to {to}")]
pub struct StatusTransitionError {
    pub from: &'static str,
    pub to: &'static str,
}

/// Трейт для статусов с явной таблицей переходов.
///
/// The table returned by [`WorkflowStatus::allowed_transitions`] is the only
/// source of truth; callers check it at the controller boundary instead of
/// comparing status strings in views.
pub trait WorkflowStatus: Copy + PartialEq + std::fmt::Debug + 'static {
    /// Wire name of the status
    fn as_str(&self) -> &'static str;

    /// Statuses reachable from `self` in one step
    fn allowed_transitions(&self) -> &'static [Self];

    fn can_transition_to(&self, next: Self) -> bool {
        self.allowed_transitions().contains(&next)
    }

    fn transition(&self, next: Self) -> Result<Self, StatusTransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(StatusTransitionError {
                from: self.as_str(),
                to: next.as_str(),
            })
        }
    }

    fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}
