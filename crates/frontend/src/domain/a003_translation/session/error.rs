use contracts::domain::common::StatusTransitionError;
use thiserror::Error;

use crate::shared::api_client::ApiError;

/// Ошибки сессии перевода
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session is not loaded")]
    NotLoaded,
    #[error("Paragraph {} has no translation text", human_index(.index))]
    EmptyText { index: usize },
    #[error("Cannot submit: {}", incomplete_label(.missing))]
    Incomplete { missing: usize },
    #[error("Nothing to submit: the project has no paragraphs")]
    NothingToSubmit,
    #[error("Paragraph {} is still being saved", human_index(.index))]
    UpsertInFlight { index: usize },
    #[error("The session was reloaded before paragraph {} was saved", human_index(.index))]
    Reloaded { index: usize },
    #[error("No paragraph number {}", human_index(.index))]
    IndexOutOfRange { index: usize },
    #[error(transparent)]
    Transition(#[from] StatusTransitionError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

fn human_index(index: &usize) -> usize {
    index + 1
}

fn incomplete_label(missing: &usize) -> String {
    if *missing == 1 {
        "1 incomplete item".to_string()
    } else {
        format!("{} incomplete items", missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SessionError::Incomplete { missing: 1 }.to_string(),
            "Cannot submit: 1 incomplete item"
        );
        assert_eq!(
            SessionError::Incomplete { missing: 3 }.to_string(),
            "Cannot submit: 3 incomplete items"
        );
        assert_eq!(
            SessionError::EmptyText { index: 0 }.to_string(),
            "Paragraph 1 has no translation text"
        );
        let api: SessionError = ApiError::Rejected("Assignment is closed".to_string()).into();
        assert_eq!(api.to_string(), "Assignment is closed");
    }
}
