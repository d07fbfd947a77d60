use serde::{Deserialize, Serialize};

/// Роль пользователя в системе перевода
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserRole {
    DataEntry,
    #[default]
    Translator,
    Reviewer,
    Supervisor,
    Manager,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::DataEntry => "DataEntry",
            UserRole::Translator => "Translator",
            UserRole::Reviewer => "Reviewer",
            UserRole::Supervisor => "Supervisor",
            UserRole::Manager => "Manager",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::DataEntry => "Data entry",
            UserRole::Translator => "Translator",
            UserRole::Reviewer => "Reviewer",
            UserRole::Supervisor => "Supervisor",
            UserRole::Manager => "Manager",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::DataEntry,
            UserRole::Translator,
            UserRole::Reviewer,
            UserRole::Supervisor,
            UserRole::Manager,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        UserRole::all().into_iter().find(|r| r.code() == code)
    }

    /// Supervisors and managers see every project and the team list
    pub fn oversees_projects(&self) -> bool {
        matches!(self, UserRole::Supervisor | UserRole::Manager)
    }

    /// Data entry staff (and overseers) maintain source paragraphs
    pub fn edits_paragraphs(&self) -> bool {
        matches!(self, UserRole::DataEntry) || self.oversees_projects()
    }

    /// Translators and reviewers work from personal assignments
    pub fn has_assignments(&self) -> bool {
        matches!(self, UserRole::Translator | UserRole::Reviewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrips_known_roles() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
        assert_eq!(UserRole::from_code("Admin"), None);
    }

    #[test]
    fn test_permissions() {
        assert!(UserRole::DataEntry.edits_paragraphs());
        assert!(!UserRole::Translator.edits_paragraphs());
        assert!(UserRole::Manager.oversees_projects());
        assert!(UserRole::Reviewer.has_assignments());
        assert!(!UserRole::Manager.has_assignments());
    }
}
