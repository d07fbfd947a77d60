use contracts::domain::a004_assignment::aggregate::{Assignment, AssignmentRole};
use contracts::domain::common::{EntityId, WorkflowStatus};
use leptos::prelude::*;

use crate::shared::list_utils::{Filterable, ListItem, Searchable, SortValue, Sortable};
use crate::shared::list_view::{ListViewController, SortDirection};

pub const FILTER_STATUS: &str = "status";
pub const FILTER_ROLE: &str = "role";

impl Searchable for Assignment {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.target_language.as_str()];
        if let Some(name) = self.project_name.as_deref() {
            fields.push(name);
        }
        fields
    }
}

impl Filterable for Assignment {
    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            FILTER_STATUS => Some(self.status.as_str().to_string()),
            FILTER_ROLE => Some(self.role.as_str().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Assignment {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "due_date" => SortValue::from(self.due_date),
            "project" => self
                .project_name
                .as_deref()
                .map(SortValue::from)
                .unwrap_or(SortValue::Missing),
            "status" => SortValue::from(self.status.as_str()),
            _ => SortValue::Missing,
        }
    }
}

impl ListItem for Assignment {
    type Id = EntityId;

    fn item_id(&self) -> EntityId {
        self.id
    }
}

pub fn create_state() -> RwSignal<ListViewController<Assignment>> {
    RwSignal::new(ListViewController::default().with_sort("due_date", SortDirection::Ascending))
}

/// Page that works on an assignment: the translation session for
/// translators, the project review page for reviewers and approvers
pub fn work_href(assignment: &Assignment) -> String {
    match assignment.role {
        AssignmentRole::Translator => format!("/assignments/{}/translate", assignment.id),
        AssignmentRole::Reviewer | AssignmentRole::Approver => {
            format!("/projects/{}/review", assignment.project_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a004_assignment::aggregate::AssignmentStatus;

    fn assignment(id: EntityId, role: AssignmentRole, due_day: Option<u32>) -> Assignment {
        Assignment {
            id,
            user_id: 5,
            project_id: 70 + id,
            target_language: "ar".to_string(),
            role,
            status: AssignmentStatus::Pending,
            due_date: due_day.map(|d| Utc.with_ymd_and_hms(2024, 6, d, 0, 0, 0).unwrap()),
            project_name: Some(format!("Project {}", id)),
        }
    }

    #[test]
    fn test_missing_due_date_sorts_first() {
        let mut list: ListViewController<Assignment> =
            ListViewController::default().with_sort("due_date", SortDirection::Ascending);
        list.set_items(vec![
            assignment(1, AssignmentRole::Translator, Some(20)),
            assignment(2, AssignmentRole::Translator, None),
            assignment(3, AssignmentRole::Reviewer, Some(3)),
        ]);
        let ids: Vec<_> = list.visible().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        list.set_equality_filter(FILTER_ROLE, "Reviewer");
        let ids: Vec<_> = list.visible().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_work_href_depends_on_role() {
        assert_eq!(
            work_href(&assignment(1, AssignmentRole::Translator, None)),
            "/assignments/1/translate"
        );
        assert_eq!(
            work_href(&assignment(3, AssignmentRole::Approver, None)),
            "/projects/73/review"
        );
    }
}
