use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::common::{EntityId, WorkflowStatus};
use leptos::prelude::*;

use crate::shared::list_utils::{Filterable, ListItem, Searchable, SortValue, Sortable};
use crate::shared::list_view::{ListViewController, SortDirection};

pub const FILTER_STATUS: &str = "status";

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(description) = self.description.as_deref() {
            fields.push(description);
        }
        fields
    }
}

impl Filterable for Project {
    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            FILTER_STATUS => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Project {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::from(self.name.as_str()),
            "created_at" => SortValue::DateTime(self.created_at),
            "deadline" => SortValue::from(self.deadline),
            "status" => SortValue::from(self.status.as_str()),
            _ => SortValue::Missing,
        }
    }
}

impl ListItem for Project {
    type Id = EntityId;

    fn item_id(&self) -> EntityId {
        self.id
    }
}

pub fn create_state() -> RwSignal<ListViewController<Project>> {
    RwSignal::new(ListViewController::default().with_sort("created_at", SortDirection::Descending))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_project::aggregate::ProjectStatus;

    fn project(id: EntityId, name: &str, description: Option<&str>, day: u32) -> Project {
        Project {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            source_language: "en".to_string(),
            target_language: "ar".to_string(),
            status: if id % 2 == 0 {
                ProjectStatus::Active
            } else {
                ProjectStatus::Draft
            },
            reviewer_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 8, 0, 0).unwrap(),
            deadline: None,
        }
    }

    #[test]
    fn test_search_covers_description() {
        let mut list: ListViewController<Project> = ListViewController::new(10);
        list.set_items(vec![
            project(1, "Annual report", None, 1),
            project(2, "Brochure", Some("Marketing brochure for the spring fair"), 2),
        ]);
        list.set_search_term("SPRING");
        let ids: Vec<_> = list.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_default_order_is_newest_first_and_status_filter() {
        let mut list: ListViewController<Project> =
            ListViewController::default().with_sort("created_at", SortDirection::Descending);
        list.set_items(vec![
            project(1, "A", None, 1),
            project(2, "B", None, 5),
            project(4, "C", None, 3),
        ]);
        let ids: Vec<_> = list.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1]);

        list.set_equality_filter(FILTER_STATUS, "Active");
        assert_eq!(list.total_count(), 2);
        assert_eq!(list.distinct_values(FILTER_STATUS), vec!["Active", "Draft"]);
    }
}
