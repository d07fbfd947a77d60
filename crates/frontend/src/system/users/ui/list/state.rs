use contracts::domain::common::EntityId;
use contracts::system::users::TeamMember;
use leptos::prelude::*;

use crate::shared::list_utils::{Filterable, ListItem, Searchable, SortValue, Sortable};
use crate::shared::list_view::{ListViewController, SortDirection};

pub const FILTER_ROLE: &str = "role";
pub const FILTER_ACTIVE: &str = "active";

pub fn active_label(is_active: bool) -> &'static str {
    if is_active {
        "Active"
    } else {
        "Blocked"
    }
}

impl Searchable for TeamMember {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.username.as_str()];
        fields.extend(self.full_name.as_deref());
        fields.extend(self.email.as_deref());
        fields
    }
}

impl Filterable for TeamMember {
    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            FILTER_ROLE => Some(self.role.code().to_string()),
            FILTER_ACTIVE => Some(active_label(self.is_active).to_string()),
            _ => None,
        }
    }
}

impl Sortable for TeamMember {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "username" => SortValue::from(self.username.as_str()),
            "full_name" => self
                .full_name
                .as_deref()
                .map(SortValue::from)
                .unwrap_or(SortValue::Missing),
            "role" => SortValue::from(self.role.code()),
            "created_at" => SortValue::from(self.created_at),
            _ => SortValue::Missing,
        }
    }
}

impl ListItem for TeamMember {
    type Id = EntityId;

    fn item_id(&self) -> EntityId {
        self.id
    }
}

pub fn create_state() -> RwSignal<ListViewController<TeamMember>> {
    RwSignal::new(ListViewController::default().with_sort("username", SortDirection::Ascending))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::UserRole;

    fn member(id: EntityId, username: &str, email: Option<&str>, role: UserRole) -> TeamMember {
        TeamMember {
            id,
            username: username.to_string(),
            full_name: None,
            email: email.map(str::to_string),
            role,
            is_active: id != 3,
            languages: vec!["ar".to_string()],
            created_at: None,
        }
    }

    #[test]
    fn test_search_by_email_and_filter_by_role() {
        let mut list: ListViewController<TeamMember> = ListViewController::new(10);
        list.set_items(vec![
            member(1, "amal", Some("amal@example.org"), UserRole::Translator),
            member(2, "omar", Some("omar@example.org"), UserRole::Reviewer),
            member(3, "sara", None, UserRole::Translator),
        ]);

        list.set_search_term("OMAR@");
        assert_eq!(list.visible().len(), 1);

        list.set_search_term("");
        list.set_equality_filter(FILTER_ROLE, "Translator");
        assert_eq!(list.total_count(), 2);
        list.set_equality_filter(FILTER_ACTIVE, "Blocked");
        let ids: Vec<_> = list.visible().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3]);
    }
}
