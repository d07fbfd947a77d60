use contracts::domain::a002_paragraph::aggregate::Paragraph;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

use crate::shared::list_utils::{Filterable, ListItem, Searchable, SortValue, Sortable};
use crate::shared::list_view::{ListViewController, SortDirection};

pub const FILTER_TYPE: &str = "type";

impl Searchable for Paragraph {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.original_text.as_str()]
    }
}

impl Filterable for Paragraph {
    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            FILTER_TYPE => Some(self.paragraph_type.as_str().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Paragraph {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "position" => SortValue::Number(self.position as f64),
            "word_count" => SortValue::Number(self.computed_word_count() as f64),
            "type" => SortValue::from(self.paragraph_type.as_str()),
            _ => SortValue::Missing,
        }
    }
}

impl ListItem for Paragraph {
    type Id = EntityId;

    fn item_id(&self) -> EntityId {
        self.id
    }
}

pub fn create_state() -> RwSignal<ListViewController<Paragraph>> {
    RwSignal::new(ListViewController::default().with_sort("position", SortDirection::Ascending))
}

/// Highest position in the whole project, used to number appended blocks
pub fn last_position(paragraphs: &[Paragraph]) -> u32 {
    paragraphs.iter().map(|p| p.position).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_paragraph::aggregate::ParagraphType;

    fn paragraph(id: EntityId, position: u32, text: &str, kind: ParagraphType) -> Paragraph {
        Paragraph {
            id,
            project_id: 3,
            original_text: text.to_string(),
            paragraph_type: kind,
            position,
            word_count: 0,
            translations: Vec::new(),
        }
    }

    fn sample() -> Vec<Paragraph> {
        vec![
            paragraph(1, 2, "Second paragraph of the body", ParagraphType::Body),
            paragraph(2, 1, "Annual Report", ParagraphType::Title),
            paragraph(3, 5, "Closing words", ParagraphType::Body),
        ]
    }

    #[test]
    fn test_sorted_by_position_and_word_count() {
        let mut list: ListViewController<Paragraph> =
            ListViewController::default().with_sort("position", SortDirection::Ascending);
        list.set_items(sample());
        let ids: Vec<_> = list.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        list.set_sort("word_count", SortDirection::Descending);
        let ids: Vec<_> = list.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_type_filter_and_delete() {
        let mut list: ListViewController<Paragraph> = ListViewController::new(10);
        list.set_items(sample());
        list.set_equality_filter(FILTER_TYPE, "Body");
        assert_eq!(list.total_count(), 2);

        list.remove_item(&3);
        assert_eq!(list.total_count(), 1);
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn test_last_position_ignores_filters() {
        assert_eq!(last_position(&sample()), 5);
        assert_eq!(last_position(&[]), 0);
    }
}
