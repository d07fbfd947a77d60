/// Универсальные утилиты для работы со списками (поиск, фильтры, сортировка)
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Value of one orderable field
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Missing,
    Text(String),
    Number(f64),
    DateTime(DateTime<Utc>),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) => 2,
            SortValue::DateTime(_) => 3,
        }
    }

    /// Text is compared case-sensitively; `Missing` sorts first
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::DateTime(a), SortValue::DateTime(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<&str> for SortValue {
    fn from(v: &str) -> Self {
        SortValue::Text(v.to_string())
    }
}

impl From<Option<DateTime<Utc>>> for SortValue {
    fn from(v: Option<DateTime<Utc>>) -> Self {
        v.map(SortValue::DateTime).unwrap_or(SortValue::Missing)
    }
}

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Fields scanned by the free-text search
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field; a blank filter matches
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.trim().is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Trait для типов данных с фильтрами по равенству (статус, роль, проект)
pub trait Filterable {
    /// Value of the named filter field, `None` when the item has no such field
    fn filter_value(&self, name: &str) -> Option<String>;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    fn sort_value(&self, field: &str) -> SortValue;

    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        self.sort_value(field).compare(&other.sort_value(field))
    }
}

/// Row type usable by [`super::list_view::ListViewController`]
pub trait ListItem: Searchable + Filterable + Sortable + Clone {
    type Id: PartialEq;

    fn item_id(&self) -> Self::Id;
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the indicator span
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        size: f64,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }
    }

    impl Sortable for Row {
        fn sort_value(&self, field: &str) -> SortValue {
            match field {
                "size" => SortValue::Number(self.size),
                "name" => SortValue::from(self.name),
                _ => SortValue::Missing,
            }
        }
    }

    #[test]
    fn test_text_compare_is_case_sensitive() {
        let upper = SortValue::from("Zeta");
        let lower = SortValue::from("alpha");
        assert_eq!(upper.compare(&lower), Ordering::Less);
    }

    #[test]
    fn test_dates_compare_by_instant() {
        let early = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(
            SortValue::DateTime(early).compare(&SortValue::DateTime(late)),
            Ordering::Less
        );
        assert_eq!(SortValue::Missing.compare(&SortValue::from(Some(early))), Ordering::Less);
    }

    #[test]
    fn test_matches_filter_ignores_case_and_blank_filter() {
        let row = Row { name: "Alpha", size: 1.0 };
        assert!(row.matches_filter("ALP"));
        assert!(row.matches_filter("   "));
        assert!(!row.matches_filter("beta"));
    }

    #[test]
    fn test_matches_filter_keeps_surrounding_spaces() {
        let row = Row { name: "Alphabet", size: 1.0 };
        assert!(row.matches_filter("alpha"));
        assert!(!row.matches_filter("alpha "));
        assert!(!row.matches_filter(" alpha"));
    }

    #[test]
    fn test_compare_by_field_missing_first() {
        let a = Row { name: "a", size: 2.0 };
        let b = Row { name: "b", size: 1.0 };
        assert_eq!(a.compare_by_field(&b, "size"), Ordering::Greater);
        assert_eq!(a.compare_by_field(&b, "unknown"), Ordering::Equal);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("size", "name", true), " ⇅");
    }
}
