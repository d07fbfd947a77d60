//! In-memory state of one translation session.
//!
//! Pure and synchronous: network calls are planned here as
//! [`UpsertRequest`]s, executed by the controller, and their results fed
//! back through [`TranslationSession::finish_upsert`]. Each item carries a
//! `pending` flag so a second upsert cannot start while one is in flight.

use std::collections::HashMap;

use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::a002_paragraph::aggregate::Paragraph;
use contracts::domain::a003_translation::aggregate::{
    Translation, TranslationStatus, TranslationUpsert,
};
use contracts::domain::a004_assignment::aggregate::{Assignment, AssignmentStatus};
use contracts::domain::common::{EntityId, WorkflowStatus};
use contracts::shared::text::count_words;

use super::error::SessionError;
use crate::shared::api_client::ApiError;

/// Lifecycle of one paragraph inside the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemState {
    /// Loaded and not edited since
    Untouched,
    /// Local text differs from what was last persisted
    Dirty,
    DraftPersisted,
    Submitted,
}

impl ItemState {
    pub fn label(&self) -> &'static str {
        match self {
            ItemState::Untouched => "Not started",
            ItemState::Dirty => "Unsaved changes",
            ItemState::DraftPersisted => "Draft saved",
            ItemState::Submitted => "Submitted",
        }
    }

    /// CSS modifier of the navigator chip
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ItemState::Untouched => "untouched",
            ItemState::Dirty => "dirty",
            ItemState::DraftPersisted => "saved",
            ItemState::Submitted => "submitted",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionItem {
    pub paragraph: Paragraph,
    pub text: String,
    pub translation_id: Option<EntityId>,
    /// Server status of the existing translation, if any
    pub status: Option<TranslationStatus>,
    pub state: ItemState,
    pub pending: bool,
}

impl SessionItem {
    fn new(paragraph: Paragraph, translation: Option<&Translation>) -> Self {
        match translation {
            Some(t) => Self {
                paragraph,
                text: t.text.clone(),
                translation_id: Some(t.id),
                status: Some(t.status),
                state: if t.status.is_editable() {
                    ItemState::DraftPersisted
                } else {
                    ItemState::Submitted
                },
                pending: false,
            },
            None => Self {
                paragraph,
                text: String::new(),
                translation_id: None,
                status: None,
                state: ItemState::Untouched,
                pending: false,
            },
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn word_count(&self) -> usize {
        count_words(&self.text)
    }

    /// The translator may still change this item
    pub fn is_editable(&self) -> bool {
        self.status.map_or(true, |s| s.is_editable())
    }

    fn check_transition(&self, next: TranslationStatus) -> Result<(), SessionError> {
        match self.status {
            Some(current) => current.transition(next).map(|_| ()).map_err(Into::into),
            None => Ok(()),
        }
    }
}

/// One planned create-or-update call
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertRequest {
    pub index: usize,
    /// `Some` → PUT /Translations/{id}, `None` → POST /Translations
    pub translation_id: Option<EntityId>,
    pub body: TranslationUpsert,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationSession {
    pub assignment: Assignment,
    pub project: Project,
    items: Vec<SessionItem>,
    current_index: usize,
}

impl TranslationSession {
    /// Merges paragraphs with the assignment's translations by paragraph id.
    ///
    /// Items are ordered by paragraph position. When several translations
    /// exist for one paragraph the last one wins (lists are most-recent-last).
    pub fn new(
        assignment: Assignment,
        project: Project,
        mut paragraphs: Vec<Paragraph>,
        translations: Vec<Translation>,
    ) -> Self {
        paragraphs.sort_by_key(|p| p.position);

        let mut by_paragraph: HashMap<EntityId, Translation> = HashMap::new();
        for t in translations
            .into_iter()
            .filter(|t| t.assignment_id == assignment.id)
        {
            by_paragraph.insert(t.paragraph_id, t);
        }

        let items = paragraphs
            .into_iter()
            .map(|p| {
                let translation = by_paragraph.get(&p.id);
                SessionItem::new(p, translation)
            })
            .collect();

        Self {
            assignment,
            project,
            items,
            current_index: 0,
        }
    }

    pub fn items(&self) -> &[SessionItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&SessionItem> {
        self.items.get(self.current_index)
    }

    pub fn item(&self, index: usize) -> Result<&SessionItem, SessionError> {
        self.items
            .get(index)
            .ok_or(SessionError::IndexOutOfRange { index })
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut SessionItem, SessionError> {
        self.items
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange { index })
    }

    /// Edits the current item in memory only
    pub fn set_current_text(&mut self, value: String) -> Result<(), SessionError> {
        let index = self.current_index;
        let item = self.item_mut(index)?;
        item.check_transition(TranslationStatus::Draft)?;
        if item.text != value {
            item.text = value;
            item.state = ItemState::Dirty;
        }
        Ok(())
    }

    pub fn go_next(&mut self) {
        self.jump_to(self.current_index.saturating_add(1));
    }

    pub fn go_previous(&mut self) {
        self.jump_to(self.current_index.saturating_sub(1));
    }

    /// Clamped to the valid range; no wraparound
    pub fn jump_to(&mut self, index: usize) {
        self.current_index = index.min(self.items.len().saturating_sub(1));
    }

    pub fn incomplete_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_blank()).count()
    }

    pub fn dirty_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.state == ItemState::Dirty)
            .count()
    }

    pub fn is_fully_submitted(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.state == ItemState::Submitted)
    }

    /// The current item, when it has unsaved non-empty text and nothing in flight
    pub fn autosave_candidate(&self) -> Option<usize> {
        self.current()
            .filter(|i| i.state == ItemState::Dirty && !i.pending && !i.is_blank())
            .map(|_| self.current_index)
    }

    fn plan(&self, index: usize, status: TranslationStatus) -> Result<UpsertRequest, SessionError> {
        let item = self.item(index)?;
        if item.pending {
            return Err(SessionError::UpsertInFlight { index });
        }
        if item.is_blank() {
            return Err(SessionError::EmptyText { index });
        }
        item.check_transition(status)?;

        Ok(UpsertRequest {
            index,
            translation_id: item.translation_id,
            body: TranslationUpsert::new(
                item.paragraph.id,
                self.assignment.id,
                item.text.clone(),
                status,
            ),
        })
    }

    /// Validates one item and marks it in flight
    pub fn begin_upsert(
        &mut self,
        index: usize,
        status: TranslationStatus,
    ) -> Result<UpsertRequest, SessionError> {
        let request = self.plan(index, status)?;
        self.item_mut(index)?.pending = true;
        Ok(request)
    }

    /// Validates every item and marks the ones not yet submitted in flight.
    ///
    /// Items already submitted (earlier attempt, or loaded that way) are
    /// skipped so a partially failed submit can be retried.
    ///
    /// Nothing is marked when any check fails, so a rejected submit leaves
    /// the session untouched.
    pub fn begin_submit(&mut self) -> Result<Vec<UpsertRequest>, SessionError> {
        if self.items.is_empty() {
            return Err(SessionError::NothingToSubmit);
        }
        let missing = self.incomplete_count();
        if missing > 0 {
            return Err(SessionError::Incomplete { missing });
        }
        self.assignment
            .status
            .transition(AssignmentStatus::Completed)?;

        let requests = (0..self.items.len())
            .filter(|&index| self.items[index].state != ItemState::Submitted)
            .map(|index| self.plan(index, TranslationStatus::Submitted))
            .collect::<Result<Vec<_>, _>>()?;
        for request in &requests {
            self.items[request.index].pending = true;
        }
        Ok(requests)
    }

    /// Records the outcome of a request started with `begin_upsert`/`begin_submit`.
    ///
    /// On success the returned id is kept so later saves update instead of
    /// creating again. Text typed while the request was in flight keeps the
    /// item dirty. Failures only clear the in-flight flag.
    pub fn finish_upsert(
        &mut self,
        request: &UpsertRequest,
        result: Result<Translation, ApiError>,
    ) -> Result<Translation, SessionError> {
        let item = self.item_mut(request.index)?;
        item.pending = false;

        let saved = result?;
        item.translation_id = Some(saved.id);
        item.status = Some(request.body.status);
        item.state = if request.body.status == TranslationStatus::Submitted {
            ItemState::Submitted
        } else if item.text == request.body.text {
            ItemState::DraftPersisted
        } else {
            ItemState::Dirty
        };
        Ok(saved)
    }

    /// Clears the in-flight flag of requests that will not be sent
    pub fn abandon(&mut self, requests: &[UpsertRequest]) {
        for request in requests {
            if let Some(item) = self.items.get_mut(request.index) {
                item.pending = false;
            }
        }
    }

    pub fn mark_assignment_completed(&mut self) {
        self.assignment.status = AssignmentStatus::Completed;
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;
    use contracts::domain::a001_project::aggregate::ProjectStatus;
    use contracts::domain::a002_paragraph::aggregate::ParagraphType;
    use contracts::domain::a004_assignment::aggregate::AssignmentRole;

    pub fn assignment(id: EntityId) -> Assignment {
        Assignment {
            id,
            user_id: 5,
            project_id: 7,
            target_language: "ar".to_string(),
            role: AssignmentRole::Translator,
            status: AssignmentStatus::InProgress,
            due_date: None,
            project_name: Some("Annual report".to_string()),
        }
    }

    pub fn project(reviewer_id: Option<EntityId>) -> Project {
        Project {
            id: 7,
            name: "Annual report".to_string(),
            description: None,
            source_language: "en".to_string(),
            target_language: "ar".to_string(),
            status: ProjectStatus::Active,
            reviewer_id,
            created_at: chrono::Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            deadline: None,
        }
    }

    pub fn paragraph(id: EntityId, position: u32, text: &str) -> Paragraph {
        Paragraph {
            id,
            project_id: 7,
            original_text: text.to_string(),
            paragraph_type: ParagraphType::Body,
            position,
            word_count: count_words(text),
            translations: Vec::new(),
        }
    }

    pub fn translation(
        id: EntityId,
        paragraph_id: EntityId,
        assignment_id: EntityId,
        text: &str,
        status: TranslationStatus,
    ) -> Translation {
        Translation {
            id,
            paragraph_id,
            assignment_id,
            text: text.to_string(),
            status,
            word_count: count_words(text),
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn session(translations: Vec<Translation>) -> TranslationSession {
        TranslationSession::new(
            assignment(9),
            project(Some(12)),
            vec![
                paragraph(101, 2, "Second"),
                paragraph(100, 1, "First"),
                paragraph(102, 3, "Third"),
            ],
            translations,
        )
    }

    #[test]
    fn test_items_are_ordered_and_merged_by_paragraph() {
        let s = session(vec![
            translation(1, 101, 9, "old", TranslationStatus::Draft),
            translation(2, 101, 9, "الثاني", TranslationStatus::Draft),
            translation(3, 100, 8, "other assignment", TranslationStatus::Draft),
        ]);
        let ids: Vec<_> = s.items().iter().map(|i| i.paragraph.id).collect();
        assert_eq!(ids, vec![100, 101, 102]);

        assert_eq!(s.items()[0].text, "");
        assert_eq!(s.items()[0].translation_id, None);
        assert_eq!(s.items()[0].state, ItemState::Untouched);

        assert_eq!(s.items()[1].text, "الثاني");
        assert_eq!(s.items()[1].translation_id, Some(2));
        assert_eq!(s.items()[1].state, ItemState::DraftPersisted);
    }

    #[test]
    fn test_navigation_clamps_without_wraparound() {
        let mut s = session(vec![]);
        s.go_previous();
        assert_eq!(s.current_index(), 0);
        s.go_next();
        s.go_next();
        s.go_next();
        assert_eq!(s.current_index(), 2);
        s.jump_to(1);
        assert_eq!(s.current_index(), 1);
        s.jump_to(50);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn test_set_current_text_marks_only_current_dirty() {
        let mut s = session(vec![]);
        s.jump_to(1);
        s.set_current_text("hello".to_string()).unwrap();
        assert_eq!(s.items()[1].state, ItemState::Dirty);
        assert_eq!(s.items()[0].state, ItemState::Untouched);
        assert_eq!(s.items()[2].text, "");
        assert_eq!(s.dirty_count(), 1);
    }

    #[test]
    fn test_submitted_item_is_locked() {
        let mut s = session(vec![translation(4, 100, 9, "done", TranslationStatus::Submitted)]);
        assert_eq!(s.items()[0].state, ItemState::Submitted);
        assert!(!s.items()[0].is_editable());
        let err = s.set_current_text("changed".to_string()).unwrap_err();
        assert!(matches!(err, SessionError::Transition(_)));
        assert_eq!(s.items()[0].text, "done");
    }

    #[test]
    fn test_begin_upsert_rejects_blank_and_in_flight() {
        let mut s = session(vec![]);
        assert_eq!(
            s.begin_upsert(0, TranslationStatus::Draft).unwrap_err(),
            SessionError::EmptyText { index: 0 }
        );
        s.set_current_text("  ".to_string()).unwrap();
        assert!(s.begin_upsert(0, TranslationStatus::Draft).is_err());

        s.set_current_text("hello".to_string()).unwrap();
        let first = s.begin_upsert(0, TranslationStatus::Draft).unwrap();
        assert_eq!(first.translation_id, None);
        assert_eq!(
            s.begin_upsert(0, TranslationStatus::Draft).unwrap_err(),
            SessionError::UpsertInFlight { index: 0 }
        );
        assert_eq!(s.autosave_candidate(), None);
    }

    #[test]
    fn test_finish_upsert_records_id_for_next_save() {
        let mut s = session(vec![]);
        s.set_current_text("hello".to_string()).unwrap();
        let req = s.begin_upsert(0, TranslationStatus::Draft).unwrap();
        let saved = translation(55, 100, 9, "hello", TranslationStatus::Draft);
        s.finish_upsert(&req, Ok(saved)).unwrap();

        assert_eq!(s.items()[0].translation_id, Some(55));
        assert_eq!(s.items()[0].state, ItemState::DraftPersisted);
        assert!(!s.items()[0].pending);

        s.set_current_text("hello again".to_string()).unwrap();
        let next = s.begin_upsert(0, TranslationStatus::Draft).unwrap();
        assert_eq!(next.translation_id, Some(55));
    }

    #[test]
    fn test_typing_during_save_keeps_item_dirty() {
        let mut s = session(vec![]);
        s.set_current_text("hello".to_string()).unwrap();
        let req = s.begin_upsert(0, TranslationStatus::Draft).unwrap();
        s.set_current_text("hello world".to_string()).unwrap();
        s.finish_upsert(&req, Ok(translation(55, 100, 9, "hello", TranslationStatus::Draft)))
            .unwrap();
        assert_eq!(s.items()[0].state, ItemState::Dirty);
        assert_eq!(s.autosave_candidate(), Some(0));
    }

    #[test]
    fn test_failed_upsert_keeps_local_text() {
        let mut s = session(vec![]);
        s.set_current_text("hello".to_string()).unwrap();
        let req = s.begin_upsert(0, TranslationStatus::Draft).unwrap();
        let err = s
            .finish_upsert(&req, Err(ApiError::Transport("offline".to_string())))
            .unwrap_err();
        assert!(matches!(err, SessionError::Api(_)));
        assert_eq!(s.items()[0].text, "hello");
        assert_eq!(s.items()[0].state, ItemState::Dirty);
        assert!(!s.items()[0].pending);
    }

    #[test]
    fn test_begin_submit_counts_missing_and_marks_nothing() {
        let mut s = session(vec![]);
        s.set_current_text("one".to_string()).unwrap();
        assert_eq!(
            s.begin_submit().unwrap_err(),
            SessionError::Incomplete { missing: 2 }
        );
        assert!(s.items().iter().all(|i| !i.pending));
    }

    #[test]
    fn test_begin_submit_plans_every_item() {
        let mut s = session(vec![translation(4, 101, 9, "two", TranslationStatus::Draft)]);
        s.set_current_text("one".to_string()).unwrap();
        s.jump_to(2);
        s.set_current_text("three".to_string()).unwrap();

        let requests = s.begin_submit().unwrap();
        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|r| r.body.status == TranslationStatus::Submitted));
        assert_eq!(requests[1].translation_id, Some(4));
        assert!(s.items().iter().all(|i| i.pending));

        s.abandon(&requests);
        assert!(s.items().iter().all(|i| !i.pending));
    }

    #[test]
    fn test_begin_submit_skips_already_submitted_items() {
        let mut s = session(vec![
            translation(4, 100, 9, "one", TranslationStatus::Submitted),
            translation(5, 101, 9, "two", TranslationStatus::Draft),
        ]);
        s.jump_to(2);
        s.set_current_text("three".to_string()).unwrap();

        let requests = s.begin_submit().unwrap();
        let indexes: Vec<_> = requests.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![1, 2]);
        assert!(!s.items()[0].pending);
    }

    #[test]
    fn test_begin_submit_requires_open_assignment() {
        let mut s = session(vec![]);
        for i in 0..3 {
            s.jump_to(i);
            s.set_current_text("x".to_string()).unwrap();
        }
        s.mark_assignment_completed();
        assert!(matches!(s.begin_submit(), Err(SessionError::Transition(_))));
    }

    #[test]
    fn test_empty_session() {
        let mut s = TranslationSession::new(assignment(9), project(None), vec![], vec![]);
        s.go_next();
        assert_eq!(s.current_index(), 0);
        assert!(s.current().is_none());
        assert_eq!(
            s.set_current_text("x".to_string()).unwrap_err(),
            SessionError::IndexOutOfRange { index: 0 }
        );
        assert_eq!(s.begin_submit().unwrap_err(), SessionError::NothingToSubmit);
    }
}
