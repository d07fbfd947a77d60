//! Async driver of a [`TranslationSession`].
//!
//! The controller owns the session behind `Rc<RefCell<…>>` and talks to the
//! backend only through [`TranslationApi`]. A `RefCell` borrow is never held
//! across an `.await`: every operation plans its requests, releases the
//! borrow, awaits the network and then records the result.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use contracts::domain::a003_translation::aggregate::{Translation, TranslationStatus};
use contracts::domain::a004_assignment::aggregate::AssignmentStatus;
use contracts::domain::a005_notification::aggregate::CreateNotification;
use contracts::domain::common::EntityId;

use super::error::SessionError;
use super::state::{TranslationSession, UpsertRequest};
use crate::domain::a003_translation::api::TranslationApi;
use crate::shared::api_client::ApiError;

/// Result of a successful submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub submitted: usize,
    /// `false` when the project has no reviewer or the notification failed
    pub reviewer_notified: bool,
}

pub struct TranslationSessionController<A: TranslationApi> {
    api: Rc<A>,
    session: Rc<RefCell<Option<TranslationSession>>>,
    /// Bumped on every successful load; results of older requests are dropped
    generation: Rc<Cell<u64>>,
    autosave_enabled: Rc<Cell<bool>>,
}

impl<A: TranslationApi> Clone for TranslationSessionController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            session: Rc::clone(&self.session),
            generation: Rc::clone(&self.generation),
            autosave_enabled: Rc::clone(&self.autosave_enabled),
        }
    }
}

impl<A: TranslationApi> TranslationSessionController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Rc::new(api),
            session: Rc::new(RefCell::new(None)),
            generation: Rc::new(Cell::new(0)),
            autosave_enabled: Rc::new(Cell::new(true)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Copy of the current session for rendering
    pub fn snapshot(&self) -> Option<TranslationSession> {
        self.session.borrow().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.session.borrow().is_some()
    }

    fn with_session<R>(
        &self,
        f: impl FnOnce(&mut TranslationSession) -> Result<R, SessionError>,
    ) -> Result<R, SessionError> {
        let mut guard = self.session.borrow_mut();
        let session = guard.as_mut().ok_or(SessionError::NotLoaded)?;
        f(session)
    }

    /// Runs `f` on the loaded session, does nothing before the first load
    fn update_loaded(&self, f: impl FnOnce(&mut TranslationSession)) {
        if let Some(session) = self.session.borrow_mut().as_mut() {
            f(session);
        }
    }

    /// Records an upsert result unless a reload replaced the session meanwhile
    fn record_upsert(
        &self,
        generation: u64,
        request: &UpsertRequest,
        result: Result<Translation, ApiError>,
    ) -> Result<Translation, SessionError> {
        if self.generation.get() != generation {
            log::warn!(
                "dropping save of paragraph {}: session was reloaded",
                request.index + 1
            );
            return Err(SessionError::Reloaded {
                index: request.index,
            });
        }
        self.with_session(|s| s.finish_upsert(request, result))
    }

    /// Fetches everything the session needs and replaces the current one.
    ///
    /// Assignment and translations are fetched together, then project and
    /// paragraphs of the assignment's project. On failure the previous
    /// session, local edits included, stays in place.
    pub async fn load_session(&self, assignment_id: EntityId) -> Result<(), SessionError> {
        let (assignment, translations) = futures::try_join!(
            self.api.get_assignment(assignment_id),
            self.api.list_translations_by_assignment(assignment_id),
        )?;
        let (project, paragraphs) = futures::try_join!(
            self.api.get_project(assignment.project_id),
            self.api.list_paragraphs(assignment.project_id),
        )?;

        let session = TranslationSession::new(assignment, project, paragraphs, translations);
        log::debug!(
            "translation session loaded: assignment {}, {} paragraph(s)",
            assignment_id,
            session.len()
        );
        self.session.replace(Some(session));
        self.generation.set(self.generation.get() + 1);
        Ok(())
    }

    pub fn set_current_text(&self, value: String) -> Result<(), SessionError> {
        self.with_session(|s| s.set_current_text(value))
    }

    pub fn go_next(&self) {
        self.update_loaded(|s| s.go_next());
    }

    pub fn go_previous(&self) {
        self.update_loaded(|s| s.go_previous());
    }

    pub fn jump_to(&self, index: usize) {
        self.update_loaded(|s| s.jump_to(index));
    }

    async fn persist(&self, request: &UpsertRequest) -> Result<Translation, ApiError> {
        match request.translation_id {
            Some(id) => self.api.update_translation(id, &request.body).await,
            None => self.api.create_translation(&request.body).await,
        }
    }


    /// Saves one item (the current one by default) with status `Draft`
    pub async fn save_draft(&self, index: Option<usize>) -> Result<Translation, SessionError> {
        let request = self.with_session(|s| {
            let index = index.unwrap_or_else(|| s.current_index());
            s.begin_upsert(index, TranslationStatus::Draft)
        })?;
        let generation = self.generation.get();
        let result = self.persist(&request).await;
        self.record_upsert(generation, &request, result)
    }

    pub fn set_autosave_enabled(&self, enabled: bool) {
        self.autosave_enabled.set(enabled);
    }

    pub fn autosave_enabled(&self) -> bool {
        self.autosave_enabled.get()
    }

    /// One autosave pass. Returns `true` when a draft was written.
    ///
    /// Only a dirty, non-empty current item with no request in flight is
    /// saved. Failures are logged and never returned.
    pub async fn autosave_tick(&self) -> bool {
        if !self.autosave_enabled.get() {
            return false;
        }
        let candidate = self
            .session
            .borrow()
            .as_ref()
            .and_then(|s| s.autosave_candidate());
        let Some(index) = candidate else {
            return false;
        };

        match self.save_draft(Some(index)).await {
            Ok(_) => {
                log::debug!("autosaved paragraph {}", index + 1);
                true
            }
            Err(e) => {
                log::warn!("autosave failed: {}", e);
                false
            }
        }
    }

    /// Submits every item, completes the assignment and notifies the reviewer.
    ///
    /// Fails without any network call when an item is empty. When an upsert
    /// fails the remaining items are not sent and local text is kept.
    pub async fn submit(&self) -> Result<SubmitOutcome, SessionError> {
        let requests = self.with_session(|s| s.begin_submit())?;
        let generation = self.generation.get();

        for (position, request) in requests.iter().enumerate() {
            let result = self.persist(request).await;
            let recorded = self.record_upsert(generation, request, result);
            if let Err(e) = recorded {
                if self.generation.get() == generation {
                    self.update_loaded(|s| s.abandon(&requests[position + 1..]));
                }
                log::error!("submit stopped at paragraph {}: {}", request.index + 1, e);
                return Err(e);
            }
        }

        let (assignment_id, project_id, project_name, reviewer_id, count) =
            self.with_session(|s| {
                Ok((
                    s.assignment.id,
                    s.project.id,
                    s.project.name.clone(),
                    s.project.reviewer_id,
                    s.len(),
                ))
            })?;

        self.api
            .update_assignment_status(assignment_id, AssignmentStatus::Completed)
            .await?;
        self.with_session(|s| {
            s.mark_assignment_completed();
            Ok(())
        })?;

        let reviewer_notified = match reviewer_id {
            Some(reviewer_id) => {
                let notification = CreateNotification::translation_submitted(
                    reviewer_id,
                    project_id,
                    &project_name,
                    count,
                );
                match self.api.create_notification(&notification).await {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("reviewer notification failed: {}", e);
                        false
                    }
                }
            }
            None => {
                log::info!("project {} has no reviewer, notification skipped", project_id);
                false
            }
        };

        Ok(SubmitOutcome {
            submitted: count,
            reviewer_notified,
        })
    }
}
