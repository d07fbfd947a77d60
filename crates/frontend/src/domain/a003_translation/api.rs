use async_trait::async_trait;
use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::a002_paragraph::aggregate::Paragraph;
use contracts::domain::a003_translation::aggregate::{Translation, TranslationUpsert};
use contracts::domain::a004_assignment::aggregate::{Assignment, AssignmentStatus};
use contracts::domain::a005_notification::aggregate::CreateNotification;
use contracts::domain::common::EntityId;

use crate::shared::api_client::{ApiClient, ApiError};

/// Backend calls used by the translation session.
///
/// Futures are `?Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait TranslationApi {
    async fn get_assignment(&self, id: EntityId) -> Result<Assignment, ApiError>;

    async fn get_project(&self, id: EntityId) -> Result<Project, ApiError>;

    async fn list_paragraphs(&self, project_id: EntityId) -> Result<Vec<Paragraph>, ApiError>;

    async fn list_translations_by_assignment(
        &self,
        assignment_id: EntityId,
    ) -> Result<Vec<Translation>, ApiError>;

    async fn create_translation(&self, body: &TranslationUpsert) -> Result<Translation, ApiError>;

    async fn update_translation(
        &self,
        id: EntityId,
        body: &TranslationUpsert,
    ) -> Result<Translation, ApiError>;

    async fn update_assignment_status(
        &self,
        id: EntityId,
        status: AssignmentStatus,
    ) -> Result<(), ApiError>;

    async fn create_notification(&self, body: &CreateNotification) -> Result<(), ApiError>;
}

pub fn translations_by_assignment_path(assignment_id: EntityId) -> String {
    format!("/Translations/assignment/{}", assignment_id)
}

pub fn translation_path(id: EntityId) -> String {
    format!("/Translations/{}", id)
}

/// [`TranslationApi`] over the REST backend
#[derive(Clone, Debug)]
pub struct HttpTranslationApi {
    client: ApiClient,
}

impl HttpTranslationApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl TranslationApi for HttpTranslationApi {
    async fn get_assignment(&self, id: EntityId) -> Result<Assignment, ApiError> {
        crate::domain::a004_assignment::api::get_assignment(&self.client, id).await
    }

    async fn get_project(&self, id: EntityId) -> Result<Project, ApiError> {
        crate::domain::a001_project::api::get_project(&self.client, id).await
    }

    async fn list_paragraphs(&self, project_id: EntityId) -> Result<Vec<Paragraph>, ApiError> {
        crate::domain::a002_paragraph::api::list_by_project(&self.client, project_id).await
    }

    async fn list_translations_by_assignment(
        &self,
        assignment_id: EntityId,
    ) -> Result<Vec<Translation>, ApiError> {
        self.client
            .get(&translations_by_assignment_path(assignment_id))
            .await
    }

    async fn create_translation(&self, body: &TranslationUpsert) -> Result<Translation, ApiError> {
        self.client.post("/Translations", body).await
    }

    async fn update_translation(
        &self,
        id: EntityId,
        body: &TranslationUpsert,
    ) -> Result<Translation, ApiError> {
        self.client.put(&translation_path(id), body).await
    }

    async fn update_assignment_status(
        &self,
        id: EntityId,
        status: AssignmentStatus,
    ) -> Result<(), ApiError> {
        crate::domain::a004_assignment::api::update_status(&self.client, id, status).await
    }

    async fn create_notification(&self, body: &CreateNotification) -> Result<(), ApiError> {
        self.client.post_unit("/Notifications", body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(translations_by_assignment_path(9), "/Translations/assignment/9");
        assert_eq!(translation_path(55), "/Translations/55");
    }
}
