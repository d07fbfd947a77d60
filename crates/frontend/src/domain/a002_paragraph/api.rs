use contracts::domain::a002_paragraph::aggregate::{CreateParagraph, Paragraph};
use contracts::domain::common::EntityId;

use crate::shared::api_client::{ApiClient, ApiError};

pub fn paragraphs_by_project_path(project_id: EntityId) -> String {
    format!("/Paragraphs/project/{}", project_id)
}

pub fn paragraph_path(id: EntityId) -> String {
    format!("/Paragraphs/{}", id)
}

pub async fn list_by_project(
    client: &ApiClient,
    project_id: EntityId,
) -> Result<Vec<Paragraph>, ApiError> {
    client.get(&paragraphs_by_project_path(project_id)).await
}

pub async fn create_paragraph(
    client: &ApiClient,
    body: &CreateParagraph,
) -> Result<Paragraph, ApiError> {
    client.post("/Paragraphs", body).await
}

pub async fn delete_paragraph(client: &ApiClient, id: EntityId) -> Result<(), ApiError> {
    client.delete_unit(&paragraph_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(paragraphs_by_project_path(3), "/Paragraphs/project/3");
        assert_eq!(paragraph_path(41), "/Paragraphs/41");
    }
}
