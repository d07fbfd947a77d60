use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::common::EntityId;

use crate::shared::api_client::{ApiClient, ApiError};

pub fn project_path(id: EntityId) -> String {
    format!("/Projects/{}", id)
}

/// Fetch all projects visible to the current user
pub async fn list_projects(client: &ApiClient) -> Result<Vec<Project>, ApiError> {
    client.get("/Projects").await
}

pub async fn get_project(client: &ApiClient, id: EntityId) -> Result<Project, ApiError> {
    client.get(&project_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_path() {
        assert_eq!(project_path(7), "/Projects/7");
    }
}
