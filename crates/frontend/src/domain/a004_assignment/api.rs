use contracts::domain::a004_assignment::aggregate::{Assignment, AssignmentStatus};
use contracts::domain::common::{EntityId, WorkflowStatus};

use crate::shared::api_client::{ApiClient, ApiError};
use crate::shared::api_utils::path_segment;

pub fn assignments_by_user_path(user_id: EntityId) -> String {
    format!("/Assignments/user/{}", user_id)
}

pub fn assignment_path(id: EntityId) -> String {
    format!("/Assignments/{}", id)
}

pub fn assignment_status_path(id: EntityId, status: AssignmentStatus) -> String {
    format!(
        "/Assignments/{}/status/{}",
        id,
        path_segment(status.as_str())
    )
}

/// Fetch assignments of one user
pub async fn list_by_user(client: &ApiClient, user_id: EntityId) -> Result<Vec<Assignment>, ApiError> {
    client.get(&assignments_by_user_path(user_id)).await
}

pub async fn get_assignment(client: &ApiClient, id: EntityId) -> Result<Assignment, ApiError> {
    client.get(&assignment_path(id)).await
}

/// PATCH without a body; the target status is part of the path
pub async fn update_status(
    client: &ApiClient,
    id: EntityId,
    status: AssignmentStatus,
) -> Result<(), ApiError> {
    client.patch_unit(&assignment_status_path(id, status)).await
}
