use contracts::system::users::TeamMember;

use crate::shared::api_client::{ApiClient, ApiError};

/// Fetch all team members
pub async fn fetch_team(client: &ApiClient) -> Result<Vec<TeamMember>, ApiError> {
    client.get("/Users").await
}
