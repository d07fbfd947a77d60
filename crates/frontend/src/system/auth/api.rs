use contracts::system::auth::{LoginRequest, LoginResponse};

use super::context::AuthContext;
use crate::shared::api_client::{ApiClient, ApiError};

/// Login with username and password
pub async fn login(
    base_url: String,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let client = ApiClient::new(AuthContext::anonymous(base_url));
    let request = LoginRequest { username, password };
    client.post_anonymous("/Auth/login", &request).await
}
