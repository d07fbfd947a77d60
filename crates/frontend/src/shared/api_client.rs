//! Central HTTP client for the REST backend.
//!
//! Every response is decoded as the `{ success, data, message }` envelope
//! here, so call sites never branch on raw arrays versus wrapped payloads.

use contracts::shared::api_response::ApiResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::api_utils::join_url;
use crate::system::auth::context::AuthContext;

/// Ошибки обращения к API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

/// Decodes a response body into the envelope.
///
/// Non-2xx responses become [`ApiError::Status`], using the envelope
/// message when the body carries one.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ApiResponse<T>, ApiError> {
    let parsed = serde_json::from_str::<ApiResponse<T>>(body);

    if !(200..300).contains(&status) {
        let message = match parsed {
            Ok(envelope) => envelope.error_message(),
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => "no response body".to_string(),
        };
        return Err(ApiError::Status { status, message });
    }

    parsed.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Unwraps the payload of a decoded envelope
pub fn envelope_data<T>(envelope: ApiResponse<T>) -> Result<T, ApiError> {
    envelope.into_result().map_err(ApiError::Rejected)
}

/// HTTP client bound to one [`AuthContext`]
#[derive(Clone, Debug)]
pub struct ApiClient {
    auth: AuthContext,
}

impl ApiClient {
    pub fn new(auth: AuthContext) -> Self {
        Self { auth }
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.auth.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let header = self
            .auth
            .bearer_header()
            .ok_or(ApiError::NotAuthenticated)?;
        Ok(builder.header("Authorization", &header))
    }

    async fn send(request: Request) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        decode_envelope(status, &body)
    }

    fn with_body<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
        builder
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))
    }

    fn without_body(builder: RequestBuilder) -> Result<Request, ApiError> {
        builder
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = Self::without_body(self.authorize(Request::get(&self.url(path)))?)?;
        envelope_data(Self::read(Self::send(request).await?).await?)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Self::with_body(self.authorize(Request::post(&self.url(path)))?, body)?;
        envelope_data(Self::read(Self::send(request).await?).await?)
    }

    /// POST whose payload is ignored
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = Self::with_body(self.authorize(Request::post(&self.url(path)))?, body)?;
        Self::read::<serde_json::Value>(Self::send(request).await?)
            .await?
            .into_unit()
            .map_err(ApiError::Rejected)
    }

    /// POST without the bearer token (login)
    pub async fn post_anonymous<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Self::with_body(Request::post(&self.url(path)), body)?;
        envelope_data(Self::read(Self::send(request).await?).await?)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Self::with_body(self.authorize(Request::put(&self.url(path)))?, body)?;
        envelope_data(Self::read(Self::send(request).await?).await?)
    }

    pub async fn patch_unit(&self, path: &str) -> Result<(), ApiError> {
        let request = Self::without_body(self.authorize(Request::patch(&self.url(path)))?)?;
        Self::read::<serde_json::Value>(Self::send(request).await?)
            .await?
            .into_unit()
            .map_err(ApiError::Rejected)
    }

    pub async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        let request = Self::without_body(self.authorize(Request::delete(&self.url(path)))?)?;
        Self::read::<serde_json::Value>(Self::send(request).await?)
            .await?
            .into_unit()
            .map_err(ApiError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let env: ApiResponse<Vec<i64>> =
            decode_envelope(200, r#"{"success":true,"data":[4,5]}"#).unwrap();
        assert_eq!(envelope_data(env).unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_decode_rejected_envelope() {
        let env: ApiResponse<Vec<i64>> =
            decode_envelope(200, r#"{"success":false,"message":"Assignment is closed"}"#).unwrap();
        assert_eq!(
            envelope_data(env).unwrap_err(),
            ApiError::Rejected("Assignment is closed".to_string())
        );
    }

    #[test]
    fn test_decode_http_error_prefers_envelope_message() {
        let err = decode_envelope::<i64>(403, r#"{"success":false,"message":"Forbidden role"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 403,
                message: "Forbidden role".to_string()
            }
        );
    }

    #[test]
    fn test_decode_http_error_with_plain_body() {
        let err = decode_envelope::<i64>(502, "Bad Gateway").unwrap_err();
        assert_eq!(err.to_string(), "Request failed (502): Bad Gateway");
        let err = decode_envelope::<i64>(500, "").unwrap_err();
        assert_eq!(err.to_string(), "Request failed (500): no response body");
    }

    #[test]
    fn test_bare_array_is_a_decode_error() {
        let err = decode_envelope::<Vec<i64>>(200, "[1,2]").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
