use serde::{Deserialize, Serialize};

const DEFAULT_ERROR: &str = "Request failed";

/// Конверт ответа backend: `{ success, data, message }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Best available error message for a failed envelope
    pub fn error_message(&self) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_ERROR)
            .to_string()
    }

    /// Unwraps the payload; `success:false` and a missing payload are both errors
    pub fn into_result(self) -> Result<T, String> {
        if !self.success {
            return Err(self.error_message());
        }
        self.data
            .ok_or_else(|| "Response envelope has no data".to_string())
    }

    /// For endpoints whose payload is irrelevant (PATCH, DELETE, notifications)
    pub fn into_unit(self) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self.error_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = r#"{"success":true,"data":[1,2,3]}"#;
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_failure_envelope_surfaces_message() {
        let json = r#"{"success":false,"data":null,"message":"Paragraph not found"}"#;
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_result().unwrap_err(), "Paragraph not found");
    }

    #[test]
    fn test_failure_without_message_uses_default() {
        let resp: ApiResponse<()> = ApiResponse::error("   ");
        assert_eq!(resp.into_unit().unwrap_err(), DEFAULT_ERROR);
    }

    #[test]
    fn test_success_without_data_is_error_only_for_payload() {
        let json = r#"{"success":true}"#;
        let resp: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(resp.clone().into_unit().is_ok());
        assert!(resp.into_result().is_err());
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Ticket {
        id: i64,
    }

    fn decode<T: serde::de::DeserializeOwned>(json: &str) -> ApiResponse<T> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_decodes_payload_without_default_and_missing_fields() {
        let ok: ApiResponse<Ticket> = decode(r#"{"success":true,"data":{"id":5}}"#);
        assert_eq!(ok.into_result().unwrap(), Ticket { id: 5 });

        let bare: ApiResponse<Ticket> = decode(r#"{"success":false}"#);
        assert!(bare.data.is_none());
        assert!(bare.message.is_none());
    }
}
