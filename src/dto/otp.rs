use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /send-otp`.
///
/// `phone` is optional at the serde boundary so an absent field produces
/// the relay's own 400 body instead of a deserializer error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendOtpRequest {
    #[serde(default)]
    pub phone: Option<String>,
}

/// Request body for `POST /verify-otp`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub phone: Option<String>,

    /// Clients send the code as either a JSON string or a bare number;
    /// both forms are coerced to a string before forwarding.
    #[serde(default, deserialize_with = "code_as_string")]
    pub code: Option<String>,
}

fn code_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CodeField {
        Str(String),
        Num(u64),
    }

    Ok(match Option::<CodeField>::deserialize(deserializer)? {
        Some(CodeField::Str(s)) => Some(s),
        Some(CodeField::Num(n)) => Some(n.to_string()),
        None => None,
    })
}

/// Success body for `POST /send-otp`, carrying the provider's status
/// string for the new verification (normally `"pending"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub success: bool,
    pub status: String,
}

/// Success body for `POST /verify-otp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
}

/// Uniform failure body for every non-success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFailure {
    pub success: bool,
    pub message: String,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_accepts_a_json_string() {
        let request: VerifyOtpRequest =
            serde_json::from_str(r#"{"phone": "9876543210", "code": "123456"}"#).unwrap();
        assert_eq!(request.code.as_deref(), Some("123456"));
    }

    #[test]
    fn code_accepts_a_json_number() {
        let request: VerifyOtpRequest =
            serde_json::from_str(r#"{"phone": "9876543210", "code": 123456}"#).unwrap();
        assert_eq!(request.code.as_deref(), Some("123456"));
    }

    #[test]
    fn missing_fields_deserialize_to_none() {
        let request: VerifyOtpRequest = serde_json::from_str("{}").unwrap();
        assert!(request.phone.is_none());
        assert!(request.code.is_none());

        let request: SendOtpRequest = serde_json::from_str("{}").unwrap();
        assert!(request.phone.is_none());
    }

    #[test]
    fn failure_body_serializes_with_success_false() {
        let body = serde_json::to_value(ApiFailure::new("Phone required")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "message": "Phone required"})
        );
    }
}
