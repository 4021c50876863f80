//! Response envelope shared by every API endpoint
//!
//! Success and failure responses carry the same two keys so clients can
//! branch on one shape: `{"data": ..., "error": null}` on success,
//! `{"data": null, "error": {"code", "message"}}` on failure.

use serde::Serialize;

/// Envelope wrapping every JSON response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error: Option<ErrorBody>,
}

/// Error half of the envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable code ("validation_error", "not_found", ...)
    pub code: &'static str,
    pub message: String,
}

impl<T> Envelope<T> {
    /// Success envelope around a payload.
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    /// Failure envelope with no payload.
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(ErrorBody {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Confirmation payload returned by update and delete endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_keeps_error_key() {
        let body = serde_json::to_value(Envelope::data(vec![1, 2, 3])).unwrap();
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
        assert!(body["error"].is_null());
        assert!(body.as_object().unwrap().contains_key("error"));
    }

    #[test]
    fn error_envelope_keeps_data_key() {
        let body = serde_json::to_value(Envelope::error("not_found", "gone")).unwrap();
        assert!(body["data"].is_null());
        assert_eq!(body["error"]["code"], "not_found");
        assert_eq!(body["error"]["message"], "gone");
    }
}
