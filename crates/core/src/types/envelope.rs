//! The `{code, msg, data}` wrapper every backend response uses.
//!
//! Decoding is an explicit step: [`Envelope::into_result`] turns the raw
//! wire shape into a tagged `Result`, so a business failure is a first-class
//! return value the caller must handle, not a rejection threaded through a
//! response hook.

use serde::Deserialize;
use thiserror::Error;

/// Business code the backend uses for success.
pub const SUCCESS_CODE: i32 = 200;

/// Fallback message when the server supplies none.
const GENERIC_FAILURE: &str = "An unexpected error occurred.";

/// Universal API response structure.
///
/// Some endpoints spell the message field `msg`, others `message`; both are
/// accepted, `msg` wins when both are present.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Failure decoding an [`Envelope`] into its payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The backend reported a business failure (`code != 200`).
    #[error("{message}")]
    Business { code: i32, message: String },

    /// The backend reported success but sent no payload.
    #[error("response reported success but carried no data")]
    MissingData,
}

impl<T> Envelope<T> {
    /// Decode the envelope: yield `data` on success, the server-supplied
    /// failure message otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Business`] when `code != 200`, and
    /// [`EnvelopeError::MissingData`] when a successful envelope has no
    /// `data` field.
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        self.into_optional()?.ok_or(EnvelopeError::MissingData)
    }

    /// Decode the envelope, treating absent or `null` `data` on success as a
    /// valid empty payload. Action endpoints answer `{code: 200, data: null}`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Business`] when `code != 200`.
    pub fn into_optional(self) -> Result<Option<T>, EnvelopeError> {
        if self.code != SUCCESS_CODE {
            return Err(EnvelopeError::Business {
                code: self.code,
                message: self
                    .msg
                    .or(self.message)
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            });
        }
        Ok(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        foo: i32,
    }

    #[test]
    fn test_success_yields_data() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"code":200,"data":{"foo":1}}"#).expect("deserialize");
        assert_eq!(envelope.into_result(), Ok(Payload { foo: 1 }));
    }

    #[test]
    fn test_business_failure_surfaces_msg() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"code":403,"msg":"nope"}"#).expect("deserialize");
        assert_eq!(
            envelope.into_result(),
            Err(EnvelopeError::Business {
                code: 403,
                message: "nope".to_string()
            })
        );
    }

    #[test]
    fn test_msg_preferred_over_message() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"code":500,"msg":"short","message":"long"}"#)
                .expect("deserialize");
        let err = envelope.into_result().expect_err("business failure");
        assert_eq!(err.to_string(), "short");
    }

    #[test]
    fn test_generic_fallback_when_no_message() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"code":500}"#).expect("deserialize");
        let err = envelope.into_result().expect_err("business failure");
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn test_failure_even_when_data_present() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"code":403,"msg":"nope","data":{"foo":1}}"#)
                .expect("deserialize");
        assert!(envelope.into_result().is_err());
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"code":200}"#).expect("deserialize");
        assert_eq!(envelope.into_result(), Err(EnvelopeError::MissingData));
    }

    #[test]
    fn test_optional_decode_accepts_null_data() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"code":200,"data":null}"#).expect("deserialize");
        assert_eq!(envelope.into_optional(), Ok(None));
    }

    #[test]
    fn test_optional_decode_still_rejects_business_failure() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"code":403,"msg":"nope","data":null}"#)
                .expect("deserialize");
        assert!(envelope.into_optional().is_err());
    }
}
