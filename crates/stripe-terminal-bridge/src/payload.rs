//! # Wire Payload Construction
//!
//! Builds the envelope the JS side receives when a Terminal operation fails.
//!
//! ## Envelope Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Failure Envelope                                  │
//! │                                                                         │
//! │  {                                                                      │
//! │    "error": {                                                           │
//! │      "name": "StripeError",          ◄── or "NonStripeError"           │
//! │      "message": "...",                                                  │
//! │      "code": "DECLINED_BY_STRIPE_API",                                  │
//! │      "nativeErrorCode": "DECLINED_BY_STRIPE_API",                       │
//! │      "apiError": { ... },            ◄── only when present             │
//! │      "underlyingError": { ... },     ◄── only when present             │
//! │      "metadata": { }                 ◄── always present                │
//! │    },                                                                   │
//! │    "paymentIntent": { ... },         ◄── top level, only when present  │
//! │    "setupIntent": { ... }                                               │
//! │  }                                                                      │
//! │                                                                         │
//! │  Response objects sit BESIDE the error, not inside it: a declined      │
//! │  payment still created an intent the caller needs for retry/cancel.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `"error"` member is exactly the flat shape the core normalizer
//! resolves first, so round-tripping a payload through
//! [`convert_native_error`](stripe_terminal_core::convert_native_error)
//! reproduces what this module put in.

use serde_json::{json, Map, Value};

use stripe_terminal_core::{ErrorCode, STRIPE_ERROR_NAME};

use crate::error::{TerminalError, UnderlyingError};

/// Envelope member holding the error object.
pub const ERROR_KEY: &str = "error";

/// Discriminator for failures that did not come from the Terminal SDK.
pub const NON_STRIPE_ERROR_NAME: &str = "NonStripeError";

/// Message used when a failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

// Rust erases the concrete type behind `dyn Error`, so unlike the platform
// modules the cause's type name is not recoverable for the wire.
const SOURCE_ERROR_CODE: &str = "UNDERLYING_ERROR";

// =============================================================================
// SDK Failures
// =============================================================================

/// Builds the failure envelope for a Terminal SDK error.
///
/// ## Example
/// ```rust
/// use stripe_terminal_bridge::{error_payload, TerminalError};
/// use stripe_terminal_core::ErrorCode;
///
/// let payload = error_payload(&TerminalError::new(
///     ErrorCode::ReaderBusy,
///     "collect already in progress",
/// ));
/// assert_eq!(payload["error"]["code"], "READER_BUSY");
/// ```
pub fn error_payload(err: &TerminalError) -> Value {
    let mut envelope = Map::new();
    envelope.insert(ERROR_KEY.to_string(), stripe_error_contents(err));

    if let Some(intent) = &err.payment_intent {
        envelope.insert("paymentIntent".to_string(), intent.clone());
    }
    if let Some(intent) = &err.setup_intent {
        envelope.insert("setupIntent".to_string(), intent.clone());
    }

    Value::Object(envelope)
}

fn stripe_error_contents(err: &TerminalError) -> Value {
    let mut contents = Map::new();
    contents.insert("name".to_string(), json!(STRIPE_ERROR_NAME));
    contents.insert("message".to_string(), json!(err.message));
    contents.insert("code".to_string(), json!(err.code));
    contents.insert("nativeErrorCode".to_string(), json!(err.code));

    if let Some(api) = &err.api_error {
        contents.insert("apiError".to_string(), json!(api));
    }
    if let Some(underlying) = &err.underlying {
        contents.insert("underlyingError".to_string(), json!(underlying));
    }

    contents.insert("metadata".to_string(), platform_metadata());
    Value::Object(contents)
}

/// Platform-specific metadata for this module.
///
/// Empty for now - the iOS module fills fields like `httpStatusCode` from
/// `NSError.userInfo`; this module has no equivalent source yet.
fn platform_metadata() -> Value {
    json!({})
}

// =============================================================================
// Non-SDK Failures
// =============================================================================

/// Builds the failure envelope for an error that did not come from the
/// Terminal SDK (a wrapper bug, a host failure).
///
/// The generic `UNEXPECTED_SDK_ERROR` code is used so the JS side still gets
/// a code to branch on; the cause chain is surfaced as `underlyingError`.
/// Never carries domain references.
pub fn unexpected_error_payload(err: &dyn std::error::Error) -> Value {
    let message = err.to_string();
    let mut contents = Map::new();
    contents.insert("name".to_string(), json!(NON_STRIPE_ERROR_NAME));
    contents.insert(
        "message".to_string(),
        if message.is_empty() {
            json!(UNKNOWN_ERROR_MESSAGE)
        } else {
            json!(message)
        },
    );
    contents.insert("code".to_string(), json!(ErrorCode::UnexpectedSdkError));
    contents.insert(
        "nativeErrorCode".to_string(),
        json!(ErrorCode::UnexpectedSdkError),
    );

    if let Some(cause) = err.source() {
        let underlying = UnderlyingError::new(SOURCE_ERROR_CODE, cause.to_string());
        contents.insert("underlyingError".to_string(), json!(underlying));
    }

    contents.insert("metadata".to_string(), platform_metadata());

    let mut envelope = Map::new();
    envelope.insert(ERROR_KEY.to_string(), Value::Object(contents));
    Value::Object(envelope)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::fmt;
    use stripe_terminal_core::{convert_native_error, is_stripe_error};

    #[test]
    fn test_sdk_failure_envelope_shape() {
        let payload = error_payload(&TerminalError::new(
            ErrorCode::DeclinedByStripeApi,
            "Payment was declined",
        ));
        let error = &payload[ERROR_KEY];

        assert_eq!(error["name"], json!("StripeError"));
        assert_eq!(error["message"], json!("Payment was declined"));
        assert_eq!(error["code"], json!("DECLINED_BY_STRIPE_API"));
        assert_eq!(error["nativeErrorCode"], json!("DECLINED_BY_STRIPE_API"));
        assert_eq!(error["metadata"], json!({}));
        assert!(is_stripe_error(error));
    }

    #[test]
    fn test_response_objects_sit_beside_the_error() {
        let payload = error_payload(
            &TerminalError::new(ErrorCode::DeclinedByStripeApi, "Payment was declined")
                .with_payment_intent(json!({ "id": "pi_test" })),
        );

        assert_eq!(payload["paymentIntent"], json!({ "id": "pi_test" }));
        let error = payload[ERROR_KEY].as_object().unwrap();
        assert!(!error.contains_key("paymentIntent"));
        assert!(!payload.as_object().unwrap().contains_key("setupIntent"));
    }

    #[test]
    fn test_api_error_rides_inside_the_error_object() {
        let payload = error_payload(
            &TerminalError::new(ErrorCode::DeclinedByStripeApi, "Payment was declined")
                .with_api_error(ApiError::new(
                    Some("card_declined"),
                    "Your card was declined.",
                    Some("generic_decline"),
                )),
        );

        assert_eq!(
            payload[ERROR_KEY]["apiError"],
            json!({
                "code": "card_declined",
                "message": "Your card was declined.",
                "declineCode": "generic_decline",
            })
        );
    }

    #[test]
    fn test_payload_round_trips_through_the_normalizer() {
        let payload = error_payload(
            &TerminalError::new(ErrorCode::ReaderBusy, "collect already in progress")
                .with_underlying(UnderlyingError::new("BluetoothError", "link dropped")),
        );

        let err = convert_native_error(&payload[ERROR_KEY]);

        assert_eq!(err.code, "READER_BUSY");
        assert_eq!(err.message, "collect already in progress");
        assert_eq!(err.native_error_code, "READER_BUSY");
        assert!(err.metadata.is_empty());
        assert!(is_stripe_error(&serde_json::to_value(&err).unwrap()));
    }

    // A minimal error chain for the non-SDK path.
    #[derive(Debug)]
    struct LinkDropped;

    impl fmt::Display for LinkDropped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "link dropped")
        }
    }

    impl std::error::Error for LinkDropped {}

    #[derive(Debug)]
    struct WrapperBug(LinkDropped);

    impl fmt::Display for WrapperBug {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapper state out of sync")
        }
    }

    impl std::error::Error for WrapperBug {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_non_sdk_failure_envelope() {
        let payload = unexpected_error_payload(&WrapperBug(LinkDropped));
        let error = &payload[ERROR_KEY];

        assert_eq!(error["name"], json!("NonStripeError"));
        assert_eq!(error["message"], json!("wrapper state out of sync"));
        assert_eq!(error["code"], json!("UNEXPECTED_SDK_ERROR"));
        assert_eq!(error["nativeErrorCode"], json!("UNEXPECTED_SDK_ERROR"));
        assert_eq!(error["underlyingError"]["message"], json!("link dropped"));
        assert_eq!(error["metadata"], json!({}));
    }

    #[test]
    fn test_non_sdk_failure_without_cause() {
        let payload = unexpected_error_payload(&LinkDropped);
        let error = payload[ERROR_KEY].as_object().unwrap();

        assert!(!error.contains_key("underlyingError"));
        assert!(!payload.as_object().unwrap().contains_key("paymentIntent"));
    }

    #[test]
    fn test_non_sdk_failure_still_normalizes() {
        let payload = unexpected_error_payload(&LinkDropped);
        let err = convert_native_error(&payload[ERROR_KEY]);

        assert_eq!(err.code, "UNEXPECTED_SDK_ERROR");
        assert_eq!(err.message, "link dropped");
    }
}
