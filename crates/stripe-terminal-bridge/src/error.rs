//! # Native SDK Failure Types
//!
//! The typed failure the native module raises when a Terminal operation
//! fails, plus the guard helpers that raise the recurring ones with fixed
//! registry codes.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow Through the Native Module                   │
//! │                                                                         │
//! │  SDK wrapper operation                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<T, TerminalError>  ◄── typed, code always known here           │
//! │         │                                                               │
//! │         ▼ on Err                                                        │
//! │  payload::error_payload() ── { "error": {...} } ──► bridge ──► JS      │
//! │                                                                         │
//! │  The JS side then runs the core normalizer; round-tripping through     │
//! │  it reproduces the code/message this module put in.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use ts_rs::TS;

use stripe_terminal_core::ErrorCode;

/// Fallback when the Stripe API reported no machine-readable code.
pub const UNKNOWN_API_ERROR_CODE: &str = "unknown_api_error_code";

// =============================================================================
// Terminal Error
// =============================================================================

/// A failed Terminal operation, as raised inside the native module.
///
/// Unlike the JS-facing canonical error, the code here is the typed
/// [`ErrorCode`]: the native side always knows which registry entry it is
/// raising. The string-typed escape hatch exists only on the consuming side,
/// where SDK versions may disagree.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{code}] {message}")]
pub struct TerminalError {
    pub code: ErrorCode,
    pub message: String,

    /// Structured Stripe API error, when the failure came from an API call.
    pub api_error: Option<ApiError>,

    /// The lower-level cause, when one is known.
    pub underlying: Option<UnderlyingError>,

    /// Already-mapped domain objects returned alongside the failure
    /// (partial success: a declined payment still has a created intent the
    /// caller may retry or cancel).
    pub payment_intent: Option<Value>,
    pub setup_intent: Option<Value>,
}

impl TerminalError {
    /// Creates a failure with just a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> TerminalError {
        TerminalError {
            code,
            message: message.into(),
            api_error: None,
            underlying: None,
            payment_intent: None,
            setup_intent: None,
        }
    }

    /// Attaches the Stripe API error details.
    pub fn with_api_error(mut self, api_error: ApiError) -> TerminalError {
        self.api_error = Some(api_error);
        self
    }

    /// Attaches the lower-level cause.
    pub fn with_underlying(mut self, underlying: UnderlyingError) -> TerminalError {
        self.underlying = Some(underlying);
        self
    }

    /// Attaches the payment intent that was in flight.
    pub fn with_payment_intent(mut self, intent: Value) -> TerminalError {
        self.payment_intent = Some(intent);
        self
    }

    /// Attaches the setup intent that was in flight.
    pub fn with_setup_intent(mut self, intent: Value) -> TerminalError {
        self.setup_intent = Some(intent);
        self
    }
}

// =============================================================================
// Structured Sub-Objects
// =============================================================================

/// Stripe API error details, in the unified cross-platform wire shape.
///
/// `code` and `decline_code` are required on the wire; [`ApiError::new`]
/// applies the documented fallbacks when the SDK reports none. The remaining
/// fields are omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub decline_code: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[ts(rename = "type")]
    pub error_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl ApiError {
    /// Creates API error details, filling the required-field fallbacks:
    /// missing `code` becomes [`UNKNOWN_API_ERROR_CODE`], missing
    /// `decline_code` becomes the empty string.
    pub fn new(
        code: Option<&str>,
        message: impl Into<String>,
        decline_code: Option<&str>,
    ) -> ApiError {
        ApiError {
            code: code.unwrap_or(UNKNOWN_API_ERROR_CODE).to_string(),
            message: message.into(),
            decline_code: decline_code.unwrap_or_default().to_string(),
            error_type: None,
            charge: None,
            doc_url: None,
            param: None,
        }
    }
}

/// The lower-level cause of a failure, reduced to what survives the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UnderlyingError {
    pub code: String,
    pub message: String,
}

impl UnderlyingError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> UnderlyingError {
        UnderlyingError {
            code: code.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Guard Helpers
// =============================================================================

/// Requires an in-flight cancelable operation to exist before canceling it.
///
/// ## Example
/// ```rust
/// use stripe_terminal_bridge::require_cancelable;
///
/// let pending: Option<&str> = None;
/// let err = require_cancelable(pending, "no discovery to cancel").unwrap_err();
/// assert_eq!(err.code.as_str(), "CANCEL_FAILED");
/// ```
pub fn require_cancelable<T>(
    cancelable: Option<T>,
    message: impl Into<String>,
) -> Result<T, TerminalError> {
    cancelable.ok_or_else(|| TerminalError::new(ErrorCode::CancelFailed, message))
}

/// Rejects a new operation while another is still in flight.
pub fn ensure_not_busy<T>(
    current: Option<&T>,
    message: impl Into<String>,
) -> Result<(), TerminalError> {
    match current {
        Some(_) => Err(TerminalError::new(ErrorCode::ReaderBusy, message)),
        None => Ok(()),
    }
}

/// Requires a parameter the operation cannot proceed without.
pub fn require_param<T>(value: Option<T>, message: impl Into<String>) -> Result<T, TerminalError> {
    value.ok_or_else(|| TerminalError::new(ErrorCode::InvalidRequiredParameter, message))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_format() {
        let err = TerminalError::new(ErrorCode::ReaderBusy, "collect already in progress");
        assert_eq!(err.to_string(), "[READER_BUSY] collect already in progress");
    }

    #[test]
    fn test_builder_attachments() {
        let err = TerminalError::new(ErrorCode::DeclinedByStripeApi, "Payment was declined")
            .with_api_error(ApiError::new(
                Some("card_declined"),
                "Your card was declined.",
                Some("generic_decline"),
            ))
            .with_payment_intent(json!({ "id": "pi_test" }));

        assert_eq!(err.api_error.as_ref().map(|a| a.code.as_str()), Some("card_declined"));
        assert_eq!(err.payment_intent, Some(json!({ "id": "pi_test" })));
        assert_eq!(err.setup_intent, None);
    }

    #[test]
    fn test_api_error_required_field_fallbacks() {
        let api = ApiError::new(None, "Something went wrong", None);
        assert_eq!(api.code, "unknown_api_error_code");
        assert_eq!(api.decline_code, "");
    }

    #[test]
    fn test_api_error_omits_absent_optionals_on_wire() {
        let api = ApiError::new(Some("card_declined"), "Your card was declined.", None);
        let value = serde_json::to_value(&api).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.get("code"), Some(&json!("card_declined")));
        assert_eq!(obj.get("declineCode"), Some(&json!("")));
        assert!(!obj.contains_key("type"));
        assert!(!obj.contains_key("charge"));
        assert!(!obj.contains_key("docUrl"));
        assert!(!obj.contains_key("param"));
    }

    #[test]
    fn test_api_error_wire_field_names() {
        let api = ApiError {
            error_type: Some("card_error".to_string()),
            doc_url: Some("https://stripe.com/docs".to_string()),
            ..ApiError::new(Some("card_declined"), "declined", Some("generic_decline"))
        };
        let value = serde_json::to_value(&api).unwrap();

        assert_eq!(value["type"], json!("card_error"));
        assert_eq!(value["docUrl"], json!("https://stripe.com/docs"));
    }

    #[test]
    fn test_require_cancelable() {
        assert_eq!(require_cancelable(Some(7), "unused"), Ok(7));

        let err = require_cancelable::<i32>(None, "no discovery to cancel").unwrap_err();
        assert_eq!(err.code, ErrorCode::CancelFailed);
        assert_eq!(err.message, "no discovery to cancel");
    }

    #[test]
    fn test_ensure_not_busy() {
        assert_eq!(ensure_not_busy::<&str>(None, "unused"), Ok(()));

        let err = ensure_not_busy(Some(&"collecting"), "already collecting").unwrap_err();
        assert_eq!(err.code, ErrorCode::ReaderBusy);
    }

    #[test]
    fn test_require_param() {
        assert_eq!(require_param(Some("tok_123"), "unused"), Ok("tok_123"));

        let err = require_param::<&str>(None, "connection token is required").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequiredParameter);
    }
}
