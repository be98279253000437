//! # Error Normalizer
//!
//! Converts whatever the native bridge raises into exactly one well-formed
//! [`StripeError`], so application code never defensively checks fields.
//!
//! ## The Two Native Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Raw Native Error Shapes                              │
//! │                                                                         │
//! │  Android (flat)                    iOS (nested NSError convention)     │
//! │  ──────────────                    ────────────────────────────────    │
//! │  {                                 {                                    │
//! │    code: "READER_BUSY",              message: "Bluetooth failed",      │
//! │    message: "...",                   userInfo: {                       │
//! │    metadata: { ... }                   code: "BLUETOOTH_ERROR",        │
//! │  }                                     nativeErrorCode: "1200",        │
//! │                                        metadata: { ... },              │
//! │                                        paymentIntent: { ... }          │
//! │                                      }                                  │
//! │                                    }                                    │
//! │                                                                         │
//! │  Either shape may be partially populated - or the value may be null,   │
//! │  an array, a number, or any other garbage the bridge lets through.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Field Resolution Order
//! One ordered (location, fallback location, default) rule per field, so the
//! precedence stays auditable and testable field by field:
//!
//! | field             | first                    | then             | default        |
//! |-------------------|--------------------------|------------------|----------------|
//! | `code`            | top-level `code`         | `userInfo.code`  | generic code   |
//! | `nativeErrorCode` | `userInfo.nativeErrorCode` | resolved `code` | -              |
//! | `message`         | top-level `message`      | resolved `code`  | -              |
//! | `metadata`        | top-level object         | `userInfo` object | empty mapping |
//! | intents, refund, apiError, underlyingError | `userInfo` only | - | absent       |
//!
//! `nativeErrorCode` is deliberately nested-first, unlike `code`: flat-shape
//! producers write `code` and `nativeErrorCode` from the same source, so only
//! the nested shape ever carries a distinct native code.
//!
//! [`convert_native_error`] is total: every input yields a valid result, and
//! no caller needs error handling around normalization.

use serde_json::{Map, Value};

use crate::codes::ErrorCode;
use crate::error::{StripeError, StripeErrorInit, STRIPE_ERROR_NAME};

// =============================================================================
// Shape Check
// =============================================================================

/// Structural check for the canonical error shape.
///
/// True only when the value is an object with `name == "StripeError"`,
/// string `message`/`code`/`nativeErrorCode`, and an object `metadata`.
/// Partial matches are rejected outright - a coincidentally similar shape
/// must not be mistaken for a Terminal error.
///
/// This is the only sanctioned way to distinguish a Terminal error from any
/// other raised value; nothing downstream relies on class identity.
pub fn is_stripe_error(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    obj.get("name").and_then(Value::as_str) == Some(STRIPE_ERROR_NAME)
        && obj.get("message").is_some_and(Value::is_string)
        && obj.get("code").is_some_and(Value::is_string)
        && obj.get("nativeErrorCode").is_some_and(Value::is_string)
        && obj.get("metadata").is_some_and(Value::is_object)
}

// =============================================================================
// Normalization
// =============================================================================

/// Normalizes a raw bridge value into a canonical [`StripeError`].
///
/// Total function: null, primitives, arrays and arbitrarily malformed
/// objects all collapse to a valid result (worst case: the generic
/// `UNEXPECTED_SDK_ERROR` on every string field with empty metadata).
/// Never panics, never rejects.
///
/// Sensitive domain references (`paymentIntent`, `setupIntent`, `refund`)
/// are taken solely from the nested `userInfo` - the trusted native
/// convention - never from the top level.
pub fn convert_native_error(raw: &Value) -> StripeError {
    let fallback = ErrorCode::UnexpectedSdkError.as_str();

    let Some(obj) = raw.as_object() else {
        return StripeError::new(StripeErrorInit {
            code: fallback.to_string(),
            message: fallback.to_string(),
            ..Default::default()
        });
    };

    let user_info = extract_user_info(obj);

    // A present-but-null top level falls through to userInfo; any other
    // present top-level value wins, even one that then fails the string
    // check and resolves to the fallback constant.
    let code = string_or_fallback(
        non_null(obj.get("code")).or_else(|| user_info.and_then(|u| u.get("code"))),
        fallback,
    );
    let native_error_code =
        string_or_fallback(user_info.and_then(|u| u.get("nativeErrorCode")), &code);
    let message = string_or_fallback(obj.get("message"), &code);
    let metadata = extract_metadata(obj, user_info);

    StripeError::new(StripeErrorInit {
        code,
        message,
        native_error_code: Some(native_error_code),
        metadata: Some(metadata),
        payment_intent: nested_reference(user_info, "paymentIntent"),
        setup_intent: nested_reference(user_info, "setupIntent"),
        refund: nested_reference(user_info, "refund"),
        api_error: nested_reference(user_info, "apiError"),
        underlying_error: nested_reference(user_info, "underlyingError"),
    })
}

// =============================================================================
// Extraction Helpers
// =============================================================================

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// A value counts as a string only if it is a JSON string whose trimmed form
/// is non-empty; the untrimmed original is kept.
fn string_or_fallback(value: Option<&Value>, fallback: &str) -> String {
    match value.and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => fallback.to_string(),
    }
}

/// The iOS NSError convention nests error details under `userInfo`.
/// Absence is not an error; a non-object `userInfo` is ignored.
fn extract_user_info(obj: &Map<String, Value>) -> Option<&Map<String, Value>> {
    obj.get("userInfo").and_then(Value::as_object)
}

/// Each location is shape-checked independently: a non-object at one
/// location is discarded in favor of the next, never kept.
fn extract_metadata(
    obj: &Map<String, Value>,
    user_info: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    obj.get("metadata")
        .and_then(Value::as_object)
        .or_else(|| {
            user_info
                .and_then(|u| u.get("metadata"))
                .and_then(Value::as_object)
        })
        .cloned()
        .unwrap_or_default()
}

fn nested_reference(user_info: Option<&Map<String, Value>>, key: &str) -> Option<Value> {
    user_info.and_then(|u| non_null(u.get(key))).cloned()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -------------------------------------------------------------------------
    // is_stripe_error
    // -------------------------------------------------------------------------

    fn valid_shape() -> Value {
        json!({
            "name": "StripeError",
            "message": "Payment failed",
            "code": "DECLINED_BY_STRIPE_API",
            "nativeErrorCode": "4000",
            "metadata": { "declineCode": "generic_decline" },
        })
    }

    #[test]
    fn test_accepts_valid_shape() {
        assert!(is_stripe_error(&valid_shape()));
    }

    #[test]
    fn test_rejects_null_and_primitives() {
        assert!(!is_stripe_error(&Value::Null));
        assert!(!is_stripe_error(&json!("string")));
        assert!(!is_stripe_error(&json!(123)));
        assert!(!is_stripe_error(&json!(true)));
        assert!(!is_stripe_error(&json!([])));
    }

    #[test]
    fn test_rejects_any_missing_property() {
        for missing in ["name", "message", "code", "nativeErrorCode", "metadata"] {
            let mut value = valid_shape();
            value.as_object_mut().unwrap().remove(missing);
            assert!(!is_stripe_error(&value), "missing {missing} must reject");
        }
    }

    #[test]
    fn test_rejects_any_mistyped_property() {
        for (key, bad) in [
            ("name", json!(123)),
            ("message", json!(123)),
            ("code", json!(123)),
            ("nativeErrorCode", json!(123)),
            ("metadata", json!("not-an-object")),
            ("metadata", json!(null)),
        ] {
            let mut value = valid_shape();
            value.as_object_mut().unwrap()[key] = bad;
            assert!(!is_stripe_error(&value), "mistyped {key} must reject");
        }
    }

    #[test]
    fn test_rejects_wrong_name_value() {
        let mut value = valid_shape();
        value["name"] = json!("NotStripeError");
        assert!(!is_stripe_error(&value));
    }

    // -------------------------------------------------------------------------
    // convert_native_error: the two native shapes
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalizes_flat_android_shape() {
        let raw = json!({
            "code": "DECLINED_BY_STRIPE_API",
            "message": "Payment was declined",
            "metadata": {
                "declineCode": "generic_decline",
                "apiError": { "code": "card_declined", "message": "Your card was declined." },
            },
        });

        let err = convert_native_error(&raw);

        assert_eq!(err.code, "DECLINED_BY_STRIPE_API");
        assert_eq!(err.message, "Payment was declined");
        assert_eq!(err.native_error_code, "DECLINED_BY_STRIPE_API");
        assert_eq!(
            Value::Object(err.metadata),
            json!({
                "declineCode": "generic_decline",
                "apiError": { "code": "card_declined", "message": "Your card was declined." },
            })
        );
    }

    #[test]
    fn test_normalizes_nested_ios_shape() {
        let raw = json!({
            "userInfo": {
                "code": "BLUETOOTH_ERROR",
                "nativeErrorCode": "1200",
                "metadata": { "domain": "com.stripe-terminal", "isStripeError": true },
                "paymentIntent": { "id": "pi_test" },
            },
            "message": "Bluetooth connection failed",
        });

        let err = convert_native_error(&raw);

        assert_eq!(err.code, "BLUETOOTH_ERROR");
        assert_eq!(err.message, "Bluetooth connection failed");
        assert_eq!(err.native_error_code, "1200");
        assert_eq!(
            Value::Object(err.metadata),
            json!({ "domain": "com.stripe-terminal", "isStripeError": true })
        );
        assert_eq!(err.payment_intent, Some(json!({ "id": "pi_test" })));
    }

    // -------------------------------------------------------------------------
    // convert_native_error: fallback chains
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_object_takes_every_fallback() {
        let err = convert_native_error(&json!({}));

        assert_eq!(err.code, "UNEXPECTED_SDK_ERROR");
        assert_eq!(err.message, "UNEXPECTED_SDK_ERROR");
        assert_eq!(err.native_error_code, "UNEXPECTED_SDK_ERROR");
        assert!(err.metadata.is_empty());
        assert_eq!(err.payment_intent, None);
        assert_eq!(err.setup_intent, None);
    }

    #[test]
    fn test_null_input_takes_every_fallback() {
        let err = convert_native_error(&Value::Null);

        assert_eq!(err.code, "UNEXPECTED_SDK_ERROR");
        assert_eq!(err.message, "UNEXPECTED_SDK_ERROR");
        assert_eq!(err.native_error_code, "UNEXPECTED_SDK_ERROR");
        assert!(err.metadata.is_empty());
    }

    #[test]
    fn test_top_level_wins_over_user_info() {
        let raw = json!({
            "code": "DIRECT_CODE",
            "message": "Direct message",
            "metadata": { "direct": true },
            "userInfo": {
                "code": "USERINFO_CODE",
                "nativeErrorCode": "userinfo_native",
                "metadata": { "userInfo": true },
            },
        });

        let err = convert_native_error(&raw);

        assert_eq!(err.code, "DIRECT_CODE");
        assert_eq!(err.message, "Direct message");
        assert_eq!(Value::Object(err.metadata), json!({ "direct": true }));
        // nativeErrorCode alone is nested-first
        assert_eq!(err.native_error_code, "userinfo_native");
    }

    #[test]
    fn test_nested_code_used_when_top_level_absent() {
        let err = convert_native_error(&json!({ "userInfo": { "code": "READER_BUSY" } }));
        assert_eq!(err.code, "READER_BUSY");
    }

    #[test]
    fn test_null_top_level_code_falls_through_to_nested() {
        let err = convert_native_error(&json!({
            "code": null,
            "userInfo": { "code": "READER_BUSY" },
        }));
        assert_eq!(err.code, "READER_BUSY");
    }

    #[test]
    fn test_non_string_top_level_code_masks_nested() {
        // Present-and-non-null top level wins the slot, then fails the
        // string check and resolves to the generic constant.
        let err = convert_native_error(&json!({
            "code": 1200,
            "userInfo": { "code": "READER_BUSY" },
        }));
        assert_eq!(err.code, "UNEXPECTED_SDK_ERROR");
    }

    #[test]
    fn test_blank_code_takes_fallback() {
        let err = convert_native_error(&json!({ "code": "   " }));
        assert_eq!(err.code, "UNEXPECTED_SDK_ERROR");
    }

    #[test]
    fn test_native_error_code_falls_back_to_code() {
        let err = convert_native_error(&json!({ "code": "READER_BUSY", "message": "Reader is busy" }));
        assert_eq!(err.native_error_code, "READER_BUSY");
    }

    #[test]
    fn test_message_falls_back_to_code() {
        let err = convert_native_error(&json!({ "code": "READER_BUSY" }));
        assert_eq!(err.message, "READER_BUSY");
    }

    #[test]
    fn test_non_object_metadata_falls_through_to_nested() {
        let err = convert_native_error(&json!({
            "code": "READER_BUSY",
            "metadata": "not-an-object",
            "userInfo": { "metadata": { "readerMessage": "Remove card" } },
        }));
        assert_eq!(
            Value::Object(err.metadata),
            json!({ "readerMessage": "Remove card" })
        );
    }

    #[test]
    fn test_metadata_never_null() {
        for raw in [
            json!({}),
            json!({ "metadata": null }),
            json!({ "metadata": 42 }),
            json!({ "userInfo": { "metadata": "bad" } }),
        ] {
            let err = convert_native_error(&raw);
            assert!(err.metadata.is_empty(), "input {raw} must yield empty metadata");
        }
    }

    // -------------------------------------------------------------------------
    // convert_native_error: sensitive references
    // -------------------------------------------------------------------------

    #[test]
    fn test_setup_intent_taken_from_user_info() {
        let err = convert_native_error(&json!({
            "code": "COLLECT_INPUTS_TIMED_OUT",
            "message": "Setup intent collection timed out",
            "userInfo": { "setupIntent": { "id": "seti_test" } },
        }));
        assert_eq!(err.setup_intent, Some(json!({ "id": "seti_test" })));
    }

    #[test]
    fn test_refund_taken_from_user_info() {
        let err = convert_native_error(&json!({
            "code": "STRIPE_API_ERROR",
            "userInfo": { "refund": { "id": "re_test" } },
        }));
        assert_eq!(err.refund, Some(json!({ "id": "re_test" })));
    }

    #[test]
    fn test_top_level_intents_are_ignored() {
        // Domain references are only trusted via the nested native
        // convention; a top-level one never reaches the output.
        let err = convert_native_error(&json!({
            "code": "DECLINED_BY_STRIPE_API",
            "paymentIntent": { "id": "pi_untrusted" },
            "setupIntent": { "id": "seti_untrusted" },
        }));
        assert_eq!(err.payment_intent, None);
        assert_eq!(err.setup_intent, None);
    }

    #[test]
    fn test_api_error_and_underlying_error_surface_from_user_info() {
        let err = convert_native_error(&json!({
            "code": "STRIPE_API_ERROR",
            "message": "API error occurred",
            "userInfo": {
                "apiError": { "code": "rate_limit", "message": "Too many requests" },
                "underlyingError": { "code": "NetworkError", "message": "Connection timeout" },
            },
        }));
        assert_eq!(
            err.api_error,
            Some(json!({ "code": "rate_limit", "message": "Too many requests" }))
        );
        assert_eq!(
            err.underlying_error,
            Some(json!({ "code": "NetworkError", "message": "Connection timeout" }))
        );
    }

    #[test]
    fn test_complex_nested_metadata_is_preserved() {
        let raw = json!({
            "code": "STRIPE_API_ERROR",
            "message": "API error occurred",
            "metadata": {
                "apiError": { "code": "rate_limit", "message": "Too many requests", "param": "amount" },
                "underlyingError": { "code": "NetworkError", "message": "Connection timeout" },
            },
        });
        let err = convert_native_error(&raw);
        assert_eq!(Value::Object(err.metadata), raw["metadata"]);
    }

    // -------------------------------------------------------------------------
    // Totality
    // -------------------------------------------------------------------------

    #[test]
    fn test_every_input_normalizes_to_a_valid_shape() {
        let inputs = [
            Value::Null,
            json!(0),
            json!(-1.5),
            json!(""),
            json!("READER_BUSY"),
            json!(false),
            json!([]),
            json!([{ "code": "READER_BUSY" }]),
            json!({}),
            json!({ "userInfo": null }),
            json!({ "userInfo": [] }),
            json!({ "userInfo": { "code": 42, "metadata": [1, 2, 3] } }),
            json!({ "code": { "deeply": { "nested": "garbage" } } }),
        ];

        for raw in inputs {
            let err = convert_native_error(&raw);
            let value = serde_json::to_value(&err).unwrap();
            assert!(is_stripe_error(&value), "input {raw} must normalize");
        }
    }
}
