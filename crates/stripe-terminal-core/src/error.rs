//! # Canonical Error Type
//!
//! The single error shape the JS application sees for every Terminal
//! failure, regardless of which platform produced it.
//!
//! ## Why a Name String Instead of a Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Identity Across the Bridge                              │
//! │                                                                         │
//! │  Native module                Bridge               JS application       │
//! │  ─────────────                ──────               ──────────────       │
//! │  TerminalError ──serialize──► generic ──deliver──► plain object         │
//! │                               values                                    │
//! │                                                                         │
//! │  Class identity does not survive serialization. The only thing that    │
//! │  does is data - so the discriminator is data: name: "StripeError",     │
//! │  checked structurally by is_stripe_error().                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! On the Rust side the same boundary decision is a sum type: a caught
//! bridge value is split once, at the edge, into [`RaisedError::Stripe`] or
//! [`RaisedError::Other`] - never duck-typed downstream.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::codes::ErrorCode;
use crate::diagnostics;
use crate::normalize::is_stripe_error;

/// The discriminator value carried by every canonical error.
pub const STRIPE_ERROR_NAME: &str = "StripeError";

// =============================================================================
// StripeError
// =============================================================================

/// One failure from any Terminal operation, in a single cross-platform shape.
///
/// ## Field Guarantees
/// - `metadata` is always a mapping (possibly empty), never null
/// - `native_error_code` is always non-empty (defaults to `code`)
/// - the serialized form always carries `name: "StripeError"`
///
/// ## Why `code` Is a String, Not [`ErrorCode`]
/// The registry and the native SDKs version independently. A newer SDK may
/// emit a code the registry has not caught up with; it must reach the
/// application unchanged. Registry membership is advisory only (a
/// development-build warning), so the field cannot be the closed enum.
#[derive(Debug, Clone, PartialEq)]
pub struct StripeError {
    /// Unified error code string (usually one of [`ErrorCode`]).
    pub code: String,

    /// Human-readable description; falls back to `code` upstream when the
    /// native error carried none.
    pub message: String,

    /// The original platform-specific code, preserved for diagnostics.
    pub native_error_code: String,

    /// Open, platform-specific extra fields (decline codes, HTTP status,
    /// reader messages). See [`crate::metadata_keys`] for the known keys.
    pub metadata: Map<String, Value>,

    /// The payment intent active when the error occurred, if the native
    /// error included one. Used for recovery flows (retry, cancel).
    pub payment_intent: Option<Value>,

    /// The setup intent active when the error occurred, if included.
    pub setup_intent: Option<Value>,

    /// The refund in flight when the error occurred, if included.
    pub refund: Option<Value>,

    /// Structured Stripe API error details, if the native error carried them.
    pub api_error: Option<Value>,

    /// The lower-level cause reported by the platform, if any.
    pub underlying_error: Option<Value>,
}

/// Construction record for [`StripeError::new`].
///
/// Only `code` and `message` are required. Every other field is an explicit
/// opt-in: `Default` leaves them absent, so a bare construction can never
/// leak a payment or setup intent the caller did not name.
#[derive(Debug, Clone, Default)]
pub struct StripeErrorInit {
    pub code: String,
    pub message: String,
    pub native_error_code: Option<String>,
    pub metadata: Option<Map<String, Value>>,
    pub payment_intent: Option<Value>,
    pub setup_intent: Option<Value>,
    pub refund: Option<Value>,
    pub api_error: Option<Value>,
    pub underlying_error: Option<Value>,
}

impl StripeError {
    /// Creates a canonical error, applying the contract's defaults.
    ///
    /// - warns (development builds only) when `code` is not in the registry,
    ///   then uses it verbatim - warnings are advisory, not enforcing
    /// - empty `message` falls back to the generic fallback code string
    /// - absent `native_error_code` falls back to `code`
    /// - absent `metadata` becomes an empty mapping
    ///
    /// The result always passes [`is_stripe_error`] once serialized.
    ///
    /// ## Example
    /// ```rust
    /// use stripe_terminal_core::{StripeError, StripeErrorInit};
    ///
    /// let err = StripeError::new(StripeErrorInit {
    ///     code: "READER_BUSY".to_string(),
    ///     message: "Reader is busy".to_string(),
    ///     ..Default::default()
    /// });
    /// assert_eq!(err.native_error_code, "READER_BUSY");
    /// assert!(err.metadata.is_empty());
    /// ```
    pub fn new(init: StripeErrorInit) -> StripeError {
        diagnostics::warn_unknown_code(&init.code);

        let message = if init.message.is_empty() {
            ErrorCode::UnexpectedSdkError.as_str().to_string()
        } else {
            init.message
        };
        let native_error_code = init.native_error_code.unwrap_or_else(|| init.code.clone());

        StripeError {
            code: init.code,
            message,
            native_error_code,
            metadata: init.metadata.unwrap_or_default(),
            payment_intent: init.payment_intent,
            setup_intent: init.setup_intent,
            refund: init.refund,
            api_error: init.api_error,
            underlying_error: init.underlying_error,
        }
    }

    /// Recovers a typed error from a bridge value, if it has the canonical
    /// shape. Partial matches yield `None` - see [`is_stripe_error`].
    pub fn from_value(value: &Value) -> Option<StripeError> {
        if !is_stripe_error(value) {
            return None;
        }
        let obj = value.as_object()?;

        Some(StripeError {
            code: obj.get("code")?.as_str()?.to_string(),
            message: obj.get("message")?.as_str()?.to_string(),
            native_error_code: obj.get("nativeErrorCode")?.as_str()?.to_string(),
            metadata: obj.get("metadata")?.as_object()?.clone(),
            payment_intent: obj.get("paymentIntent").cloned(),
            setup_intent: obj.get("setupIntent").cloned(),
            refund: obj.get("refund").cloned(),
            api_error: obj.get("apiError").cloned(),
            underlying_error: obj.get("underlyingError").cloned(),
        })
    }
}

/// Display shows the code and message, like the wire form a developer would
/// see in a JS console.
impl fmt::Display for StripeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for StripeError {}

/// Serializes with the constant `name` discriminator first and absent
/// optional fields omitted entirely (no `null` members on the wire).
impl Serialize for StripeError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let optional = [
            ("paymentIntent", &self.payment_intent),
            ("setupIntent", &self.setup_intent),
            ("refund", &self.refund),
            ("apiError", &self.api_error),
            ("underlyingError", &self.underlying_error),
        ];
        let len = 5 + optional.iter().filter(|(_, v)| v.is_some()).count();

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("name", STRIPE_ERROR_NAME)?;
        map.serialize_entry("code", &self.code)?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry("nativeErrorCode", &self.native_error_code)?;
        map.serialize_entry("metadata", &self.metadata)?;
        for (key, value) in optional {
            if let Some(value) = value {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

// =============================================================================
// Boundary Classification
// =============================================================================

/// A value raised across the bridge, classified once at the boundary.
///
/// ## Usage
/// ```rust
/// use serde_json::json;
/// use stripe_terminal_core::RaisedError;
///
/// match RaisedError::classify(json!({ "something": "else" })) {
///     RaisedError::Stripe(err) => println!("terminal failure: {}", err.code),
///     RaisedError::Other(value) => println!("not ours: {value}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RaisedError {
    /// A well-formed canonical Terminal error.
    Stripe(StripeError),

    /// Anything else - a host runtime error, a plain thrown value, garbage.
    /// Carried losslessly for the caller's own handling.
    Other(Value),
}

impl RaisedError {
    /// Splits a caught bridge value by the structural shape check.
    pub fn classify(value: Value) -> RaisedError {
        match StripeError::from_value(&value) {
            Some(err) => RaisedError::Stripe(err),
            None => RaisedError::Other(value),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
