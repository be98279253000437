//! # Metadata Keys
//!
//! Known keys for platform-specific entries in
//! [`StripeError::metadata`](crate::StripeError::metadata). Presence depends
//! on the error and the platform; applications should treat every lookup as
//! optional.
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use stripe_terminal_core::{convert_native_error, metadata_keys};
//!
//! let err = convert_native_error(&json!({
//!     "code": "STRIPE_API_ERROR",
//!     "metadata": { "httpStatusCode": 429 },
//! }));
//! let status = err.metadata.get(metadata_keys::HTTP_STATUS_CODE);
//! assert_eq!(status, Some(&json!(429)));
//! ```

// --- iOS: Tap to Pay ---

/// Date until which the device is banned (ISO 8601 string).
pub const DEVICE_BANNED_UNTIL_DATE: &str = "deviceBannedUntilDate";

/// Reason why Tap to Pay reader preparation failed.
pub const PREPARE_FAILED_REASON: &str = "prepareFailedReason";

// --- iOS: Stripe API calls ---

/// HTTP status code from the Stripe API response.
pub const HTTP_STATUS_CODE: &str = "httpStatusCode";

/// Stripe API request ID, for support tooling.
pub const STRIPE_API_REQUEST_ID: &str = "stripeAPIRequestId";

/// Detailed failure reason from the Stripe API.
pub const STRIPE_API_FAILURE_REASON: &str = "stripeAPIFailureReason";

// --- iOS: reader / offline ---

/// Message displayed on the reader device.
pub const READER_MESSAGE: &str = "readerMessage";

/// Reason an offline payment was declined.
pub const OFFLINE_DECLINE_REASON: &str = "offlineDeclineReason";

// --- iOS: NSError envelope fields ---

/// The NSError domain the failure originated in.
pub const DOMAIN: &str = "domain";

/// Whether the NSError came from the Terminal SDK itself.
pub const IS_STRIPE_ERROR: &str = "isStripeError";

/// The raw platform code when no unified mapping existed.
pub const UNMAPPED_ERROR_CODE: &str = "unmappedErrorCode";

/// Localized failure reason from the NSError.
pub const LOCALIZED_FAILURE_REASON: &str = "localizedFailureReason";

/// Localized recovery suggestion from the NSError.
pub const LOCALIZED_RECOVERY_SUGGESTION: &str = "localizedRecoverySuggestion";
