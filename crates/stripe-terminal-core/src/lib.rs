//! # stripe-terminal-core: Pure Error Contract for the Terminal Bridge
//!
//! This crate is the **single chokepoint** every Terminal failure passes
//! through on its way to application code. It contains no I/O - only the
//! error contract itself.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Stripe Terminal Bridge Architecture                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 JS Application (host runtime)                   │   │
//! │  │    connect ──► collect ──► confirm ──► catch (error handling)  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ bridge (generic value passing)         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ stripe-terminal-core (THIS CRATE) ★                │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌────────────┐  │   │
//! │  │   │   codes   │  │   error   │  │ normalize │  │ metadata_  │  │   │
//! │  │   │ ErrorCode │  │StripeError│  │ two-shape │  │ keys       │  │   │
//! │  │   │ registry  │  │RaisedError│  │ resolver  │  │ constants  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO HARDWARE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          Native SDK wrappers (iOS / Android, out of tree)       │   │
//! │  │        reader discovery, payment intents, firmware updates      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`codes`] - The unified error code registry
//! - [`error`] - [`StripeError`], the canonical cross-platform error shape
//! - [`normalize`] - Two-shape normalization with deterministic fallbacks
//! - [`metadata_keys`] - Known platform-specific metadata keys
//! - [`diagnostics`] - Development-only registry-drift warnings
//!
//! ## Design Principles
//!
//! 1. **Total normalization**: every raw value yields one valid error -
//!    application code never wraps normalization in error handling
//! 2. **No I/O**: hardware, network, and payment processing live in the
//!    wrapped native SDKs, never here
//! 3. **Advisory registry**: unknown codes warn in development and pass
//!    through unchanged - the registry lags native SDK releases by design
//! 4. **Explicit opt-in for sensitive fields**: a bare construction can
//!    never leak a payment or setup intent
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use stripe_terminal_core::{convert_native_error, is_stripe_error};
//!
//! // Whatever the native side raised...
//! let raw = json!({ "code": "READER_BUSY" });
//!
//! // ...normalizes to one well-formed error with deterministic fallbacks.
//! let err = convert_native_error(&raw);
//! assert_eq!(err.message, "READER_BUSY");
//! assert!(is_stripe_error(&serde_json::to_value(&err).unwrap()));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codes;
pub mod diagnostics;
pub mod error;
pub mod metadata_keys;
pub mod normalize;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stripe_terminal_core::StripeError` instead of
// `use stripe_terminal_core::error::StripeError`

pub use codes::{ErrorCode, UnknownErrorCode};
pub use error::{RaisedError, StripeError, StripeErrorInit, STRIPE_ERROR_NAME};
pub use normalize::{convert_native_error, is_stripe_error};
