//! # stripe-terminal-bridge: Native-Module Error Helpers
//!
//! The producing side of the Terminal error contract: the typed failure the
//! SDK wrapper raises, and the wire envelopes that carry it across the
//! bridge to the JS application.
//!
//! ## Both Sides of the Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  PRODUCE (this crate)                 CONSUME (stripe-terminal-core)   │
//! │  ────────────────────                 ──────────────────────────────   │
//! │  TerminalError                        convert_native_error()           │
//! │       │                                       ▲                         │
//! │       ▼                                       │                         │
//! │  error_payload() ──► { "error": ... } ──► bridge delivery              │
//! │                                                                         │
//! │  Everything this crate emits is, by construction, a shape the core    │
//! │  normalizer resolves without taking a single fallback.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - [`TerminalError`], [`ApiError`], [`UnderlyingError`], guards
//! - [`payload`] - failure envelope construction

pub mod error;
pub mod payload;

pub use error::{
    ensure_not_busy, require_cancelable, require_param, ApiError, TerminalError, UnderlyingError,
    UNKNOWN_API_ERROR_CODE,
};
pub use payload::{
    error_payload, unexpected_error_payload, ERROR_KEY, NON_STRIPE_ERROR_NAME,
    UNKNOWN_ERROR_MESSAGE,
};
