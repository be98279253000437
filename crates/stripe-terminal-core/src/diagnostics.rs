//! # Diagnostics
//!
//! Development-only advisory warnings for the error contract.
//!
//! The registry and the native SDKs evolve independently: a newer SDK can
//! emit a code this crate's [`ErrorCode`](crate::ErrorCode) registry has not
//! caught up with yet. That is not an error condition - the code is passed
//! through unchanged - but it is worth surfacing while developing, so the
//! registry can be updated.
//!
//! Warnings go through the `tracing` facade: hosts can redirect or silence
//! them with a subscriber without touching normalization logic. Release
//! builds skip the lookup entirely.

use crate::codes::ErrorCode;

/// Warns (development builds only) when a code string is not in the registry.
///
/// Never blocks, never fails: the warning is advisory, the code is used
/// verbatim either way.
pub fn warn_unknown_code(code: &str) {
    if cfg!(debug_assertions) && !ErrorCode::is_known(code) {
        tracing::warn!(
            code,
            "error code is not in the registry; consider updating ErrorCode"
        );
    }
}
