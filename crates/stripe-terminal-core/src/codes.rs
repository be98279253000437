//! # Error Code Registry
//!
//! The closed enumeration of unified error code strings shared by both
//! native Terminal SDKs and the JS application.
//!
//! ## Where These Codes Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Unified Error Codes                                 │
//! │                                                                         │
//! │  iOS SDK                         Android SDK                            │
//! │  SCPError.readerBusy             TerminalErrorCode.READER_BUSY          │
//! │        │                                │                               │
//! │        └───────────┬────────────────────┘                               │
//! │                    ▼                                                    │
//! │          "READER_BUSY"  ◄── one wire string per failure, both          │
//! │                             platforms map into the same set            │
//! │                                                                         │
//! │  The JS application branches on these strings; it never sees a         │
//! │  platform-specific code except through `nativeErrorCode`.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registry Discipline
//! The registry is consulted for advisory validity warnings only - never for
//! control flow. A native SDK may ship codes this enum does not know yet;
//! normalization passes them through unchanged (see [`crate::normalize`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Error Code Enum
// =============================================================================

/// Unified error codes for Terminal operations.
///
/// Wire form is the SCREAMING_SNAKE_CASE string (`"READER_BUSY"`), identical
/// on both platforms. Grouping below follows the native mapping tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    // =========================================================================
    // Integration Errors
    // =========================================================================
    CancelFailed,
    NotConnectedToReader,
    AlreadyConnectedToReader,
    BluetoothPermissionDenied,
    ConfirmInvalidPaymentIntent,
    ConfirmInvalidSetupIntent,
    InvalidClientSecret,
    UnsupportedOperation,
    UnexpectedOperation,
    UnsupportedSdk,
    UsbPermissionDenied,
    MissingPrerequisite,
    MissingRequiredParameter,
    InvalidRequiredParameter,
    InvalidTipParameter,
    TapToPayLibraryNotIncluded,
    TapToPayUnsupportedDevice,
    TapToPayUnsupportedAndroidVersion,
    TapToPayDeviceTampered,
    TapToPayInsecureEnvironment,
    TapToPayDebugNotSupported,
    TapToPayUnsupportedProcessor,
    OfflineModeUnsupportedAndroidVersion,

    // =========================================================================
    // User Errors
    // =========================================================================
    Canceled,
    LocationServicesDisabled,
    BluetoothScanTimedOut,
    BluetoothLowEnergyUnsupported,
    ReaderSoftwareUpdateFailedBatteryLow,
    ReaderSoftwareUpdateFailedInterrupted,
    CardInsertNotRead,
    CardSwipeNotRead,
    CardReadTimedOut,
    CardRemoved,
    CustomerConsentRequired,
    CardLeftInReader,
    UsbDiscoveryTimedOut,
    FeatureNotEnabledOnAccount,

    // =========================================================================
    // Reader / Hardware Errors
    // =========================================================================
    ReaderBusy,
    ReaderCommunicationError,
    ReaderTampered,
    BluetoothError,
    BluetoothDisconnected,
    BluetoothReconnectStarted,
    UsbDisconnected,
    UsbReconnectStarted,
    ReaderConnectedToAnotherDevice,
    ReaderBatteryCriticallyLow,
    ReaderSoftwareUpdateFailed,
    ReaderSoftwareUpdateFailedReaderError,
    ReaderSoftwareUpdateFailedServerError,
    TapToPayNfcDisabled,
    UnsupportedReaderVersion,
    GenericReaderError,

    // =========================================================================
    // Unexpected Errors
    // =========================================================================
    UnexpectedSdkError,

    // =========================================================================
    // Payment Errors
    // =========================================================================
    DeclinedByStripeApi,
    DeclinedByReader,

    // =========================================================================
    // Network Errors
    // =========================================================================
    RequestTimedOut,
    StripeApiConnectionError,
    StripeApiError,
    StripeApiResponseDecodingError,
    ConnectionTokenProviderError,
    SessionExpired,
    AndroidApiLevelError,

    // =========================================================================
    // Offline / Account / Currency Constraints
    // =========================================================================
    AmountExceedsMaxOfflineAmount,
    OfflinePaymentsDatabaseTooLarge,
    ReaderConnectionNotAvailableOffline,
    LocationConnectionNotAvailableOffline,
    NoLastSeenAccount,
    InvalidOfflineCurrency,
    CardSwipeNotAvailable,
    InteracNotSupportedOffline,
    OnlinePinNotSupportedOffline,
    MobileWalletNotSupportedOnSetupIntents,
    OfflineAndCardExpired,
    OfflineTransactionDeclined,
    OfflineCollectAndConfirmMismatch,
    OfflineTestmodePaymentInLivemode,
    OfflineLivemodePaymentInTestmode,
    OfflinePaymentIntentNotFound,
    MissingEmvData,
    ConnectionTokenProviderErrorWhileForwarding,
    AccountIdMismatchWhileForwarding,
    ForceOfflineWithFeatureDisabled,
    NotConnectedToInternetAndRequireOnlineSet,
    TestCardInLivemode,

    // =========================================================================
    // Collect Inputs Errors
    // =========================================================================
    CollectInputsApplicationError,
    CollectInputsTimedOut,
    CollectInputsInvalidParameter,
    CollectInputsUnsupported,

    // =========================================================================
    // Reader Settings / Security / Surcharge Errors
    // =========================================================================
    ReaderSettingsError,
    ReaderMissingEncryptionKeys,
    InvalidSurchargeParameter,
    ReaderCommunicationSslError,
    AllowRedisplayInvalid,
    CanceledDueToIntegrationError,

    // =========================================================================
    // Printer Errors
    // =========================================================================
    PrinterBusy,
    PrinterPaperjam,
    PrinterOutOfPaper,
    PrinterCoverOpen,
    PrinterAbsent,
    PrinterUnavailable,
    PrinterError,
    InvalidMotoConfiguration,
}

impl ErrorCode {
    /// The complete registry, in declaration order.
    ///
    /// Exposed for iteration (exhaustiveness tests, tooling that checks the
    /// native mapping tables against this enum).
    pub const ALL: [ErrorCode; 103] = [
        // Integration
        ErrorCode::CancelFailed,
        ErrorCode::NotConnectedToReader,
        ErrorCode::AlreadyConnectedToReader,
        ErrorCode::BluetoothPermissionDenied,
        ErrorCode::ConfirmInvalidPaymentIntent,
        ErrorCode::ConfirmInvalidSetupIntent,
        ErrorCode::InvalidClientSecret,
        ErrorCode::UnsupportedOperation,
        ErrorCode::UnexpectedOperation,
        ErrorCode::UnsupportedSdk,
        ErrorCode::UsbPermissionDenied,
        ErrorCode::MissingPrerequisite,
        ErrorCode::MissingRequiredParameter,
        ErrorCode::InvalidRequiredParameter,
        ErrorCode::InvalidTipParameter,
        ErrorCode::TapToPayLibraryNotIncluded,
        ErrorCode::TapToPayUnsupportedDevice,
        ErrorCode::TapToPayUnsupportedAndroidVersion,
        ErrorCode::TapToPayDeviceTampered,
        ErrorCode::TapToPayInsecureEnvironment,
        ErrorCode::TapToPayDebugNotSupported,
        ErrorCode::TapToPayUnsupportedProcessor,
        ErrorCode::OfflineModeUnsupportedAndroidVersion,
        // User
        ErrorCode::Canceled,
        ErrorCode::LocationServicesDisabled,
        ErrorCode::BluetoothScanTimedOut,
        ErrorCode::BluetoothLowEnergyUnsupported,
        ErrorCode::ReaderSoftwareUpdateFailedBatteryLow,
        ErrorCode::ReaderSoftwareUpdateFailedInterrupted,
        ErrorCode::CardInsertNotRead,
        ErrorCode::CardSwipeNotRead,
        ErrorCode::CardReadTimedOut,
        ErrorCode::CardRemoved,
        ErrorCode::CustomerConsentRequired,
        ErrorCode::CardLeftInReader,
        ErrorCode::UsbDiscoveryTimedOut,
        ErrorCode::FeatureNotEnabledOnAccount,
        // Reader / hardware
        ErrorCode::ReaderBusy,
        ErrorCode::ReaderCommunicationError,
        ErrorCode::ReaderTampered,
        ErrorCode::BluetoothError,
        ErrorCode::BluetoothDisconnected,
        ErrorCode::BluetoothReconnectStarted,
        ErrorCode::UsbDisconnected,
        ErrorCode::UsbReconnectStarted,
        ErrorCode::ReaderConnectedToAnotherDevice,
        ErrorCode::ReaderBatteryCriticallyLow,
        ErrorCode::ReaderSoftwareUpdateFailed,
        ErrorCode::ReaderSoftwareUpdateFailedReaderError,
        ErrorCode::ReaderSoftwareUpdateFailedServerError,
        ErrorCode::TapToPayNfcDisabled,
        ErrorCode::UnsupportedReaderVersion,
        ErrorCode::GenericReaderError,
        // Unexpected
        ErrorCode::UnexpectedSdkError,
        // Payment
        ErrorCode::DeclinedByStripeApi,
        ErrorCode::DeclinedByReader,
        // Network
        ErrorCode::RequestTimedOut,
        ErrorCode::StripeApiConnectionError,
        ErrorCode::StripeApiError,
        ErrorCode::StripeApiResponseDecodingError,
        ErrorCode::ConnectionTokenProviderError,
        ErrorCode::SessionExpired,
        ErrorCode::AndroidApiLevelError,
        // Offline / account / currency
        ErrorCode::AmountExceedsMaxOfflineAmount,
        ErrorCode::OfflinePaymentsDatabaseTooLarge,
        ErrorCode::ReaderConnectionNotAvailableOffline,
        ErrorCode::LocationConnectionNotAvailableOffline,
        ErrorCode::NoLastSeenAccount,
        ErrorCode::InvalidOfflineCurrency,
        ErrorCode::CardSwipeNotAvailable,
        ErrorCode::InteracNotSupportedOffline,
        ErrorCode::OnlinePinNotSupportedOffline,
        ErrorCode::MobileWalletNotSupportedOnSetupIntents,
        ErrorCode::OfflineAndCardExpired,
        ErrorCode::OfflineTransactionDeclined,
        ErrorCode::OfflineCollectAndConfirmMismatch,
        ErrorCode::OfflineTestmodePaymentInLivemode,
        ErrorCode::OfflineLivemodePaymentInTestmode,
        ErrorCode::OfflinePaymentIntentNotFound,
        ErrorCode::MissingEmvData,
        ErrorCode::ConnectionTokenProviderErrorWhileForwarding,
        ErrorCode::AccountIdMismatchWhileForwarding,
        ErrorCode::ForceOfflineWithFeatureDisabled,
        ErrorCode::NotConnectedToInternetAndRequireOnlineSet,
        ErrorCode::TestCardInLivemode,
        // Collect inputs
        ErrorCode::CollectInputsApplicationError,
        ErrorCode::CollectInputsTimedOut,
        ErrorCode::CollectInputsInvalidParameter,
        ErrorCode::CollectInputsUnsupported,
        // Reader settings / security / surcharge
        ErrorCode::ReaderSettingsError,
        ErrorCode::ReaderMissingEncryptionKeys,
        ErrorCode::InvalidSurchargeParameter,
        ErrorCode::ReaderCommunicationSslError,
        ErrorCode::AllowRedisplayInvalid,
        ErrorCode::CanceledDueToIntegrationError,
        // Printer
        ErrorCode::PrinterBusy,
        ErrorCode::PrinterPaperjam,
        ErrorCode::PrinterOutOfPaper,
        ErrorCode::PrinterCoverOpen,
        ErrorCode::PrinterAbsent,
        ErrorCode::PrinterUnavailable,
        ErrorCode::PrinterError,
        ErrorCode::InvalidMotoConfiguration,
    ];

    /// Returns the wire string for this code.
    ///
    /// ## Example
    /// ```rust
    /// use stripe_terminal_core::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::ReaderBusy.as_str(), "READER_BUSY");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Integration
            ErrorCode::CancelFailed => "CANCEL_FAILED",
            ErrorCode::NotConnectedToReader => "NOT_CONNECTED_TO_READER",
            ErrorCode::AlreadyConnectedToReader => "ALREADY_CONNECTED_TO_READER",
            ErrorCode::BluetoothPermissionDenied => "BLUETOOTH_PERMISSION_DENIED",
            ErrorCode::ConfirmInvalidPaymentIntent => "CONFIRM_INVALID_PAYMENT_INTENT",
            ErrorCode::ConfirmInvalidSetupIntent => "CONFIRM_INVALID_SETUP_INTENT",
            ErrorCode::InvalidClientSecret => "INVALID_CLIENT_SECRET",
            ErrorCode::UnsupportedOperation => "UNSUPPORTED_OPERATION",
            ErrorCode::UnexpectedOperation => "UNEXPECTED_OPERATION",
            ErrorCode::UnsupportedSdk => "UNSUPPORTED_SDK",
            ErrorCode::UsbPermissionDenied => "USB_PERMISSION_DENIED",
            ErrorCode::MissingPrerequisite => "MISSING_PREREQUISITE",
            ErrorCode::MissingRequiredParameter => "MISSING_REQUIRED_PARAMETER",
            ErrorCode::InvalidRequiredParameter => "INVALID_REQUIRED_PARAMETER",
            ErrorCode::InvalidTipParameter => "INVALID_TIP_PARAMETER",
            ErrorCode::TapToPayLibraryNotIncluded => "TAP_TO_PAY_LIBRARY_NOT_INCLUDED",
            ErrorCode::TapToPayUnsupportedDevice => "TAP_TO_PAY_UNSUPPORTED_DEVICE",
            ErrorCode::TapToPayUnsupportedAndroidVersion => "TAP_TO_PAY_UNSUPPORTED_ANDROID_VERSION",
            ErrorCode::TapToPayDeviceTampered => "TAP_TO_PAY_DEVICE_TAMPERED",
            ErrorCode::TapToPayInsecureEnvironment => "TAP_TO_PAY_INSECURE_ENVIRONMENT",
            ErrorCode::TapToPayDebugNotSupported => "TAP_TO_PAY_DEBUG_NOT_SUPPORTED",
            ErrorCode::TapToPayUnsupportedProcessor => "TAP_TO_PAY_UNSUPPORTED_PROCESSOR",
            ErrorCode::OfflineModeUnsupportedAndroidVersion => {
                "OFFLINE_MODE_UNSUPPORTED_ANDROID_VERSION"
            }
            // User
            ErrorCode::Canceled => "CANCELED",
            ErrorCode::LocationServicesDisabled => "LOCATION_SERVICES_DISABLED",
            ErrorCode::BluetoothScanTimedOut => "BLUETOOTH_SCAN_TIMED_OUT",
            ErrorCode::BluetoothLowEnergyUnsupported => "BLUETOOTH_LOW_ENERGY_UNSUPPORTED",
            ErrorCode::ReaderSoftwareUpdateFailedBatteryLow => {
                "READER_SOFTWARE_UPDATE_FAILED_BATTERY_LOW"
            }
            ErrorCode::ReaderSoftwareUpdateFailedInterrupted => {
                "READER_SOFTWARE_UPDATE_FAILED_INTERRUPTED"
            }
            ErrorCode::CardInsertNotRead => "CARD_INSERT_NOT_READ",
            ErrorCode::CardSwipeNotRead => "CARD_SWIPE_NOT_READ",
            ErrorCode::CardReadTimedOut => "CARD_READ_TIMED_OUT",
            ErrorCode::CardRemoved => "CARD_REMOVED",
            ErrorCode::CustomerConsentRequired => "CUSTOMER_CONSENT_REQUIRED",
            ErrorCode::CardLeftInReader => "CARD_LEFT_IN_READER",
            ErrorCode::UsbDiscoveryTimedOut => "USB_DISCOVERY_TIMED_OUT",
            ErrorCode::FeatureNotEnabledOnAccount => "FEATURE_NOT_ENABLED_ON_ACCOUNT",
            // Reader / hardware
            ErrorCode::ReaderBusy => "READER_BUSY",
            ErrorCode::ReaderCommunicationError => "READER_COMMUNICATION_ERROR",
            ErrorCode::ReaderTampered => "READER_TAMPERED",
            ErrorCode::BluetoothError => "BLUETOOTH_ERROR",
            ErrorCode::BluetoothDisconnected => "BLUETOOTH_DISCONNECTED",
            ErrorCode::BluetoothReconnectStarted => "BLUETOOTH_RECONNECT_STARTED",
            ErrorCode::UsbDisconnected => "USB_DISCONNECTED",
            ErrorCode::UsbReconnectStarted => "USB_RECONNECT_STARTED",
            ErrorCode::ReaderConnectedToAnotherDevice => "READER_CONNECTED_TO_ANOTHER_DEVICE",
            ErrorCode::ReaderBatteryCriticallyLow => "READER_BATTERY_CRITICALLY_LOW",
            ErrorCode::ReaderSoftwareUpdateFailed => "READER_SOFTWARE_UPDATE_FAILED",
            ErrorCode::ReaderSoftwareUpdateFailedReaderError => {
                "READER_SOFTWARE_UPDATE_FAILED_READER_ERROR"
            }
            ErrorCode::ReaderSoftwareUpdateFailedServerError => {
                "READER_SOFTWARE_UPDATE_FAILED_SERVER_ERROR"
            }
            ErrorCode::TapToPayNfcDisabled => "TAP_TO_PAY_NFC_DISABLED",
            ErrorCode::UnsupportedReaderVersion => "UNSUPPORTED_READER_VERSION",
            ErrorCode::GenericReaderError => "GENERIC_READER_ERROR",
            // Unexpected
            ErrorCode::UnexpectedSdkError => "UNEXPECTED_SDK_ERROR",
            // Payment
            ErrorCode::DeclinedByStripeApi => "DECLINED_BY_STRIPE_API",
            ErrorCode::DeclinedByReader => "DECLINED_BY_READER",
            // Network
            ErrorCode::RequestTimedOut => "REQUEST_TIMED_OUT",
            ErrorCode::StripeApiConnectionError => "STRIPE_API_CONNECTION_ERROR",
            ErrorCode::StripeApiError => "STRIPE_API_ERROR",
            ErrorCode::StripeApiResponseDecodingError => "STRIPE_API_RESPONSE_DECODING_ERROR",
            ErrorCode::ConnectionTokenProviderError => "CONNECTION_TOKEN_PROVIDER_ERROR",
            ErrorCode::SessionExpired => "SESSION_EXPIRED",
            ErrorCode::AndroidApiLevelError => "ANDROID_API_LEVEL_ERROR",
            // Offline / account / currency
            ErrorCode::AmountExceedsMaxOfflineAmount => "AMOUNT_EXCEEDS_MAX_OFFLINE_AMOUNT",
            ErrorCode::OfflinePaymentsDatabaseTooLarge => "OFFLINE_PAYMENTS_DATABASE_TOO_LARGE",
            ErrorCode::ReaderConnectionNotAvailableOffline => {
                "READER_CONNECTION_NOT_AVAILABLE_OFFLINE"
            }
            ErrorCode::LocationConnectionNotAvailableOffline => {
                "LOCATION_CONNECTION_NOT_AVAILABLE_OFFLINE"
            }
            ErrorCode::NoLastSeenAccount => "NO_LAST_SEEN_ACCOUNT",
            ErrorCode::InvalidOfflineCurrency => "INVALID_OFFLINE_CURRENCY",
            ErrorCode::CardSwipeNotAvailable => "CARD_SWIPE_NOT_AVAILABLE",
            ErrorCode::InteracNotSupportedOffline => "INTERAC_NOT_SUPPORTED_OFFLINE",
            ErrorCode::OnlinePinNotSupportedOffline => "ONLINE_PIN_NOT_SUPPORTED_OFFLINE",
            ErrorCode::MobileWalletNotSupportedOnSetupIntents => {
                "MOBILE_WALLET_NOT_SUPPORTED_ON_SETUP_INTENTS"
            }
            ErrorCode::OfflineAndCardExpired => "OFFLINE_AND_CARD_EXPIRED",
            ErrorCode::OfflineTransactionDeclined => "OFFLINE_TRANSACTION_DECLINED",
            ErrorCode::OfflineCollectAndConfirmMismatch => "OFFLINE_COLLECT_AND_CONFIRM_MISMATCH",
            ErrorCode::OfflineTestmodePaymentInLivemode => "OFFLINE_TESTMODE_PAYMENT_IN_LIVEMODE",
            ErrorCode::OfflineLivemodePaymentInTestmode => "OFFLINE_LIVEMODE_PAYMENT_IN_TESTMODE",
            ErrorCode::OfflinePaymentIntentNotFound => "OFFLINE_PAYMENT_INTENT_NOT_FOUND",
            ErrorCode::MissingEmvData => "MISSING_EMV_DATA",
            ErrorCode::ConnectionTokenProviderErrorWhileForwarding => {
                "CONNECTION_TOKEN_PROVIDER_ERROR_WHILE_FORWARDING"
            }
            ErrorCode::AccountIdMismatchWhileForwarding => "ACCOUNT_ID_MISMATCH_WHILE_FORWARDING",
            ErrorCode::ForceOfflineWithFeatureDisabled => "FORCE_OFFLINE_WITH_FEATURE_DISABLED",
            ErrorCode::NotConnectedToInternetAndRequireOnlineSet => {
                "NOT_CONNECTED_TO_INTERNET_AND_REQUIRE_ONLINE_SET"
            }
            ErrorCode::TestCardInLivemode => "TEST_CARD_IN_LIVEMODE",
            // Collect inputs
            ErrorCode::CollectInputsApplicationError => "COLLECT_INPUTS_APPLICATION_ERROR",
            ErrorCode::CollectInputsTimedOut => "COLLECT_INPUTS_TIMED_OUT",
            ErrorCode::CollectInputsInvalidParameter => "COLLECT_INPUTS_INVALID_PARAMETER",
            ErrorCode::CollectInputsUnsupported => "COLLECT_INPUTS_UNSUPPORTED",
            // Reader settings / security / surcharge
            ErrorCode::ReaderSettingsError => "READER_SETTINGS_ERROR",
            ErrorCode::ReaderMissingEncryptionKeys => "READER_MISSING_ENCRYPTION_KEYS",
            ErrorCode::InvalidSurchargeParameter => "INVALID_SURCHARGE_PARAMETER",
            ErrorCode::ReaderCommunicationSslError => "READER_COMMUNICATION_SSL_ERROR",
            ErrorCode::AllowRedisplayInvalid => "ALLOW_REDISPLAY_INVALID",
            ErrorCode::CanceledDueToIntegrationError => "CANCELED_DUE_TO_INTEGRATION_ERROR",
            // Printer
            ErrorCode::PrinterBusy => "PRINTER_BUSY",
            ErrorCode::PrinterPaperjam => "PRINTER_PAPERJAM",
            ErrorCode::PrinterOutOfPaper => "PRINTER_OUT_OF_PAPER",
            ErrorCode::PrinterCoverOpen => "PRINTER_COVER_OPEN",
            ErrorCode::PrinterAbsent => "PRINTER_ABSENT",
            ErrorCode::PrinterUnavailable => "PRINTER_UNAVAILABLE",
            ErrorCode::PrinterError => "PRINTER_ERROR",
            ErrorCode::InvalidMotoConfiguration => "INVALID_MOTO_CONFIGURATION",
        }
    }

    /// Checks whether a wire string is a registered code.
    ///
    /// Backs the advisory drift warning in [`crate::diagnostics`]. Membership
    /// is never used to reject an error: a code from a newer native SDK is
    /// passed through as-is.
    ///
    /// ## Example
    /// ```rust
    /// use stripe_terminal_core::ErrorCode;
    ///
    /// assert!(ErrorCode::is_known("DECLINED_BY_STRIPE_API"));
    /// assert!(!ErrorCode::is_known("SOME_FUTURE_CODE"));
    /// ```
    pub fn is_known(code: &str) -> bool {
        ErrorCode::ALL.iter().any(|c| c.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// A wire string that is not in the registry.
///
/// Only produced by typed parsing ([`ErrorCode::from_str`]); the normalizer
/// never constructs this - unknown codes flow through it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
