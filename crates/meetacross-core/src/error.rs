//! Core error types for meetacross-core.
//!
//! Input problems are reported before any slot is enumerated. Zone
//! conversion failures never abort a run; the scheduler records them as
//! diagnostics instead (see [`crate::scheduler::ZoneDiagnostic`]).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for meetacross-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Caller-supplied scheduling input was rejected
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Calendar link could not be assembled
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

/// Scheduling input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Date is missing or not a real calendar day
    #[error("'{value}' is not a valid YYYY-MM-DD date")]
    InvalidDate { value: String },

    /// Meeting duration must be at least one minute
    #[error("meeting duration must be positive, got {minutes} minutes")]
    NonPositiveDuration { minutes: i64 },

    /// Nobody to schedule for
    #[error("at least one participant is required")]
    NoParticipants,

    /// Participant references a zone outside the catalog
    #[error("participant {position} has an unknown time zone '{zone_id}'")]
    UnknownZone { position: usize, zone_id: String },

    /// Participant text names neither a catalog zone nor a catalog city
    #[error("'{text}' is not a known time zone or city")]
    UnrecognizedParticipant { text: String },

    /// Slot start or end falls outside the representable date range
    #[error(
        "date calculation resulted in an invalid date \
         (start {utc_epoch_millis} ms, {duration_minutes} minutes)"
    )]
    InvalidSlot {
        utc_epoch_millis: i64,
        duration_minutes: i64,
    },
}

/// Civil-time conversion failure for one (instant, zone) pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneConversionError {
    /// The zone database has no rules for this identifier
    #[error("no time zone rules for '{0}'")]
    UnsupportedZone(String),

    /// Conversion failed for another reason
    #[error("failed to convert instant for '{zone_id}': {message}")]
    Failed { zone_id: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
