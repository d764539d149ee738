use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the pattern examples.
///
/// None of these are recoverable inside a demo run: the binaries propagate
/// them out of `main` and exit with the message.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("cannot {operation} singleton '{type_name}'")]
    ReservedOperation {
        operation: &'static str,
        type_name: &'static str,
    },

    #[error("unknown notification type '{kind}' (expected one of: email, sms)")]
    UnknownNotification { kind: String },

    #[error("no payment method selected before checkout of {amount}")]
    NoPaymentMethod { amount: u64 },

    #[error("weather payload for '{location}' is missing field '{field}'")]
    MissingField { location: String, field: &'static str },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PatternError {
    pub fn reserved(operation: &'static str, type_name: &'static str) -> Self {
        Self::ReservedOperation {
            operation,
            type_name,
        }
    }

    pub fn unknown_notification(kind: impl Into<String>) -> Self {
        Self::UnknownNotification { kind: kind.into() }
    }

    pub fn missing_field(location: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            location: location.into(),
            field,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
