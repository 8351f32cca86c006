//! Domain error types.

use chrono::NaiveDate;

use super::security::Security;

/// Top-level error type for ytdroi.
#[derive(Debug, thiserror::Error)]
pub enum RoiError {
    #[error("invalid transaction: {field} {reason}")]
    InvalidTransaction { field: &'static str, reason: String },

    #[error("no price for {security} on {date}")]
    PriceNotFound { security: Security, date: NaiveDate },

    #[error("missing configuration key {key}")]
    MissingConfiguration { key: String },

    #[error("invalid configuration value {key}: {reason}")]
    InvalidConfiguration { key: String, reason: String },

    #[error("unknown security {name}")]
    UnknownSecurity { name: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("data load error: {reason}")]
    DataLoad { reason: String },

    #[error("arithmetic overflow while {operation}")]
    Overflow { operation: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&RoiError> for std::process::ExitCode {
    fn from(err: &RoiError) -> Self {
        let code: u8 = match err {
            RoiError::Io(_) => 1,
            RoiError::ConfigParse { .. }
            | RoiError::MissingConfiguration { .. }
            | RoiError::InvalidConfiguration { .. } => 2,
            RoiError::InvalidTransaction { .. }
            | RoiError::UnknownSecurity { .. }
            | RoiError::DataLoad { .. }
            | RoiError::Overflow { .. } => 3,
            RoiError::PriceNotFound { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
