//! Configuration errors

use super::AppstrapError;

/// Creates a config read error
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> AppstrapError {
    AppstrapError::ConfigReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a config parse error
pub fn parse_failed(path: impl Into<String>, reason: impl ToString) -> AppstrapError {
    AppstrapError::ConfigParseFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> AppstrapError {
    AppstrapError::ConfigInvalid {
        message: message.into(),
    }
}
