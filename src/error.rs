/*
 * Error types shared across the platform layer. The taxonomy is small on
 * purpose: toolkit/application setup failures, registration conflicts, and
 * window-manager requests that could not be issued. Absent resources (no
 * alpha visual, no X11 backend, no icon match) are not errors anywhere in
 * this crate; they degrade to fallbacks or `None`.
 */
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Toolkit or platform-layer setup failed before any window existed.
    InitializationFailed(String),
    /// The application could not register with the session bus.
    RegistrationFailed(String),
    /// A platform request that was expected to succeed did not.
    OperationFailed(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::InitializationFailed(message) => {
                write!(f, "Initialization failed: {message}")
            }
            PlatformError::RegistrationFailed(message) => {
                write!(f, "Registration failed: {message}")
            }
            PlatformError::OperationFailed(message) => {
                write!(f, "Operation failed: {message}")
            }
        }
    }
}

impl std::error::Error for PlatformError {}

pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_variant_context_and_message() {
        let error = PlatformError::OperationFailed("no monitor available".to_string());
        let message = error.to_string();
        assert!(message.contains("Operation failed"));
        assert!(message.contains("no monitor available"));
    }

    #[test]
    fn registration_failure_is_distinguishable() {
        let error = PlatformError::RegistrationFailed("name taken".to_string());
        assert!(error.to_string().starts_with("Registration failed"));
    }
}
