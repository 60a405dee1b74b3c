//! Generation error types
//!
//! Re-exports agentforge-error and provides generation-specific conveniences.

// Re-export the core error types
pub use agentforge_error::{Error, ErrorKind, ErrorStatus, Result};

// =============================================================================
// Generation-specific error constructors
// =============================================================================

/// Create an UnsupportedFramework error
pub fn unsupported_framework(framework: impl Into<String>) -> Error {
    Error::unsupported_framework(framework)
}

/// Create an UnsupportedModel error
pub fn unsupported_model(model: impl Into<String>) -> Error {
    Error::unsupported_model(model)
}

/// Create an InferenceFailed error
pub fn inference_failed(message: impl Into<String>) -> Error {
    Error::inference_failed(message)
}

/// Create an ApiFailed error carrying the HTTP status code
pub fn api_error(status: u16, message: impl Into<String>) -> Error {
    Error::api_failed(status, message)
}

/// Create a RateLimited error
pub fn rate_limited(message: impl Into<String>) -> Error {
    Error::rate_limited(message)
}

/// Create an AuthenticationFailed error
pub fn authentication_error(message: impl Into<String>) -> Error {
    Error::authentication_failed(message)
}

/// Create a NetworkFailed error
pub fn network_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::NetworkFailed, message)
}

/// Create a ParseFailed error
pub fn parse_error(message: impl Into<String>) -> Error {
    Error::parse_failed(message)
}

/// Create an IoFailed error
pub fn io_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::IoFailed, message)
}

/// Create a SerializationFailed error
pub fn serialization_error(message: impl Into<String>) -> Error {
    Error::serialization_failed(message)
}
