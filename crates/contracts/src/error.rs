//! Layered error definitions
//!
//! Categorized by source: config / sink / event

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Settings rejected at startup
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    /// One `host:port` entry of the sink list could not be parsed
    #[error("malformed sink entry '{token}': {message}")]
    MalformedEndpoint { token: String, message: String },

    // ===== Sink Errors =====
    /// Sink connection error
    #[error("sink '{sink_name}' connection error: {message}")]
    SinkConnection { sink_name: String, message: String },

    /// Sink write error
    #[error("sink '{sink_name}' write error: {message}")]
    SinkWrite { sink_name: String, message: String },

    /// Sink close error
    #[error("sink '{sink_name}' close error: {message}")]
    SinkClose { sink_name: String, message: String },

    // ===== Event Errors =====
    /// Event record cannot be rendered as a line
    #[error("malformed {variant} event: {message}")]
    MalformedEvent {
        variant: &'static str,
        message: String,
    },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContractError {
    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create malformed sink entry error
    pub fn malformed_endpoint(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedEndpoint {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create sink connection error
    pub fn sink_connection(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkConnection {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// Create sink write error
    pub fn sink_write(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkWrite {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// Create sink close error
    pub fn sink_close(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkClose {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// Create malformed event error
    pub fn malformed_event(variant: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedEvent {
            variant,
            message: message.into(),
        }
    }
}
