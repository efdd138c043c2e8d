//! Typed error handling for the stoa toolkit
//!
//! Every fallible surface of the crate returns one of the typed errors
//! below rather than an erased error type, so callers can match on the
//! failure category.
//!
//! # Error Categories
//!
//! - [`HttpError`]: failures of the generic HTTP collaborator
//! - [`MailError`]: failures of the SMTP mailer and template rendering
//! - [`ConfigError`]: configuration parsing and loading failures
//!
//! Store actions are the deliberate exception: they never return errors.
//! Their failures are surfaced through the module state (`error`,
//! `is_loading`), see [`crate::store`].

use serde_json::Value;
use std::fmt;

/// The top-level error type for the stoa toolkit
#[derive(Debug)]
pub enum StoaError {
    /// HTTP collaborator errors
    Http(HttpError),

    /// Mailer errors
    Mail(MailError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for StoaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoaError::Http(e) => write!(f, "{}", e),
            StoaError::Mail(e) => write!(f, "{}", e),
            StoaError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StoaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoaError::Http(e) => Some(e),
            StoaError::Mail(e) => Some(e),
            StoaError::Config(e) => Some(e),
        }
    }
}

// =============================================================================
// HTTP Errors
// =============================================================================

/// Failures of the generic HTTP collaborator
///
/// Mirrors the two observable failure modes of a JSON-over-HTTP client:
/// the request never produced a response, or the server answered with a
/// non-success status and an optional error body.
#[derive(Debug, Clone)]
pub enum HttpError {
    /// Network/transport failure, no response was received
    Transport { message: String },

    /// The server responded with a non-success status
    Status { status: u16, body: Value },
}

impl HttpError {
    /// The HTTP status code, if the server responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Transport { .. } => None,
            HttpError::Status { status, .. } => Some(*status),
        }
    }

    /// Render the server-provided error body as display text
    ///
    /// A plain string body is returned verbatim; structured bodies are
    /// serialized. Returns `None` for transport failures and empty bodies.
    pub fn body_text(&self) -> Option<String> {
        match self {
            HttpError::Transport { .. } => None,
            HttpError::Status { body, .. } => match body {
                Value::Null => None,
                Value::String(s) if s.is_empty() => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            },
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Transport { message } => {
                write!(f, "Transport error: {}", message)
            }
            HttpError::Status { status, body } => {
                write!(f, "Server responded with status {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for HttpError {}

impl From<HttpError> for StoaError {
    fn from(err: HttpError) -> Self {
        StoaError::Http(err)
    }
}

// =============================================================================
// Mail Errors
// =============================================================================

/// Failures of the SMTP mailer
#[derive(Debug)]
pub enum MailError {
    /// The transport could not be constructed from the configuration
    Config { message: String },

    /// A sender or recipient address could not be parsed
    Address { address: String, message: String },

    /// Template lookup or rendering failed
    Template { template: String, message: String },

    /// An attachment could not be read or encoded
    Attachment { path: String, message: String },

    /// The SMTP transport rejected or failed to deliver the message
    Transport { message: String },
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::Config { message } => {
                write!(f, "Mailer configuration error: {}", message)
            }
            MailError::Address { address, message } => {
                write!(f, "Invalid mail address '{}': {}", address, message)
            }
            MailError::Template { template, message } => {
                write!(f, "Failed to render mail template '{}': {}", template, message)
            }
            MailError::Attachment { path, message } => {
                write!(f, "Failed to attach '{}': {}", path, message)
            }
            MailError::Transport { message } => {
                write!(f, "SMTP transport error: {}", message)
            }
        }
    }
}

impl std::error::Error for MailError {}

impl From<MailError> for StoaError {
    fn from(err: MailError) -> Self {
        StoaError::Mail(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Failures while loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    Io { message: String },

    /// Failed to parse the configuration document
    Parse { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
            ConfigError::Parse { message } => {
                write!(f, "Failed to parse config: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for StoaError {
    fn from(err: ConfigError) -> Self {
        StoaError::Config(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for stoa operations
pub type StoaResult<T> = Result<T, StoaError>;

// =============================================================================
// Tests
// =============================================================================
