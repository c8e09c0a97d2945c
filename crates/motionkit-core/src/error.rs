//! Error handling for MotionKit
//!
//! Provides structured error types for the motion-transform layer:
//! - Transform errors (chain wiring, downstream move rejection)
//! - Command errors (host command surface)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Transform error type
///
/// Represents errors raised while wiring the transform chain or while a
/// downstream transform processes a forwarded move.
#[derive(Error, Debug, Clone)]
pub enum TransformError {
    /// No downstream transform is bound, so there is no authoritative
    /// position to work from. Fatal during pipeline setup.
    #[error("No downstream transform bound: position baseline unavailable")]
    MissingBaseline,

    /// The downstream transform refused a forwarded move.
    #[error("Move rejected: {reason}")]
    Rejected {
        /// The reason the downstream transform gave.
        reason: String,
    },

    /// A forwarded coordinate is outside the machine's travel.
    #[error("Coordinate out of bounds on {axis}: {value}")]
    OutOfBounds {
        /// The offending axis.
        axis: String,
        /// The commanded value.
        value: f64,
    },
}

/// Command error type
///
/// Represents errors raised by the host-facing command surface before a
/// command reaches any transform.
#[derive(Error, Debug, Clone)]
pub enum CommandError {
    /// The command name is not registered.
    #[error("Unknown command: {name}")]
    UnknownCommand {
        /// The unrecognized command name.
        name: String,
    },

    /// A required command parameter is missing.
    #[error("Missing required parameter '{param}' for {command}")]
    MissingParameter {
        /// The command that was invoked.
        command: String,
        /// The name of the missing parameter.
        param: String,
    },
}

/// Main error type for MotionKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Transform error
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Command error
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a missing-baseline error
    pub fn is_missing_baseline(&self) -> bool {
        matches!(self, Error::Transform(TransformError::MissingBaseline))
    }

    /// Check if this is a transform error
    pub fn is_transform_error(&self) -> bool {
        matches!(self, Error::Transform(_))
    }

    /// Check if this is a command error
    pub fn is_command_error(&self) -> bool {
        matches!(self, Error::Command(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
