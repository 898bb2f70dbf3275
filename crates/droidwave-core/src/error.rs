//! Error types for the droid-voice pipeline.

use thiserror::Error;

/// Result type for pipeline operations.
pub type DroidResult<T> = Result<T, DroidError>;

/// Errors that can occur while rendering droid speech.
///
/// A zero-length source waveform is deliberately *not* an error: every stage
/// passes it through as an empty success.
#[derive(Debug, Error)]
pub enum DroidError {
    /// Configuration that makes the numeric pipeline meaningless.
    ///
    /// Raised before any sample is touched. Covers non-positive sample rates
    /// and non-positive duty cycles; other documented ranges (volume,
    /// exaggeration) are not enforced and out-of-range values simply produce
    /// distorted output.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of the rejected parameter.
        message: String,
    },

    /// Opaque failure from the external encoder collaborator.
    ///
    /// Propagated unchanged; any retry policy belongs to the collaborator's
    /// own acquisition logic, never to the numeric core.
    #[error("encoding failure: {message}")]
    Encoding {
        /// Message reported by the collaborator.
        message: String,
    },

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DroidError {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Creates an encoding failure error.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }
}
