//! Errors raised by channel-security decisions.

use thiserror::Error;

/// Errors from channel processors and the decision manager.
///
/// Configuration errors are fail-fast programmer/deployment mistakes:
/// there is no retry or recovery path. A channel that is already
/// acceptable is the silent success path and never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChannelError {
    /// A required configuration field is missing or empty.
    ///
    /// Raised by the explicit `validate()` lifecycle check, and by
    /// `decide` when escalation is needed but no entry point is set.
    #[error("{field} required")]
    MissingConfiguration {
        /// Name of the configuration field, as exposed on the
        /// configuration surface (`secureKeyword`, `entryPoint`, ...).
        field: &'static str,
    },

    /// The entry point failed while commencing the channel switch.
    #[error("channel entry point failed: {reason}")]
    EntryPoint {
        /// Description of the collaborator failure.
        reason: String,
    },
}

impl ChannelError {
    /// Creates a `MissingConfiguration` error for the given field.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingConfiguration { field }
    }

    /// Creates an `EntryPoint` error.
    #[must_use]
    pub fn entry_point(reason: impl Into<String>) -> Self {
        Self::EntryPoint {
            reason: reason.into(),
        }
    }
}
