//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoCoordinateError {
    /// The values given to a coordinate constructor cannot be turned into a coordinate.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GeoCoordinateError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::debug!("Rejected coordinate input: {reason}");
        Self::InvalidInput(reason)
    }
}
