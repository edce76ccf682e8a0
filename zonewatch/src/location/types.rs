//! Location provider types and traits

use std::fmt;
use std::future::Future;

use crate::geo::Coordinate;

/// Errors a location provider can report.
///
/// Any of these means "no coordinate this cycle". Callers skip the
/// evaluation and try again on the next cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The provider did not produce a fix in time
    Timeout,
    /// Location access was refused
    PermissionDenied,
    /// Hardware or service failure
    Unavailable(String),
    /// A finite source (such as a recorded track) has no more positions
    Exhausted,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Timeout => write!(f, "Timed out waiting for a location fix"),
            ProviderError::PermissionDenied => write!(f, "Location permission denied"),
            ProviderError::Unavailable(msg) => write!(f, "Location unavailable: {}", msg),
            ProviderError::Exhausted => write!(f, "No more positions available"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Source of the current geographic position.
///
/// Acquiring a fix can block on hardware or permissions, so the query is
/// asynchronous. Zone evaluation itself never calls a provider.
pub trait LocationProvider: Send + Sync {
    /// Acquires the current position.
    fn current_coordinate(&self) -> impl Future<Output = Result<Coordinate, ProviderError>> + Send;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;
}
