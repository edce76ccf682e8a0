//! Provider that always reports the same position.

use std::future::Future;

use super::{LocationProvider, ProviderError};
use crate::geo::Coordinate;

/// Reports one fixed coordinate on every query.
///
/// Useful for stationary installations and for checking a single point
/// against the zone layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocationProvider {
    coordinate: Coordinate,
}

impl FixedLocationProvider {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

impl LocationProvider for FixedLocationProvider {
    fn current_coordinate(&self) -> impl Future<Output = Result<Coordinate, ProviderError>> + Send {
        let coordinate = self.coordinate;
        async move { Ok(coordinate) }
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_returns_coordinate() {
        let provider = FixedLocationProvider::new(Coordinate::new(36.0, -96.0));

        for _ in 0..3 {
            assert_eq!(
                provider.current_coordinate().await,
                Ok(Coordinate::new(36.0, -96.0))
            );
        }
        assert_eq!(provider.name(), "fixed");
    }
}
