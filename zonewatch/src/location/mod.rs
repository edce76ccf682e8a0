//! Location acquisition boundary.
//!
//! The zone engine never fetches positions itself. A [`LocationProvider`]
//! supplies them to the polling [`monitor`](crate::monitor), which treats
//! any [`ProviderError`] as "no position this cycle".
//!
//! Two providers ship with the crate:
//!
//! - [`FixedLocationProvider`] - one stationary position
//! - [`TrackLocationProvider`] - replay of a recorded `lat,lon` track

mod fixed;
mod track;
mod types;

pub use fixed::FixedLocationProvider;
pub use track::{parse_track, TrackError, TrackLocationProvider};
pub use types::{LocationProvider, ProviderError};
