//! Replay of a recorded position track.
//!
//! Track files are plain text with one `latitude,longitude` pair per line.
//! Blank lines and lines starting with `#` are skipped.

use std::future::Future;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

use super::{LocationProvider, ProviderError};
use crate::geo::Coordinate;

/// Errors from loading a track file.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Failed to read the file
    #[error("Failed to read track file: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be parsed as a coordinate
    #[error("Invalid track line {line}: '{content}' - {reason}")]
    InvalidLine {
        line: usize,
        content: String,
        reason: String,
    },

    /// The file contained no positions
    #[error("Track contains no positions")]
    Empty,
}

/// Reports positions from a recorded track, one per query.
///
/// After the last position the provider reports
/// [`ProviderError::Exhausted`], unless it was built with
/// [`looping`](Self::looping), in which case it starts over.
#[derive(Debug)]
pub struct TrackLocationProvider {
    positions: Vec<Coordinate>,
    cursor: AtomicUsize,
    looping: bool,
}

impl TrackLocationProvider {
    pub fn new(positions: Vec<Coordinate>) -> Self {
        Self {
            positions,
            cursor: AtomicUsize::new(0),
            looping: false,
        }
    }

    /// Restart from the first position once the track runs out.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Loads a track file.
    pub fn load(path: &Path) -> Result<Self, TrackError> {
        let content = std::fs::read_to_string(path)?;
        let positions = parse_track(&content)?;
        tracing::debug!(path = %path.display(), positions = positions.len(), "Track loaded");
        Ok(Self::new(positions))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn next_position(&self) -> Option<Coordinate> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        if self.looping && !self.positions.is_empty() {
            return Some(self.positions[index % self.positions.len()]);
        }
        self.positions.get(index).copied()
    }
}

impl LocationProvider for TrackLocationProvider {
    fn current_coordinate(&self) -> impl Future<Output = Result<Coordinate, ProviderError>> + Send {
        let next = self.next_position().ok_or(ProviderError::Exhausted);
        async move { next }
    }

    fn name(&self) -> &str {
        "track"
    }
}

/// Parses track text into positions.
pub fn parse_track(content: &str) -> Result<Vec<Coordinate>, TrackError> {
    let mut positions = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let invalid = |reason: &str| TrackError::InvalidLine {
            line: index + 1,
            content: line.to_string(),
            reason: reason.to_string(),
        };

        let (lat, lon) = line
            .split_once(',')
            .ok_or_else(|| invalid("expected 'latitude,longitude'"))?;
        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| invalid("latitude is not a number"))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|_| invalid("longitude is not a number"))?;

        positions.push(Coordinate::new(latitude, longitude));
    }

    if positions.is_empty() {
        return Err(TrackError::Empty);
    }

    Ok(positions)
}
