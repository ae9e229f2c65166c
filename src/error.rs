//! Error types for map construction and path search

use grid_util::point::Point;
use thiserror::Error;

/// Failures while building an [ObstacleMap](crate::obstacle_map::ObstacleMap).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    #[error("invalid map dimensions {width}x{height}, both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("raster of {len} pixels does not match a {width}x{height} map")]
    RasterSize { width: i32, height: i32, len: usize },
}

/// Reasons a search did not produce a path. Callers that only care about
/// success can treat every variant as "no path".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("endpoint {0} is out of bounds or lacks clearance")]
    EndpointBlocked(Point),

    #[error("no path exists from {start} to {end}")]
    NoPathExists { start: Point, end: Point },
}
