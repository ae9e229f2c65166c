//! # clearance_pathfinding
//!
//! Shortest collision-free paths on a bounded grid populated with circular
//! obstacles, for an agent that needs a clearance radius around itself.
//!
//! Obstacles are rasterized as exact Euclidean disks into an
//! [ObstacleMap](obstacle_map::ObstacleMap). A cell is occupiable if it lies inside the grid and
//! the square window of half-width `radius` around it contains no occupied
//! cell (see [validity]). Paths are found with a
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) over the
//! 4-connected grid, so they are shortest in step count. Optionally the
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! of valid cells can be pre-computed for a radius to avoid flood-filling
//! behaviour if no path exists.
//!
//! ```
//! use clearance_pathfinding::{obstacle_map::{Obstacle, ObstacleMap}, Point};
//!
//! let mut map = ObstacleMap::new(10, 10).unwrap();
//! map.insert_obstacles([Obstacle::new(5, 5, 3)]);
//! let mut pathfinder = map.finalize();
//! let path = pathfinder
//!     .find_shortest_path(Point::new(0, 5), Point::new(9, 5), 0)
//!     .unwrap();
//! assert_eq!(path.len(), 18);
//! ```
pub mod bfs;
pub mod error;
pub mod obstacle_map;
pub mod pathfinder;
pub mod solver;
pub mod validity;

pub use error::{MapError, SearchError};
pub use grid_util::point::Point;
pub use obstacle_map::{Obstacle, ObstacleMap};
pub use pathfinder::Pathfinder;
pub use validity::{is_valid, BoundsCheck, Validity, ValidityChecker};

use itertools::Itertools;

/// Cardinal unit steps in the order successors are generated: up, left, right, down.
/// Among equally short paths the search returns the one this order discovers first.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (-1, 0), (1, 0), (0, -1)];

/// Raster value of an occupied cell.
pub const RASTER_OCCUPIED: u8 = 255;
/// Raster value of a free cell.
pub const RASTER_FREE: u8 = 0;
/// Pixels at or above this value decode as occupied.
pub const RASTER_THRESHOLD: u8 = 128;

/// Number of unit steps between two cells on a 4-connected grid.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// Checks that every consecutive pair of cells in the path is a single cardinal step apart.
pub fn is_connected_path(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| manhattan_distance(a, b) == 1)
}
