use crate::bfs::bfs;
use crate::error::SearchError;
use crate::obstacle_map::ObstacleMap;
use crate::validity::{BoundsCheck, Validity, ValidityChecker};
use crate::DIRECTIONS;
use grid_util::point::Point;
use log::{debug, info};

/// The 4-neighbourhood of a point in [DIRECTIONS] order, unfiltered.
pub fn neighbours(point: &Point) -> [Point; 4] {
    DIRECTIONS.map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
}

/// Breadth-first shortest path search on the 4-connected grid. Holds no per-search state, so
/// a single solver can serve concurrent searches over a shared [ObstacleMap].
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver {
    pub bounds: BoundsCheck,
}

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver::default()
    }

    /// The filter this solver applies for the given map and clearance radius.
    pub fn checker<'a>(&self, map: &'a ObstacleMap, radius: i32) -> ValidityChecker<'a> {
        ValidityChecker::new(map.occupancy(), radius).with_bounds(self.bounds)
    }

    /// Computes a path with the fewest cells from start to end in which every cell keeps
    /// `radius` clearance from the obstacles.
    pub fn find_shortest_path(
        &self,
        map: &ObstacleMap,
        start: Point,
        end: Point,
        radius: i32,
    ) -> Result<Vec<Point>, SearchError> {
        self.solve(&self.checker(map, radius), start, end)
    }

    /// Runs the search with an arbitrary cell filter. Both endpoints are checked before any
    /// other cell is looked at.
    pub fn solve<V: Validity>(
        &self,
        validity: &V,
        start: Point,
        end: Point,
    ) -> Result<Vec<Point>, SearchError> {
        for endpoint in [start, end] {
            if !validity.is_valid(&endpoint) {
                info!("Endpoint {} is blocked", endpoint);
                return Err(SearchError::EndpointBlocked(endpoint));
            }
        }
        debug!("Searching path from {} to {}", start, end);
        match bfs(
            &start,
            |node| {
                neighbours(node)
                    .into_iter()
                    .filter(move |p| *p == end || validity.is_valid(p))
            },
            |node| *node == end,
        ) {
            Some(path) => {
                info!("Found path of {} cells from {} to {}", path.len(), start, end);
                Ok(path)
            }
            None => {
                info!("{} is not reachable from {}", end, start);
                Err(SearchError::NoPathExists { start, end })
            }
        }
    }
}

/// Shortest path with the default [BfsSolver].
pub fn find_shortest_path(
    map: &ObstacleMap,
    start: Point,
    end: Point,
    radius: i32,
) -> Result<Vec<Point>, SearchError> {
    BfsSolver::new().find_shortest_path(map, start, end, radius)
}
