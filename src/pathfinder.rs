use crate::error::SearchError;
use crate::obstacle_map::ObstacleMap;
use crate::solver::BfsSolver;
use crate::validity::{BoundsCheck, Validity};
use core::fmt;
use grid_util::point::Point;
use grid_util::grid::ValueGrid;
use log::info;
use petgraph::unionfind::UnionFind;

/// Connected components of the cells that are valid for one clearance radius.
#[derive(Clone, Debug)]
struct Components {
    radius: i32,
    sets: UnionFind<usize>,
}

/// [Pathfinder] owns a finalized [ObstacleMap] and runs searches on it. Besides returning
/// each path it records the most recent one together with its clearance radius, which is what
/// visualization and persistence collaborators read. It can also maintain a [UnionFind] of the
/// cells that are valid for a radius, so that searches between disconnected cells fail
/// without flood-filling the grid.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    map: ObstacleMap,
    solver: BfsSolver,
    path_radius: i32,
    shortest_path: Vec<Point>,
    components: Option<Components>,
}

impl Pathfinder {
    pub fn new(map: ObstacleMap) -> Pathfinder {
        Pathfinder {
            map,
            solver: BfsSolver::new(),
            path_radius: 0,
            shortest_path: Vec::new(),
            components: None,
        }
    }

    /// Selects how the boundary check treats non-square grids. Drops cached components.
    pub fn with_bounds(mut self, bounds: BoundsCheck) -> Pathfinder {
        self.solver.bounds = bounds;
        self.components = None;
        self
    }

    pub fn map(&self) -> &ObstacleMap {
        &self.map
    }
    pub fn bounds(&self) -> BoundsCheck {
        self.solver.bounds
    }
    /// The path found by the most recent search, empty if it failed or none ran yet.
    pub fn last_path(&self) -> &[Point] {
        &self.shortest_path
    }
    /// The clearance radius of the most recent search. Negative radii are recorded as 0.
    pub fn path_radius(&self) -> i32 {
        self.path_radius
    }
    /// Radius the component cache was generated for, if any.
    pub fn components_radius(&self) -> Option<i32> {
        self.components.as_ref().map(|c| c.radius)
    }

    pub fn is_valid(&self, point: &Point, radius: i32) -> bool {
        self.solver.checker(&self.map, radius).is_valid(point)
    }

    /// Computes a shortest path and records it as the last path. On failure the last path is
    /// cleared. If components were generated for this radius and place start and end in
    /// different components, no search is run.
    pub fn find_shortest_path(
        &mut self,
        start: Point,
        end: Point,
        radius: i32,
    ) -> Result<Vec<Point>, SearchError> {
        self.path_radius = radius.max(0);
        self.shortest_path.clear();
        let result = match &self.components {
            Some(components)
                if components.radius == radius.max(0) && self.solver.bounds == BoundsCheck::Strict =>
            {
                let checker = self.solver.checker(&self.map, radius);
                if let Some(endpoint) = [start, end].into_iter().find(|p| !checker.is_valid(p)) {
                    Err(SearchError::EndpointBlocked(endpoint))
                } else if !self.same_component(components, &start, &end) {
                    info!("{} and {} are in different components", start, end);
                    Err(SearchError::NoPathExists { start, end })
                } else {
                    self.solver.solve(&checker, start, end)
                }
            }
            _ => self
                .solver
                .find_shortest_path(&self.map, start, end, radius),
        };
        if let Ok(path) = &result {
            self.shortest_path = path.clone();
        }
        result
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.map.occupancy().width() + point.x as usize
    }

    fn same_component(&self, components: &Components, start: &Point, end: &Point) -> bool {
        self.map.in_bounds(start.x, start.y)
            && self.map.in_bounds(end.x, end.y)
            && components
                .sets
                .equiv(self.get_ix_point(start), self.get_ix_point(end))
    }

    /// Generates a new [UnionFind] structure linking up valid grid neighbours for the radius.
    pub fn generate_components(&mut self, radius: i32) {
        let radius = radius.max(0);
        info!("Generating connected components for radius {}", radius);
        let w = self.map.width();
        let h = self.map.height();
        let checker = self.solver.checker(&self.map, radius);
        let mut sets = UnionFind::new(self.map.occupancy().width() * self.map.occupancy().height());
        for x in 0..w {
            for y in 0..h {
                let point = Point::new(x, y);
                if !checker.is_valid(&point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                [Point::new(x + 1, y), Point::new(x, y + 1)]
                    .into_iter()
                    .filter(|p| p.x < w && p.y < h && checker.is_valid(p))
                    .for_each(|p| {
                        sets.union(parent_ix, self.get_ix_point(&p));
                    });
            }
        }
        self.components = Some(Components { radius, sets });
    }

    /// Checks if both points are valid for the cached radius and in the same component.
    /// Without generated components nothing is known to be reachable. Components only cover
    /// cells inside the grid, so searches with [BoundsCheck::WidthOnly] never consult them.
    pub fn reachable(&self, start: &Point, end: &Point) -> bool {
        match &self.components {
            Some(components) => {
                let checker = self.solver.checker(&self.map, components.radius);
                checker.is_valid(start)
                    && checker.is_valid(end)
                    && self.same_component(components, start, end)
            }
            None => false,
        }
    }

    pub fn unreachable(&self, start: &Point, end: &Point) -> bool {
        !self.reachable(start, end)
    }
}

impl fmt::Display for Pathfinder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let start = self.shortest_path.first();
        let end = self.shortest_path.last();
        for y in (0..self.map.height()).rev() {
            let row = (0..self.map.width())
                .map(|x| {
                    let p = Point::new(x, y);
                    if start == Some(&p) {
                        'S'
                    } else if end == Some(&p) {
                        'G'
                    } else if self.shortest_path.contains(&p) {
                        '*'
                    } else if self.map.is_occupied(&p) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle_map::Obstacle;

    fn split_map() -> Pathfinder {
        // |.....|
        // |..#..|
        // |..#..|
        let mut map = ObstacleMap::new(5, 3).unwrap();
        map.insert_obstacles([(2, 0, 0), (2, 1, 0)]);
        map.finalize()
    }

    #[test]
    fn records_last_path() {
        let mut pathfinder = split_map();
        let path = pathfinder
            .find_shortest_path(Point::new(0, 0), Point::new(4, 0), 0)
            .unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(pathfinder.last_path(), path.as_slice());
        assert_eq!(pathfinder.path_radius(), 0);
    }

    #[test]
    fn failure_clears_last_path() {
        let mut pathfinder = split_map();
        pathfinder
            .find_shortest_path(Point::new(0, 0), Point::new(4, 0), 0)
            .unwrap();
        assert!(!pathfinder.last_path().is_empty());
        let result = pathfinder.find_shortest_path(Point::new(2, 2), Point::new(4, 2), 1);
        assert_eq!(result, Err(SearchError::EndpointBlocked(Point::new(2, 2))));
        assert!(pathfinder.last_path().is_empty());
        assert_eq!(pathfinder.path_radius(), 1);
    }

    #[test]
    fn negative_radius_recorded_as_zero() {
        let mut pathfinder = split_map();
        pathfinder
            .find_shortest_path(Point::new(0, 0), Point::new(4, 0), -3)
            .unwrap();
        assert_eq!(pathfinder.path_radius(), 0);
    }

    #[test]
    fn components_index_every_cell() {
        let mut map = ObstacleMap::new(7, 3).unwrap();
        map.insert_obstacle(Obstacle::new(3, 1, 0));
        let mut pathfinder = map.finalize();
        pathfinder.generate_components(0);
        assert!(pathfinder.reachable(&Point::new(0, 0), &Point::new(6, 2)));
        assert!(pathfinder.reachable(&Point::new(6, 0), &Point::new(0, 2)));
        assert!(pathfinder.unreachable(&Point::new(0, 0), &Point::new(3, 1)));
    }

    #[test]
    fn components_per_radius() {
        let mut pathfinder = split_map();
        let start = Point::new(0, 0);
        let end = Point::new(4, 0);
        assert!(pathfinder.unreachable(&start, &end));
        pathfinder.generate_components(0);
        assert_eq!(pathfinder.components_radius(), Some(0));
        assert!(pathfinder.reachable(&start, &end));
        assert!(pathfinder.unreachable(&start, &Point::new(2, 1)));
        // The clearance window of any cell in columns 2 and 3 overlaps the wall
        pathfinder.generate_components(1);
        assert!(pathfinder.unreachable(&start, &end));
        assert!(pathfinder.reachable(&start, &Point::new(1, 2)));
    }

    #[test]
    fn components_short_circuit_search() {
        let mut pathfinder = split_map();
        pathfinder.generate_components(1);
        let start = Point::new(0, 0);
        let end = Point::new(4, 0);
        assert_eq!(
            pathfinder.find_shortest_path(start, end, 1),
            Err(SearchError::NoPathExists { start, end })
        );
        // Components for another radius are ignored
        assert_eq!(pathfinder.find_shortest_path(start, end, 0).unwrap().len(), 9);
    }

    #[test]
    fn display_overlays_path() {
        let mut map = ObstacleMap::new(3, 3).unwrap();
        map.insert_obstacle(Obstacle::new(1, 1, 0));
        let mut pathfinder = map.finalize();
        pathfinder
            .find_shortest_path(Point::new(0, 0), Point::new(2, 2), 0)
            .unwrap();
        assert_eq!(format!("{}", pathfinder), "**G\n*#.\nS..\n");
    }

    #[test]
    fn width_only_bounds() {
        let map = ObstacleMap::new(4, 2).unwrap();
        let pathfinder = map.finalize().with_bounds(BoundsCheck::WidthOnly);
        assert_eq!(pathfinder.bounds(), BoundsCheck::WidthOnly);
        assert!(pathfinder.is_valid(&Point::new(0, 3), 0));
        assert!(!pathfinder.is_valid(&Point::new(0, 4), 0));
    }
}
