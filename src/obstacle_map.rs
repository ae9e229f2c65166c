use crate::error::MapError;
use crate::pathfinder::Pathfinder;
use crate::{RASTER_FREE, RASTER_OCCUPIED, RASTER_THRESHOLD};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::warn;

/// A circular obstacle centered on a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

impl Obstacle {
    pub fn new(x: i32, y: i32, radius: i32) -> Obstacle {
        Obstacle { x, y, radius }
    }
    /// Whether the cell lies inside the disk, using the exact squared distance.
    pub fn covers(&self, point: &Point) -> bool {
        let dx = (point.x as i64 - self.x as i64).abs();
        let dy = (point.y as i64 - self.y as i64).abs();
        let r = self.radius as i64;
        // Outside the bounding square, also keeps the squares below i64::MAX
        if self.radius < 0 || dx > r || dy > r {
            return false;
        }
        dx * dx + dy * dy <= r * r
    }
}

impl From<(i32, i32, i32)> for Obstacle {
    fn from((x, y, radius): (i32, i32, i32)) -> Obstacle {
        Obstacle::new(x, y, radius)
    }
}

/// [ObstacleMap] owns the grid dimensions and the [BoolGrid] marking cells covered by at
/// least one obstacle ([true]) or free ([false]), together with the obstacles that were
/// inserted. Occupancy only ever grows: insertion is a union of disks.
#[derive(Clone, Debug)]
pub struct ObstacleMap {
    grid: BoolGrid,
    obstacles: Vec<Obstacle>,
}

impl ObstacleMap {
    /// Creates a map with every cell free. Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Result<ObstacleMap, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidDimensions { width, height });
        }
        Ok(ObstacleMap {
            grid: BoolGrid::new(width as usize, height as usize, false),
            obstacles: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.grid.width() as i32
    }
    pub fn height(&self) -> i32 {
        self.grid.height() as i32
    }
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }
    /// Cells outside the grid are reported as free.
    pub fn is_occupied(&self, point: &Point) -> bool {
        self.in_bounds(point.x, point.y) && self.grid.get(point.x, point.y)
    }
    /// Raw occupancy, indexed by `(x, y)`.
    pub fn occupancy(&self) -> &BoolGrid {
        &self.grid
    }
    /// Obstacles in insertion order.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
    pub fn occupied_count(&self) -> usize {
        let mut count = 0;
        for x in 0..self.width() {
            for y in 0..self.height() {
                if self.grid.get(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Marks every cell within the disk of each obstacle as occupied. Cells falling outside
    /// the grid are skipped. Re-inserting an obstacle leaves the occupancy unchanged.
    pub fn insert_obstacles<I, O>(&mut self, obstacles: I)
    where
        I: IntoIterator<Item = O>,
        O: Into<Obstacle>,
    {
        for obstacle in obstacles {
            self.insert_obstacle(obstacle.into());
        }
    }

    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        if obstacle.radius < 0 {
            warn!(
                "Obstacle at ({}, {}) has negative radius {}, nothing marked",
                obstacle.x, obstacle.y, obstacle.radius
            );
        }
        // Bounding box of the disk clipped to the grid
        let r = obstacle.radius as i64;
        let x_min = (obstacle.x as i64 - r).max(0);
        let x_max = (obstacle.x as i64 + r).min(self.width() as i64 - 1);
        let y_min = (obstacle.y as i64 - r).max(0);
        let y_max = (obstacle.y as i64 + r).min(self.height() as i64 - 1);
        for x in x_min..=x_max {
            for y in y_min..=y_max {
                let p = Point::new(x as i32, y as i32);
                if obstacle.covers(&p) {
                    self.grid.set(p.x, p.y, true);
                }
            }
        }
        self.obstacles.push(obstacle);
    }

    /// Ends the insertion phase. The returned [Pathfinder] only hands out shared access to
    /// the map, so occupancy can no longer change while searches run.
    pub fn finalize(self) -> Pathfinder {
        Pathfinder::new(self)
    }

    /// Encodes the occupancy as a black/white raster: row-major, first row is the highest
    /// `y`, [RASTER_OCCUPIED] for occupied and [RASTER_FREE] for free cells.
    pub fn to_raster(&self) -> Vec<u8> {
        let (w, h) = (self.width(), self.height());
        let mut pixels = Vec::with_capacity(self.grid.width() * self.grid.height());
        for y in (0..h).rev() {
            for x in 0..w {
                pixels.push(if self.grid.get(x, y) {
                    RASTER_OCCUPIED
                } else {
                    RASTER_FREE
                });
            }
        }
        pixels
    }

    /// Rebuilds a map from the layout produced by [to_raster](Self::to_raster). The obstacle
    /// list is not part of the raster, so the result has none.
    pub fn from_raster(width: i32, height: i32, pixels: &[u8]) -> Result<ObstacleMap, MapError> {
        let mut map = ObstacleMap::new(width, height)?;
        if pixels.len() != (width as usize) * (height as usize) {
            return Err(MapError::RasterSize {
                width,
                height,
                len: pixels.len(),
            });
        }
        for (row, line) in pixels.chunks(width as usize).enumerate() {
            let y = height - 1 - row as i32;
            for (x, &value) in line.iter().enumerate() {
                if value >= RASTER_THRESHOLD {
                    map.grid.set(x as i32, y, true);
                }
            }
        }
        Ok(map)
    }
}

impl fmt::Display for ObstacleMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height()).rev() {
            let row = (0..self.width())
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
