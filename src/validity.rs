//! Decides whether an agent with a given clearance radius can occupy a cell.
//!
//! The clearance test scans the half-open square window
//! `[x - radius, x + radius) x [y - radius, y + radius)` around the cell, clipped to the grid.
//! This is a square approximation of circular clearance and it is asymmetric: an obstacle at
//! `x - radius` blocks the cell while one at `x + radius` does not. The cell itself is always
//! part of the window, so a radius of 0 only requires the cell itself to be free.
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;

/// How the boundary check compares coordinates against the grid dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundsCheck {
    /// `0 <= x < width` and `0 <= y < height`.
    #[default]
    Strict,
    /// Compares both `x` and `y` against the width. Only differs from [Strict](Self::Strict)
    /// on non-square grids, where it can accept cells outside the grid. Kept for parity with
    /// maps produced by older tooling.
    WidthOnly,
}

/// Filter applied to every candidate cell during a search.
pub trait Validity {
    fn is_valid(&self, point: &Point) -> bool;
}

/// Checks cells of an occupancy grid for a fixed clearance radius.
#[derive(Clone, Copy, Debug)]
pub struct ValidityChecker<'a> {
    grid: &'a BoolGrid,
    radius: i32,
    bounds: BoundsCheck,
}

impl<'a> ValidityChecker<'a> {
    /// Negative radii are treated as 0.
    pub fn new(grid: &'a BoolGrid, radius: i32) -> ValidityChecker<'a> {
        ValidityChecker {
            grid,
            radius: radius.max(0),
            bounds: BoundsCheck::default(),
        }
    }
    pub fn with_bounds(mut self, bounds: BoundsCheck) -> ValidityChecker<'a> {
        self.bounds = bounds;
        self
    }
    pub fn radius(&self) -> i32 {
        self.radius
    }
    fn width(&self) -> i32 {
        self.grid.width() as i32
    }
    fn height(&self) -> i32 {
        self.grid.height() as i32
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        let y_bound = match self.bounds {
            BoundsCheck::Strict => self.height(),
            BoundsCheck::WidthOnly => self.width(),
        };
        point.x >= 0 && point.x < self.width() && point.y >= 0 && point.y < y_bound
    }
    /// True if no occupied cell lies in the clearance window of the point.
    pub fn has_clearance(&self, point: &Point) -> bool {
        let r = self.radius;
        let x_min = point.x.saturating_sub(r).max(0);
        let x_max = point
            .x
            .saturating_add(r)
            .max(point.x.saturating_add(1))
            .min(self.width());
        let y_min = point.y.saturating_sub(r).max(0);
        let y_max = point
            .y
            .saturating_add(r)
            .max(point.y.saturating_add(1))
            .min(self.height());
        (x_min..x_max).all(|x| (y_min..y_max).all(|y| !self.grid.get(x, y)))
    }
}

impl Validity for ValidityChecker<'_> {
    fn is_valid(&self, point: &Point) -> bool {
        self.in_bounds(point) && self.has_clearance(point)
    }
}

/// Whether `point` lies inside the grid and keeps `radius` clearance from every occupied cell.
pub fn is_valid(point: Point, radius: i32, grid: &BoolGrid) -> bool {
    ValidityChecker::new(grid, radius).is_valid(&point)
}
