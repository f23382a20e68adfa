//! Square tiling domain and the interlocking row layout over it
//!
//! Rows sit `L·sin 60°` apart starting at the lower bound. Within a row,
//! centers are `3L` apart. Every other row is shifted right by `1.5L` so its
//! hexagons nest between those of its neighbours, and stops one edge length
//! earlier so it does not run past the right bound. Both bounds are
//! inclusive: a center landing exactly on the upper bound is kept.

use crate::geometry::Point;
use crate::io::configuration::BOUNDARY_TOLERANCE;
use crate::io::error::{Result, invalid_configuration};
use crate::tiling::hexagon::SIN_60;

/// Region over which hexagon centers are enumerated
///
/// The same `[lower_left, upper_right]` pair bounds both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingRegion {
    lower_left: i32,
    upper_right: i32,
    edge_length: u32,
}

impl TilingRegion {
    /// Create a region
    ///
    /// A region whose bounds coincide holds exactly one hexagon.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge length is zero or the upper bound lies
    /// below the lower bound
    pub fn new(lower_left: i32, upper_right: i32, edge_length: u32) -> Result<Self> {
        if edge_length == 0 {
            return Err(invalid_configuration(
                "edge_length",
                &edge_length,
                &"must be positive",
            ));
        }
        if upper_right < lower_left {
            return Err(invalid_configuration(
                "upper_right",
                &upper_right,
                &format!("must not be below lower_left ({lower_left})"),
            ));
        }
        Ok(Self {
            lower_left,
            upper_right,
            edge_length,
        })
    }

    /// Lower bound shared by both axes
    pub const fn lower_left(&self) -> i32 {
        self.lower_left
    }

    /// Upper bound shared by both axes
    pub const fn upper_right(&self) -> i32 {
        self.upper_right
    }

    /// Hexagon edge length used for every tile in the region
    pub const fn edge_length(&self) -> u32 {
        self.edge_length
    }

    /// Side length of the square region
    pub fn span(&self) -> f64 {
        f64::from(self.upper_right) - f64::from(self.lower_left)
    }

    /// Vertical distance between consecutive rows
    pub fn row_spacing(&self) -> f64 {
        f64::from(self.edge_length) * SIN_60
    }

    /// Horizontal distance between consecutive centers of one row
    pub fn column_spacing(&self) -> f64 {
        f64::from(self.edge_length) * 3.0
    }

    /// Horizontal shift applied to every other row
    pub fn row_offset(&self) -> f64 {
        f64::from(self.edge_length) * 1.5
    }

    /// Number of rows, including one landing on the upper bound
    pub fn row_count(&self) -> usize {
        inclusive_steps(self.span(), self.row_spacing())
    }

    /// Number of hexagons in row `row`
    ///
    /// Shifted rows lose one edge length of room on the right.
    pub fn column_count(&self, row: usize) -> usize {
        let room = if is_shifted(row) {
            self.span() - f64::from(self.edge_length)
        } else {
            self.span()
        };
        inclusive_steps(room, self.column_spacing())
    }

    /// Total number of hexagons in the region, or `None` if it overflows
    pub fn hexagon_count(&self) -> Option<usize> {
        let rows = self.row_count();
        let shifted_rows = rows / 2;
        let plain = (rows - shifted_rows).checked_mul(self.column_count(0))?;
        let shifted = shifted_rows.checked_mul(self.column_count(1))?;
        plain.checked_add(shifted)
    }

    /// Centers of row `row`, left to right
    pub fn row_centers(&self, row: usize) -> impl Iterator<Item = Point> + use<> {
        let lower = f64::from(self.lower_left);
        let y = (row as f64).mul_add(self.row_spacing(), lower);
        let start = if is_shifted(row) {
            lower + self.row_offset()
        } else {
            lower
        };
        let spacing = self.column_spacing();

        (0..self.column_count(row))
            .map(move |column| Point::planar((column as f64).mul_add(spacing, start), y))
    }

    /// Every center in the region, bottom row first, each row left to right
    pub fn centers(&self) -> impl Iterator<Item = Point> + use<> {
        let region = *self;
        (0..self.row_count()).flat_map(move |row| region.row_centers(row))
    }
}

const fn is_shifted(row: usize) -> bool {
    row % 2 == 1
}

// Count of k >= 0 with k * step <= length, tolerant of rounding at the boundary
fn inclusive_steps(length: f64, step: f64) -> usize {
    if length < 0.0 {
        return 0;
    }
    (length / step + BOUNDARY_TOLERANCE).floor() as usize + 1
}
