//! Immutable value types shared by the deformation and tiling stages

use crate::io::error::{Result, invalid_configuration};

/// A coordinate in space; undeformed tiling vertices have `z == 0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Height above the drawing plane
    pub z: f64,
}

impl Point {
    /// Create a point from all three coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a point lying on the drawing plane
    pub const fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Same point moved by `(dx, dy)` within its plane
    pub const fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }

    /// Distance to the vertical line through `axis`, ignoring height
    pub fn horizontal_distance(&self, axis: &Self) -> f64 {
        (self.x - axis.x).hypot(self.y - axis.y)
    }
}

/// Distortion source pushing the tiling out of its plane
///
/// Only the cap of the sphere that crosses `z == 0` affects the tiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
}

impl Sphere {
    /// Create a sphere from its center and radius
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not strictly positive and finite
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(invalid_configuration(
                "sphere_radius",
                &radius,
                &"must be a positive number",
            ));
        }
        Ok(Self { center, radius })
    }

    /// Center of the sphere
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius of the sphere
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether the sphere crosses the drawing plane at all
    pub fn intersects_plane(&self) -> bool {
        self.radius * self.radius > self.center.z * self.center.z
    }

    /// Radius of the circle where the sphere crosses the drawing plane
    ///
    /// `None` when the sphere stays entirely on one side of the plane.
    pub fn emerged_radius(&self) -> Option<f64> {
        self.intersects_plane()
            .then(|| self.center.z.mul_add(-self.center.z, self.radius * self.radius).sqrt())
    }
}
