//! Defaults and the validated, immutable configuration of a single run

use crate::geometry::{Point, Sphere};
use crate::io::error::{Result, invalid_configuration};
use crate::render::color::ColorToken;
use crate::tiling::{PanelPosition, TilingRegion};

// Region and hexagon defaults
/// Default lower bound of the square region
pub const DEFAULT_LOWER_LEFT: i32 = -300;
/// Default upper bound of the square region
pub const DEFAULT_UPPER_RIGHT: i32 = 300;
/// Default hexagon edge length before deformation
pub const DEFAULT_EDGE_LENGTH: i32 = 20;
/// Default panel colors: upper-right, left, lower-right
pub const DEFAULT_COLORS: [&str; 3] = ["black", "gray", "white"];

// Sphere defaults
/// Default center of the deforming sphere
pub const DEFAULT_SPHERE_CENTER: [i32; 3] = [0, 0, -50];
/// Default radius of the deforming sphere
pub const DEFAULT_SPHERE_RADIUS: i32 = 250;

// Output settings
/// Directory exported images are written to
pub const OUTPUT_DIRECTORY: &str = "exports";
/// Prefix of every exported file name
pub const OUTPUT_PREFIX: &str = "Vasarely";
/// Side of the square exported images are fitted into
pub const DEFAULT_EXPORT_SIZE: u32 = 1024;
/// Canvas resolution multiplier applied before the final downscale
pub const DEFAULT_SUPERSAMPLE: u32 = 2;
/// Longest side of the supersampled canvas, in pixels
pub const MAX_CANVAS_SIDE: u32 = 16_384;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Absorbs rounding when a row or column lands exactly on the upper bound
/// Relative slack allowed when counting rows and columns
pub const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Everything one generation run needs, checked up front
///
/// Construction fails before any rendering starts, so a run either has a
/// valid configuration or never begins.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    region: TilingRegion,
    colors: [ColorToken; 3],
    sphere_center: [i32; 3],
    sphere_radius: u32,
    sphere: Sphere,
    panel_count: usize,
}

impl RunConfig {
    /// Validate raw run parameters
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `edge_length` is not positive
    /// - `sphere_radius` is not positive
    /// - `upper_right` is not strictly above `lower_left`
    /// - the region holds more panels than can be counted
    pub fn new(
        lower_left: i32,
        upper_right: i32,
        edge_length: i32,
        colors: [ColorToken; 3],
        sphere_center: [i32; 3],
        sphere_radius: i32,
    ) -> Result<Self> {
        let edge_length = u32::try_from(edge_length)
            .ok()
            .filter(|&length| length > 0)
            .ok_or_else(|| {
                invalid_configuration("edge_length", &edge_length, &"must be positive")
            })?;
        let sphere_radius = u32::try_from(sphere_radius)
            .ok()
            .filter(|&radius| radius > 0)
            .ok_or_else(|| {
                invalid_configuration("sphere_radius", &sphere_radius, &"must be positive")
            })?;
        if upper_right <= lower_left {
            return Err(invalid_configuration(
                "upper_right",
                &upper_right,
                &format!("must be greater than lower_left ({lower_left})"),
            ));
        }

        let region = TilingRegion::new(lower_left, upper_right, edge_length)?;
        let panel_count = region
            .hexagon_count()
            .and_then(|count| count.checked_mul(PanelPosition::ALL.len()))
            .ok_or_else(|| {
                invalid_configuration("edge_length", &edge_length, &"region holds too many hexagons")
            })?;
        let [x, y, z] = sphere_center;
        let sphere = Sphere::new(
            Point::new(f64::from(x), f64::from(y), f64::from(z)),
            f64::from(sphere_radius),
        )?;

        Ok(Self {
            region,
            colors,
            sphere_center,
            sphere_radius,
            sphere,
            panel_count,
        })
    }

    /// Region the tiling covers
    pub const fn region(&self) -> &TilingRegion {
        &self.region
    }

    /// Panel colors: upper-right, left, lower-right
    pub const fn colors(&self) -> &[ColorToken; 3] {
        &self.colors
    }

    /// Deforming sphere
    pub const fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    /// Sphere center as supplied
    pub const fn sphere_center(&self) -> [i32; 3] {
        self.sphere_center
    }

    /// Sphere radius as supplied
    pub const fn sphere_radius(&self) -> u32 {
        self.sphere_radius
    }

    /// Number of panels the region tiles into, three per hexagon
    pub const fn panel_count(&self) -> usize {
        self.panel_count
    }
}
