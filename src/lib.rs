//! Hexagonal tilings bulged by a sphere emerging through the drawing plane
//!
//! Every tile is split into three colored panels. Each panel vertex is
//! mapped onto the cap of a sphere crossing the plane, and the deformed
//! panels are collected as draw commands before being rasterized to PNG.

#![forbid(unsafe_code)]

/// Points, the deforming sphere and the spherical mapping
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Draw commands, colors and rasterization
pub mod render;
/// Hexagon panels and the region tiling passes
pub mod tiling;

pub use geometry::{Point, Sphere, deform};
pub use io::error::{Result, VasarelyError};
pub use tiling::{TilingRegion, generate_tiling, render_hexagon};
