//! Points, the deforming sphere and the mapping between them

/// Spherical emergence mapping applied to tiling vertices
pub mod deformation;
/// Point and sphere value types
pub mod point;

pub use deformation::{clamped_acos, clamped_asin, deform};
pub use point::{Point, Sphere};
