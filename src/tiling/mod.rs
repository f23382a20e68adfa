//! Hexagon geometry and the interlocking row layout that tiles a region

/// Center enumeration and parallel/sequential tiling passes
pub mod generator;
/// Hexagon corners, panels and their deformed rendering
pub mod hexagon;
/// Square tiling domain and its row/column arithmetic
pub mod region;

pub use generator::{generate_tiling, generate_tiling_parallel, generate_tiling_parallel_with};
pub use hexagon::{Hexagon, PanelPosition, render_hexagon};
pub use region::TilingRegion;
