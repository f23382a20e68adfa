//! Draw command collection and conversion of commands into pixels

/// Color tokens accepted on the command line
pub mod color;
/// Named color table
pub mod palette;
/// Polygon rasterization and fitting into the export box
pub mod raster;
/// Draw command sink and the in-memory command list
pub mod surface;

pub use color::ColorToken;
pub use raster::{Exporter, FillColor, RasterExporter, Viewport};
pub use surface::{DrawingSurface, FilledPolygon, PolygonBuffer};
