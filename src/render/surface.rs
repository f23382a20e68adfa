//! Ordered sink for filled-polygon draw commands

use crate::geometry::Point;

/// One fill command: a closed outline and the color to paint it with
#[derive(Debug, Clone, PartialEq)]
pub struct FilledPolygon<C> {
    /// Outline vertices in drawing order; the last vertex joins the first
    pub vertices: Vec<Point>,
    /// Fill color token, passed through untouched
    pub color: C,
}

impl<C> FilledPolygon<C> {
    /// Create a fill command
    pub const fn new(vertices: Vec<Point>, color: C) -> Self {
        Self { vertices, color }
    }
}

/// Anything that accepts filled polygons in submission order
///
/// Later polygons paint over earlier ones where they overlap, so callers
/// must submit in a deterministic order.
pub trait DrawingSurface<C> {
    /// Append a filled polygon
    fn fill_polygon(&mut self, polygon: FilledPolygon<C>);
}

/// Draw command list handed to an exporter once generation is done
#[derive(Debug, Clone)]
pub struct PolygonBuffer<C> {
    polygons: Vec<FilledPolygon<C>>,
}

impl<C> Default for PolygonBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PolygonBuffer<C> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// Create an empty buffer sized for `capacity` polygons
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            polygons: Vec::with_capacity(capacity),
        }
    }

    /// Submitted polygons, oldest first
    pub fn polygons(&self) -> &[FilledPolygon<C>] {
        &self.polygons
    }

    /// Take ownership of the submitted polygons
    pub fn into_polygons(self) -> Vec<FilledPolygon<C>> {
        self.polygons
    }

    /// Number of submitted polygons
    pub const fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Whether nothing has been submitted yet
    pub const fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl<C> DrawingSurface<C> for PolygonBuffer<C> {
    fn fill_polygon(&mut self, polygon: FilledPolygon<C>) {
        self.polygons.push(polygon);
    }
}
