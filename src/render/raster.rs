//! Polygon rasterization and fitting into the export box
//!
//! Polygons are painted onto a supersampled canvas whose longer side is the
//! export box times the supersample factor, then scaled down with a Lanczos
//! filter so shared panel edges come out antialiased.

use crate::geometry::Point;
use crate::io::configuration::{DEFAULT_EXPORT_SIZE, DEFAULT_SUPERSAMPLE, MAX_CANVAS_SIDE};
use crate::io::error::{Result, VasarelyError, invalid_configuration};
use crate::render::color::ColorToken;
use crate::render::surface::FilledPolygon;
use crate::tiling::TilingRegion;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_polygon_mut;
use log::debug;

/// Anything that can be painted as a solid fill
pub trait FillColor {
    /// Color used when rasterizing
    fn fill_rgba(&self) -> Rgba<u8>;
}

impl FillColor for ColorToken {
    fn fill_rgba(&self) -> Rgba<u8> {
        Rgba(self.rgba())
    }
}

impl FillColor for Rgba<u8> {
    fn fill_rgba(&self) -> Rgba<u8> {
        *self
    }
}

/// World-space rectangle that ends up on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge
    pub min_x: f64,
    /// Bottom edge
    pub min_y: f64,
    /// Right edge
    pub max_x: f64,
    /// Top edge
    pub max_y: f64,
}

impl Viewport {
    /// Viewport covering `region` plus a margin of 1.5 edge lengths per side
    ///
    /// The margin leaves room for the outer half of the boundary hexagons.
    pub fn around_region(region: &TilingRegion) -> Self {
        let margin = region.row_offset();
        let lower = f64::from(region.lower_left()) - margin;
        let upper = f64::from(region.upper_right()) + margin;
        Self {
            min_x: lower,
            min_y: lower,
            max_x: upper,
            max_y: upper,
        }
    }

    /// Horizontal extent
    pub const fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub const fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Turns a list of draw commands into a raster image
pub trait Exporter<C> {
    /// Rasterize `polygons` as seen through `viewport`
    ///
    /// # Errors
    ///
    /// Returns an error if there is nothing to draw or the viewport is empty
    fn export(&self, polygons: &[FilledPolygon<C>], viewport: &Viewport) -> Result<RgbaImage>;
}

/// Software rasterizer with supersampling and a final resize
#[derive(Debug, Clone, Copy)]
pub struct RasterExporter {
    box_size: u32,
    supersample: u32,
    background: Rgba<u8>,
}

impl Default for RasterExporter {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_EXPORT_SIZE,
            supersample: DEFAULT_SUPERSAMPLE,
            background: Rgba([255, 255, 255, 255]),
        }
    }
}

impl RasterExporter {
    /// Create an exporter fitting images into a `box_size` square
    ///
    /// # Errors
    ///
    /// Returns an error if either size is zero, or if the supersampled canvas
    /// would be wider than [`MAX_CANVAS_SIDE`]
    pub fn new(box_size: u32, supersample: u32) -> Result<Self> {
        if box_size == 0 {
            return Err(invalid_configuration(
                "size",
                &box_size,
                &"must be positive",
            ));
        }
        if supersample == 0 {
            return Err(invalid_configuration(
                "supersample",
                &supersample,
                &"must be positive",
            ));
        }
        if box_size > MAX_CANVAS_SIDE {
            return Err(invalid_configuration(
                "size",
                &box_size,
                &format!("must not exceed {MAX_CANVAS_SIDE}"),
            ));
        }
        if box_size
            .checked_mul(supersample)
            .is_none_or(|side| side > MAX_CANVAS_SIDE)
        {
            return Err(invalid_configuration(
                "supersample",
                &supersample,
                &format!("canvas side {box_size} x {supersample} exceeds {MAX_CANVAS_SIDE}"),
            ));
        }
        Ok(Self {
            box_size,
            supersample,
            ..Self::default()
        })
    }

    /// Replace the color painted behind the tiling
    #[must_use]
    pub const fn with_background(mut self, background: Rgba<u8>) -> Self {
        self.background = background;
        self
    }

    /// Side of the square the exported image is fitted into
    pub const fn box_size(&self) -> u32 {
        self.box_size
    }

    fn paint<C: FillColor>(
        &self,
        polygons: &[FilledPolygon<C>],
        viewport: &Viewport,
    ) -> Result<RgbaImage> {
        let longest = viewport.width().max(viewport.height());
        if !longest.is_finite() || viewport.width() <= 0.0 || viewport.height() <= 0.0 {
            return Err(VasarelyError::EmptyCanvas {
                reason: format!("viewport {viewport:?} has no area"),
            });
        }

        let scale = f64::from(self.box_size) * f64::from(self.supersample) / longest;
        let width = ((viewport.width() * scale).round() as u32).max(1);
        let height = ((viewport.height() * scale).round() as u32).max(1);
        debug!(
            "Rasterizing {} polygons onto {width}x{height} canvas",
            polygons.len()
        );

        let mut canvas = RgbaImage::from_pixel(width, height, self.background);
        for polygon in polygons {
            let outline = to_pixels(&polygon.vertices, viewport, scale);
            if outline.len() >= 3 {
                draw_polygon_mut(&mut canvas, &outline, polygon.color.fill_rgba());
            }
        }
        Ok(canvas)
    }
}

impl<C: FillColor> Exporter<C> for RasterExporter {
    fn export(&self, polygons: &[FilledPolygon<C>], viewport: &Viewport) -> Result<RgbaImage> {
        if polygons.is_empty() {
            return Err(VasarelyError::EmptyCanvas {
                reason: "no polygons were drawn".to_string(),
            });
        }
        let canvas = self.paint(polygons, viewport)?;
        Ok(fit_to_box(&canvas, self.box_size))
    }
}

/// Scale `image` so it fits inside a `box_size` square, keeping its aspect ratio
///
/// Images smaller than the box are enlarged.
pub fn fit_to_box(image: &RgbaImage, box_size: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    let ratio =
        (f64::from(box_size) / f64::from(width)).min(f64::from(box_size) / f64::from(height));
    let new_width = ((f64::from(width) * ratio) as u32).max(1);
    let new_height = ((f64::from(height) * ratio) as u32).max(1);

    if (new_width, new_height) == (width, height) {
        return image.clone();
    }
    imageops::resize(image, new_width, new_height, FilterType::Lanczos3)
}

// World to pixel coordinates, y pointing down; drops repeated vertices that
// rounding collapses together so the outline stays a valid polygon
fn to_pixels(
    vertices: &[Point],
    viewport: &Viewport,
    scale: f64,
) -> Vec<imageproc::point::Point<i32>> {
    let mut outline: Vec<imageproc::point::Point<i32>> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        let pixel = imageproc::point::Point::new(
            ((vertex.x - viewport.min_x) * scale).round() as i32,
            ((viewport.max_y - vertex.y) * scale).round() as i32,
        );
        if outline.last() != Some(&pixel) {
            outline.push(pixel);
        }
    }
    while outline.len() > 1 && outline.first() == outline.last() {
        outline.pop();
    }
    outline
}
