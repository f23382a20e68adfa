//! Hexagon decomposition into three colored panels
//!
//! ```text
//!        upper-left ______ upper-right
//!                  /\     \
//!                 /  \  1  \
//!           left /  2 \center\ right
//!                \    /      /
//!                 \  /  3   /
//!                  \/______/
//!        lower-left        lower-right
//! ```
//!
//! Each panel is a quadrilateral sharing the hexagon's center. Panels are
//! deformed vertex by vertex, so their edges become straight chords of the
//! curved outline the sphere would produce.

use crate::geometry::{Point, Sphere, deform};
use crate::render::surface::{DrawingSurface, FilledPolygon};

/// sin(60°)
pub const SIN_60: f64 = 0.866_025_403_784_438_6;
/// cos(60°)
pub const COS_60: f64 = 0.5;

/// Position of a panel within its hexagon, in submission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelPosition {
    /// Above the center and to the right, filled with the first color
    UpperRight,
    /// Left half of the hexagon, filled with the second color
    Left,
    /// Below the center and to the right, filled with the third color
    LowerRight,
}

impl PanelPosition {
    /// All panels in the order they are drawn
    pub const ALL: [Self; 3] = [Self::UpperRight, Self::Left, Self::LowerRight];
}

/// A single tile, alive only while it is being rendered
#[derive(Debug, Clone, Copy)]
pub struct Hexagon<'a, C> {
    center: Point,
    edge_length: u32,
    colors: &'a [C; 3],
}

impl<'a, C> Hexagon<'a, C> {
    /// Create a hexagon centered on `center`
    pub const fn new(center: Point, edge_length: u32, colors: &'a [C; 3]) -> Self {
        Self {
            center,
            edge_length,
            colors,
        }
    }

    /// Center before deformation
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Edge length before deformation
    pub const fn edge_length(&self) -> u32 {
        self.edge_length
    }

    /// Undeformed corners, counter-clockwise starting from the rightmost one
    ///
    /// Order: right, upper-right, upper-left, left, lower-left, lower-right.
    pub fn corners(&self) -> [Point; 6] {
        let length = f64::from(self.edge_length);
        let height = length * SIN_60;
        let width = length * COS_60;
        let c = self.center;

        [
            c.offset(length, 0.0),
            c.offset(length - width, height),
            c.offset(-width, height),
            c.offset(-length, 0.0),
            c.offset(-width, -height),
            c.offset(length - width, -height),
        ]
    }

    /// Undeformed outline of one panel, in drawing order
    pub fn panel_outline(&self, position: PanelPosition) -> [Point; 4] {
        let [right, upper_right, upper_left, left, lower_left, lower_right] = self.corners();
        let center = self.center;

        match position {
            PanelPosition::UpperRight => [center, right, upper_right, upper_left],
            PanelPosition::Left => [upper_left, left, lower_left, center],
            PanelPosition::LowerRight => [center, right, lower_right, lower_left],
        }
    }

    /// Fill color assigned to one panel
    pub fn panel_color(&self, position: PanelPosition) -> &'a C {
        let [upper_right, left, lower_right] = self.colors;
        match position {
            PanelPosition::UpperRight => upper_right,
            PanelPosition::Left => left,
            PanelPosition::LowerRight => lower_right,
        }
    }
}

impl<C: Clone> Hexagon<'_, C> {
    /// The three panels with every vertex mapped through `sphere`
    pub fn deformed_panels(&self, sphere: &Sphere) -> [FilledPolygon<C>; 3] {
        PanelPosition::ALL.map(|position| {
            let vertices = self
                .panel_outline(position)
                .iter()
                .map(|&vertex| deform(vertex, sphere))
                .collect();
            FilledPolygon::new(vertices, self.panel_color(position).clone())
        })
    }

    /// Submit the deformed panels to `surface` in panel order
    pub fn render<S>(&self, sphere: &Sphere, surface: &mut S)
    where
        S: DrawingSurface<C> + ?Sized,
    {
        for panel in self.deformed_panels(sphere) {
            surface.fill_polygon(panel);
        }
    }
}

/// Render one deformed hexagon centered on `center`
pub fn render_hexagon<C, S>(
    center: Point,
    edge_length: u32,
    colors: &[C; 3],
    sphere: &Sphere,
    surface: &mut S,
) where
    C: Clone,
    S: DrawingSurface<C> + ?Sized,
{
    Hexagon::new(center, edge_length, colors).render(sphere, surface);
}
