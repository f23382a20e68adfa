//! Tiling passes over a region
//!
//! Both passes submit the same commands in the same order: hexagons bottom
//! row first, left to right, three panels each. The parallel pass only
//! spreads the geometry work; submission to the surface stays sequential.

use crate::geometry::Sphere;
use crate::render::surface::DrawingSurface;
use crate::tiling::hexagon::{Hexagon, render_hexagon};
use crate::tiling::region::TilingRegion;
use log::debug;
use rayon::prelude::*;

/// Render every hexagon of `region` onto `surface`
pub fn generate_tiling<C, S>(
    region: &TilingRegion,
    colors: &[C; 3],
    sphere: &Sphere,
    surface: &mut S,
) where
    C: Clone,
    S: DrawingSurface<C> + ?Sized,
{
    let mut count = 0_usize;
    for center in region.centers() {
        render_hexagon(center, region.edge_length(), colors, sphere, surface);
        count += 1;
    }
    debug!("Tiled {count} hexagons over {} rows", region.row_count());
}

/// Render every hexagon of `region`, deforming hexagons in parallel
///
/// Panels are buffered per hexagon and flushed in the same order
/// [`generate_tiling`] would submit them.
pub fn generate_tiling_parallel<C, S>(
    region: &TilingRegion,
    colors: &[C; 3],
    sphere: &Sphere,
    surface: &mut S,
) where
    C: Clone + Send + Sync,
    S: DrawingSurface<C> + ?Sized,
{
    generate_tiling_parallel_with(region, colors, sphere, surface, || {});
}

/// [`generate_tiling_parallel`], calling `on_hexagon` from the worker threads
/// as each hexagon finishes deforming
///
/// Every call happens before the first panel reaches `surface`.
pub fn generate_tiling_parallel_with<C, S, F>(
    region: &TilingRegion,
    colors: &[C; 3],
    sphere: &Sphere,
    surface: &mut S,
    on_hexagon: F,
) where
    C: Clone + Send + Sync,
    S: DrawingSurface<C> + ?Sized,
    F: Fn() + Sync,
{
    let centers: Vec<_> = region.centers().collect();
    let edge_length = region.edge_length();

    let hexagons: Vec<_> = centers
        .par_iter()
        .map(|&center| {
            let panels = Hexagon::new(center, edge_length, colors).deformed_panels(sphere);
            on_hexagon();
            panels
        })
        .collect();

    for panel in hexagons.into_iter().flatten() {
        surface.fill_polygon(panel);
    }
    debug!(
        "Tiled {} hexagons over {} rows in parallel",
        centers.len(),
        region.row_count()
    );
}
