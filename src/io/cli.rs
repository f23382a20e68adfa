//! Command-line interface driving one deformed tiling from parameters to PNG

use crate::io::configuration::{
    DEFAULT_COLORS, DEFAULT_EDGE_LENGTH, DEFAULT_EXPORT_SIZE, DEFAULT_LOWER_LEFT,
    DEFAULT_SPHERE_CENTER, DEFAULT_SPHERE_RADIUS, DEFAULT_SUPERSAMPLE, DEFAULT_UPPER_RIGHT,
    OUTPUT_DIRECTORY, RunConfig,
};
use crate::io::error::{Result, invalid_configuration};
use crate::io::image::{output_path, save_png};
use crate::io::progress::{ProgressManager, ProgressSurface};
use crate::render::color::ColorToken;
use crate::render::raster::{Exporter, RasterExporter, Viewport};
use crate::render::surface::PolygonBuffer;
use crate::tiling::{generate_tiling, generate_tiling_parallel_with};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "vasarely")]
#[command(
    author,
    version,
    about = "Render a hexagonal tiling bulged by an emerging sphere"
)]
/// Command-line arguments for the tiling generator
pub struct Cli {
    /// Lower-left bound of the square region, shared by both axes
    #[arg(short, long, default_value_t = DEFAULT_LOWER_LEFT, allow_negative_numbers = true)]
    pub lower_left: i32,

    /// Upper-right bound of the square region, shared by both axes
    #[arg(short, long, default_value_t = DEFAULT_UPPER_RIGHT, allow_negative_numbers = true)]
    pub upper_right: i32,

    /// Hexagon edge length before deformation
    #[arg(short, long, default_value_t = DEFAULT_EDGE_LENGTH, allow_negative_numbers = true)]
    pub edge_length: i32,

    /// Panel colors: upper-right, left, lower-right (X11 names or hex)
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["C1", "C2", "C3"],
        default_values = DEFAULT_COLORS
    )]
    pub colors: Vec<String>,

    /// Center of the deforming sphere
    #[arg(
        short = 'C',
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        default_values_t = DEFAULT_SPHERE_CENTER,
        allow_negative_numbers = true
    )]
    pub center: Vec<i32>,

    /// Radius of the deforming sphere
    #[arg(short, long, default_value_t = DEFAULT_SPHERE_RADIUS, allow_negative_numbers = true)]
    pub radius: i32,

    /// Directory the PNG is written to
    #[arg(short, long, default_value = OUTPUT_DIRECTORY)]
    pub output_dir: PathBuf,

    /// Side of the square the exported image is fitted into
    #[arg(short, long, default_value_t = DEFAULT_EXPORT_SIZE)]
    pub size: u32,

    /// Canvas resolution multiplier applied before downscaling
    #[arg(long, default_value_t = DEFAULT_SUPERSAMPLE)]
    pub supersample: u32,

    /// Deform hexagons on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the arguments into a run configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a color is unrecognised, the wrong number of colors
    /// or center coordinates is given, or [`RunConfig::new`] rejects a value
    pub fn run_config(&self) -> Result<RunConfig> {
        let colors = match self.colors.as_slice() {
            [c0, c1, c2] => [
                c0.parse::<ColorToken>()?,
                c1.parse::<ColorToken>()?,
                c2.parse::<ColorToken>()?,
            ],
            other => {
                return Err(invalid_configuration(
                    "colors",
                    &other.join(" "),
                    &"exactly three colors are required",
                ));
            }
        };
        let center = match self.center.as_slice() {
            &[x, y, z] => [x, y, z],
            other => {
                return Err(invalid_configuration(
                    "center",
                    &format!("{other:?}"),
                    &"exactly three coordinates are required",
                ));
            }
        };

        RunConfig::new(
            self.lower_left,
            self.upper_right,
            self.edge_length,
            colors,
            center,
            self.radius,
        )
    }
}

/// Runs one generation: validate, tile, rasterize, save
pub struct Generator {
    cli: Cli,
}

impl Generator {
    /// Create a generator for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the tiling and write it to disk, returning the output path
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the image cannot
    /// be rasterized or saved
    pub fn run(&self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let config = self.cli.run_config()?;
        let exporter = RasterExporter::new(self.cli.size, self.cli.supersample)?;
        let region = config.region();

        info!(
            "Tiling [{}, {}] with edge {} (sphere at {:?}, radius {})",
            region.lower_left(),
            region.upper_right(),
            region.edge_length(),
            config.sphere_center(),
            config.sphere_radius()
        );
        if !config.sphere().intersects_plane() {
            warn!("Sphere does not cross the drawing plane; the tiling stays flat");
        }

        let panel_count = config.panel_count();
        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(panel_count)
        } else {
            ProgressManager::hidden()
        };

        let mut buffer = PolygonBuffer::<ColorToken>::with_capacity(panel_count);
        if self.cli.parallel {
            // Workers count panels as they deform, so the flush is not counted again
            generate_tiling_parallel_with(
                region,
                config.colors(),
                config.sphere(),
                &mut buffer,
                || progress.hexagon_completed(),
            );
        } else {
            let mut surface = ProgressSurface::new(&mut buffer, &progress);
            generate_tiling(region, config.colors(), config.sphere(), &mut surface);
        }

        progress.start_stage("Rasterizing");
        let image = exporter.export(buffer.polygons(), &Viewport::around_region(region))?;

        progress.start_stage("Saving");
        let path = output_path(&self.cli.output_dir, &config);
        save_png(&image, &path)?;
        progress.finish();

        info!(
            "Wrote {}x{} image to {} in {:.2?}",
            image.width(),
            image.height(),
            path.display(),
            start_time.elapsed()
        );
        Ok(path)
    }
}
