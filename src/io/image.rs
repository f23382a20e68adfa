//! Output naming and PNG writing

use crate::io::configuration::{OUTPUT_PREFIX, RunConfig};
use crate::io::error::{Result, VasarelyError};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// File name encoding the run parameters
///
/// `Vasarely_{lower}x{upper}_l{edge}_{c0}-{c1}-{c2}_r{radius}.png`
pub fn output_file_name(config: &RunConfig) -> String {
    let region = config.region();
    let [c0, c1, c2] = config.colors();
    format!(
        "{OUTPUT_PREFIX}_{}x{}_l{}_{}-{}-{}_r{}.png",
        region.lower_left(),
        region.upper_right(),
        region.edge_length(),
        c0.file_label(),
        c1.file_label(),
        c2.file_label(),
        config.sphere_radius()
    )
}

/// Full output path for `config` inside `directory`
pub fn output_path(directory: &Path, config: &RunConfig) -> PathBuf {
    directory.join(output_file_name(config))
}

/// Write `image` as a PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| VasarelyError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| VasarelyError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
