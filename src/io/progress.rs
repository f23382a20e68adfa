//! Progress display for the tiling and export stages

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::render::surface::{DrawingSurface, FilledPolygon};
use crate::tiling::PanelPosition;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PANEL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("[{elapsed_precise}] {spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Tracks submitted panels, then the export stages of a run
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress display expecting `panel_count` draw commands
    pub fn new(panel_count: usize) -> Self {
        let bar = ProgressBar::new(panel_count as u64);
        bar.set_style(PANEL_STYLE.clone());
        bar.set_message("Tiling");
        Self { bar }
    }

    /// Create a progress display that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Count one submitted panel
    pub fn panel_submitted(&self) {
        self.bar.inc(1);
    }

    /// Count the panels of one hexagon whose geometry is ready
    pub fn hexagon_completed(&self) {
        self.bar.inc(PanelPosition::ALL.len() as u64);
    }

    /// Panels counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Switch from counting panels to a named export stage
    pub fn start_stage(&self, stage: &'static str) {
        self.bar.set_style(STAGE_STYLE.clone());
        self.bar.set_message(stage);
        self.bar.tick();
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Wraps a drawing surface and reports every submitted panel
pub struct ProgressSurface<'a, S> {
    inner: &'a mut S,
    progress: &'a ProgressManager,
}

impl<'a, S> ProgressSurface<'a, S> {
    /// Forward draw commands to `inner` while counting them on `progress`
    pub const fn new(inner: &'a mut S, progress: &'a ProgressManager) -> Self {
        Self { inner, progress }
    }
}

impl<C, S: DrawingSurface<C>> DrawingSurface<C> for ProgressSurface<'_, S> {
    fn fill_polygon(&mut self, polygon: FilledPolygon<C>) {
        self.inner.fill_polygon(polygon);
        self.progress.panel_submitted();
    }
}
