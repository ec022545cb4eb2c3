use std::path::PathBuf;

use crate::data::transform::NormalizationFrame;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Closed interval used for fixed plot bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Settings for the scatter figure.
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    pub title: String,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    /// Marker opacity in `[0, 1]`.
    pub alpha: f32,
    pub marker_radius: f32,
}

/// Settings for the density comparison figure.
#[derive(Debug, Clone)]
pub struct DensityConfig {
    pub title: String,
    pub x_range: AxisRange,
    pub x_label: String,
    pub y_label: String,
    /// Label for rows above the threshold.
    pub above_label: String,
    /// Label for rows below the threshold.
    pub below_label: String,
    /// Kernel bandwidth, in normalized units.
    pub bandwidth: f64,
    /// How many bandwidths the curve extends past the sample range.
    pub cut: f64,
    pub grid_size: usize,
}

/// Everything a run needs. No value here is read from the environment.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub input_path: PathBuf,
    pub x_column: String,
    pub y_column: String,
    pub group_column: String,
    pub threshold: f64,
    pub frame: NormalizationFrame,
    pub scatter: ScatterConfig,
    pub density: DensityConfig,
    /// Inner size of each figure window, in points.
    pub window_size: [f32; 2],
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("./waytz_data.csv"),
            x_column: "x".to_string(),
            y_column: "y".to_string(),
            group_column: "ideo".to_string(),
            threshold: 4.0,
            frame: NormalizationFrame::default(),
            scatter: ScatterConfig {
                title: "Moral concern responses".to_string(),
                x_range: AxisRange::new(-0.2, 1.0),
                y_range: AxisRange::new(-0.2, 1.0),
                alpha: 0.5,
                marker_radius: 3.0,
            },
            density: DensityConfig {
                title: "Moral concern extents by ideology".to_string(),
                x_range: AxisRange::new(0.0, 1.0),
                x_label: "Sphere of moral concern extents (approximate)".to_string(),
                y_label: "Observation density".to_string(),
                above_label: "Conservative".to_string(),
                below_label: "Liberal".to_string(),
                bandwidth: 0.25,
                cut: 3.0,
                grid_size: 100,
            },
            window_size: [800.0, 800.0],
        }
    }
}
