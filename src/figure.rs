use eframe::egui::Color32;
use thiserror::Error;

use crate::color::{generate_palette, with_alpha};
use crate::config::{DensityConfig, ScatterConfig};
use crate::stats::kde::{GaussianKde, KdeError};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("window '{title}' failed: {message}")]
    Window { title: String, message: String },

    #[error("density estimate for '{group}' failed: {source}")]
    Estimation {
        group: String,
        #[source]
        source: KdeError,
    },

    #[error("both groups are empty, nothing to estimate")]
    NoDensity,
}

// ---------------------------------------------------------------------------
// Figure data – everything a window draws, computed before it opens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ScatterFigure {
    pub config: ScatterConfig,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
}

#[derive(Debug, Clone)]
pub struct DensityCurve {
    pub label: String,
    pub sample_size: usize,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
}

#[derive(Debug, Clone)]
pub struct DensityFigure {
    pub config: DensityConfig,
    pub curves: Vec<DensityCurve>,
}

impl DensityFigure {
    /// Highest density among the drawn curves (0 when there are none).
    pub fn peak(&self) -> f64 {
        self.curves
            .iter()
            .flat_map(|c| c.points.iter().map(|p| p[1]))
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone)]
pub enum Figure {
    Scatter(ScatterFigure),
    Density(DensityFigure),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Scatter(f) => &f.config.title,
            Figure::Density(f) => &f.config.title,
        }
    }

    /// One-line description for the status strip.
    pub fn summary(&self) -> String {
        match self {
            Figure::Scatter(f) => format!("{} responses", f.points.len()),
            Figure::Density(f) => f
                .curves
                .iter()
                .map(|c| format!("{}: n = {}", c.label, c.sample_size))
                .collect::<Vec<_>>()
                .join("   "),
        }
    }
}

/// Pair up the normalized coordinates as plot points.
pub fn scatter_figure(config: &ScatterConfig, xs: &[f64], ys: &[f64]) -> ScatterFigure {
    let base = generate_palette(1)[0];
    ScatterFigure {
        config: config.clone(),
        points: xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect(),
        color: with_alpha(base, config.alpha),
    }
}

// ---------------------------------------------------------------------------
// Density comparison
// ---------------------------------------------------------------------------

/// Magnitudes of one group, ready for estimation.
#[derive(Debug, Clone)]
pub struct GroupSample {
    pub label: String,
    pub magnitudes: Vec<f64>,
}

/// Estimate one curve per group on shared axes.
///
/// Empty groups are skipped with a warning; if every group is empty the
/// figure cannot be drawn and [`RenderError::NoDensity`] is returned.
pub fn density_figure(
    config: &DensityConfig,
    groups: &[GroupSample],
) -> Result<DensityFigure, RenderError> {
    let palette = generate_palette(groups.len());
    let mut curves = Vec::with_capacity(groups.len());

    for (group, color) in groups.iter().zip(palette) {
        if group.magnitudes.is_empty() {
            log::warn!("group '{}' has no responses, skipping its density", group.label);
            continue;
        }
        let kde = GaussianKde::new(&group.magnitudes, config.bandwidth).map_err(|source| {
            RenderError::Estimation {
                group: group.label.clone(),
                source,
            }
        })?;
        curves.push(DensityCurve {
            label: group.label.clone(),
            sample_size: group.magnitudes.len(),
            points: kde.curve(config.cut, config.grid_size),
            color,
        });
    }

    if curves.is_empty() {
        return Err(RenderError::NoDensity);
    }
    Ok(DensityFigure {
        config: config.clone(),
        curves,
    })
}
