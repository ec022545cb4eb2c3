use anyhow::{Context, Result};

use crate::app::show_figure;
use crate::config::PlotConfig;
use crate::data::loader::load_file;
use crate::data::model::ObservationTable;
use crate::data::partition::partition_by_threshold;
use crate::data::transform::normalize;
use crate::figure::{density_figure, scatter_figure, Figure, GroupSample};
use crate::stats::norm::euclidean_norm;

/// Both figures of a run, ready to display.
#[derive(Debug, Clone)]
pub struct Figures {
    pub scatter: Figure,
    pub density: Figure,
}

/// Load, normalize, partition and estimate. Nothing is shown yet, so any
/// failure here happens before a window opens.
pub fn prepare(config: &PlotConfig) -> Result<Figures> {
    let raw = load_file(&config.input_path)
        .with_context(|| format!("loading {} failed", config.input_path.display()))?;
    log::info!("loaded {} rows with columns {:?}", raw.len(), raw.column_names());

    prepare_table(config, &raw)
}

/// Everything after loading, on an already parsed table.
pub fn prepare_table(config: &PlotConfig, raw: &ObservationTable) -> Result<Figures> {
    let table = normalize(raw, &config.x_column, &config.y_column, &config.frame)
        .context("normalizing coordinates failed")?;
    log::info!("normalized {} responses", table.len());

    let (xs, ys) = coordinates(config, &table).context("normalizing coordinates failed")?;
    let scatter = scatter_figure(&config.scatter, &xs, &ys);

    let partition = partition_by_threshold(&table, &config.group_column, config.threshold)
        .context("partitioning by covariate failed")?;
    log::info!(
        "'{}' > {}: {} rows, < {}: {} rows, {} rows on the threshold excluded",
        config.group_column,
        config.threshold,
        partition.above.len(),
        config.threshold,
        partition.below.len(),
        partition.excluded
    );

    let groups = [
        (&config.density.above_label, &partition.above),
        (&config.density.below_label, &partition.below),
    ]
    .into_iter()
    .map(|(label, rows)| -> Result<GroupSample> {
        let (xs, ys) = coordinates(config, rows)?;
        let magnitudes = euclidean_norm(&[xs, ys])?;
        log_magnitudes(label, &magnitudes);
        Ok(GroupSample {
            label: label.clone(),
            magnitudes,
        })
    })
    .collect::<Result<Vec<_>>>()
    .context("computing response magnitudes failed")?;

    let density = density_figure(&config.density, &groups).context("density estimation failed")?;

    Ok(Figures {
        scatter: Figure::Scatter(scatter),
        density: Figure::Density(density),
    })
}

/// Prepare both figures, then show them one after the other.
pub fn run(config: &PlotConfig) -> Result<()> {
    let figures = prepare(config)?;

    show_figure(figures.scatter, config.window_size).context("rendering scatter plot failed")?;
    show_figure(figures.density, config.window_size).context("rendering density plot failed")?;
    Ok(())
}

fn coordinates(config: &PlotConfig, table: &ObservationTable) -> Result<(Vec<f64>, Vec<f64>)> {
    Ok((
        table.numeric_column(&config.x_column)?,
        table.numeric_column(&config.y_column)?,
    ))
}

fn log_magnitudes(label: &str, magnitudes: &[f64]) {
    if magnitudes.is_empty() {
        return;
    }
    let n = magnitudes.len() as f64;
    let mean = magnitudes.iter().sum::<f64>() / n;
    let min = magnitudes.iter().copied().fold(f64::INFINITY, f64::min);
    let max = magnitudes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    log::info!(
        "{label}: {} responses, magnitude mean {mean:.3} (min {min:.3}, max {max:.3})",
        magnitudes.len()
    );
}
