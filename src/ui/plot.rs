use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints, Points};

use crate::figure::{DensityFigure, ScatterFigure};

// ---------------------------------------------------------------------------
// Scatter of normalized responses
// ---------------------------------------------------------------------------

/// Render every response as a translucent point inside fixed, square bounds.
pub fn scatter_plot(ui: &mut Ui, figure: &ScatterFigure) {
    let cfg = &figure.config;

    Plot::new("scatter_plot")
        .data_aspect(1.0)
        .view_aspect(1.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [cfg.x_range.min, cfg.y_range.min],
                [cfg.x_range.max, cfg.y_range.max],
            ));

            let points: PlotPoints = figure.points.iter().copied().collect();
            plot_ui.points(
                Points::new(points)
                    .color(figure.color)
                    .radius(cfg.marker_radius)
                    .filled(true),
            );
        });
}

// ---------------------------------------------------------------------------
// Density comparison
// ---------------------------------------------------------------------------

/// Render one density curve per group on shared axes.
pub fn density_plot(ui: &mut Ui, figure: &DensityFigure) {
    let cfg = &figure.config;
    // headroom above the tallest curve
    let y_max = figure.peak() * 1.05;

    Plot::new("density_plot")
        .legend(Legend::default().background_alpha(0.0))
        .x_axis_label(cfg.x_label.as_str())
        .y_axis_label(cfg.y_label.as_str())
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [cfg.x_range.min, 0.0],
                [cfg.x_range.max, y_max],
            ));

            for curve in &figure.curves {
                let points: PlotPoints = curve.points.iter().copied().collect();
                let line = Line::new(points)
                    .name(&curve.label)
                    .color(curve.color)
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
