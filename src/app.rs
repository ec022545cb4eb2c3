use eframe::egui;

use crate::figure::{Figure, RenderError};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// A window that draws one precomputed figure.
pub struct FigureApp {
    pub figure: Figure,
}

impl FigureApp {
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Bottom panel: status ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.figure);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| match &self.figure {
            Figure::Scatter(fig) => plot::scatter_plot(ui, fig),
            Figure::Density(fig) => plot::density_plot(ui, fig),
        });
    }
}

/// Open a native window for `figure` and block until the user closes it.
///
/// The viewport lives only for the duration of this call; eframe reuses its
/// event loop, so figures can be shown one after another.
pub fn show_figure(figure: Figure, window_size: [f32; 2]) -> Result<(), RenderError> {
    let title = figure.title().to_string();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.as_str())
            .with_inner_size(window_size)
            .with_min_inner_size([300.0, 300.0]),
        ..Default::default()
    };

    log::info!("showing '{title}', close the window to continue");

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(FigureApp::new(figure)))),
    )
    .map_err(|e| RenderError::Window {
        title: title.clone(),
        message: e.to_string(),
    })
}
