use eframe::egui::{Align, Color32, Layout, RichText, Ui};

use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Bottom status strip
// ---------------------------------------------------------------------------

/// Figure summary on the left, dismissal hint on the right.
pub fn status_bar(ui: &mut Ui, figure: &Figure) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(figure.summary());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
            ui.label(RichText::new("Close the window to continue").color(Color32::GRAY));
        });
    });
}
