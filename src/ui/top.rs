use eframe::egui;

use crate::app::InspectApp;

pub const TITLE: &str = "DefectCopilot – Pothole Inspection (MVP)";

pub fn top_panel(app: &mut InspectApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.heading(TITLE);
        ui.horizontal(|ui| {
            if ui.button("Open road image").clicked() {
                app.select_image();
            }
            if ui
                .add_enabled(app.active_rect.is_some(), egui::Button::new("Clear box"))
                .clicked()
            {
                app.clear_box();
            }
            if ui
                .add_enabled(app.inspection.has_box(), egui::Button::new("Export report"))
                .clicked()
            {
                app.export_report();
            }

            if let Some(name) = &app.current_image_name {
                ui.label(format!("Image: {}", name));
            }
            if let Some((message, _)) = &app.status_message {
                ui.separator();
                ui.label(message);
            }
        });
    });
}
