use eframe::egui;

use crate::app::InspectApp;
use crate::models::COARSE_METRIC_NOTE;
use crate::utils::resize_to_width;

pub fn metrics_panel(app: &mut InspectApp, ctx: &egui::Context) {
    let preview_width = app.config.overlay_preview_width;

    egui::SidePanel::right("metrics_panel")
        .default_width(preview_width + 16.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                ui.heading("Overlay");

                let Some(dims) = app.dimensions() else {
                    ui.label("Upload an image to begin.");
                    return;
                };

                if app.overlay_texture.is_none() {
                    if let Some(overlay) = &app.inspection.overlay {
                        let preview = resize_to_width(overlay, preview_width as u32);
                        app.overlay_texture = Some(ui.ctx().load_texture(
                            "overlay_image",
                            egui::ColorImage::from_rgb(
                                [preview.width() as _, preview.height() as _],
                                preview.as_raw(),
                            ),
                            Default::default(),
                        ));
                    }
                }

                if let Some(texture) = &app.overlay_texture {
                    ui.image((texture.id(), texture.size_vec2()));
                } else {
                    ui.label("Draw a rectangle around the pothole to compute metrics.");
                }

                ui.separator();
                ui.heading("Metrics");
                ui.monospace(format!(
                    "image_shape: [{}, {}, 3]",
                    dims.height, dims.width
                ));

                if let Some(metrics) = &app.inspection.metrics {
                    match serde_json::to_string_pretty(metrics) {
                        Ok(json) => {
                            ui.monospace(json);
                        }
                        Err(e) => {
                            log::warn!("Failed to format metrics: {}", e);
                        }
                    }
                }
                ui.label(egui::RichText::new(COARSE_METRIC_NOTE).weak());

                ui.separator();
                ui.heading("Question");
                ui.add(
                    egui::TextEdit::multiline(&mut app.question)
                        .hint_text("e.g. Is this pothole deep enough to need repair?")
                        .desired_rows(3),
                );
            });
        });
}
