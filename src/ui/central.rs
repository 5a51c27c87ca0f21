use eframe::egui;

use crate::app::InspectApp;
use crate::models::{BoundingBox, ImageDimensions};

/// Screen rectangle covering the box's pixels. `x2`/`y2` are inclusive, so
/// the far edge sits after the last pixel.
pub fn bbox_screen_rect(
    bbox: BoundingBox,
    dims: ImageDimensions,
    image_rect: egui::Rect,
) -> egui::Rect {
    let sx = image_rect.width() / dims.width as f32;
    let sy = image_rect.height() / dims.height as f32;
    egui::Rect::from_min_max(
        image_rect.min + egui::vec2(bbox.x1 as f32 * sx, bbox.y1 as f32 * sy),
        image_rect.min + egui::vec2((bbox.x2 + 1) as f32 * sx, (bbox.y2 + 1) as f32 * sy),
    )
}

pub fn central_panel(app: &mut InspectApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            app.clear_box();
        }

        let Some((width, height)) = app.display_size() else {
            ui.centered_and_justified(|ui| {
                ui.label("Upload an image to begin.");
            });
            return;
        };

        ui.heading("Input");
        ui.label("Drag on the image to mark the pothole. Right-click or Esc clears the box.");

        if app.texture.is_none() {
            if let Some(display) = app.display_image() {
                app.texture = Some(ui.ctx().load_texture(
                    "current_image",
                    egui::ColorImage::from_rgb([width as _, height as _], display.as_raw()),
                    Default::default(),
                ));
            }
        }
        let Some(texture_id) = app.texture.as_ref().map(|t| t.id()) else {
            return;
        };

        let displayed_size = egui::vec2(width as f32, height as f32);
        let (response, painter) = ui.allocate_painter(displayed_size, egui::Sense::click_and_drag());
        let image_rect = response.rect;
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture_id, image_rect, uv, egui::Color32::WHITE);

        // accepted box, mapped from native pixels onto the displayed image
        if let (Some(bbox), Some(dims)) = (app.inspection.bbox, app.dimensions()) {
            painter.rect_stroke(
                bbox_screen_rect(bbox, dims, image_rect),
                0.0,
                egui::Stroke::new(2.0, egui::Color32::GREEN),
                egui::StrokeKind::Middle,
            );
        }

        if response.drag_started() {
            app.drawing_start = response.interact_pointer_pos();
        }

        if let Some(start) = app.drawing_start {
            let pointer = response
                .interact_pointer_pos()
                .or_else(|| ui.input(|i| i.pointer.hover_pos()));

            if let Some(pointer) = pointer {
                painter.rect_stroke(
                    egui::Rect::from_two_pos(start, pointer),
                    0.0,
                    egui::Stroke::new(2.0, egui::Color32::YELLOW),
                    egui::StrokeKind::Middle,
                );

                if response.drag_stopped() {
                    app.finish_drag(start, pointer, image_rect);
                    app.drawing_start = None;
                }
            } else if response.drag_stopped() {
                app.drawing_start = None;
            }
        }

        if response.secondary_clicked() {
            app.clear_box();
        }
    });
}
