use eframe::egui;
use image::RgbImage;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::{InspectError, Result};
use crate::inspection::{Inspection, inspect};
use crate::models::{ImageDimensions, RawRect};
use crate::report::{InspectionReport, save_overlay};
use crate::ui;
use crate::utils::{fit_within, resize_to_limit, scale_to_native};

pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub struct InspectApp {
    pub config: AppConfig,
    /// Native-resolution image; all metrics are computed on this one.
    pub current_image: Option<RgbImage>,
    pub current_image_path: Option<PathBuf>,
    pub current_image_name: Option<String>,
    pub texture: Option<egui::TextureHandle>,
    pub overlay_texture: Option<egui::TextureHandle>,
    /// The single rectangle being inspected, in native pixels. A new drag replaces it.
    pub active_rect: Option<RawRect>,
    pub drawing_start: Option<egui::Pos2>,
    pub inspection: Inspection,
    pub question: String,
    pub status_message: Option<(String, f32)>,
}

impl InspectApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            current_image: None,
            current_image_path: None,
            current_image_name: None,
            texture: None,
            overlay_texture: None,
            active_rect: None,
            drawing_start: None,
            inspection: Inspection::default(),
            question: String::new(),
            status_message: None,
        }
    }

    pub fn show_status(&mut self, message: &str) {
        self.status_message = Some((message.to_string(), 2.0));
    }

    pub fn tick_status(&mut self, dt: f32) {
        if let Some((_, remaining)) = &mut self.status_message {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.status_message = None;
            }
        }
    }

    pub fn dimensions(&self) -> Option<ImageDimensions> {
        self.current_image.as_ref().map(ImageDimensions::of)
    }

    /// Size the image is drawn at on the canvas.
    pub fn display_size(&self) -> Option<(u32, u32)> {
        self.dimensions().map(|dims| {
            fit_within(
                dims,
                self.config.canvas_max_width,
                self.config.canvas_max_height,
            )
        })
    }

    pub fn display_image(&self) -> Option<RgbImage> {
        self.current_image.as_ref().map(|img| {
            resize_to_limit(
                img,
                self.config.canvas_max_width,
                self.config.canvas_max_height,
            )
        })
    }

    pub fn select_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Road image", &IMAGE_EXTENSIONS)
            .pick_file()
        {
            if let Err(e) = self.load_image(&path) {
                log::error!("{}", e);
                self.show_status("Failed to load image");
            }
        }
    }

    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        let img = image::open(path)
            .map_err(|source| InspectError::ImageDecode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string());
        log::info!(
            "Loaded {} ({}x{})",
            path.display(),
            img.width(),
            img.height()
        );

        self.set_image(img, name);
        self.current_image_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Replaces the current image. The previous box does not carry over.
    pub fn set_image(&mut self, img: RgbImage, name: Option<String>) {
        self.current_image = Some(img);
        self.current_image_name = name;
        self.current_image_path = None;
        self.texture = None;
        self.active_rect = None;
        self.drawing_start = None;
        self.refresh();
    }

    pub fn set_rect(&mut self, rect: Option<RawRect>) {
        self.active_rect = rect;
        self.refresh();
        if rect.is_some() && !self.inspection.has_box() {
            self.show_status("Rectangle is empty, draw again");
        }
    }

    pub fn clear_box(&mut self) {
        if self.active_rect.is_some() {
            self.set_rect(None);
            self.show_status("Box cleared");
        }
        self.drawing_start = None;
    }

    /// Turns a finished drag on the canvas into the active rectangle.
    ///
    /// `image_rect` is where the display image was painted on screen.
    pub fn finish_drag(&mut self, start: egui::Pos2, end: egui::Pos2, image_rect: egui::Rect) {
        let Some(dims) = self.dimensions() else {
            return;
        };
        let origin = image_rect.min;
        let drawn = RawRect::from_drag(
            (start.x - origin.x, start.y - origin.y),
            (end.x - origin.x, end.y - origin.y),
        );
        let native = scale_to_native(drawn, (image_rect.width(), image_rect.height()), dims);
        log::debug!("Drawn {:?} -> native {:?}", drawn, native);
        self.set_rect(Some(native));
    }

    fn refresh(&mut self) {
        self.inspection = match &self.current_image {
            Some(img) => inspect(img, self.active_rect),
            None => Inspection::default(),
        };
        self.overlay_texture = None;
    }

    pub fn report(&self) -> Result<InspectionReport> {
        let dims = self.dimensions().ok_or(InspectError::NoImage)?;
        Ok(InspectionReport::new(
            self.current_image_name.clone(),
            dims,
            &self.question,
            self.inspection.metrics.clone(),
        ))
    }

    /// Writes the report JSON and, next to it, the overlay PNG.
    pub fn export_to(&self, json_path: &Path) -> Result<PathBuf> {
        let overlay = self.inspection.overlay.as_ref().ok_or(InspectError::NoBox)?;
        self.report()?.save_json(json_path)?;

        let stem = json_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("inspection");
        let overlay_path = json_path.with_file_name(format!("{}_overlay.png", stem));
        save_overlay(&overlay_path, overlay)?;
        Ok(overlay_path)
    }

    pub fn export_report(&mut self) {
        if !self.inspection.has_box() {
            self.show_status("Draw a rectangle before exporting");
            return;
        }

        let default_name = self
            .current_image_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
            .map(|s| format!("{}_inspection.json", s))
            .unwrap_or_else(|| "inspection.json".to_string());

        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };

        match self.export_to(&path) {
            Ok(_) => self.show_status("Report exported"),
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.show_status(&format!("Export failed: {}", e));
            }
        }
    }
}

impl eframe::App for InspectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick_status(ctx.input(|i| i.stable_dt));

        ui::top_panel(self, ctx);
        ui::metrics_panel(self, ctx);
        ui::central_panel(self, ctx);

        if self.status_message.is_some() {
            ctx.request_repaint();
        }
    }
}
