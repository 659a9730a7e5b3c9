// src/gui/logo.rs
//
// The header logo doubles as the window icon. A missing or broken file only
// costs the picture; the dashboard runs without it.

use std::path::Path;

use eframe::egui::{self, IconData};
use image::RgbaImage;

fn load_rgba(path: &Path) -> Option<RgbaImage> {
    match image::open(path) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            logw!("Logo: could not load {}: {}", path.display(), e);
            None
        }
    }
}

pub fn icon(path: &Path) -> Option<IconData> {
    let rgba = load_rgba(path)?;
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

pub fn texture(ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
    let rgba = load_rgba(path)?;
    let size = [rgba.width() as usize, rgba.height() as usize];
    let image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    logd!("Logo: {}x{} from {}", size[0], size[1], path.display());
    Some(ctx.load_texture("logo", image, egui::TextureOptions::LINEAR))
}
