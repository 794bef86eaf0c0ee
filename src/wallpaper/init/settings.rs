//! Clamped setter operations for every RenderSettings field.
//!
//! Each setter mirrors a control on the page toolbar and persists the full
//! blob immediately, so a reload always restores the last slider positions.

use crate::render::palette::{ColorScheme, Rgb};
use crate::settings::Mode;

use super::WallpaperCore;

pub(super) fn set_density(core: &mut WallpaperCore, density: u32) {
    core.store.settings_mut().density = density.max(1);
    core.store.save();
}

pub(super) fn set_speed(core: &mut WallpaperCore, speed: f32) {
    core.store.settings_mut().speed = speed.max(0.0);
    core.store.save();
}

pub(super) fn set_mouse_radius(core: &mut WallpaperCore, radius: f32) {
    core.store.settings_mut().mouse_radius = radius.max(0.0);
    core.store.save();
}

pub(super) fn set_contours(core: &mut WallpaperCore, contours: u32) {
    core.store.settings_mut().contours = contours.max(1);
    core.store.save();
}

/// Selecting a scheme preset also drops any single-color override.
pub(super) fn set_color_scheme(core: &mut WallpaperCore, name: &str) -> bool {
    let Some(scheme) = ColorScheme::from_name(name) else {
        return false;
    };
    let s = core.store.settings_mut();
    s.color_scheme = scheme;
    s.custom_color = None;
    core.store.save();
    true
}

pub(super) fn set_custom_color(core: &mut WallpaperCore, color: Rgb) {
    core.store.settings_mut().custom_color = Some(color);
    core.store.save();
}

pub(super) fn clear_custom_color(core: &mut WallpaperCore) {
    core.store.settings_mut().custom_color = None;
    core.store.save();
}

pub(super) fn set_custom_bg(core: &mut WallpaperCore, hex: &str) -> bool {
    let Some(color) = Rgb::from_hex(hex) else {
        return false;
    };
    core.store.settings_mut().custom_bg = Some(color);
    core.store.save();
    true
}

pub(super) fn clear_custom_bg(core: &mut WallpaperCore) {
    core.store.settings_mut().custom_bg = None;
    core.store.save();
}

/// Switching mode also clears the background override, so each mode lands
/// on its scheme background.
pub(super) fn set_mode(core: &mut WallpaperCore, name: &str) -> bool {
    let Some(mode) = Mode::from_name(name) else {
        return false;
    };
    let s = core.store.settings_mut();
    s.mode = mode;
    s.custom_bg = None;
    core.store.save();
    true
}

pub(super) fn set_show_coords(core: &mut WallpaperCore, show: bool) {
    core.store.settings_mut().show_coords = show;
    core.store.save();
}

pub(super) fn set_show_watermark(core: &mut WallpaperCore, show: bool) {
    core.store.settings_mut().show_watermark = show;
    core.store.save();
}

pub(super) fn set_show_crosshair(core: &mut WallpaperCore, show: bool) {
    core.store.settings_mut().show_crosshair = show;
    core.store.save();
}
