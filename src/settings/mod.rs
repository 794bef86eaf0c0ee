//! SettingsStore - render configuration with persisted-blob load/save
//!
//! The blob is a single flat JSON record under one storage key, field names
//! matching what the page has always written (camelCase). Loading merges
//! only recognized, present keys over the defaults; a blob that fails to
//! parse is treated as absent. Saving always writes the full record.

mod storage;

use serde::{Deserialize, Serialize};

use crate::render::palette::{ColorScheme, Rgb};

pub const STORAGE_KEY: &str = "wallpaper_settings";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Dark,
    Light,
}

impl Mode {
    pub fn from_name(name: &str) -> Option<Mode> {
        match name {
            "dark" => Some(Mode::Dark),
            "light" => Some(Mode::Light),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSettings {
    pub density: u32,
    pub speed: f32,
    pub mouse_radius: f32,
    pub contours: u32,
    pub color_scheme: ColorScheme,
    pub custom_color: Option<Rgb>,
    #[serde(with = "hex_color")]
    pub custom_bg: Option<Rgb>,
    pub mode: Mode,
    pub show_coords: bool,
    pub show_watermark: bool,
    pub show_crosshair: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            density: 1,
            speed: 0.0,
            mouse_radius: 0.0,
            contours: 16,
            color_scheme: ColorScheme::Cyan,
            custom_color: None,
            custom_bg: None,
            mode: Mode::Dark,
            show_coords: false,
            show_watermark: true,
            show_crosshair: false,
        }
    }
}

/// Deserialization mirror of [`RenderSettings`] with every field optional,
/// so a partial blob merges instead of failing.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SavedSettings {
    density: Option<u32>,
    speed: Option<f32>,
    mouse_radius: Option<f32>,
    contours: Option<u32>,
    color_scheme: Option<ColorScheme>,
    custom_color: Option<Rgb>,
    #[serde(with = "hex_color")]
    custom_bg: Option<Rgb>,
    mode: Option<Mode>,
    show_coords: Option<bool>,
    show_watermark: Option<bool>,
    show_crosshair: Option<bool>,
}

/// `customBg` round-trips as a `#rrggbb` string (or null); malformed colors
/// deserialize to `None` instead of erroring.
mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::render::palette::Rgb;

    pub fn serialize<S: Serializer>(value: &Option<Rgb>, ser: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(color) => ser.serialize_str(&color.to_hex()),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Rgb>, D::Error> {
        let raw: Option<String> = Option::deserialize(de)?;
        Ok(raw.as_deref().and_then(Rgb::from_hex))
    }
}

pub struct SettingsStore {
    settings: RenderSettings,
}

impl SettingsStore {
    /// Defaults merged with whatever blob is persisted. Never fails.
    pub fn load() -> Self {
        let mut store = SettingsStore {
            settings: RenderSettings::default(),
        };
        if let Some(raw) = storage::get(STORAGE_KEY) {
            store.merge_json(&raw);
        }
        store
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }

    /// Merge recognized keys from a serialized blob over the current record.
    /// Unparseable input is ignored wholesale.
    pub fn merge_json(&mut self, raw: &str) {
        let Ok(saved) = serde_json::from_str::<SavedSettings>(raw) else {
            return;
        };
        let s = &mut self.settings;
        if let Some(v) = saved.density {
            s.density = v.max(1);
        }
        if let Some(v) = saved.speed {
            s.speed = v.max(0.0);
        }
        if let Some(v) = saved.mouse_radius {
            s.mouse_radius = v.max(0.0);
        }
        if let Some(v) = saved.contours {
            s.contours = v.max(1);
        }
        if let Some(v) = saved.color_scheme {
            s.color_scheme = v;
        }
        if let Some(v) = saved.custom_color {
            s.custom_color = Some(v);
        }
        if let Some(v) = saved.custom_bg {
            s.custom_bg = Some(v);
        }
        if let Some(v) = saved.mode {
            s.mode = v;
        }
        if let Some(v) = saved.show_coords {
            s.show_coords = v;
        }
        if let Some(v) = saved.show_watermark {
            s.show_watermark = v;
        }
        if let Some(v) = saved.show_crosshair {
            s.show_crosshair = v;
        }
    }

    pub fn to_json(&self) -> String {
        // RenderSettings serialization cannot fail; fall back to "{}" anyway
        // rather than poisoning the blob.
        serde_json::to_string(&self.settings).unwrap_or_else(|_| "{}".to_string())
    }

    /// Persist the full current record.
    pub fn save(&self) {
        storage::set(STORAGE_KEY, &self.to_json());
    }

    /// Back to hard-coded defaults and drop the persisted blob.
    pub fn reset(&mut self) {
        self.settings = RenderSettings::default();
        storage::remove(STORAGE_KEY);
    }

    /// Whether a persisted blob currently exists (native test hook).
    pub fn has_persisted_blob() -> bool {
        storage::get(STORAGE_KEY).is_some()
    }
}
