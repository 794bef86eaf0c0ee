//! Color schemes and per-level line styling.
//!
//! The line-color decision is a single precedence rule, resolved once per
//! frame: explicit override > light-mode forced single color > per-index
//! scheme palette.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional). Returns `None` on any
    /// malformed input; callers treat that as "no override".
    pub fn from_hex(s: &str) -> Option<Rgb> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb { r, g, b })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Pointer-glow color with its base alpha.
#[derive(Clone, Copy, Debug)]
pub struct Glow {
    pub color: Rgb,
    pub alpha: f32,
}

/// One named scheme: four cycling line colors, a glow, and both backgrounds.
#[derive(Clone, Copy, Debug)]
pub struct Scheme {
    pub lines: [Rgb; 4],
    pub glow: Glow,
    pub bg: Rgb,
    pub light_bg: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Cyan,
    Emerald,
    Rose,
    Amber,
    Violet,
    Mono,
}

impl ColorScheme {
    pub fn from_name(name: &str) -> Option<ColorScheme> {
        match name {
            "cyan" => Some(ColorScheme::Cyan),
            "emerald" => Some(ColorScheme::Emerald),
            "rose" => Some(ColorScheme::Rose),
            "amber" => Some(ColorScheme::Amber),
            "violet" => Some(ColorScheme::Violet),
            "mono" => Some(ColorScheme::Mono),
            _ => None,
        }
    }

    pub fn def(self) -> &'static Scheme {
        match self {
            ColorScheme::Cyan => &CYAN,
            ColorScheme::Emerald => &EMERALD,
            ColorScheme::Rose => &ROSE,
            ColorScheme::Amber => &AMBER,
            ColorScheme::Violet => &VIOLET,
            ColorScheme::Mono => &MONO,
        }
    }
}

static CYAN: Scheme = Scheme {
    lines: [
        Rgb::new(6, 182, 212),
        Rgb::new(56, 189, 248),
        Rgb::new(139, 92, 246),
        Rgb::new(14, 165, 233),
    ],
    glow: Glow {
        color: Rgb::new(6, 182, 212),
        alpha: 0.15,
    },
    bg: Rgb::new(0x03, 0x07, 0x12),
    light_bg: Rgb::new(255, 255, 255),
};

static EMERALD: Scheme = Scheme {
    lines: [
        Rgb::new(16, 185, 129),
        Rgb::new(52, 211, 153),
        Rgb::new(6, 182, 212),
        Rgb::new(20, 184, 166),
    ],
    glow: Glow {
        color: Rgb::new(16, 185, 129),
        alpha: 0.15,
    },
    bg: Rgb::new(0x03, 0x07, 0x12),
    light_bg: Rgb::new(255, 255, 255),
};

static ROSE: Scheme = Scheme {
    lines: [
        Rgb::new(244, 63, 94),
        Rgb::new(236, 72, 153),
        Rgb::new(251, 113, 133),
        Rgb::new(249, 115, 22),
    ],
    glow: Glow {
        color: Rgb::new(244, 63, 94),
        alpha: 0.15,
    },
    bg: Rgb::new(0x0a, 0x05, 0x10),
    light_bg: Rgb::new(255, 255, 255),
};

static AMBER: Scheme = Scheme {
    lines: [
        Rgb::new(245, 158, 11),
        Rgb::new(251, 191, 36),
        Rgb::new(239, 68, 68),
        Rgb::new(249, 115, 22),
    ],
    glow: Glow {
        color: Rgb::new(245, 158, 11),
        alpha: 0.15,
    },
    bg: Rgb::new(0x0a, 0x07, 0x08),
    light_bg: Rgb::new(255, 255, 255),
};

static VIOLET: Scheme = Scheme {
    lines: [
        Rgb::new(139, 92, 246),
        Rgb::new(167, 139, 250),
        Rgb::new(236, 72, 153),
        Rgb::new(192, 132, 252),
    ],
    glow: Glow {
        color: Rgb::new(139, 92, 246),
        alpha: 0.15,
    },
    bg: Rgb::new(0x05, 0x05, 0x10),
    light_bg: Rgb::new(255, 255, 255),
};

static MONO: Scheme = Scheme {
    lines: [
        Rgb::new(226, 232, 240),
        Rgb::new(148, 163, 184),
        Rgb::new(203, 213, 225),
        Rgb::new(100, 116, 139),
    ],
    glow: Glow {
        color: Rgb::new(148, 163, 184),
        alpha: 0.1,
    },
    bg: Rgb::new(0x0f, 0x17, 0x2a),
    light_bg: Rgb::new(255, 255, 255),
};

/// Frame-resolved line coloring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinePalette {
    /// Every level uses the same color (override, or light mode).
    Single(Rgb),
    /// Levels cycle through the scheme's four colors.
    Cycle(&'static [Rgb; 4]),
}

impl LinePalette {
    /// Precedence: override > light-mode-forced-single > per-index palette.
    pub fn resolve(scheme: ColorScheme, light_mode: bool, override_color: Option<Rgb>) -> Self {
        let def = scheme.def();
        if let Some(color) = override_color {
            return LinePalette::Single(color);
        }
        if light_mode {
            return LinePalette::Single(def.lines[0]);
        }
        LinePalette::Cycle(&def.lines)
    }

    #[inline]
    pub fn color(&self, level_index: u32) -> Rgb {
        match self {
            LinePalette::Single(c) => *c,
            LinePalette::Cycle(lines) => lines[(level_index % 4) as usize],
        }
    }
}

/// Alpha ramps up with the contour index; light mode starts higher and
/// climbs faster so lines stay visible on white.
#[inline]
pub fn line_alpha(level_index: u32, level_count: u32, light_mode: bool) -> f32 {
    let t = level_index as f32 / level_count.max(1) as f32;
    if light_mode {
        0.25 + t * 0.55
    } else {
        0.15 + t * 0.4
    }
}

/// Every 4th contour gets emphasis (a soft glow halo under the stroke).
#[inline]
pub fn level_has_glow(level_index: u32) -> bool {
    level_index % 4 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_and_rejects_garbage() {
        let c = Rgb::from_hex("#06b6d4").unwrap();
        assert_eq!(c, Rgb::new(0x06, 0xb6, 0xd4));
        assert_eq!(c.to_hex(), "#06b6d4");
        assert_eq!(Rgb::from_hex("06b6d4"), Some(c));
        assert_eq!(Rgb::from_hex("#06b6d"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn precedence_override_beats_light_mode() {
        let gold = Rgb::new(212, 160, 23);
        let p = LinePalette::resolve(ColorScheme::Cyan, true, Some(gold));
        assert_eq!(p, LinePalette::Single(gold));
        for i in 0..8 {
            assert_eq!(p.color(i), gold);
        }
    }

    #[test]
    fn precedence_light_mode_collapses_to_first_scheme_color() {
        let p = LinePalette::resolve(ColorScheme::Rose, true, None);
        assert_eq!(p.color(0), ROSE.lines[0]);
        assert_eq!(p.color(3), ROSE.lines[0]);
    }

    #[test]
    fn dark_mode_cycles_scheme_colors() {
        let p = LinePalette::resolve(ColorScheme::Violet, false, None);
        for i in 0..12 {
            assert_eq!(p.color(i), VIOLET.lines[(i % 4) as usize]);
        }
    }

    #[test]
    fn alpha_ramp_is_linear_and_mode_dependent() {
        assert!((line_alpha(0, 16, false) - 0.15).abs() < 1e-6);
        assert!((line_alpha(8, 16, false) - 0.35).abs() < 1e-6);
        assert!((line_alpha(0, 16, true) - 0.25).abs() < 1e-6);
        assert!((line_alpha(8, 16, true) - 0.525).abs() < 1e-6);
        assert!(line_alpha(15, 16, true) < 1.0);
    }

    #[test]
    fn scheme_names_round_trip_through_serde() {
        for (name, scheme) in [
            ("cyan", ColorScheme::Cyan),
            ("emerald", ColorScheme::Emerald),
            ("rose", ColorScheme::Rose),
            ("amber", ColorScheme::Amber),
            ("violet", ColorScheme::Violet),
            ("mono", ColorScheme::Mono),
        ] {
            assert_eq!(ColorScheme::from_name(name), Some(scheme));
            let json = serde_json::to_string(&scheme).unwrap();
            assert_eq!(json, format!("\"{name}\""));
        }
        assert_eq!(ColorScheme::from_name("plasma"), None);
    }
}
