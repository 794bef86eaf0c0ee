use super::*;
use crate::settings::{Mode, RenderSettings, SettingsStore};

fn fresh_core() -> WallpaperCore {
    let mut core = WallpaperCore::new_with_seed(160, 120, 42);
    // Each test thread has its own native storage; start from a clean blob.
    core.reset();
    core
}

#[test]
fn first_tick_renders_and_counts_no_time() {
    let mut core = fresh_core();
    assert!(core.tick(5_000.0));
    assert_eq!(core.frame(), 1);
    assert_eq!(core.time_ms(), 0.0);
}

#[test]
fn ticks_under_budget_are_skipped() {
    let mut core = fresh_core();
    assert!(core.tick(1000.0));
    // 10ms later: under the ~33.3ms interval.
    assert!(!core.tick(1010.0));
    assert!(!core.tick(1020.0));
    assert_eq!(core.frame(), 1);
    // Past the interval: renders and accumulates the full delta.
    assert!(core.tick(1040.0));
    assert_eq!(core.frame(), 2);
    assert_eq!(core.time_ms(), 40.0);
}

#[test]
fn cadence_keeps_the_interval_residual() {
    let mut core = fresh_core();
    core.tick(0.0);
    core.tick(40.0);
    // Anchor moved to 40 - (40 % 33.33) = ~33.33, so a tick at 66.7 is due.
    assert!(core.tick(67.0));
    assert_eq!(core.frame(), 3);
}

#[test]
fn suspend_freezes_animation_time() {
    let mut core = fresh_core();
    core.tick(0.0);
    core.tick(40.0);
    let before = core.time_ms();

    core.suspend();
    // Hours pass while hidden; the resume tick re-anchors without catch-up.
    assert!(core.tick(7_200_000.0));
    assert_eq!(core.time_ms(), before);
    // Normal cadence resumes from the new anchor.
    assert!(!core.tick(7_200_010.0));
    assert!(core.tick(7_200_040.0));
    assert_eq!(core.time_ms(), before + 40.0);
}

#[test]
fn pointer_events_update_state() {
    let mut core = fresh_core();
    core.pointer_moved(12.5, 80.0);
    let p = core.pointer();
    assert!(p.active);
    assert_eq!((p.x, p.y), (12.5, 80.0));

    core.pointer_left();
    assert!(!core.pointer().active);
}

#[test]
fn setters_clamp_and_persist() {
    let mut core = fresh_core();
    core.set_density(0);
    core.set_contours(0);
    core.set_speed(-1.0);
    core.set_mouse_radius(-10.0);

    let s = core.store().settings();
    assert_eq!(s.density, 1);
    assert_eq!(s.contours, 1);
    assert_eq!(s.speed, 0.0);
    assert_eq!(s.mouse_radius, 0.0);
    assert!(SettingsStore::has_persisted_blob());
    core.reset();
}

#[test]
fn scheme_preset_clears_color_override() {
    let mut core = fresh_core();
    core.set_custom_color(crate::render::palette::Rgb::new(212, 160, 23));
    assert!(core.store().settings().custom_color.is_some());

    assert!(core.set_color_scheme("emerald"));
    assert!(core.store().settings().custom_color.is_none());

    assert!(!core.set_color_scheme("plasma"));
    core.reset();
}

#[test]
fn mode_switch_clears_background_override() {
    let mut core = fresh_core();
    assert!(core.set_custom_bg("#112233"));
    assert!(core.store().settings().custom_bg.is_some());

    assert!(core.set_mode("light"));
    assert_eq!(core.store().settings().mode, Mode::Light);
    assert!(core.store().settings().custom_bg.is_none());

    assert!(!core.set_mode("sepia"));
    assert!(!core.set_custom_bg("#nope"));
    core.reset();
}

#[test]
fn reset_restores_documented_defaults_and_drops_blob() {
    let mut core = fresh_core();
    core.set_density(4);
    core.set_contours(32);
    core.set_speed(2.0);
    core.set_mouse_radius(150.0);
    core.set_mode("light");
    core.set_show_crosshair(true);
    core.tick(0.0);
    core.tick(100.0);
    assert!(SettingsStore::has_persisted_blob());

    core.reset();
    assert_eq!(core.store().settings(), &RenderSettings::default());
    assert_eq!(core.time_ms(), 0.0);
    assert!(!core.pointer().active);
    assert!(!SettingsStore::has_persisted_blob());
}

#[test]
fn resize_reshapes_the_export_buffer() {
    let mut core = fresh_core();
    core.resize(64, 32);
    assert_eq!(core.width(), 64);
    assert_eq!(core.height(), 32);
    assert_eq!(core.pixels_len_elements(), 64 * 32);
    assert_eq!(core.pixels_len_bytes(), 64 * 32 * 4);
    core.tick(0.0);
    assert_eq!(core.pixels().len(), 64 * 32);
}

#[test]
fn perf_stats_populate_only_when_enabled() {
    let mut core = fresh_core();
    core.tick(0.0);
    let stats = core.get_perf_stats();
    assert_eq!(stats.cell_count(), 0);

    core.enable_perf_metrics(true);
    core.tick(1000.0);
    let stats = core.get_perf_stats();
    assert!(stats.cell_count() > 0);
    assert!(stats.spacing() >= 1);
    assert_eq!(stats.contour_levels(), 16);
    assert_eq!(stats.frames_rendered(), 1);
}

#[test]
fn reseed_changes_the_rendered_field() {
    let mut core = fresh_core();
    core.tick(0.0);
    let before: Vec<u32> = core.pixels().to_vec();

    core.reseed();
    core.suspend();
    core.tick(10_000.0);
    assert_ne!(core.pixels(), &before[..]);
}
