// crates/clipstrip-ui/src/theme.rs
use egui::{Color32, Context, Stroke, Style, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────
pub const ACCENT:         Color32 = Color32::from_rgb( 64, 196, 180);
pub const ACCENT_DIM:     Color32 = Color32::from_rgb( 30, 120, 110);
pub const ACCENT_HOVER:   Color32 = Color32::from_rgb(110, 222, 208);

pub const BG_0:           Color32 = Color32::from_rgb( 12,  13,  16);
pub const BG_1:           Color32 = Color32::from_rgb( 19,  20,  25);
pub const BG_2:           Color32 = Color32::from_rgb( 27,  29,  35);
pub const BG_3:           Color32 = Color32::from_rgb( 37,  40,  48);
pub const BG_4:           Color32 = Color32::from_rgb( 50,  54,  64);

pub const TEXT:           Color32 = Color32::from_rgb(222, 224, 230);
pub const TEXT_DIM:       Color32 = Color32::from_rgb(124, 128, 142);
pub const BORDER:         Color32 = Color32::from_rgb( 56,  60,  72);

// ── Timeline ─────────────────────────────────────────────────────────────────
pub const TRACK:          Color32 = Color32::from_rgb( 44,  47,  56);
pub const PROGRESS:       Color32 = Color32::from_rgb(230, 232, 238);
/// Start / end markers and the band between them.
pub const RANGE_MARKER:   Color32 = Color32::from_rgb(255, 176,  64);
pub const RANGE_BAND:     Color32 = Color32::from_rgba_premultiplied(64, 44, 16, 64);
pub const CENTER_FRAME:   Color32 = Color32::from_rgb(255, 255, 255);
pub const PINNED:         Color32 = Color32::from_rgb(236, 196,  72);
pub const SELECTED:       Color32 = ACCENT;

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    style.spacing.item_spacing     = egui::vec2(6.0, 6.0);
    style.spacing.window_margin    = egui::Margin::same(10);
    style.spacing.button_padding   = egui::vec2(10.0, 5.0);
    style.spacing.scroll.bar_width = 8.0;

    let cr = egui::CornerRadius::same(5);

    let mut v = Visuals::dark();
    v.panel_fill        = BG_1;
    v.window_fill       = BG_2;
    v.faint_bg_color    = BG_0;
    v.extreme_bg_color  = BG_0;
    v.window_stroke     = Stroke::new(1.0, BORDER);

    v.selection.bg_fill = ACCENT_DIM;
    v.selection.stroke  = Stroke::new(1.0, ACCENT_HOVER);
    v.hyperlink_color   = ACCENT_HOVER;

    v.widgets.noninteractive.bg_fill       = BG_2;
    v.widgets.noninteractive.bg_stroke     = Stroke::new(1.0, BORDER);
    v.widgets.noninteractive.fg_stroke     = Stroke::new(1.0, TEXT_DIM);
    v.widgets.noninteractive.corner_radius = cr;

    v.widgets.inactive.bg_fill             = BG_3;
    v.widgets.inactive.bg_stroke           = Stroke::new(1.0, BORDER);
    v.widgets.inactive.fg_stroke           = Stroke::new(1.0, TEXT);
    v.widgets.inactive.corner_radius       = cr;

    v.widgets.hovered.bg_fill              = BG_4;
    v.widgets.hovered.bg_stroke            = Stroke::new(1.0, ACCENT_DIM);
    v.widgets.hovered.fg_stroke            = Stroke::new(1.5, ACCENT_HOVER);
    v.widgets.hovered.corner_radius        = cr;

    v.widgets.active.bg_fill               = ACCENT_DIM;
    v.widgets.active.bg_stroke             = Stroke::new(1.0, ACCENT);
    v.widgets.active.fg_stroke             = Stroke::new(2.0, Color32::WHITE);
    v.widgets.active.corner_radius         = cr;

    v.widgets.open                         = v.widgets.hovered;

    v.override_text_color = Some(TEXT);

    ctx.set_visuals(v);
    ctx.set_style(style);

    ctx.style_mut(|s| {
        s.visuals.window_corner_radius = cr;
        s.visuals.menu_corner_radius   = cr;
    });
}
