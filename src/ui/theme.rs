//! Theme and styling for the UI

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

use crate::core::style::Rgb;
use crate::core::Recipe;

/// Application color palette
pub struct Theme;

impl Theme {
    // Primary colors - refined indigo/violet accent
    pub const PRIMARY: Color32 = Color32::from_rgb(99, 102, 241); // Indigo-500
    pub const PRIMARY_LIGHT: Color32 = Color32::from_rgb(165, 180, 252); // Indigo-300
    pub const PRIMARY_DARK: Color32 = Color32::from_rgb(67, 56, 202); // Indigo-700

    // Status colors
    pub const ERROR: Color32 = Color32::from_rgb(244, 63, 94); // Rose-500

    // Neutral colors (dark theme) - modern charcoal palette
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(17, 17, 27); // Deep charcoal
    pub const BG_SECONDARY: Color32 = Color32::from_rgb(24, 24, 37); // Card background
    pub const BG_TERTIARY: Color32 = Color32::from_rgb(35, 35, 52); // Elevated elements
    pub const BG_HOVER: Color32 = Color32::from_rgb(45, 45, 65); // Hover state
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(30, 30, 45); // Modals/dropdowns

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(250, 250, 255); // Near white
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(161, 161, 180); // Gray-400
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(113, 113, 132); // Gray-500

    // Border colors
    pub const BORDER: Color32 = Color32::from_rgb(50, 50, 70);
    pub const BORDER_LIGHT: Color32 = Color32::from_rgb(38, 38, 55);

    // Chart colors, one per series
    pub const SERIES: [Color32; 4] = [
        Color32::from_rgb(99, 110, 250),
        Color32::from_rgb(239, 85, 59),
        Color32::from_rgb(0, 204, 150),
        Color32::from_rgb(171, 99, 250),
    ];
    /// Canvas behind charts and word clouds
    pub const CANVAS: Color32 = Color32::WHITE;
    pub const CANVAS_GRID: Color32 = Color32::from_rgb(229, 231, 235);
    pub const CANVAS_TEXT: Color32 = Color32::from_rgb(55, 65, 81);

    /// Apply dark theme to egui
    pub fn apply_dark(ctx: &egui::Context) {
        let style = (*ctx.style()).clone();
        let mut visuals = Visuals::dark();

        visuals.panel_fill = Self::BG_PRIMARY;
        visuals.window_fill = Self::BG_ELEVATED;
        visuals.extreme_bg_color = Self::BG_PRIMARY;
        visuals.faint_bg_color = Self::BG_TERTIARY;

        // Non-interactive widgets (labels, etc.)
        visuals.widgets.noninteractive.bg_fill = Self::BG_SECONDARY;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.5, Self::BORDER_LIGHT);

        // Inactive interactive widgets (buttons at rest)
        visuals.widgets.inactive.bg_fill = Self::BG_TERTIARY;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.bg_stroke = Stroke::new(0.5, Self::BORDER);

        visuals.widgets.hovered.bg_fill = Self::BG_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.6));

        visuals.widgets.active.bg_fill = Self::PRIMARY;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::PRIMARY_DARK);

        // Open widgets (like ComboBox when open)
        visuals.widgets.open.bg_fill = Self::BG_ELEVATED;
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.5));

        visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.25);
        visuals.selection.stroke = Stroke::new(1.0, Self::PRIMARY);

        visuals.window_stroke = Stroke::new(0.5, Self::BORDER);
        visuals.popup_shadow = egui::Shadow {
            offset: egui::vec2(0.0, 6.0),
            blur: 16.0,
            spread: 4.0,
            color: Color32::from_black_alpha(100),
        };

        ctx.set_style(style_with(style, visuals));
    }

    /// Apply light theme to egui
    pub fn apply_light(ctx: &egui::Context) {
        let style = (*ctx.style()).clone();
        let mut visuals = Visuals::light();

        // Light theme background colors - clean and modern
        let bg_primary = Color32::from_rgb(249, 250, 251); // Gray-50
        let bg_secondary = Color32::from_rgb(243, 244, 246); // Gray-100
        let bg_tertiary = Color32::from_rgb(229, 231, 235); // Gray-200
        let bg_hover = Color32::from_rgb(209, 213, 219); // Gray-300
        let text_primary = Color32::from_rgb(17, 24, 39); // Gray-900
        let text_secondary = Color32::from_rgb(75, 85, 99); // Gray-600
        let border = Color32::from_rgb(209, 213, 219); // Gray-300

        visuals.panel_fill = bg_primary;
        visuals.window_fill = Color32::WHITE;
        visuals.extreme_bg_color = Color32::WHITE;
        visuals.faint_bg_color = bg_secondary;

        visuals.widgets.noninteractive.bg_fill = bg_secondary;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_primary);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.5, border);

        visuals.widgets.inactive.bg_fill = bg_tertiary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_secondary);
        visuals.widgets.inactive.bg_stroke = Stroke::new(0.5, border);

        visuals.widgets.hovered.bg_fill = bg_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_primary);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.7));

        visuals.widgets.active.bg_fill = Self::PRIMARY;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::PRIMARY_DARK);

        visuals.widgets.open.bg_fill = Color32::WHITE;
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, text_primary);
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.6));

        visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.15);
        visuals.selection.stroke = Stroke::new(1.0, Self::PRIMARY);

        visuals.window_stroke = Stroke::new(0.5, border);
        visuals.popup_shadow = egui::Shadow {
            offset: egui::vec2(0.0, 4.0),
            blur: 12.0,
            spread: 2.0,
            color: Color32::from_black_alpha(15),
        };

        ctx.set_style(style_with(style, visuals));
    }

    /// Apply the theme chosen in settings
    pub fn apply(ctx: &egui::Context, theme: crate::core::settings::Theme) {
        match theme {
            crate::core::settings::Theme::Dark => Self::apply_dark(ctx),
            crate::core::settings::Theme::Light => Self::apply_light(ctx),
        }
    }

    /// Convert a toolkit-independent color
    pub fn rgb(color: Rgb) -> Color32 {
        Color32::from_rgb(color.0, color.1, color.2)
    }

    /// Color for the n-th series of a chart
    pub fn series_color(index: usize) -> Color32 {
        Self::SERIES[index % Self::SERIES.len()]
    }

    /// Sidebar icon for a recipe
    pub fn recipe_icon(recipe: Recipe) -> &'static str {
        match recipe {
            Recipe::Description => "ℹ",
            Recipe::DataframeFormatting => "▦",
            Recipe::SideBySideCharts => "📊",
            Recipe::SelectRows => "☰",
            Recipe::RangeSlider => "⇔",
            Recipe::AdvancedSelectbox => "▾",
            Recipe::Seaborn => "📈",
            Recipe::Wordcloud => "☁",
            Recipe::Emojis => "☺",
        }
    }
}

/// Shared rounding, text styles and spacing on top of `visuals`
fn style_with(mut style: Style, mut visuals: Visuals) -> Style {
    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        widget.rounding = Rounding::same(6.0);
    }
    visuals.widgets.hovered.expansion = 1.0;
    visuals.window_rounding = Rounding::same(10.0);
    visuals.menu_rounding = Rounding::same(8.0);

    // Striped backgrounds for tables
    visuals.striped = true;

    style.visuals = visuals;

    style.text_styles = [
        (
            TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        ),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (
            TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        ),
        (
            TextStyle::Heading,
            FontId::new(20.0, FontFamily::Proportional),
        ),
        (
            TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        ),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(16.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    style.spacing.indent = 20.0;
    style.spacing.slider_width = 160.0;
    style.spacing.combo_width = 160.0;
    style.spacing.icon_width = 18.0;
    style.spacing.icon_spacing = 6.0;

    style.interaction.tooltip_delay = 0.3;

    style
}
