//! Painter-drawn bar and line charts

use egui::{Align2, Color32, FontId, Pos2, Rect, Response, Rounding, Stroke, Ui, Vec2};

use crate::core::chart::{Chart, Mark, Panel, XValue};
use crate::ui::theme::Theme;

const TITLE_HEIGHT: f32 = 24.0;
const AXIS_LEFT: f32 = 44.0;
const AXIS_BOTTOM: f32 = 40.0;
const PANEL_TOP: f32 = 22.0;
const PANEL_RIGHT: f32 = 10.0;

pub struct ChartView;

impl ChartView {
    /// Draw every panel of `chart` on a white canvas
    pub fn show(ui: &mut Ui, chart: &Chart) -> Response {
        let title_space = if chart.title.is_some() { TITLE_HEIGHT } else { 0.0 };
        let (rect, response) = ui.allocate_exact_size(
            Vec2::new(chart.width, chart.height + title_space),
            egui::Sense::hover(),
        );

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, Rounding::same(4.0), Theme::CANVAS);

        if let Some(title) = &chart.title {
            painter.text(
                rect.left_top() + Vec2::new(8.0, 4.0),
                Align2::LEFT_TOP,
                title,
                FontId::proportional(15.0),
                Theme::CANVAS_TEXT,
            );
        }

        let plot_area = Rect::from_min_max(
            Pos2::new(rect.left(), rect.top() + title_space),
            rect.max,
        );
        for panel in &chart.panels {
            let left = plot_area.left() + plot_area.width() * panel.domain[0];
            let right = plot_area.left() + plot_area.width() * panel.domain[1];
            let panel_rect = Rect::from_min_max(
                Pos2::new(left, plot_area.top()),
                Pos2::new(right, plot_area.bottom()),
            );
            draw_panel(&painter, panel_rect, panel);
        }

        response
    }
}

/// Maps data coordinates into a screen rectangle
struct Axes {
    frame: Rect,
    y_range: (f64, f64),
    x: XScale,
}

enum XScale {
    Linear(f64, f64),
    Bands(Vec<String>),
}

impl Axes {
    fn y(&self, v: f64) -> f32 {
        let (lo, hi) = self.y_range;
        let t = ((v - lo) / (hi - lo)) as f32;
        self.frame.bottom() - t * self.frame.height()
    }

    fn band_width(&self) -> f32 {
        match &self.x {
            XScale::Bands(labels) => self.frame.width() / labels.len().max(1) as f32,
            XScale::Linear(..) => 0.0,
        }
    }

    /// Centre of `x` on screen
    fn x(&self, x: &XValue) -> f32 {
        match (&self.x, x) {
            (XScale::Linear(lo, hi), XValue::Number(v)) => {
                let t = ((v - lo) / (hi - lo)) as f32;
                // Keep end points off the frame edge
                let inset = self.frame.width() * 0.05;
                self.frame.left() + inset + t * (self.frame.width() - 2.0 * inset)
            }
            (XScale::Bands(labels), x) => {
                let label = x.label();
                let i = labels.iter().position(|l| *l == label).unwrap_or(0);
                self.frame.left() + (i as f32 + 0.5) * self.band_width()
            }
            (XScale::Linear(lo, _), XValue::Category(_)) => self.x(&XValue::Number(*lo)),
        }
    }
}

fn draw_panel(painter: &egui::Painter, rect: Rect, panel: &Panel) {
    let frame = Rect::from_min_max(
        Pos2::new(rect.left() + AXIS_LEFT, rect.top() + PANEL_TOP),
        Pos2::new(rect.right() - PANEL_RIGHT, rect.bottom() - AXIS_BOTTOM),
    );
    if frame.width() <= 0.0 || frame.height() <= 0.0 {
        return;
    }

    let has_bars = panel.series.iter().any(|s| s.mark == Mark::Bar);
    let x = match panel.x_numeric_range() {
        Some((lo, hi)) if !has_bars => XScale::Linear(lo, hi),
        _ => XScale::Bands(panel.categories()),
    };
    let axes = Axes {
        frame,
        y_range: padded(panel.y_range(), has_bars),
        x,
    };

    if let Some(title) = &panel.title {
        painter.text(
            Pos2::new(frame.center().x, rect.top() + 4.0),
            Align2::CENTER_TOP,
            title,
            FontId::proportional(12.0),
            Theme::CANVAS_TEXT,
        );
    }

    draw_y_axis(painter, &axes);
    draw_x_axis(painter, &axes);

    // Bars first so lines stay visible on top
    let bar_series: Vec<usize> = panel
        .series
        .iter()
        .enumerate()
        .filter(|(_, s)| s.mark == Mark::Bar)
        .map(|(i, _)| i)
        .collect();
    let slot = axes.band_width() * 0.8 / bar_series.len().max(1) as f32;
    for (n, &i) in bar_series.iter().enumerate() {
        let color = Theme::series_color(i);
        let offset = -axes.band_width() * 0.4 + slot * n as f32;
        for (x, y) in &panel.series[i].points {
            let left = axes.x(x) + offset;
            let top = axes.y(y.max(0.0));
            let bottom = axes.y(y.min(0.0));
            let bar = Rect::from_min_max(Pos2::new(left, top), Pos2::new(left + slot, bottom));
            painter.rect_filled(bar, Rounding::ZERO, color);
        }
    }

    for (i, series) in panel.series.iter().enumerate() {
        if series.mark != Mark::Line {
            continue;
        }
        let color = Theme::series_color(i);
        let points: Vec<Pos2> = series
            .points
            .iter()
            .map(|(x, y)| Pos2::new(axes.x(x), axes.y(*y)))
            .collect();
        painter.add(egui::Shape::line(points.clone(), Stroke::new(2.0, color)));
        for p in points {
            painter.circle_filled(p, 3.0, color);
        }
    }

    painter.text(
        Pos2::new(frame.center().x, rect.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        &panel.x_title,
        FontId::proportional(11.0),
        Theme::CANVAS_TEXT,
    );
    painter.text(
        Pos2::new(rect.left() + 4.0, rect.top() + 4.0),
        Align2::LEFT_TOP,
        &panel.y_title,
        FontId::proportional(11.0),
        Theme::CANVAS_TEXT,
    );
}

fn draw_y_axis(painter: &egui::Painter, axes: &Axes) {
    let (lo, hi) = axes.y_range;
    for tick in ticks(lo, hi) {
        let y = axes.y(tick);
        painter.line_segment(
            [Pos2::new(axes.frame.left(), y), Pos2::new(axes.frame.right(), y)],
            Stroke::new(1.0, Theme::CANVAS_GRID),
        );
        painter.text(
            Pos2::new(axes.frame.left() - 4.0, y),
            Align2::RIGHT_CENTER,
            format_tick(tick),
            FontId::proportional(10.0),
            Theme::CANVAS_TEXT,
        );
    }
    painter.line_segment(
        [axes.frame.left_top(), axes.frame.left_bottom()],
        Stroke::new(1.0, Theme::CANVAS_TEXT),
    );
}

fn draw_x_axis(painter: &egui::Painter, axes: &Axes) {
    let baseline = axes.frame.bottom();
    painter.line_segment(
        [axes.frame.left_bottom(), axes.frame.right_bottom()],
        Stroke::new(1.0, Theme::CANVAS_TEXT),
    );

    let labels: Vec<(f32, String)> = match &axes.x {
        XScale::Linear(lo, hi) => ticks(*lo, *hi)
            .into_iter()
            .map(|t| (axes.x(&XValue::Number(t)), format_tick(t)))
            .collect(),
        XScale::Bands(labels) => labels
            .iter()
            .map(|l| (axes.x(&XValue::Category(l.clone())), l.clone()))
            .collect(),
    };

    // Long category names alternate rows to avoid collisions
    let crowded = labels.iter().map(|(_, l)| l.len()).sum::<usize>() as f32 * 6.0
        > axes.frame.width();
    for (i, (x, label)) in labels.into_iter().enumerate() {
        painter.line_segment(
            [Pos2::new(x, baseline), Pos2::new(x, baseline + 4.0)],
            Stroke::new(1.0, Theme::CANVAS_TEXT),
        );
        let row = if crowded && i % 2 == 1 { 12.0 } else { 0.0 };
        painter.text(
            Pos2::new(x, baseline + 6.0 + row),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(10.0),
            Color32::from_gray(90),
        );
    }
}

/// Add headroom above the data; bar charts keep their zero baseline
fn padded((lo, hi): (f64, f64), anchored: bool) -> (f64, f64) {
    let pad = (hi - lo) * 0.05;
    if anchored && lo == 0.0 {
        (lo, hi + pad)
    } else {
        (lo - pad, hi + pad)
    }
}

/// Round tick positions covering `lo..=hi`
fn ticks(lo: f64, hi: f64) -> Vec<f64> {
    if hi <= lo {
        return vec![lo];
    }
    let raw = (hi - lo) / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let mut out = Vec::new();
    let mut t = (lo / step).ceil() * step;
    while t <= hi + step * 1e-9 {
        out.push(t);
        t += step;
    }
    out
}

fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}
