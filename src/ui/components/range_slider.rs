//! Two-handle range slider

use egui::{Align2, Color32, FontId, Pos2, Rect, Response, Rounding, Stroke, Ui, Vec2};

use crate::core::widgets::RangeSelection;
use crate::ui::theme::Theme;

const HANDLE_RADIUS: f32 = 8.0;

/// Which end of the range a drag is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Low,
    High,
}

/// Paint `range` and report the handle moved this frame, with its new value
pub fn range_slider(
    ui: &mut Ui,
    range: &RangeSelection,
    width: f32,
) -> (Response, Option<(Handle, f64)>) {
    let desired_size = Vec2::new(width, 44.0);
    let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click_and_drag());

    let track = Rect::from_min_max(
        Pos2::new(rect.left() + HANDLE_RADIUS, rect.bottom() - 16.0),
        Pos2::new(rect.right() - HANDLE_RADIUS, rect.bottom() - 12.0),
    );
    let (lo, hi) = range.value();
    let x_of = |v: f64| egui::lerp(track.left()..=track.right(), range.fraction(v) as f32);

    let mut moved = None;
    if let Some(pointer) = response.interact_pointer_pos() {
        let t = ((pointer.x - track.left()) / track.width()).clamp(0.0, 1.0);
        let value = range.at_fraction(t as f64);

        // The handle grabbed when the drag began stays active until release
        let handle = if response.drag_started() || response.clicked() {
            let handle = nearest_handle(pointer.x, x_of(lo), x_of(hi));
            ui.data_mut(|d| d.insert_temp(response.id, handle));
            handle
        } else {
            ui.data(|d| d.get_temp::<Handle>(response.id))
                .unwrap_or_else(|| nearest_handle(pointer.x, x_of(lo), x_of(hi)))
        };

        let current = match handle {
            Handle::Low => lo,
            Handle::High => hi,
        };
        if value != current {
            moved = Some((handle, value));
        }
    }

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();

        painter.rect_filled(track, Rounding::same(2.0), Theme::BG_TERTIARY);
        let selected = Rect::from_min_max(
            Pos2::new(x_of(lo), track.top()),
            Pos2::new(x_of(hi), track.bottom()),
        );
        painter.rect_filled(selected, Rounding::same(2.0), Theme::PRIMARY);

        for v in [lo, hi] {
            let center = Pos2::new(x_of(v), track.center().y);

            // Handle shadow
            painter.circle(
                center + Vec2::new(0.0, 1.0),
                HANDLE_RADIUS,
                Color32::from_black_alpha(30),
                Stroke::NONE,
            );
            painter.circle(
                center,
                HANDLE_RADIUS,
                Color32::WHITE,
                Stroke::new(2.0, Theme::PRIMARY),
            );
            painter.text(
                Pos2::new(center.x, rect.top()),
                Align2::CENTER_TOP,
                format!("{:.2}", v),
                FontId::proportional(12.0),
                Theme::PRIMARY_LIGHT,
            );
        }

        let (min, max) = range.bounds();
        for (v, align) in [(min, Align2::LEFT_TOP), (max, Align2::RIGHT_TOP)] {
            painter.text(
                Pos2::new(x_of(v), track.bottom() + 4.0),
                align,
                format!("{:.2}", v),
                FontId::proportional(10.0),
                Theme::TEXT_MUTED,
            );
        }
    }

    (response, moved)
}

/// Handle closest to `x`; ties go to whichever side `x` lies on
fn nearest_handle(x: f32, lo_x: f32, hi_x: f32) -> Handle {
    let d_lo = (x - lo_x).abs();
    let d_hi = (x - hi_x).abs();
    if d_lo < d_hi || (d_lo == d_hi && x < lo_x) {
        Handle::Low
    } else {
        Handle::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_handle_picks_closer_end() {
        assert_eq!(nearest_handle(10.0, 20.0, 80.0), Handle::Low);
        assert_eq!(nearest_handle(70.0, 20.0, 80.0), Handle::High);
    }

    #[test]
    fn test_stacked_handles_split_by_side() {
        assert_eq!(nearest_handle(40.0, 50.0, 50.0), Handle::Low);
        assert_eq!(nearest_handle(60.0, 50.0, 50.0), Handle::High);
    }
}
