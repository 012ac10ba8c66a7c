//! Word cloud canvas

use egui::{Align2, FontId, Response, Rounding, Ui, Vec2};

use crate::core::wordcloud::WordCloud;
use crate::ui::theme::Theme;

/// Paint each placed word at its layout position
pub fn word_cloud(ui: &mut Ui, cloud: &WordCloud) -> Response {
    let size = Vec2::new(cloud.width as f32, cloud.height as f32);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, Rounding::same(4.0), Theme::BG_PRIMARY);

        for word in &cloud.words {
            painter.text(
                rect.min + Vec2::new(word.x, word.y),
                Align2::LEFT_TOP,
                &word.text,
                FontId::proportional(word.font_size),
                Theme::rgb(word.color),
            );
        }
    }

    response.on_hover_text(
        cloud
            .words
            .iter()
            .map(|w| format!("{} ({:.2})", w.text, w.frequency))
            .collect::<Vec<_>>()
            .join(", "),
    )
}
