//! Tables with per-cell backgrounds

use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::core::describe::Summary;
use crate::core::style::StyledTable;
use crate::ui::theme::Theme;

const ROW_HEIGHT: f32 = 22.0;

/// Render `table` with its index column and cell styles
pub fn styled_table(ui: &mut Ui, id_salt: impl std::hash::Hash, table: &StyledTable) {
    let frame = &table.frame;
    let index = frame.index();

    ui.push_id(id_salt, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(32.0))
            .columns(Column::auto().at_least(72.0), frame.width())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|_| {});
                for name in frame.column_names() {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, frame.height(), |mut row| {
                    let r = row.index();
                    row.col(|ui| {
                        ui.label(RichText::new(index[r].to_string()).color(Theme::TEXT_MUTED));
                    });
                    for c in 0..frame.width() {
                        let style = table.style(c, r);
                        row.col(|ui| {
                            if let Some(bg) = style.background {
                                ui.painter()
                                    .rect_filled(ui.max_rect(), 0.0, Theme::rgb(bg));
                            }
                            let mut text = RichText::new(table.text(c, r)).monospace();
                            if let Some(fg) = style.text_color() {
                                text = text.color(Theme::rgb(fg));
                            }
                            ui.label(text);
                        });
                    }
                });
            });
    });
}

/// Two-column statistics grid for a column summary
pub fn summary_table(ui: &mut Ui, summary: &Summary) {
    ui.label(RichText::new(&summary.column).strong());
    egui::Grid::new(("summary", &summary.column))
        .striped(true)
        .num_columns(2)
        .min_col_width(72.0)
        .show(ui, |ui| {
            for (label, value) in &summary.entries {
                ui.label(RichText::new(*label).color(Theme::TEXT_MUTED));
                ui.label(RichText::new(value.to_string()).monospace());
                ui.end_row();
            }
        });
    ui.label(
        RichText::new(format!("Name: {}", summary.column))
            .small()
            .color(Color32::GRAY),
    );
}
