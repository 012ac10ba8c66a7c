//! Dataset picker - Choose the CSV behind the reference dataset

use std::path::PathBuf;

use egui::{RichText, Ui};
use tracing::debug;

use crate::core::dataset::DatasetSource;
use crate::core::WidgetEvent;
use crate::ui::theme::Theme;

pub fn render(ui: &mut Ui, current: &DatasetSource, recent: &[PathBuf]) -> Vec<WidgetEvent> {
    let mut events = Vec::new();

    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("📁").color(Theme::PRIMARY_LIGHT));
                ui.label(RichText::new(current.to_string()).monospace());

                ui.add_space(12.0);

                if ui.button("Open CSV…").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV", &["csv"])
                        .pick_file()
                    {
                        debug!("Picked dataset {:?}", path);
                        events.push(WidgetEvent::OpenDataset(path));
                    }
                }

                if *current != DatasetSource::Bundled && ui.button("Use bundled").clicked() {
                    events.push(WidgetEvent::UseBundledDataset);
                }

                if ui
                    .button("↻ Reload")
                    .on_hover_text("Read the file again")
                    .clicked()
                {
                    events.push(WidgetEvent::ReloadDataset);
                }

                if !recent.is_empty() {
                    egui::ComboBox::from_id_salt("recent_datasets")
                        .selected_text("Recent")
                        .show_ui(ui, |ui| {
                            for path in recent {
                                let name = path
                                    .file_name()
                                    .map(|n| n.to_string_lossy().to_string())
                                    .unwrap_or_else(|| path.display().to_string());
                                if ui
                                    .selectable_label(false, name)
                                    .on_hover_text(path.display().to_string())
                                    .clicked()
                                {
                                    events.push(WidgetEvent::OpenDataset(path.clone()));
                                }
                            }
                        });
                }
            });
        });

    events
}
