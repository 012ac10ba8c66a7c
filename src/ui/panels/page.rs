//! Page panel - Renders the blocks of a recipe page

use std::collections::HashMap;

use egui::{Color32, RichText, TextureHandle, Ui};
use image::RgbaImage;

use crate::core::{Block, Inline, Page, WidgetEvent, WidgetId};
use crate::ui::components::{self, ChartView, Handle};
use crate::ui::panels::dataset;
use crate::ui::theme::Theme;

const SLIDER_WIDTH: f32 = 360.0;

/// GPU textures for raster blocks, re-uploaded only when the pixels change
#[derive(Default)]
pub struct Textures {
    entries: HashMap<String, (RgbaImage, TextureHandle)>,
}

impl Textures {
    fn get(&mut self, ctx: &egui::Context, key: &str, image: &RgbaImage) -> TextureHandle {
        if let Some((cached, texture)) = self.entries.get(key) {
            if cached == image {
                return texture.clone();
            }
        }

        let size = [image.width() as usize, image.height() as usize];
        let pixels = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
        let texture = ctx.load_texture(key, pixels, egui::TextureOptions::LINEAR);
        self.entries
            .insert(key.to_string(), (image.clone(), texture.clone()));
        texture
    }
}

/// Render `page` top to bottom, returning the widget interactions
pub fn render(ui: &mut Ui, page: &Page, textures: &mut Textures) -> Vec<WidgetEvent> {
    let mut events = Vec::new();

    for (n, block) in page.blocks.iter().enumerate() {
        match block {
            Block::Heading { level, text } => heading(ui, *level, text),
            Block::Paragraph(inlines) => {
                ui.horizontal_wrapped(|ui| inline_runs(ui, inlines));
            }
            Block::Bullets(items) => {
                for item in items {
                    ui.horizontal_wrapped(|ui| {
                        ui.label("•");
                        inline_runs(ui, item);
                    });
                }
            }
            Block::Code(source) => code_block(ui, source),
            Block::Table { caption, table } => {
                if let Some(caption) = caption {
                    ui.label(RichText::new(caption).strong());
                }
                components::styled_table(ui, ("table", n), table);
            }
            Block::Chart(chart) => {
                egui::ScrollArea::horizontal()
                    .id_salt(("chart", n))
                    .show(ui, |ui| {
                        ChartView::show(ui, chart);
                    });
            }
            Block::Image { caption, image } => {
                let key = format!("{}-{}", page.recipe.label(), n);
                let texture = textures.get(ui.ctx(), &key, image);
                ui.add(egui::Image::new(egui::load::SizedTexture::new(
                    texture.id(),
                    texture.size_vec2(),
                )));
                ui.label(RichText::new(caption).small().color(Theme::TEXT_MUTED));
            }
            Block::WordCloud(cloud) => {
                components::word_cloud(ui, cloud);
            }
            Block::Summary(summary) => components::summary_table(ui, summary),
            Block::Value { label, value } => value_block(ui, label.as_deref(), value),
            Block::Error(message) => error_block(ui, message),
            Block::RangeSlider { id, label, range } => {
                ui.label(label);
                let (_, moved) = ui
                    .push_id(id, |ui| components::range_slider(ui, range, SLIDER_WIDTH))
                    .inner;
                match moved {
                    Some((Handle::Low, v)) => events.push(WidgetEvent::SetRangeLow(v)),
                    Some((Handle::High, v)) => events.push(WidgetEvent::SetRangeHigh(v)),
                    None => {}
                }
            }
            Block::MultiSelect {
                id,
                label,
                options,
                selected,
            } => multiselect(ui, *id, label, options, selected, &mut events),
            Block::SelectBox {
                id,
                label,
                labels,
                index,
            } => {
                ui.label(label);
                let current = labels.get(*index).map(String::as_str).unwrap_or_default();
                egui::ComboBox::from_id_salt(id)
                    .selected_text(current)
                    .width(240.0)
                    .show_ui(ui, |ui| {
                        for (i, option) in labels.iter().enumerate() {
                            if ui.selectable_label(i == *index, option).clicked() && i != *index {
                                events.push(WidgetEvent::Select { id: *id, index: i });
                            }
                        }
                    });
            }
            Block::DatasetPicker { current, recent } => {
                events.extend(dataset::render(ui, current, recent));
            }
        }
        ui.add_space(6.0);
    }

    events
}

fn heading(ui: &mut Ui, level: u8, text: &str) {
    let size = match level {
        1 => 28.0,
        2 => 22.0,
        _ => 17.0,
    };
    ui.add_space(4.0);
    ui.label(
        RichText::new(text)
            .size(size)
            .strong()
            .color(ui.visuals().strong_text_color()),
    );
}

fn inline_runs(ui: &mut Ui, inlines: &[Inline]) {
    // Runs sit flush against each other
    ui.spacing_mut().item_spacing.x = 0.0;
    for inline in inlines {
        match inline {
            Inline::Text(text) => {
                ui.label(text);
            }
            Inline::Code(text) => {
                ui.code(text);
            }
            Inline::Link { text, url } => {
                ui.hyperlink_to(text, url);
            }
        }
    }
}

fn code_block(ui: &mut Ui, source: &str) {
    egui::Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::ScrollArea::horizontal()
                .id_salt(source)
                .show(ui, |ui| {
                    ui.add(egui::Label::new(RichText::new(source).monospace()).extend());
                });
        });
}

fn value_block(ui: &mut Ui, label: Option<&str>, value: &str) {
    ui.horizontal_wrapped(|ui| {
        if let Some(label) = label {
            ui.label(RichText::new(label).color(Theme::TEXT_MUTED));
        }
        ui.label(RichText::new(value).monospace().strong());
    });
}

fn error_block(ui: &mut Ui, message: &str) {
    egui::Frame::none()
        .fill(Theme::ERROR.linear_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, Theme::ERROR.linear_multiply(0.6)))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("⛔").color(Theme::ERROR));
                ui.label(RichText::new(message).color(Theme::ERROR));
            });
        });
}

fn multiselect(
    ui: &mut Ui,
    id: WidgetId,
    label: &str,
    options: &[(usize, String)],
    selected: &[usize],
    events: &mut Vec<WidgetEvent>,
) {
    ui.label(label);
    ui.horizontal_wrapped(|ui| {
        // Selected options as removable chips, in selection order
        for option in selected {
            let text = options
                .iter()
                .find(|(o, _)| o == option)
                .map(|(_, l)| l.as_str())
                .unwrap_or_default();
            let chip = egui::Button::new(
                RichText::new(format!("{}  ✕", text)).color(Color32::WHITE),
            )
            .fill(Theme::PRIMARY)
            .rounding(egui::Rounding::same(12.0));
            if ui.add(chip).on_hover_text("Remove").clicked() {
                events.push(WidgetEvent::ToggleOption {
                    id,
                    option: *option,
                });
            }
        }

        let placeholder = if selected.is_empty() {
            "Choose an option"
        } else {
            "Add"
        };
        egui::ComboBox::from_id_salt(id)
            .selected_text(placeholder)
            .show_ui(ui, |ui| {
                for (option, text) in options {
                    let is_selected = selected.contains(option);
                    if ui.selectable_label(is_selected, text).clicked() {
                        events.push(WidgetEvent::ToggleOption {
                            id,
                            option: *option,
                        });
                    }
                }
            });

        if !selected.is_empty() && ui.small_button("Clear").clicked() {
            events.push(WidgetEvent::ClearOptions(id));
        }
    });
}
