//! Main application UI

use egui::{CentralPanel, Context, SidePanel, TopBottomPanel};
use tracing::{error, info};

use super::panels::page::{self, Textures};
use super::theme::Theme;
use crate::core::settings::Theme as ThemeChoice;
use crate::core::{AppState, Recipe};

/// Main application struct
pub struct CookbookApp {
    /// Application state
    state: AppState,
    /// Uploaded raster images
    textures: Textures,
    /// First frame flag
    first_frame: bool,
}

impl CookbookApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        Theme::apply(&cc.egui_ctx, state.settings.theme);

        Self {
            state,
            textures: Textures::default(),
            first_frame: true,
        }
    }

    /// Render the sidebar navigation
    fn render_sidebar(&mut self, ctx: &Context) {
        let visuals = ctx.style().visuals.clone();
        SidePanel::left("sidebar")
            .resizable(false)
            .default_width(230.0)
            .frame(
                egui::Frame::none()
                    .fill(visuals.widgets.noninteractive.bg_fill)
                    .stroke(visuals.widgets.noninteractive.bg_stroke),
            )
            .show(ctx, |ui| {
                ui.add_space(20.0);

                // Logo/Title with icon
                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    ui.label(egui::RichText::new("◈").size(24.0).color(Theme::PRIMARY));
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(crate::APP_NAME)
                            .size(18.0)
                            .strong()
                            .color(visuals.strong_text_color()),
                    );
                });

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    ui.label(
                        egui::RichText::new("RECIPES")
                            .small()
                            .color(visuals.weak_text_color()),
                    );
                });
                ui.add_space(4.0);

                let current = self.state.recipe();
                for &recipe in Recipe::all() {
                    let selected = current == recipe;

                    let bg_color = if selected {
                        Theme::PRIMARY.linear_multiply(0.15)
                    } else {
                        egui::Color32::TRANSPARENT
                    };

                    let text_color = if selected {
                        Theme::PRIMARY_LIGHT
                    } else {
                        visuals.text_color()
                    };

                    let frame = egui::Frame::none()
                        .fill(bg_color)
                        .rounding(egui::Rounding::same(8.0))
                        .inner_margin(egui::Margin::symmetric(16.0, 9.0));

                    let response = frame.show(ui, |ui| {
                        ui.set_width(ui.available_width() - 16.0);
                        ui.horizontal(|ui| {
                            if selected {
                                // Active indicator bar
                                let (rect, _) = ui.allocate_exact_size(
                                    egui::vec2(3.0, 18.0),
                                    egui::Sense::hover(),
                                );
                                ui.painter().rect_filled(
                                    rect,
                                    egui::Rounding::same(2.0),
                                    Theme::PRIMARY,
                                );
                                ui.add_space(8.0);
                            }
                            ui.label(
                                egui::RichText::new(Theme::recipe_icon(recipe))
                                    .size(15.0)
                                    .color(text_color),
                            );
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(recipe.label())
                                    .size(14.0)
                                    .color(text_color),
                            );
                        });
                    });

                    if response.response.interact(egui::Sense::click()).clicked() {
                        self.state.select_recipe(recipe);
                    }

                    if response.response.interact(egui::Sense::hover()).hovered() && !selected {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }

                    ui.add_space(2.0);
                }

                // Fill remaining space and show version at bottom
                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    ui.add_space(16.0);
                    ui.horizontal(|ui| {
                        ui.add_space(16.0);
                        ui.label(
                            egui::RichText::new(format!("v{}", crate::APP_VERSION))
                                .small()
                                .color(visuals.weak_text_color()),
                        );
                    });
                    ui.add_space(8.0);
                });
            });
    }

    /// Render the top bar with actions
    fn render_top_bar(&mut self, ctx: &Context) {
        let visuals = ctx.style().visuals.clone();
        TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::none()
                    .fill(visuals.panel_fill)
                    .stroke(visuals.widgets.noninteractive.bg_stroke)
                    .inner_margin(egui::Margin::symmetric(20.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // Recipe title
                    ui.label(
                        egui::RichText::new(self.state.recipe().label())
                            .size(24.0)
                            .strong()
                            .color(visuals.strong_text_color()),
                    );

                    // Right-aligned controls
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut theme = self.state.settings.theme;
                        egui::ComboBox::from_id_salt("theme")
                            .selected_text(theme.label())
                            .width(90.0)
                            .show_ui(ui, |ui| {
                                for &t in ThemeChoice::all() {
                                    ui.selectable_value(&mut theme, t, t.label());
                                }
                            });
                        if theme != self.state.settings.theme {
                            self.state.set_theme(theme);
                            Theme::apply(ui.ctx(), theme);
                        }

                        ui.add_space(12.0);

                        if self.state.recipe() == Recipe::DataframeFormatting {
                            let reshuffle = egui::Button::new(
                                egui::RichText::new("↻ Reshuffle").color(egui::Color32::WHITE),
                            )
                            .fill(Theme::PRIMARY)
                            .rounding(egui::Rounding::same(8.0))
                            .min_size(egui::vec2(110.0, 32.0));

                            if ui
                                .add(reshuffle)
                                .on_hover_text("Draw new random numbers")
                                .clicked()
                            {
                                self.state.reshuffle();
                            }
                        }
                    });
                });
            });
    }

    /// Render the main content area
    fn render_main_content(&mut self, ctx: &Context) {
        let page = self.state.build_page();

        let events = CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(8.0);
                        page::render(ui, &page, &mut self.textures)
                    })
                    .inner
            })
            .inner;

        for event in events {
            self.state.apply(event);
        }
    }

    /// Remember the window size for the next launch
    fn track_window_size(&mut self, ctx: &Context) {
        let size = ctx.input(|i| i.viewport().inner_rect.map(|r| r.size()));
        if let Some(size) = size {
            self.state.settings.window_size = Some((size.x as u32, size.y as u32));
        }
    }
}

impl eframe::App for CookbookApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // First frame setup
        if self.first_frame {
            self.first_frame = false;
            info!("First frame rendered");
        }

        self.track_window_size(ctx);

        // Render UI components
        self.render_sidebar(ctx);
        self.render_top_bar(ctx);
        self.render_main_content(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Save settings
        if let Err(e) = self.state.save_settings() {
            error!("Failed to save settings: {}", e);
        }

        info!("Application exiting");
    }
}
