//! Multi-select widget - draws a `RenderState` and reports clicks

use eframe::egui::{self, Align, Layout, RichText, Stroke};
use multiselect_core::{HelperTone, PresentationMode, RenderState};

use super::palette;

/// What the user did this frame
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MultiSelectResponse {
    /// Option chip was clicked
    pub clicked_option: Option<String>,
    /// Chevron was clicked
    pub chevron_clicked: bool,
    /// "All" button was clicked
    pub select_all_clicked: bool,
    /// "Clear" button was clicked
    pub clear_clicked: bool,
}

impl MultiSelectResponse {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Multi-select widget. Holds no state of its own.
pub struct MultiSelectWidget<'a> {
    state: &'a RenderState,
    id: egui::Id,
    width: f32,
    show_bulk_actions: bool,
}

impl<'a> MultiSelectWidget<'a> {
    pub fn new(state: &'a RenderState, id: egui::Id) -> Self {
        Self {
            state,
            id,
            width: 200.0,
            show_bulk_actions: true,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn show_bulk_actions(mut self, show: bool) -> Self {
        self.show_bulk_actions = show;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> MultiSelectResponse {
        let mut response = MultiSelectResponse::default();

        ui.push_id(self.id, |ui| {
            ui.vertical(|ui| {
                self.render_label(ui);
                ui.add_space(4.0);
                self.render_input(ui, &mut response);
                ui.add_space(4.0);
                self.render_helper(ui);
            });
        });

        response
    }

    fn render_label(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.label(RichText::new(&self.state.label).size(12.0).strong().color(palette::LABEL));
            if self.state.mandatory {
                ui.label(RichText::new("*").size(12.0).color(palette::MANDATORY));
            }
        });
    }

    fn render_input(&self, ui: &mut egui::Ui, response: &mut MultiSelectResponse) {
        let state = self.state;

        let fill = if state.locked { palette::LOCKED_BG } else { palette::INPUT_BG };
        let border = if state.has_error {
            palette::BORDER_ERROR
        } else if state.has_success {
            palette::BORDER_SUCCESS
        } else {
            palette::BORDER
        };

        egui::Frame::none()
            .fill(fill)
            .stroke(Stroke::new(1.0, border))
            .rounding(5.0)
            .inner_margin(egui::Margin::symmetric(10.0, 8.0))
            .show(ui, |ui| {
                ui.set_width(self.width);

                ui.horizontal(|ui| {
                    render_mode(ui, &state.mode);

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        // Locked controls can still be closed
                        let enabled = !state.locked || state.open;
                        let glyph = if state.open { "⏶" } else { "⏷" };
                        let chevron = egui::Button::new(RichText::new(glyph).color(palette::PLACEHOLDER))
                            .frame(false);
                        if ui.add_enabled(enabled, chevron).clicked() {
                            response.chevron_clicked = true;
                        }
                    });
                });

                if !state.compact {
                    ui.add_space(6.0);
                    self.render_options(ui, response);
                }
            });
    }

    fn render_options(&self, ui: &mut egui::Ui, response: &mut MultiSelectResponse) {
        let state = self.state;

        if self.show_bulk_actions {
            ui.horizontal(|ui| {
                ui.add_enabled_ui(!state.locked, |ui| {
                    if ui.small_button("All").clicked() {
                        response.select_all_clicked = true;
                    }
                    if ui.small_button("Clear").clicked() {
                        response.clear_clicked = true;
                    }
                });
            });
            ui.add_space(4.0);
        }

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

            for item in &state.items {
                let icon = if item.selected { "×" } else { "+" };
                let text = RichText::new(format!("{} {}", item.label, icon))
                    .size(12.0)
                    .color(palette::CHIP_TEXT);
                let chip = egui::Button::new(text)
                    .fill(palette::chip_color(item.index, item.selected, state.locked))
                    .stroke(Stroke::NONE)
                    .rounding(3.0);

                if ui.add_enabled(!state.locked, chip).clicked() {
                    response.clicked_option = Some(item.label.clone());
                }
            }
        });
    }

    fn render_helper(&self, ui: &mut egui::Ui) {
        let color = match self.state.helper_tone {
            HelperTone::Neutral => palette::HELPER,
            HelperTone::Error => palette::HELPER_ERROR,
            HelperTone::Success => palette::HELPER_SUCCESS,
        };
        ui.label(RichText::new(&self.state.helper_text).size(12.0).color(color));
    }
}

fn render_mode(ui: &mut egui::Ui, mode: &PresentationMode) {
    match mode {
        PresentationMode::InputTyped(value) => {
            ui.label(RichText::new(value).size(14.0).color(palette::INPUT_TEXT));
        }
        PresentationMode::Placeholder(text) => {
            ui.label(RichText::new(text).size(14.0).color(palette::PLACEHOLDER));
        }
        PresentationMode::Summary(_) => {
            ui.label(
                RichText::new(mode.text())
                    .size(12.0)
                    .color(palette::PLACEHOLDER)
                    .background_color(palette::SUMMARY_BG),
            );
        }
        PresentationMode::Empty => {}
    }
}
