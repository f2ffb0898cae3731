use eframe::egui;
use multiselect_core::{MultiSelect, MultiSelectError, RenderState};

use crate::components::{MultiSelectResponse, MultiSelectWidget};

pub struct MultiSelectApp {
    select: MultiSelect,
    /// Last snapshot handed out by the component
    state: RenderState,

    // Host-controlled inputs
    locked: bool,
    success: bool,
    show_placeholder: bool,
    input_value: String,
    helper_text: String,
    bulk_actions: bool,

    // Status
    last_error: Option<String>,
}

impl MultiSelectApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, select: MultiSelect) -> Self {
        Self::from_component(select)
    }

    fn from_component(mut select: MultiSelect) -> Self {
        let state = select
            .take_render_request()
            .unwrap_or_else(|| select.render_state());

        Self {
            locked: select.is_locked(),
            success: select.has_success(),
            show_placeholder: select.show_placeholder(),
            input_value: select.input_value().to_string(),
            helper_text: state.helper_text.clone(),
            bulk_actions: true,
            select,
            state,
            last_error: None,
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Host Inputs").strong());
        ui.add_space(5.0);

        if ui.checkbox(&mut self.locked, "Locked").changed() {
            self.select.set_locked(self.locked);
        }
        if ui.checkbox(&mut self.success, "Success").changed() {
            self.select.set_success(self.success);
        }
        if ui.checkbox(&mut self.show_placeholder, "Show placeholder").changed() {
            self.select.set_show_placeholder(self.show_placeholder);
        }

        ui.checkbox(&mut self.bulk_actions, "All / Clear buttons");

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            ui.label("Input:");
            if ui.text_edit_singleline(&mut self.input_value).changed() {
                self.select.set_input_value(self.input_value.as_str());
            }
        });
        ui.horizontal(|ui| {
            ui.label("Helper:");
            if ui.text_edit_singleline(&mut self.helper_text).changed() {
                self.select.set_helper_text(self.helper_text.as_str());
            }
        });

        ui.add_space(10.0);
        ui.separator();
        ui.label(egui::RichText::new("State").strong());
        ui.label(format!("List: {}", self.select.open_state().label()));
        ui.label(format!("Mode: {}", self.state.mode.label()));
        ui.label(format!("Selected: {}", self.select.selection().selected().join(", ")));
        ui.label(format!("Error: {}", self.state.has_error));

        if let Some(err) = &self.last_error {
            ui.add_space(10.0);
            ui.label(egui::RichText::new(err).color(egui::Color32::YELLOW));
        }
    }

    fn handle_response(&mut self, response: MultiSelectResponse) {
        if response.is_empty() {
            return;
        }
        match apply_response(&mut self.select, &response) {
            Ok(()) => self.last_error = None,
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }
}

/// Feed widget clicks into the component
pub fn apply_response(
    select: &mut MultiSelect,
    response: &MultiSelectResponse,
) -> Result<(), MultiSelectError> {
    if let Some(option) = &response.clicked_option {
        select.option_clicked(option)?;
    }
    if response.select_all_clicked {
        select.select_all()?;
    }
    if response.clear_clicked {
        select.clear()?;
    }
    if response.chevron_clicked {
        select.chevron_clicked()?;
    }
    Ok(())
}

impl eframe::App for MultiSelectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .default_width(240.0)
            .show(ctx, |ui| {
                self.render_controls(ui);
            });

        let id = egui::Id::new(self.select.id());
        let bulk_actions = self.bulk_actions;
        let response = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_space(20.0);
                MultiSelectWidget::new(&self.state, id)
                    .width(220.0)
                    .show_bulk_actions(bulk_actions)
                    .show(ui)
            })
            .inner;

        self.handle_response(response);

        if let Some(state) = self.select.take_render_request() {
            self.state = state;
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiselect_core::PresentationMode;

    #[test]
    fn test_initial_snapshot_taken() {
        let mut app = MultiSelectApp::from_component(MultiSelect::default());
        assert_eq!(app.state.mode, PresentationMode::Summary(3));
        assert!(app.select.take_render_request().is_none());
    }

    #[test]
    fn test_helper_text_seeded_from_component() {
        let mut config = multiselect_core::MultiSelectConfig::default();
        config.helper_text = "Pick colours".to_string();
        let app = MultiSelectApp::from_component(MultiSelect::new(config).unwrap());
        assert_eq!(app.helper_text, "Pick colours");
        assert_eq!(app.state.helper_text, "Pick colours");
    }

    #[test]
    fn test_apply_option_click() {
        let mut select = MultiSelect::default();
        let response = MultiSelectResponse {
            clicked_option: Some("Orange".to_string()),
            ..Default::default()
        };
        apply_response(&mut select, &response).unwrap();
        assert!(!select.selection().is_selected("Orange"));
    }

    #[test]
    fn test_apply_chevron_when_locked() {
        let mut select = MultiSelect::default();
        select.set_locked(true);
        let response = MultiSelectResponse {
            chevron_clicked: true,
            ..Default::default()
        };
        assert!(matches!(
            apply_response(&mut select, &response),
            Err(MultiSelectError::Locked)
        ));
        assert!(!select.is_open());
    }

    #[test]
    fn test_handle_response_records_error() {
        let mut app = MultiSelectApp::from_component(MultiSelect::default());
        app.select.set_locked(true);
        app.handle_response(MultiSelectResponse {
            clear_clicked: true,
            ..Default::default()
        });
        assert_eq!(app.last_error.as_deref(), Some("Component is locked"));
        assert_eq!(app.select.selection().count(), 3);
    }

    #[test]
    fn test_empty_response_is_noop() {
        let mut app = MultiSelectApp::from_component(MultiSelect::default());
        app.handle_response(MultiSelectResponse::default());
        assert!(app.last_error.is_none());
        assert!(app.select.take_render_request().is_none());
    }
}
