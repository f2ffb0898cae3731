//! The multi-select component: owns selection and open state, takes click
//! events, and hands render snapshots to whatever draws it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::MultiSelectConfig;
use crate::error::{MultiSelectError, Result};
use crate::open_state::OpenState;
use crate::presentation::{self, HelperTone, PresentationMode};
use crate::selection::{SelectionStore, Toggled};

/// One catalog entry as the renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub label: String,
    pub selected: bool,
    /// Position in the catalog
    pub index: usize,
}

/// Everything a renderer needs to draw the control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderState {
    pub label: String,
    pub mandatory: bool,
    pub mode: PresentationMode,
    pub items: Vec<OptionView>,
    pub open: bool,
    /// Collapsed input height while the list is closed
    pub compact: bool,
    pub has_error: bool,
    pub has_success: bool,
    pub locked: bool,
    pub helper_text: String,
    pub helper_tone: HelperTone,
}

impl RenderState {
    pub fn selected_labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter(|i| i.selected).map(|i| i.label.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct MultiSelect {
    id: Uuid,
    selection: SelectionStore,
    open: OpenState,
    input_value: String,
    show_placeholder: bool,
    placeholder_text: String,
    placeholder_label: String,
    helper_text: String,
    locked: bool,
    success: bool,
    render_requested: bool,
}

impl MultiSelect {
    pub fn new(config: MultiSelectConfig) -> Result<Self> {
        let catalog = Catalog::new(config.options)?;
        let selection = SelectionStore::new(catalog, config.selected)?;

        Ok(Self {
            id: Uuid::new_v4(),
            selection,
            open: OpenState::from_open(config.open),
            input_value: config.input_value,
            show_placeholder: config.show_placeholder,
            placeholder_text: config.placeholder_text,
            placeholder_label: config.placeholder_label,
            helper_text: config.helper_text,
            locked: config.locked,
            success: config.success,
            render_requested: true,
        })
    }

    /// Unique per instance; hosts use it to key widget state
    pub fn id(&self) -> Uuid {
        self.id
    }

    // Inbound actions

    /// Toggle an option from the list
    pub fn option_clicked(&mut self, option: &str) -> Result<Toggled> {
        self.ensure_unlocked("option click")?;

        let toggled = self.selection.toggle(option).inspect_err(|e| {
            tracing::warn!("Rejected option click: {}", e);
        })?;

        tracing::debug!(
            "Option {} {:?}, {} selected",
            option,
            toggled,
            self.selection.count()
        );
        self.request_render();
        Ok(toggled)
    }

    /// Open or close the option list
    pub fn chevron_clicked(&mut self) -> Result<OpenState> {
        let next = self.open.transition(self.locked).inspect_err(|e| {
            tracing::warn!("Rejected chevron click: {}", e);
        })?;

        self.open = next;
        tracing::debug!("Option list {}", next.label());
        self.request_render();
        Ok(next)
    }

    pub fn select_all(&mut self) -> Result<()> {
        self.ensure_unlocked("select all")?;
        self.selection.select_all();
        tracing::debug!("Selected all {} options", self.selection.count());
        self.request_render();
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.ensure_unlocked("clear")?;
        self.selection.clear();
        tracing::debug!("Cleared selection");
        self.request_render();
        Ok(())
    }

    // Externally controlled inputs

    pub fn set_locked(&mut self, locked: bool) {
        if self.locked != locked {
            self.locked = locked;
            self.request_render();
        }
    }

    pub fn set_success(&mut self, success: bool) {
        if self.success != success {
            self.success = success;
            self.request_render();
        }
    }

    pub fn set_show_placeholder(&mut self, show: bool) {
        if self.show_placeholder != show {
            self.show_placeholder = show;
            self.request_render();
        }
    }

    pub fn set_input_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.input_value != value {
            self.input_value = value;
            self.request_render();
        }
    }

    pub fn set_helper_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.helper_text != text {
            self.helper_text = text;
            self.request_render();
        }
    }

    // Queries

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn open_state(&self) -> OpenState {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn has_error(&self) -> bool {
        self.selection.has_error()
    }

    pub fn has_success(&self) -> bool {
        self.success
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn show_placeholder(&self) -> bool {
        self.show_placeholder
    }

    pub fn mode(&self) -> PresentationMode {
        presentation::resolve(
            &self.input_value,
            self.open.is_open(),
            self.show_placeholder,
            &self.placeholder_text,
            self.selection.count(),
        )
    }

    // Outbound

    pub fn render_state(&self) -> RenderState {
        let items = self
            .selection
            .catalog()
            .iter()
            .enumerate()
            .map(|(index, label)| OptionView {
                label: label.to_string(),
                selected: self.selection.is_selected(label),
                index,
            })
            .collect();

        let has_error = self.has_error();

        RenderState {
            label: self.placeholder_label.clone(),
            mandatory: true,
            mode: self.mode(),
            items,
            open: self.open.is_open(),
            compact: !self.open.is_open(),
            has_error,
            has_success: self.success,
            locked: self.locked,
            helper_text: self.helper_text.clone(),
            helper_tone: HelperTone::from_flags(has_error, self.success),
        }
    }

    /// Snapshot if anything changed since the last call.
    ///
    /// Changes between calls coalesce into one snapshot of the latest state.
    pub fn take_render_request(&mut self) -> Option<RenderState> {
        if !std::mem::take(&mut self.render_requested) {
            return None;
        }
        Some(self.render_state())
    }

    fn request_render(&mut self) {
        self.render_requested = true;
    }

    fn ensure_unlocked(&self, action: &str) -> Result<()> {
        if !self.locked {
            return Ok(());
        }
        tracing::warn!("Rejected {}: component is locked", action);
        Err(MultiSelectError::Locked)
    }
}

impl Default for MultiSelect {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            selection: SelectionStore::default(),
            open: OpenState::Closed,
            input_value: String::new(),
            show_placeholder: false,
            placeholder_text: "Placeholder".to_string(),
            placeholder_label: "Select values".to_string(),
            helper_text: "Help or instruction text goes here".to_string(),
            locked: false,
            success: false,
            render_requested: true,
        }
    }
}
