//! Presentation mode resolver - what the input area shows

use serde::{Deserialize, Serialize};

/// Display variant for the input area. Exactly one applies at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PresentationMode {
    /// Text the user typed
    InputTyped(String),
    /// Configured placeholder text
    Placeholder(String),
    /// Number of selected values
    Summary(usize),
    /// List is open; nothing shown in the input area
    Empty,
}

impl PresentationMode {
    pub fn text(&self) -> String {
        match self {
            PresentationMode::InputTyped(value) => value.clone(),
            PresentationMode::Placeholder(text) => text.clone(),
            PresentationMode::Summary(count) => format!("{} values selected", count),
            PresentationMode::Empty => String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PresentationMode::InputTyped(_) => "Input",
            PresentationMode::Placeholder(_) => "Placeholder",
            PresentationMode::Summary(_) => "Summary",
            PresentationMode::Empty => "Empty",
        }
    }
}

/// Pick the display variant. First matching rule wins:
/// typed input, then placeholder, then the summary while closed.
pub fn resolve(
    input_value: &str,
    open: bool,
    show_placeholder: bool,
    placeholder: &str,
    count: usize,
) -> PresentationMode {
    if !input_value.is_empty() {
        return PresentationMode::InputTyped(input_value.to_string());
    }
    if show_placeholder {
        return PresentationMode::Placeholder(placeholder.to_string());
    }
    if !open {
        return PresentationMode::Summary(count);
    }
    PresentationMode::Empty
}

/// Styling hint for the helper text below the control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelperTone {
    #[default]
    Neutral,
    Error,
    Success,
}

impl HelperTone {
    /// Error wins when both flags are raised
    pub fn from_flags(has_error: bool, has_success: bool) -> Self {
        if has_error {
            return HelperTone::Error;
        }
        if has_success {
            return HelperTone::Success;
        }
        HelperTone::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_beats_placeholder_and_summary() {
        let mode = resolve("x", false, true, "Placeholder", 3);
        assert_eq!(mode, PresentationMode::InputTyped("x".to_string()));

        let mode = resolve("x", true, false, "Placeholder", 0);
        assert_eq!(mode, PresentationMode::InputTyped("x".to_string()));
    }

    #[test]
    fn test_placeholder_regardless_of_open() {
        for open in [false, true] {
            let mode = resolve("", open, true, "Pick some", 3);
            assert_eq!(mode, PresentationMode::Placeholder("Pick some".to_string()));
        }
    }

    #[test]
    fn test_summary_when_closed() {
        let mode = resolve("", false, false, "Placeholder", 3);
        assert_eq!(mode, PresentationMode::Summary(3));
        assert_eq!(mode.text(), "3 values selected");
    }

    #[test]
    fn test_empty_when_open() {
        let mode = resolve("", true, false, "Placeholder", 3);
        assert_eq!(mode, PresentationMode::Empty);
        assert_eq!(mode.text(), "");
    }

    #[test]
    fn test_summary_with_no_selection() {
        assert_eq!(resolve("", false, false, "", 0).text(), "0 values selected");
    }

    #[test]
    fn test_helper_tone() {
        assert_eq!(HelperTone::from_flags(false, false), HelperTone::Neutral);
        assert_eq!(HelperTone::from_flags(false, true), HelperTone::Success);
        assert_eq!(HelperTone::from_flags(true, false), HelperTone::Error);
        assert_eq!(HelperTone::from_flags(true, true), HelperTone::Error);
    }
}
