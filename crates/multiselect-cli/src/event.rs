//! Interaction events accepted by `replay`

use std::fmt;
use std::str::FromStr;

use multiselect_core::{MultiSelect, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `click:<label>`
    Click(String),
    /// `chevron`
    Chevron,
    /// `all`
    SelectAll,
    /// `clear`
    Clear,
    /// `lock`
    Lock,
    /// `unlock`
    Unlock,
    /// `success` / `no-success`
    Success(bool),
    /// `placeholder` / `no-placeholder`
    Placeholder(bool),
    /// `type:<text>`; `type:` clears the input
    Type(String),
    /// `helper:<text>`
    Helper(String),
}

impl Event {
    pub fn apply(&self, select: &mut MultiSelect) -> Result<()> {
        match self {
            Event::Click(label) => select.option_clicked(label).map(|_| ()),
            Event::Chevron => select.chevron_clicked().map(|_| ()),
            Event::SelectAll => select.select_all(),
            Event::Clear => select.clear(),
            Event::Lock => {
                select.set_locked(true);
                Ok(())
            }
            Event::Unlock => {
                select.set_locked(false);
                Ok(())
            }
            Event::Success(on) => {
                select.set_success(*on);
                Ok(())
            }
            Event::Placeholder(on) => {
                select.set_show_placeholder(*on);
                Ok(())
            }
            Event::Type(text) => {
                select.set_input_value(text.as_str());
                Ok(())
            }
            Event::Helper(text) => {
                select.set_helper_text(text.as_str());
                Ok(())
            }
        }
    }
}

impl FromStr for Event {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Prefix is case-insensitive; the value after ':' keeps its case
        if let Some((prefix, value)) = s.split_once(':') {
            return match prefix.to_lowercase().as_str() {
                "click" if value.is_empty() => {
                    Err("click needs an option label, e.g. click:Orange".to_string())
                }
                "click" => Ok(Event::Click(value.to_string())),
                "type" => Ok(Event::Type(value.to_string())),
                "helper" => Ok(Event::Helper(value.to_string())),
                other => Err(format!("Unknown event: {}:", other)),
            };
        }

        match s.to_lowercase().as_str() {
            "chevron" | "toggle" => Ok(Event::Chevron),
            "all" => Ok(Event::SelectAll),
            "clear" => Ok(Event::Clear),
            "lock" => Ok(Event::Lock),
            "unlock" => Ok(Event::Unlock),
            "success" => Ok(Event::Success(true)),
            "no-success" => Ok(Event::Success(false)),
            "placeholder" => Ok(Event::Placeholder(true)),
            "no-placeholder" => Ok(Event::Placeholder(false)),
            other => Err(format!("Unknown event: {}", other)),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Click(label) => write!(f, "click:{}", label),
            Event::Chevron => write!(f, "chevron"),
            Event::SelectAll => write!(f, "all"),
            Event::Clear => write!(f, "clear"),
            Event::Lock => write!(f, "lock"),
            Event::Unlock => write!(f, "unlock"),
            Event::Success(true) => write!(f, "success"),
            Event::Success(false) => write!(f, "no-success"),
            Event::Placeholder(true) => write!(f, "placeholder"),
            Event::Placeholder(false) => write!(f, "no-placeholder"),
            Event::Type(text) => write!(f, "type:{}", text),
            Event::Helper(text) => write!(f, "helper:{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiselect_core::PresentationMode;

    #[test]
    fn test_parse_events() {
        assert_eq!("click:Orange".parse(), Ok(Event::Click("Orange".to_string())));
        assert_eq!("click:Light Blue".parse(), Ok(Event::Click("Light Blue".to_string())));
        assert_eq!("CHEVRON".parse(), Ok(Event::Chevron));
        assert_eq!("type:".parse(), Ok(Event::Type(String::new())));
        assert_eq!("no-success".parse(), Ok(Event::Success(false)));
        assert!("click:".parse::<Event>().is_err());
        assert!("dance".parse::<Event>().is_err());
        assert!("dance:Orange".parse::<Event>().is_err());
    }

    #[test]
    fn test_parse_prefix_case_insensitive() {
        assert_eq!("Click:Orange".parse(), Ok(Event::Click("Orange".to_string())));
        assert_eq!("TYPE:Gre".parse(), Ok(Event::Type("Gre".to_string())));
        assert_eq!(
            "Helper:Pick a Colour".parse(),
            Ok(Event::Helper("Pick a Colour".to_string()))
        );
    }

    #[test]
    fn test_apply_helper_text() {
        let mut select = MultiSelect::default();
        select.take_render_request();

        let event: Event = "helper:Choose wisely".parse().unwrap();
        event.apply(&mut select).unwrap();
        let state = select.take_render_request().unwrap();
        assert_eq!(state.helper_text, "Choose wisely");

        event.apply(&mut select).unwrap();
        assert!(select.take_render_request().is_none());
    }

    #[test]
    fn test_apply_scenario() {
        let mut select = MultiSelect::default();
        for raw in ["click:Orange", "click:Green", "click:Red"] {
            let event: Event = raw.parse().unwrap();
            event.apply(&mut select).unwrap();
        }
        assert!(select.has_error());

        Event::Chevron.apply(&mut select).unwrap();
        assert_eq!(select.mode(), PresentationMode::Empty);
    }

    #[test]
    fn test_apply_locked() {
        let mut select = MultiSelect::default();
        Event::Lock.apply(&mut select).unwrap();
        assert!(Event::Click("Blue".to_string()).apply(&mut select).is_err());
        Event::Unlock.apply(&mut select).unwrap();
        assert!(Event::Click("Blue".to_string()).apply(&mut select).is_ok());
    }
}
