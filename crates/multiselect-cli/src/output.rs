use clap::ValueEnum;
use multiselect_core::{HelperTone, RenderState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn print_state(state: &RenderState, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_text(state)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(state)?),
    }
    Ok(())
}

pub fn format_text(state: &RenderState) -> String {
    let mut out = String::new();

    let mandatory = if state.mandatory { " *" } else { "" };
    let locked = if state.locked { " [locked]" } else { "" };
    out.push_str(&format!("{}{}{}\n", state.label, mandatory, locked));

    let chevron = if state.open { "^" } else { "v" };
    out.push_str(&format!(
        "  [{}] {} ({})\n",
        state.mode.text(),
        chevron,
        state.mode.label()
    ));

    if state.open {
        for item in &state.items {
            out.push_str(&format!("  {}\n", format_item(&item.label, item.selected)));
        }
    }

    let tone = match state.helper_tone {
        HelperTone::Neutral => "",
        HelperTone::Error => "error: ",
        HelperTone::Success => "ok: ",
    };
    out.push_str(&format!("  {}{}\n", tone, state.helper_text));
    out
}

pub fn format_item(label: &str, selected: bool) -> String {
    let marker = if selected { "x" } else { " " };
    format!("[{}] {}", marker, label)
}
