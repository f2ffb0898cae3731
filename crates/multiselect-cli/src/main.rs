mod event;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use multiselect_core::{ComponentRegistry, MultiSelect, MultiSelectConfig, MULTI_SELECT_TAG};
use tracing_subscriber::EnvFilter;

use event::Event;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "multiselect")]
#[command(about = "Multi-select component - replay clicks and inspect render state", long_about = None)]
struct Cli {
    /// JSON config file (falls back to $MULTISELECT_CONFIG, then built-in defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the initial render state
    Show,

    /// List catalog options with their selection markers
    Options,

    /// Apply events in order and print the final render state
    Replay {
        /// Events: click:<label>, chevron, all, clear, lock, unlock,
        /// success, no-success, placeholder, no-placeholder, type:<text>, helper:<text>
        #[arg(required = true)]
        events: Vec<Event>,

        /// Stop at the first refused event
        #[arg(long)]
        strict: bool,
    },

    /// Print the effective config as JSON
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MultiSelectConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Show => cmd_show(config, cli.format)?,
        Commands::Options => cmd_options(config)?,
        Commands::Replay { events, strict } => cmd_replay(config, &events, strict, cli.format)?,
        Commands::Config => println!("{}", config.to_json_pretty()?),
    }

    Ok(())
}

fn build(config: MultiSelectConfig) -> Result<MultiSelect> {
    let registry = ComponentRegistry::with_defaults();
    Ok(registry.create(MULTI_SELECT_TAG, config)?)
}

fn cmd_show(config: MultiSelectConfig, format: OutputFormat) -> Result<()> {
    let select = build(config)?;
    output::print_state(&select.render_state(), format)
}

fn cmd_options(config: MultiSelectConfig) -> Result<()> {
    let select = build(config)?;
    for (i, item) in select.render_state().items.iter().enumerate() {
        println!("{:>2}. {}", i + 1, output::format_item(&item.label, item.selected));
    }
    Ok(())
}

fn cmd_replay(
    config: MultiSelectConfig,
    events: &[Event],
    strict: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut select = build(config)?;
    let mut refused = 0usize;

    for event in events {
        if let Err(e) = event.apply(&mut select) {
            if strict {
                anyhow::bail!("Event '{}' refused: {}", event, e);
            }
            eprintln!("Event '{}' refused: {}", event, e);
            refused += 1;
            continue;
        }
        tracing::info!("Applied {}", event);
    }

    if refused > 0 {
        tracing::warn!("{} of {} events refused", refused, events.len());
    }

    let state = select.take_render_request().unwrap_or_else(|| select.render_state());
    output::print_state(&state, format)
}
