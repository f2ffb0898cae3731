mod app;
mod components;

use app::MultiSelectApp;
use eframe::egui;
use multiselect_core::{ComponentRegistry, MultiSelectConfig, MULTI_SELECT_TAG};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Set up file logging to /tmp/multiselect.log
    let file_appender = tracing_appender::rolling::never("/tmp", "multiselect.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    // Initialize tracing with both stdout and file output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("multiselect_core=debug,multiselect_gui=info")
        }))
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    tracing::info!("MultiSelect GUI starting");

    let config = MultiSelectConfig::resolve(None)?;
    let registry = ComponentRegistry::with_defaults();
    let select = registry.create(MULTI_SELECT_TAG, config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 420.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Multi Select"),
        ..Default::default()
    };

    eframe::run_native(
        "MultiSelect",
        options,
        Box::new(move |cc| Ok(Box::new(MultiSelectApp::new(cc, select)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))
}
