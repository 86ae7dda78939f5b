//! # Form Studio
//!
//! Replays an editing script and writes the form exports.

use clap::Parser;
use form_studio::{CliArgs, StudioConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing; `FORM_STUDIO_LOG_FORMAT=json` selects JSON output.
///
/// Logs go to stderr so `--print-views` output on stdout stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,form_core=debug,form_export=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false);

    if std::env::var("FORM_STUDIO_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let config = StudioConfig::from(args);

    tracing::info!(
        "Starting Form Studio v{} (output: {})",
        form_core::VERSION,
        config.out_dir.display()
    );

    let summary = form_studio::run(&config)?;
    tracing::info!(
        "Form has {} fields after {} steps, wrote {} files",
        summary.fields,
        summary.steps,
        summary.written.len()
    );

    if config.print_views {
        println!("{}", serde_json::to_string_pretty(&summary.frame)?);
    }

    Ok(())
}
