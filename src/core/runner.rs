//! Application runner logic
//!
//! Handles the different ways to run typecase: config initialization,
//! headless output, and the interactive terminal UI.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::cli::{CliArgs, StartupOptions};
use crate::core::config::ConfigFile;
use crate::core::errors::invalid_arguments;
use crate::fonts::{curated_fonts, search, Font, GoogleFontsClient};
use crate::logging;

/// Create and run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to appropriate runners.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    cli_args.validate().map_err(invalid_arguments)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    if cli_args.is_headless() {
        logging::init_stderr_logging(&cli_args.log_level)?;
        let startup = cli_args.resolve(ConfigFile::load().as_ref());

        return match &cli_args.search {
            Some(query) => runtime.block_on(run_search(&startup, query)),
            None => print_startup_config(&startup),
        };
    }

    #[cfg(feature = "tui")]
    {
        // Keep the guard alive until the TUI exits so buffered logs get flushed
        let _log_guard = logging::init_file_logging(&cli_args.log_level)?;
        let startup = cli_args.resolve(ConfigFile::load().as_ref());
        runtime.block_on(crate::tui::run_tui(startup))
    }
    #[cfg(not(feature = "tui"))]
    {
        anyhow::bail!("TUI feature not compiled. Use --no-tui or --search to run without it.")
    }
}

/// Print the resolved startup configuration as JSON
fn print_startup_config(startup: &StartupOptions) -> Result<()> {
    let json = serde_json::to_string_pretty(&startup.editor)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Run one font search and print the matches
async fn run_search(startup: &StartupOptions, query: &str) -> Result<()> {
    let client = GoogleFontsClient::new(startup.api_key.clone())?;
    debug!("Running one-shot font search for '{}'", query);
    let fonts = search::search(&client, &curated_fonts(), query).await;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", format_search_results(&fonts))?;
    Ok(())
}

fn format_search_results(fonts: &[Font]) -> String {
    if fonts.is_empty() {
        return "No fonts found\n".to_string();
    }
    fonts
        .iter()
        .map(|font| format!("{}\t{}\n", font.name, font.value))
        .collect()
}
