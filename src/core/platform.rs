//! Platform-specific functionality and error handling.
//!
//! This module provides initialization and error reporting for the
//! terminal application.

/// Initialize panic handling.
///
/// With the TUI compiled in, the panic hook first restores the terminal
/// (raw mode off, main screen back) so the panic message stays readable.
pub fn init_panic_handling() {
    #[cfg(feature = "tui")]
    {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            crate::tui::restore_terminal();
            default_hook(info);
        }));
    }
}

/// Handle application errors: print to stderr and exit with code 1
pub fn handle_error(error: anyhow::Error) {
    tracing::error!("{:#}", error);
    eprintln!();
    eprintln!("Error starting typecase:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse command line arguments.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
