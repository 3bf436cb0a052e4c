//! A terminal code-editor playground for programming fonts.
//!
//! Try a font on real code before you commit to it.

use anyhow::Result;
use typecase::core;

/// Run the application with the given CLI arguments.
fn run_app(cli_args: core::cli::CliArgs) -> Result<()> {
    core::run_app(cli_args)
}

fn main() {
    core::platform::init_panic_handling();
    let cli_args = core::platform::get_cli_args();
    match run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
