pub mod app;
pub mod controls;
pub mod events;
pub mod font_picker;
pub mod preview;
pub mod stylesheets;
pub mod ui;
pub mod vim;

use crate::core::cli::StartupOptions;
use crate::fonts::GoogleFontsClient;
use anyhow::Result;
use tracing::info;

pub async fn run_tui(startup: StartupOptions) -> Result<()> {
    use crossterm::{
        execute,
        terminal::{enable_raw_mode, EnterAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::io;

    let client = GoogleFontsClient::new(startup.api_key.clone())?;
    if !client.has_api_key() {
        info!("No font service API key configured; remote font search is disabled");
    }
    let (mut app, mut outcome_rx) = app::App::new(startup, client);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("TUI started");
    let result = app.run(&mut terminal, &mut outcome_rx).await;

    restore_terminal();
    terminal.show_cursor()?;
    info!("TUI stopped");

    result
}

/// Leave raw mode and the alternate screen. Errors are ignored so this can
/// run from a panic hook.
pub fn restore_terminal() {
    use crossterm::{
        cursor::{SetCursorStyle, Show},
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };

    let _ = disable_raw_mode();
    let _ = execute!(
        std::io::stdout(),
        LeaveAlternateScreen,
        SetCursorStyle::DefaultUserShape,
        Show
    );
}
