use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

#[derive(Debug)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Read terminal events on a blocking thread until the receiver goes away
pub fn spawn_input_reader(tx: mpsc::UnboundedSender<InputEvent>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(Duration::from_millis(50)) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(error) => {
                    warn!("Terminal event poll failed: {}", error);
                    break;
                }
            }

            let input = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => InputEvent::Key(key),
                Ok(Event::Resize(cols, rows)) => InputEvent::Resize(cols, rows),
                Ok(_) => continue,
                Err(error) => {
                    warn!("Terminal event read failed: {}", error);
                    break;
                }
            };
            if tx.send(input).is_err() {
                break;
            }
        }
    })
}
