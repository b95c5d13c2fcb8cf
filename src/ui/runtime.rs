use crate::config::Config;
use crate::list::ListSnapshot;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;

/// Run the terminal UI until the user quits. Returns the final list.
pub fn run(config: &Config) -> anyhow::Result<ListSnapshot> {
    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate).context("Failed to start event thread")?;
    tracing::info!(tick_ms = config.ui.tick_rate_ms, "UI started");

    loop {
        terminal
            .draw(|frame| draw(frame, &app))
            .context("Failed to draw frame")?;
        if app.should_quit() {
            break;
        }
        apply_event(&mut app, events.next(tick_rate))?;
    }

    guard.restore();
    tracing::info!(items = app.snapshot().len(), "UI stopped");
    Ok(app.snapshot().clone())
}

/// Feed one event (or a receive failure) into the app.
///
/// A disconnected event source is an error: without it the UI can never quit
/// on user request.
fn apply_event(app: &mut App, event: Result<AppEvent, RecvTimeoutError>) -> anyhow::Result<()> {
    match event {
        Ok(AppEvent::Key(key)) => handle_key(app, key),
        Ok(AppEvent::Tick) => app.on_tick(),
        Ok(AppEvent::Resize(cols, rows)) => {
            tracing::debug!(cols, rows, "Terminal resized");
        }
        Ok(AppEvent::Shutdown) => {
            tracing::info!("Shutdown signal received");
            app.request_quit();
        }
        Err(RecvTimeoutError::Timeout) => {}
        Err(RecvTimeoutError::Disconnected) => {
            tracing::error!("Event thread stopped unexpectedly");
            anyhow::bail!("Terminal event thread stopped unexpectedly");
        }
    }
    Ok(())
}
