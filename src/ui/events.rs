use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// SIGINT or SIGTERM received.
    Shutdown,
}

/// Reads terminal events and OS signals on a background thread.
///
/// The thread never touches application state; it only forwards events.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        Self::spawn_with(tick_rate, |name, reader| {
            thread::Builder::new().name(name).spawn(reader).map(drop)
        })
    }

    /// Start the reader loop through `spawn`. A spawn failure is returned.
    pub fn spawn_with<S>(tick_rate: Duration, spawn: S) -> io::Result<Self>
    where
        S: FnOnce(String, Box<dyn FnOnce() + Send + 'static>) -> io::Result<()>,
    {
        let (tx, rx) = mpsc::channel();
        spawn(
            "terminal-events".to_string(),
            Box::new(move || read_loop(tick_rate, tx)),
        )?;
        Ok(Self { rx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

fn read_loop(tick_rate: Duration, tx: Sender<AppEvent>) {
    let terminate = Arc::new(AtomicBool::new(false));
    for signal in [libc::SIGINT, libc::SIGTERM] {
        if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&terminate)) {
            tracing::warn!(signal, error = %err, "Failed to register signal handler");
        }
    }

    let mut last_tick = Instant::now();
    loop {
        if terminate.load(Ordering::Relaxed) {
            let _ = tx.send(AppEvent::Shutdown);
            break;
        }

        // Short poll timeout so the signal flag is checked frequently
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(AppEvent::Key(key))
                    }
                    Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                    Ok(_) => None,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal read failed");
                        break;
                    }
                };
                if let Some(event) = forwarded {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "Terminal poll failed");
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
