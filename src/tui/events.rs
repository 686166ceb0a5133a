use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::gallery::ImageId;
use crate::inference::InferenceError;

/// Application events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Terminal resize event
    Resize(u16, u16),

    /// Periodic tick event
    Tick,

    /// The retrieval request finished
    QueryFinished(Result<Vec<ImageId>, InferenceError>),
}

/// Merges terminal input with events sent from background tasks
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
    sender: mpsc::UnboundedSender<Event>,

    /// How long to wait for terminal input before yielding a tick
    tick_interval: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            receiver,
            sender,
            tick_interval: Duration::from_millis(100),
        }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Result<Event> {
        if let Ok(event) = self.receiver.try_recv() {
            return Ok(event);
        }

        let tick_interval = self.tick_interval;
        let polled = tokio::task::spawn_blocking(move || poll_terminal(tick_interval)).await??;

        Ok(polled.and_then(convert_crossterm_event).unwrap_or(Event::Tick))
    }

    /// Get a clone of the sender
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }
}

/// Wait up to `timeout` for a terminal event
fn poll_terminal(timeout: Duration) -> std::io::Result<Option<CrosstermEvent>> {
    if crossterm::event::poll(timeout)? {
        crossterm::event::read().map(Some)
    } else {
        Ok(None)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert crossterm events to application events; key releases are dropped
fn convert_crossterm_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}
