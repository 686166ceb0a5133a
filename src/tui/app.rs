use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::gallery::{Galleries, GalleryKind, Tile};
use crate::inference::{InferenceClient, SketchImage};
use crate::pagination::PageChange;
use crate::tui::events::Event;
use crate::tui::keys::{Action, KeyMap};
use crate::tui::styles::Theme;

/// What keyboard input currently drives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,

    /// Typing a page number
    Jump { input: String },

    /// Single image popup
    Viewer { tile: Tile },

    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Main application state and controller
pub struct App {
    pub should_quit: bool,
    pub galleries: Galleries,
    pub mode: Mode,

    /// Selected tile on the current page
    pub cursor: usize,

    pub status: Option<StatusMessage>,

    /// A query is in flight
    pub loading: bool,

    pub key_map: KeyMap,
    pub theme: Theme,

    sketch_path: Option<PathBuf>,
    client: InferenceClient,
    event_sender: mpsc::UnboundedSender<Event>,
}

impl App {
    pub fn new(
        config: &Config,
        sketch_path: Option<PathBuf>,
        event_sender: mpsc::UnboundedSender<Event>,
    ) -> Result<Self> {
        Ok(Self {
            should_quit: false,
            galleries: Galleries::new(config)?,
            mode: Mode::Browse,
            cursor: 0,
            status: None,
            loading: false,
            key_map: KeyMap::default(),
            theme: Theme::default(),
            sketch_path,
            client: InferenceClient::new(config)?,
            event_sender,
        })
    }

    /// Handle incoming events; returns true when the app should exit
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => self.handle_key_event(key)?,
            Event::QueryFinished(outcome) => {
                self.loading = false;
                match self.galleries.apply_query(outcome) {
                    Ok(count) => {
                        self.cursor = 0;
                        let text = format!("Retrieved {} images", count);
                        self.set_status(StatusLevel::Info, text);
                    }
                    Err(err) => {
                        error!("Error: {}", err);
                        self.set_status(
                            StatusLevel::Error,
                            "Failed to retrieve images. Please try again.",
                        );
                    }
                }
            }
            Event::Resize(width, height) => debug!("Terminal resized to {}x{}", width, height),
            Event::Tick => {}
        }

        Ok(self.should_quit)
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        match &mut self.mode {
            Mode::Jump { input } => {
                match key.code {
                    KeyCode::Char(c) if !c.is_control() => input.push(c),
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Enter => {
                        let input = input.clone();
                        self.submit_jump(&input);
                    }
                    KeyCode::Esc => self.mode = Mode::Browse,
                    _ => {}
                }
                return Ok(());
            }
            Mode::Viewer { .. } | Mode::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
                ) {
                    self.mode = Mode::Browse;
                }
                return Ok(());
            }
            Mode::Browse => {}
        }

        let Some(action) = self.key_map.action_for(&key) else {
            return Ok(());
        };

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.mode = Mode::Help,
            Action::PreviousPage => {
                let change = self.galleries.active_mut().previous_page();
                self.on_page_change(change);
            }
            Action::NextPage => {
                let change = self.galleries.active_mut().next_page();
                self.on_page_change(change);
            }
            Action::FirstPage => {
                let change = self.galleries.active_mut().paginator_mut().first_page();
                self.on_page_change(change);
            }
            Action::LastPage => {
                let change = self.galleries.active_mut().paginator_mut().last_page();
                self.on_page_change(change);
            }
            Action::StartJump => {
                if self.galleries.active().paginator().jump_enabled() {
                    self.mode = Mode::Jump { input: String::new() };
                }
            }
            Action::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorDown => {
                let visible = self.galleries.active().paginator().slice_bounds().len();
                if self.cursor + 1 < visible {
                    self.cursor += 1;
                }
            }
            Action::OpenTile => {
                if let Some(tile) = self.selected_tile() {
                    self.mode = Mode::Viewer { tile };
                }
            }
            Action::Submit => self.submit_sketch(),
            Action::ClearResults => {
                self.galleries.clear_results();
                self.cursor = 0;
                self.status = None;
            }
            Action::ToggleGallery => {
                let shown = self.galleries.toggle();
                self.cursor = 0;
                if shown == GalleryKind::Reference && self.galleries.results().is_none() {
                    self.set_status(
                        StatusLevel::Warning,
                        "No results yet; press 's' to submit a sketch",
                    );
                }
            }
        }

        Ok(())
    }

    pub fn selected_tile(&self) -> Option<Tile> {
        self.galleries.active().tiles().into_iter().nth(self.cursor)
    }

    fn submit_jump(&mut self, input: &str) {
        match self.galleries.active_mut().jump_to_page(input) {
            Ok(change) => {
                self.mode = Mode::Browse;
                self.on_page_change(change);
            }
            Err(err) => {
                warn!("Rejected page jump '{}': {}", input, err);
                self.set_status(StatusLevel::Error, err.to_string());
            }
        }
    }

    /// New page content starts with the first tile selected
    fn on_page_change(&mut self, change: PageChange) {
        if change.needs_render() {
            self.cursor = 0;
            self.status = None;
        }
    }

    fn submit_sketch(&mut self) {
        if self.loading {
            return;
        }

        let Some(path) = self.sketch_path.clone() else {
            self.set_status(
                StatusLevel::Warning,
                "No sketch given; start with --sketch <path>",
            );
            return;
        };

        let sketch = match SketchImage::load(&path) {
            Ok(sketch) => sketch,
            Err(err) => {
                error!("Failed to load sketch {}: {}", path.display(), err);
                self.set_status(StatusLevel::Error, format!("Failed to load sketch: {}", err));
                return;
            }
        };

        if sketch.is_blank() {
            warn!("Submitting a blank sketch from {}", path.display());
        }

        info!("Submitting sketch {}", path.display());
        self.loading = true;
        self.status = None;

        let client = self.client.clone();
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            let outcome = client.predict(&sketch).await;
            if sender.send(Event::QueryFinished(outcome)).is_err() {
                debug!("Query finished after the UI closed");
            }
        });
    }

    fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }
}
