use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub keys: Vec<(KeyCode, KeyModifiers)>,
    pub label: &'static str,
    pub description: &'static str,
}

impl KeyBinding {
    pub fn new(keys: &[KeyCode], label: &'static str, description: &'static str) -> Self {
        Self {
            keys: keys.iter().map(|key| (*key, KeyModifiers::NONE)).collect(),
            label,
            description,
        }
    }

    fn with_modifiers(mut self, key: KeyCode, modifiers: KeyModifiers) -> Self {
        self.keys.push((key, modifiers));
        self
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        // Shifted characters such as '?' arrive with SHIFT set
        let shifted = event.modifiers == KeyModifiers::SHIFT;
        self.keys.iter().any(|(code, modifiers)| {
            *code == event.code
                && (*modifiers == event.modifiers || (*modifiers == KeyModifiers::NONE && shifted))
        })
    }
}

/// Browsing commands a key can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,
    StartJump,
    CursorUp,
    CursorDown,
    OpenTile,
    Submit,
    ClearResults,
    ToggleGallery,
}

/// Application key mappings
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(Action, KeyBinding)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let bindings = vec![
            (
                Action::Quit,
                KeyBinding::new(&[KeyCode::Char('q')], "q / Ctrl+C", "Quit")
                    .with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
            ),
            (Action::Help, KeyBinding::new(&[KeyCode::Char('?')], "?", "Show/hide help")),
            (
                Action::PreviousPage,
                KeyBinding::new(&[KeyCode::Left, KeyCode::Char('h')], "← / h", "Previous page"),
            ),
            (
                Action::NextPage,
                KeyBinding::new(&[KeyCode::Right, KeyCode::Char('l')], "→ / l", "Next page"),
            ),
            (Action::FirstPage, KeyBinding::new(&[KeyCode::Home], "Home", "First page")),
            (Action::LastPage, KeyBinding::new(&[KeyCode::End], "End", "Last page")),
            (Action::StartJump, KeyBinding::new(&[KeyCode::Char('g')], "g", "Jump to page")),
            (
                Action::CursorUp,
                KeyBinding::new(&[KeyCode::Up, KeyCode::Char('k')], "↑ / k", "Previous image"),
            ),
            (
                Action::CursorDown,
                KeyBinding::new(&[KeyCode::Down, KeyCode::Char('j')], "↓ / j", "Next image"),
            ),
            (Action::OpenTile, KeyBinding::new(&[KeyCode::Enter], "Enter", "View image")),
            (Action::Submit, KeyBinding::new(&[KeyCode::Char('s')], "s", "Submit sketch")),
            (Action::ClearResults, KeyBinding::new(&[KeyCode::Char('c')], "c", "Clear results")),
            (Action::ToggleGallery, KeyBinding::new(&[KeyCode::Tab], "Tab", "Switch gallery")),
        ];

        Self { bindings }
    }
}

impl KeyMap {
    pub fn action_for(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, binding)| binding.matches(event))
            .map(|(action, _)| *action)
    }

    /// Get help text for all key bindings
    pub fn help_text(&self) -> String {
        self.bindings
            .iter()
            .map(|(_, binding)| format!("{:<12} {}", binding.label, binding.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
