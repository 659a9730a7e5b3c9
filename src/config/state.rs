// src/config/state.rs
use super::options::AppOptions;

/// Ephemeral view state. Never written back to the config file.
#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Free-text filter over site names
    pub search: String,
}

impl GuiState {
    /// `None` when the search box is blank.
    pub fn query(&self) -> Option<&str> {
        let q = self.search.trim();
        if q.is_empty() { None } else { Some(q) }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
