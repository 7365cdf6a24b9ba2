//! UI state - load status and the transient error banner

use std::time::{Duration, Instant};

/// Progress of the initial fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Ready,
    /// Fetch failed; rows from any earlier load are kept
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub text: String,
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Presentation-facing state that is not part of the grid data
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub load_state: LoadState,
    /// Mutation failure banner
    pub error_banner: Option<TransientMessage>,
    /// Resize handle under the pointer, for hover highlight
    pub hovered_handle: Option<super::resize::ResizeTarget>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_error(&mut self, text: impl Into<String>, duration: Duration) {
        self.error_banner = Some(TransientMessage::new(text, duration));
    }

    /// Drop the banner if it has expired. Returns true if it was removed.
    pub fn expire_banner(&mut self, now: Instant) -> bool {
        if self
            .error_banner
            .as_ref()
            .is_some_and(|m| m.is_expired_at(now))
        {
            self.error_banner = None;
            true
        } else {
            false
        }
    }

    /// Banner text still visible at `now`
    pub fn banner_text(&self) -> Option<&str> {
        self.error_banner
            .as_ref()
            .filter(|m| !m.is_expired())
            .map(|m| m.text.as_str())
    }
}
