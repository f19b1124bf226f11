// src/embed/state.rs
use crate::error::EmbedError;

/// Where the embed lifecycle currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EmbedState {
    #[default]
    Absent,
    Loading {
        url: String,
    },
    Present {
        url: String,
    },
    Failed {
        url: String,
        error: EmbedError,
    },
}

impl EmbedState {
    pub fn url(&self) -> Option<&str> {
        match self {
            EmbedState::Absent => None,
            EmbedState::Loading { url }
            | EmbedState::Present { url }
            | EmbedState::Failed { url, .. } => Some(url),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, EmbedState::Loading { .. })
    }

    pub fn is_present(&self) -> bool {
        matches!(self, EmbedState::Present { .. })
    }

    /// Short human-readable status line.
    pub fn describe(&self) -> String {
        match self {
            EmbedState::Absent => String::from("Nothing loaded"),
            EmbedState::Loading { url } => format!("Loading {}...", url),
            EmbedState::Present { url } => format!("Showing {}", url),
            EmbedState::Failed { url, error } => format!("Could not load {}: {}", url, error),
        }
    }
}

/// Identifies one requested load. Only the most recently issued ticket may
/// install its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Default)]
pub struct LoadTracker {
    latest: u64,
}

impl LoadTracker {
    pub fn issue(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}
