//! View modes for the three screens a front end shows.
//!
//! Exactly one screen is current at a time: the post list, the form (new or
//! edit), or a single post. Every transition between them is valid, driven by
//! clicks; the transitions themselves live on [`crate::app::App`].

use uuid::Uuid;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The post list, optionally filtered.
    List,
    /// The form. `None` composes a new post; `Some` edits an existing one.
    Editing(Option<Uuid>),
    /// A single post, full content.
    Viewing(Uuid),
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Editing(_) => "editing",
            Self::Viewing(_) => "viewing",
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::List
    }
}
