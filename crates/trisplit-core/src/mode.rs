// ABOUTME: View modes the three-pane screen can be in.
// ABOUTME: Each mode decides whether the detail pane or the list pane is primary.

use serde::{Deserialize, Serialize};

/// Semantic screen state driving pane geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// No mode determined yet; panes stay hidden
    #[default]
    Unknown,
    /// A single conversation is open
    Conversation,
    /// The conversation list is primary, folders beside it
    ConversationList,
    /// A conversation opened from search results
    SearchResultsConversation,
    /// Search results list
    SearchResultsList,
}

impl Mode {
    pub fn all() -> &'static [Mode] {
        &[
            Mode::Unknown,
            Mode::Conversation,
            Mode::ConversationList,
            Mode::SearchResultsConversation,
            Mode::SearchResultsList,
        ]
    }

    /// Conversation family: the detail pane is showing
    pub fn is_conversation(&self) -> bool {
        matches!(self, Mode::Conversation | Mode::SearchResultsConversation)
    }

    /// List family: the conversation list is primary
    pub fn is_list(&self) -> bool {
        matches!(self, Mode::ConversationList | Mode::SearchResultsList)
    }

    /// SearchResults family
    pub fn is_search(&self) -> bool {
        matches!(
            self,
            Mode::SearchResultsConversation | Mode::SearchResultsList
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Unknown => "unknown",
            Mode::Conversation => "conversation",
            Mode::ConversationList => "conversation list",
            Mode::SearchResultsConversation => "search results conversation",
            Mode::SearchResultsList => "search results list",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
