//! # Application State
//!
//! The view's whole mutable state is three fields. Everything else on
//! screen is derived from the fixtures or the resolved profile.
//!
//! ```text
//! App
//! ├── active_panel: Panel                    // sidebar tab
//! ├── selected_conversation: Option<String>  // open chat id
//! ├── draft: String                          // composer text
//! ├── conversations: &'static [..]           // fixture, read-only
//! ├── contacts: &'static [..]                // fixture, read-only
//! └── profile: Profile                       // from config, read-only
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::fixtures;
use crate::core::model::{
    ContactSummary, ConversationSummary, Panel, Profile, SettingRow, TranscriptMessage,
};

/// What the right-hand detail panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail<'a> {
    /// Nothing selected yet: the call-to-action placeholder.
    Empty,
    Active(&'a ConversationSummary),
}

pub struct App {
    pub active_panel: Panel,
    /// Always an id from `conversations` when set.
    pub selected_conversation: Option<String>,
    pub draft: String,
    pub profile: Profile,
    conversations: &'static [ConversationSummary],
    contacts: &'static [ContactSummary],
}

impl App {
    pub fn new(profile: Profile) -> Self {
        Self::with_fixtures(profile, fixtures::CONVERSATIONS, fixtures::CONTACTS)
    }

    pub fn with_fixtures(
        profile: Profile,
        conversations: &'static [ConversationSummary],
        contacts: &'static [ContactSummary],
    ) -> Self {
        Self {
            active_panel: Panel::default(),
            selected_conversation: None,
            draft: String::new(),
            profile,
            conversations,
            contacts,
        }
    }

    pub fn conversations(&self) -> &'static [ConversationSummary] {
        self.conversations
    }

    pub fn contacts(&self) -> &'static [ContactSummary] {
        self.contacts
    }

    pub fn conversation(&self, id: &str) -> Option<&'static ConversationSummary> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn selected_conversation(&self) -> Option<&'static ConversationSummary> {
        self.selected_conversation
            .as_deref()
            .and_then(|id| self.conversation(id))
    }

    pub fn detail(&self) -> Detail<'static> {
        match self.selected_conversation() {
            Some(conversation) => Detail::Active(conversation),
            None => Detail::Empty,
        }
    }

    /// The open conversation's messages. Identical for every conversation.
    pub fn transcript(&self) -> &'static [TranscriptMessage] {
        fixtures::TRANSCRIPT
    }

    pub fn settings(&self) -> &'static [SettingRow] {
        fixtures::SETTINGS
    }

    /// Whether the send control is enabled.
    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }
}
