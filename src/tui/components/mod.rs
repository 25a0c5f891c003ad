//! # TUI Components
//!
//! Every visible piece of the screen.
//!
//! ## Component Architecture
//!
//! Components are short-lived structs built fresh each frame from "props"
//! borrowed out of `App` and `TuiState`. Anything that must survive between
//! frames (composer cursor, transcript scroll offset) lives in a separate
//! state type owned by `TuiState` and is lent in by `&mut`.
//!
//! Clickable regions are registered into the shared `HitMap` while
//! rendering, so mouse handling always matches what was last drawn.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── header.rs             (app bar with the encryption badge)
//! ├── sidebar.rs            (tabs + active panel)
//! │   ├── tabs.rs
//! │   ├── conversation_list.rs
//! │   ├── contact_list.rs
//! │   ├── profile_card.rs
//! │   └── settings_list.rs
//! ├── chat_panel.rs         (empty placeholder or open conversation)
//! │   ├── transcript.rs
//! │   └── composer.rs
//! └── widgets.rs            (cards, avatars, buttons shared by the above)
//! ```

pub mod chat_panel;
pub mod composer;
pub mod contact_list;
pub mod conversation_list;
pub mod header;
pub mod profile_card;
pub mod settings_list;
pub mod sidebar;
pub mod tabs;
pub mod transcript;
mod widgets;

pub use chat_panel::ChatPanel;
pub use composer::{Composer, ComposerEvent, ComposerState};
pub use contact_list::ContactList;
pub use conversation_list::ConversationList;
pub use header::Header;
pub use profile_card::ProfileCard;
pub use settings_list::SettingsList;
pub use sidebar::Sidebar;
pub use tabs::PanelTabs;
pub use transcript::Transcript;
