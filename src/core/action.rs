//! # Actions
//!
//! Everything that can happen in Nova becomes an `Action`.
//! User clicks a chat? That's `Action::SelectConversation(id)`.
//! User presses Enter in the composer? That's `Action::SendDraft`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the event loop.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info, warn};

use crate::core::model::{Control, Panel};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectPanel(Panel),
    SelectConversation(String),
    EditDraft(String),
    SendDraft,
    /// A decorative control was activated.
    Press(Control),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectPanel(panel) => {
            app.active_panel = panel;
            Effect::None
        }
        Action::SelectConversation(id) => {
            if app.conversation(&id).is_some() {
                app.selected_conversation = Some(id);
            } else {
                warn!("Ignoring selection of unknown conversation id {:?}", id);
            }
            Effect::None
        }
        Action::EditDraft(text) => {
            app.draft = text;
            Effect::None
        }
        Action::SendDraft => {
            if app.can_send() {
                // Nothing is delivered or stored; the draft is just dropped.
                info!("Sending: {}", app.draft);
                app.draft.clear();
            }
            Effect::None
        }
        Action::Press(control) => {
            debug!("{:?} has no behaviour", control);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
