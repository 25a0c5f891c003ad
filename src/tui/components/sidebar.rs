//! # Sidebar Component
//!
//! Left column: the tab strip on top and whichever panel is active below
//! it. Highlights are owned by the caller; pass `None` when the sidebar
//! does not have keyboard focus.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::model::Panel;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    ContactList, ConversationList, PanelTabs, ProfileCard, SettingsList, tabs,
};
use crate::tui::hit::HitMap;

pub struct Sidebar<'a> {
    pub app: &'a App,
    pub conversation_highlight: Option<usize>,
    pub contact_highlight: Option<usize>,
    pub hits: &'a mut HitMap,
    /// Set by `render` for the list panels: cards that fit on screen.
    pub visible_rows: Option<usize>,
}

impl Component for Sidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [tabs_area, panel_area] =
            Layout::vertical([Constraint::Length(tabs::HEIGHT), Constraint::Min(0)]).areas(area);

        PanelTabs {
            active: self.app.active_panel,
            hits: &mut *self.hits,
        }
        .render(frame, tabs_area);

        let app = self.app;
        self.visible_rows = match app.active_panel {
            Panel::Conversations => {
                let mut list = ConversationList {
                    conversations: app.conversations(),
                    selected: app.selected_conversation.as_deref(),
                    highlighted: self.conversation_highlight,
                    hits: &mut *self.hits,
                    drawn: 0,
                };
                list.render(frame, panel_area);
                Some(list.drawn)
            }
            Panel::Contacts => {
                let mut list = ContactList {
                    contacts: app.contacts(),
                    highlighted: self.contact_highlight,
                    hits: &mut *self.hits,
                    drawn: 0,
                };
                list.render(frame, panel_area);
                Some(list.drawn)
            }
            Panel::Profile => {
                ProfileCard {
                    profile: &app.profile,
                    hits: &mut *self.hits,
                }
                .render(frame, panel_area);
                None
            }
            Panel::Settings => {
                SettingsList {
                    rows: app.settings(),
                    hits: &mut *self.hits,
                }
                .render(frame, panel_area);
                None
            }
        };
    }
}
