//! # ConversationList Component
//!
//! The chats tab: a decorative search box above one card per conversation.
//!
//! Each card shows, left to right and top to bottom:
//!
//! ```text
//! ╭──────────────────────────────────────╮
//! │ АС  Анна Смирнова          🔒 14:32  │
//! │   ● Привет! Как дела? 👋         2   │
//! ╰──────────────────────────────────────╯
//! ```
//!
//! The lock appears only for encrypted entries, the dot only for online
//! ones, and the unread badge only when `unread > 0`. Cards are registered
//! as hit targets so a click selects the conversation.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::model::{Control, ConversationSummary};
use crate::tui::component::Component;
use crate::tui::components::widgets::{
    AVATAR_WIDTH, CARD_HEIGHT, avatar_lines, card, search_box, split_right, text_width,
};
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::theme;

pub struct ConversationList<'a> {
    pub conversations: &'a [ConversationSummary],
    /// Id of the open conversation.
    pub selected: Option<&'a str>,
    /// Keyboard highlight (index), only drawn while the sidebar has focus.
    pub highlighted: Option<usize>,
    pub hits: &'a mut HitMap,
    /// Set by `render`: how many cards fit, counted from the top.
    pub drawn: usize,
}

impl Component for ConversationList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        search_box(
            frame,
            search_area,
            "Поиск чатов...",
            Control::SearchConversations,
            self.hits,
        );

        self.drawn = 0;
        let mut y = list_area.y;
        for (index, conversation) in self.conversations.iter().enumerate() {
            if y + CARD_HEIGHT > list_area.bottom() {
                break;
            }
            let card_area = Rect::new(list_area.x, y, list_area.width, CARD_HEIGHT);
            let selected = self.selected == Some(conversation.id);
            let highlighted = self.highlighted == Some(index);
            render_card(frame, card_area, conversation, selected, highlighted);
            self.hits.register(card_area, HitTarget::Conversation(index));
            self.drawn += 1;
            y += CARD_HEIGHT;
        }
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    conversation: &ConversationSummary,
    selected: bool,
    highlighted: bool,
) {
    let block = card(selected, highlighted);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [avatar_area, body] =
        Layout::horizontal([Constraint::Length(AVATAR_WIDTH), Constraint::Min(0)]).areas(inner);
    frame.render_widget(
        Paragraph::new(avatar_lines(&conversation.initials(), conversation.online)),
        avatar_area,
    );

    let [top, bottom] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(body);

    // Top line: name, then "[lock] time" flush right
    let mut meta = Vec::new();
    if conversation.encrypted {
        meta.push(Span::styled(theme::LOCK, theme::secure()));
        meta.push(Span::raw(" "));
    }
    meta.push(Span::styled(conversation.time, theme::muted()));
    let meta = Line::from(meta);
    let (name_area, meta_area) = split_right(top, text_width(&meta.to_string()) + 1);
    frame.render_widget(
        Paragraph::new(Span::styled(conversation.name, theme::title())),
        name_area,
    );
    frame.render_widget(Paragraph::new(meta.right_aligned()), meta_area);

    // Bottom line: preview, then the unread badge
    let badge = conversation
        .unread_badge()
        .map(|count| format!(" {count} "))
        .unwrap_or_default();
    let (preview_area, badge_area) = split_right(bottom, text_width(&badge) + 1);
    frame.render_widget(
        Paragraph::new(Span::styled(conversation.last_message, theme::muted())),
        preview_area,
    );
    if !badge.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(badge, theme::badge())).right_aligned()),
            badge_area,
        );
    }
}
