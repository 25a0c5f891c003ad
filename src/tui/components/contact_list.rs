//! # ContactList Component
//!
//! The contacts tab: search box, "add contact" button and one card per
//! contact. Only the per-card message button is clickable, and it does
//! nothing beyond emitting `Control::MessageContact`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::model::{ContactSummary, Control};
use crate::tui::component::Component;
use crate::tui::components::widgets::{
    AVATAR_WIDTH, CARD_HEIGHT, avatar_lines, button_right, card, search_box,
};
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::theme;

pub struct ContactList<'a> {
    pub contacts: &'a [ContactSummary],
    pub highlighted: Option<usize>,
    pub hits: &'a mut HitMap,
    /// Set by `render`: how many cards fit, counted from the top.
    pub drawn: usize,
}

impl Component for ContactList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, add_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        search_box(
            frame,
            search_area,
            "Поиск контактов...",
            Control::SearchContacts,
            self.hits,
        );

        let add = Paragraph::new("+ Добавить контакт")
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(theme::muted()),
            );
        frame.render_widget(add, add_area);
        self.hits
            .register(add_area, HitTarget::Control(Control::AddContact));

        let contacts = self.contacts;
        self.drawn = 0;
        let mut y = list_area.y;
        for (index, contact) in contacts.iter().enumerate() {
            if y + CARD_HEIGHT > list_area.bottom() {
                break;
            }
            let card_area = Rect::new(list_area.x, y, list_area.width, CARD_HEIGHT);
            let highlighted = self.highlighted == Some(index);
            self.render_card(frame, card_area, contact, highlighted);
            self.drawn += 1;
            y += CARD_HEIGHT;
        }
    }
}

impl ContactList<'_> {
    fn render_card(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        contact: &ContactSummary,
        highlighted: bool,
    ) {
        let block = card(false, highlighted);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [avatar_area, body] =
            Layout::horizontal([Constraint::Length(AVATAR_WIDTH), Constraint::Min(0)])
                .areas(inner);
        frame.render_widget(
            Paragraph::new(avatar_lines(&contact.initials(), contact.online)),
            avatar_area,
        );

        let body = button_right(
            frame,
            body,
            "✉",
            theme::accent(),
            self.hits,
            HitTarget::Control(Control::MessageContact),
        );
        let lines = vec![
            Line::from(Span::styled(contact.name, theme::title())),
            Line::from(Span::styled(contact.status, theme::muted())),
        ];
        frame.render_widget(Paragraph::new(lines), body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::CONTACTS;
    use crate::test_support::buffer_lines;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_contacts_with_status_verbatim() {
        let backend = TestBackend::new(50, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hits = HitMap::default();
        terminal
            .draw(|f| {
                ContactList {
                    contacts: CONTACTS,
                    highlighted: None,
                    hits: &mut hits,
                    drawn: 0,
                }
                .render(f, f.area());
            })
            .unwrap();
        let lines = buffer_lines(terminal.backend().buffer());
        let text = lines.join("\n");

        assert!(text.contains("Поиск контактов..."));
        assert!(text.contains("+ Добавить контакт"));

        let elena = lines.iter().position(|l| l.contains("Елена Козлова")).unwrap();
        assert!(lines[elena].contains("ЕК"));
        assert!(lines[elena + 1].contains("В сети"));
        assert!(lines[elena + 1].contains(theme::ONLINE_DOT));

        let mikhail = lines.iter().position(|l| l.contains("Михаил Петров")).unwrap();
        assert!(lines[mikhail + 1].contains("Был 2 часа назад"));
        assert!(!lines[mikhail + 1].contains(theme::ONLINE_DOT));
    }

    #[test]
    fn test_message_buttons_and_add_contact_are_hit_targets() {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hits = HitMap::default();
        terminal
            .draw(|f| {
                ContactList {
                    contacts: CONTACTS,
                    highlighted: Some(1),
                    hits: &mut hits,
                    drawn: 0,
                }
                .render(f, f.area());
            })
            .unwrap();

        assert_eq!(hits.target_at(10, 4), Some(HitTarget::Control(Control::AddContact)));
        // First card occupies rows 6..10; its button sits on the first inner row
        // flush against the right border.
        assert_eq!(
            hits.target_at(37, 7),
            Some(HitTarget::Control(Control::MessageContact))
        );
        // The rest of the card is not clickable.
        assert_eq!(hits.target_at(10, 7), None);
    }
}
