//! # ProfileCard Component
//!
//! Static "you" card: initials, display name, handle, presence line and an
//! inert "edit profile" button.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::model::{Control, Profile};
use crate::tui::component::Component;
use crate::tui::components::widgets::text_width;
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::theme;

const EDIT_LABEL: &str = "[✎ Редактировать профиль]";

pub struct ProfileCard<'a> {
    pub profile: &'a Profile,
    pub hits: &'a mut HitMap,
}

impl Component for ProfileCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::muted());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                format!("  {}  ", self.profile.initials()),
                theme::avatar(),
            )),
            Line::default(),
            Line::from(Span::styled(self.profile.display_name.clone(), theme::title())),
            Line::from(Span::styled(format!("@{}", self.profile.username), theme::muted())),
            Line::default(),
            Line::from(vec![
                Span::styled(theme::ONLINE_DOT, theme::online()),
                Span::styled(" В сети", theme::muted()),
            ]),
            Line::default(),
        ];
        let text_height = lines.len() as u16;

        let [text_area, button_row] = Layout::vertical([
            Constraint::Length(text_height),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(inner);

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            text_area,
        );

        let [button] = Layout::horizontal([Constraint::Length(text_width(EDIT_LABEL))])
            .flex(Flex::Center)
            .areas(button_row);
        frame.render_widget(Paragraph::new(Span::styled(EDIT_LABEL, theme::accent())), button);
        self.hits
            .register(button, HitTarget::Control(Control::EditProfile));
    }
}
