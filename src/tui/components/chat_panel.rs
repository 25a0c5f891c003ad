//! # ChatPanel Component
//!
//! The right-hand detail panel. Two states:
//!
//! - **Empty**: nothing selected, a centered call to action.
//! - **Active**: header for the selected conversation, the fixed
//!   transcript, and the composer.
//!
//! There is no way back from Active to Empty; picking another conversation
//! only swaps the header.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tui_scrollview::ScrollViewState;

use crate::core::model::{Control, ConversationSummary, TranscriptMessage};
use crate::core::state::Detail;
use crate::tui::component::Component;
use crate::tui::components::composer::{self, Composer, ComposerState};
use crate::tui::components::transcript::Transcript;
use crate::tui::components::widgets::button_right;
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::theme;

pub struct ChatPanel<'a> {
    pub detail: Detail<'a>,
    pub transcript: &'a [TranscriptMessage],
    pub draft: &'a str,
    pub can_send: bool,
    pub composer_focused: bool,
    pub composer: &'a mut ComposerState,
    pub transcript_scroll: &'a mut ScrollViewState,
    pub hits: &'a mut HitMap,
}

impl Component for ChatPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::muted());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match self.detail {
            Detail::Empty => render_empty(frame, inner),
            Detail::Active(conversation) => self.render_active(frame, inner, conversation),
        }
    }
}

impl ChatPanel<'_> {
    fn render_active(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        conversation: &ConversationSummary,
    ) {
        let [header_area, transcript_area, composer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(composer::HEIGHT),
        ])
        .areas(area);

        self.render_header(frame, header_area, conversation);

        let transcript_area = Rect {
            x: transcript_area.x + 1,
            width: transcript_area.width.saturating_sub(2),
            ..transcript_area
        };
        Transcript {
            messages: self.transcript,
            scroll: &mut *self.transcript_scroll,
        }
        .render(frame, transcript_area);

        let mut composer = Composer::new(self.draft, self.can_send, &mut *self.composer);
        composer.focused = self.composer_focused;
        composer.hits = Some(&mut *self.hits);
        composer.render(frame, composer_area);
    }

    fn render_header(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        conversation: &ConversationSummary,
    ) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::muted());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Call, video and more buttons, right to left
        let mut rest = Rect { height: 1, ..inner };
        for (label, control) in [
            ("⋯", Control::MoreActions),
            ("▶", Control::VideoCall),
            ("☎", Control::Call),
        ] {
            rest = button_right(
                frame,
                rest,
                label,
                theme::muted(),
                self.hits,
                HitTarget::Control(control),
            );
            rest.width = rest.width.saturating_sub(1);
        }

        let [avatar_area, title_area] =
            Layout::horizontal([Constraint::Length(5), Constraint::Min(0)]).areas(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {} ", conversation.initials()),
                theme::avatar(),
            )),
            avatar_area,
        );

        let title_area = Rect {
            width: title_area.width.min(rest.right().saturating_sub(title_area.x)),
            ..title_area
        };
        // The presence line is decoration: it reads "в сети" for every chat.
        let lines = vec![
            Line::from(Span::styled(conversation.name, theme::title())),
            Line::from(vec![
                Span::styled(theme::ONLINE_DOT, theme::online()),
                Span::styled(" в сети ", theme::muted()),
                Span::styled(theme::LOCK, theme::secure()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), title_area);
    }
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("( 💬 )", theme::muted())),
        Line::default(),
        Line::from(Span::styled("Выберите чат", theme::title())),
        Line::from(Span::styled(
            "Выберите беседу из списка слева или начните новый чат",
            theme::muted(),
        )),
    ];
    // One spare row in case the description wraps
    let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16 + 1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true }),
        centered,
    );
}
