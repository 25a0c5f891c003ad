//! # Transcript Component
//!
//! Scrollable column of chat bubbles. Incoming bubbles hug the left edge,
//! outgoing ones the right; each carries its time label underneath, plus a
//! check mark when delivered.
//!
//! Heights are predicted with `textwrap` before rendering so the
//! `ScrollView` can be sized up front, the same way message heights are
//! measured before layout.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::core::model::{Direction, TranscriptMessage};
use crate::tui::component::Component;
use crate::tui::theme;

/// Bubble borders, left + right.
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Bubble borders, top + bottom.
const VERTICAL_OVERHEAD: u16 = 2;
/// Time label line under each bubble.
const FOOTER_HEIGHT: u16 = 1;
/// Blank line between bubbles.
const GAP: u16 = 1;
/// Widest a bubble may get, as a share of the transcript width.
const MAX_BUBBLE_PERCENT: u16 = 70;

/// Wrapped layout of one bubble at a given width.
struct BubbleLayout {
    lines: Vec<String>,
    /// Outer width including borders.
    width: u16,
}

impl BubbleLayout {
    fn new(text: &str, available: u16) -> Self {
        let max_outer = (u32::from(available) * u32::from(MAX_BUBBLE_PERCENT) / 100) as u16;
        let max_outer = max_outer.max(HORIZONTAL_OVERHEAD + 1);
        let content_width = max_outer.saturating_sub(HORIZONTAL_OVERHEAD).max(1);

        let options = textwrap::Options::new(content_width as usize).break_words(true);
        let lines: Vec<String> = textwrap::wrap(text, options)
            .into_iter()
            .map(|l| l.into_owned())
            .collect();
        let widest = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;

        Self {
            width: (widest.max(1) + HORIZONTAL_OVERHEAD).min(available),
            lines,
        }
    }

    fn bubble_height(&self) -> u16 {
        (self.lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    /// Bubble, footer and trailing gap.
    fn total_height(&self) -> u16 {
        self.bubble_height() + FOOTER_HEIGHT + GAP
    }
}

pub struct Transcript<'a> {
    pub messages: &'a [TranscriptMessage],
    pub scroll: &'a mut ScrollViewState,
}

impl Component for Transcript<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        if content_width == 0 || area.height == 0 {
            return;
        }

        let layouts: Vec<BubbleLayout> = self
            .messages
            .iter()
            .map(|m| BubbleLayout::new(m.text, content_width))
            .collect();
        let total_height: u16 = layouts.iter().map(BubbleLayout::total_height).sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for (message, layout) in self.messages.iter().zip(&layouts) {
            let x = match message.direction {
                Direction::Incoming => 0,
                Direction::Outgoing => content_width - layout.width,
            };
            let bubble_area = Rect::new(x, y, layout.width, layout.bubble_height());
            let style = match message.direction {
                Direction::Incoming => Style::default(),
                Direction::Outgoing => Style::default().fg(Color::Black).bg(Color::Cyan),
            };
            let lines: Vec<Line> = layout.lines.iter().map(|l| Line::raw(l.clone())).collect();
            let bubble = Paragraph::new(lines).style(style).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(theme::muted()),
            );
            scroll_view.render_widget(bubble, bubble_area);

            let mut footer = vec![Span::styled(message.time, theme::muted())];
            if message.delivered {
                footer.push(Span::raw(" "));
                footer.push(Span::styled(theme::CHECK, theme::secure()));
            }
            let footer = match message.direction {
                Direction::Incoming => Line::from(footer),
                Direction::Outgoing => Line::from(footer).right_aligned(),
            };
            let footer_area = Rect::new(0, y + layout.bubble_height(), content_width, FOOTER_HEIGHT);
            scroll_view.render_widget(Paragraph::new(footer), footer_area);

            y += layout.total_height();
        }

        frame.render_stateful_widget(scroll_view, area, self.scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::TRANSCRIPT;
    use crate::test_support::buffer_lines;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_bubble_layout_wraps_long_text() {
        let layout = BubbleLayout::new("Всё хорошо! Работаю над новым проектом", 20);
        // 70% of 20 = 14 outer, 12 inner columns
        assert!(layout.lines.len() > 1);
        assert!(layout.width <= 14);
        assert_eq!(layout.bubble_height(), layout.lines.len() as u16 + 2);
    }

    #[test]
    fn test_short_text_gets_narrow_bubble() {
        let layout = BubbleLayout::new("Ок", 60);
        assert_eq!(layout.lines, vec!["Ок".to_string()]);
        assert_eq!(layout.width, 4);
        assert_eq!(layout.total_height(), 5);
    }

    #[test]
    fn test_renders_all_messages_with_times() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut scroll = ScrollViewState::default();
        terminal
            .draw(|f| {
                Transcript {
                    messages: TRANSCRIPT,
                    scroll: &mut scroll,
                }
                .render(f, f.area());
            })
            .unwrap();
        let lines = buffer_lines(terminal.backend().buffer());
        let text = lines.join("\n");

        assert!(text.contains("Привет! Как дела?"));
        assert!(text.contains("Отлично, спасибо! А у тебя как?"));
        assert!(text.contains("Всё хорошо! Работаю над новым проектом"));
        for time in ["14:30", "14:31", "14:32"] {
            assert!(text.contains(time), "missing time {time}");
        }

        let delivered = lines.iter().find(|l| l.contains("14:31")).unwrap();
        assert!(delivered.contains(theme::CHECK));
        let incoming = lines.iter().find(|l| l.contains("14:30")).unwrap();
        assert!(!incoming.contains(theme::CHECK));
    }

    #[test]
    fn test_outgoing_bubble_is_right_aligned() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut scroll = ScrollViewState::default();
        terminal
            .draw(|f| {
                Transcript {
                    messages: TRANSCRIPT,
                    scroll: &mut scroll,
                }
                .render(f, f.area());
            })
            .unwrap();
        let lines = buffer_lines(terminal.backend().buffer());

        let outgoing = lines.iter().find(|l| l.contains("Отлично, спасибо!")).unwrap();
        let incoming = lines.iter().find(|l| l.contains("Привет! Как дела?")).unwrap();
        assert!(outgoing.starts_with(' '));
        assert!(incoming.starts_with('│'));
    }
}
