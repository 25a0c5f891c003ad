//! # Composer Component
//!
//! The single-line message input at the bottom of an open conversation.
//!
//! ## State Management
//!
//! The draft text belongs to the core `App`; the composer only owns the
//! cursor and horizontal scroll (`ComposerState`, persisted in `TuiState`).
//! A transient `Composer` wraps both for one frame or one event. Edits are
//! reported back as `ComposerEvent::Edit(new_text)` so the event loop can
//! route them through `update()`.
//!
//! ```text
//! ╭────────────────────────────────────────────────╮
//! │[📎] Напишите сообщение...            [☺] [➤] │
//! ╰────────────────────────────────────────────────╯
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::model::Control;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::widgets::{button_right, text_width};
use crate::tui::event::TuiEvent;
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::theme;

pub const PLACEHOLDER: &str = "Напишите сообщение...";
pub const SEND_LABEL: &str = "➤";
/// Rows the composer occupies (one text line plus borders).
pub const HEIGHT: u16 = 3;

/// High-level events emitted by the Composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    /// The draft should become this text.
    Edit(String),
    /// Enter pressed on a sendable draft.
    Send,
    /// Only the cursor moved.
    CursorMoved,
}

/// Cursor and scroll tracking, persisted across frames.
#[derive(Debug, Default)]
pub struct ComposerState {
    /// Cursor position as byte offset in the draft (0..=draft.len())
    pub cursor: usize,
    /// Display columns hidden off the left edge
    pub scroll: u16,
}

impl ComposerState {
    /// Keep the cursor on a valid boundary after the draft changed elsewhere
    /// (e.g. cleared by a send).
    pub fn clamp_to(&mut self, draft: &str) {
        if self.cursor > draft.len() || !draft.is_char_boundary(self.cursor) {
            self.cursor = draft.len();
        }
        if draft.is_empty() {
            self.scroll = 0;
        }
    }

    /// Update scroll so the cursor column stays inside `width` columns.
    fn update_scroll(&mut self, draft: &str, width: u16) {
        let cursor_col = text_width(&draft[..self.cursor]);
        if cursor_col < self.scroll {
            self.scroll = cursor_col;
        } else if width > 0 && cursor_col >= self.scroll + width {
            self.scroll = cursor_col + 1 - width;
        }
    }
}

pub struct Composer<'a> {
    /// Current draft (prop from App)
    pub draft: &'a str,
    pub can_send: bool,
    pub focused: bool,
    pub state: &'a mut ComposerState,
    /// Only needed for rendering; events never touch it.
    pub hits: Option<&'a mut HitMap>,
}

impl<'a> Composer<'a> {
    pub fn new(draft: &'a str, can_send: bool, state: &'a mut ComposerState) -> Self {
        Self {
            draft,
            can_send,
            focused: true,
            state,
            hits: None,
        }
    }

    fn insert(&mut self, text: &str) -> Option<ComposerEvent> {
        if text.is_empty() {
            return None;
        }
        let mut next = String::with_capacity(self.draft.len() + text.len());
        next.push_str(&self.draft[..self.state.cursor]);
        next.push_str(text);
        next.push_str(&self.draft[self.state.cursor..]);
        self.state.cursor += text.len();
        Some(ComposerEvent::Edit(next))
    }

    /// The part of the draft visible in `width` columns after scrolling.
    fn visible_text(&self, width: u16) -> String {
        let mut skipped = 0u16;
        let mut shown = 0u16;
        let mut out = String::new();
        for c in self.draft.chars() {
            let w = text_width(c.encode_utf8(&mut [0; 4]));
            if skipped < self.state.scroll {
                skipped += w;
                continue;
            }
            if shown + w > width {
                break;
            }
            shown += w;
            out.push(c);
        }
        out
    }
}

impl Component for Composer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp_to(self.draft);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::focus_border(self.focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [attach, rest] =
            Layout::horizontal([Constraint::Length(5), Constraint::Min(0)]).areas(inner);
        frame.render_widget(Paragraph::new("[📎]"), attach);

        let send_style = if self.can_send {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };

        let mut scratch = HitMap::default();
        let hits = self.hits.as_deref_mut().unwrap_or(&mut scratch);
        hits.register(
            Rect {
                width: attach.width.min(4),
                ..attach
            },
            HitTarget::Control(Control::Attach),
        );

        let rest = button_right(frame, rest, SEND_LABEL, send_style, hits, HitTarget::Send);
        let rest = button_right(
            frame,
            Rect { width: rest.width.saturating_sub(1), ..rest },
            "☺",
            theme::muted(),
            hits,
            HitTarget::Control(Control::Emoji),
        );
        let input_area = Rect { width: rest.width.saturating_sub(1), ..rest };
        hits.register(input_area, HitTarget::Composer);

        if self.draft.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(PLACEHOLDER, theme::muted())),
                input_area,
            );
        } else {
            self.state.update_scroll(self.draft, input_area.width);
            let visible = self.visible_text(input_area.width);
            frame.render_widget(Paragraph::new(visible), input_area);
        }

        if self.focused && input_area.width > 0 {
            let cursor_col = text_width(&self.draft[..self.state.cursor])
                .saturating_sub(self.state.scroll)
                .min(input_area.width - 1);
            frame.set_cursor_position((input_area.x + cursor_col, input_area.y));
        }
    }
}

impl EventHandler for Composer<'_> {
    type Event = ComposerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        self.state.clamp_to(self.draft);
        let pos = self.state.cursor;
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => {
                // Single-line input
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.insert(&flat)
            }
            TuiEvent::Backspace => {
                if pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(self.draft, pos);
                let mut next = self.draft.to_string();
                next.drain(prev..pos);
                self.state.cursor = prev;
                Some(ComposerEvent::Edit(next))
            }
            TuiEvent::Delete => {
                if pos >= self.draft.len() {
                    return None;
                }
                let end = next_char_boundary(self.draft, pos);
                let mut next = self.draft.to_string();
                next.drain(pos..end);
                Some(ComposerEvent::Edit(next))
            }
            TuiEvent::CursorLeft => (pos > 0).then(|| {
                self.state.cursor = prev_char_boundary(self.draft, pos);
                ComposerEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (pos < self.draft.len()).then(|| {
                self.state.cursor = next_char_boundary(self.draft, pos);
                ComposerEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (pos != 0).then(|| {
                self.state.cursor = 0;
                ComposerEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (pos != self.draft.len()).then(|| {
                self.state.cursor = self.draft.len();
                ComposerEvent::CursorMoved
            }),
            TuiEvent::Submit => {
                if self.draft.trim().is_empty() {
                    None
                } else {
                    Some(ComposerEvent::Send)
                }
            }
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
