//! Small building blocks shared by the panels: avatars, cards, buttons and
//! the (decorative) search box.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::model::Control;
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::theme;

/// Card height: two content lines plus borders.
pub const CARD_HEIGHT: u16 = 4;
/// Width of the avatar column inside a card.
pub const AVATAR_WIDTH: u16 = 5;

pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

pub fn card(selected: bool, highlighted: bool) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme::card_border(selected, highlighted))
}

/// Initials on the first line, presence dot under the bottom-right corner.
pub fn avatar_lines(initials: &str, online: bool) -> Vec<Line<'static>> {
    let badge = Line::from(Span::styled(format!(" {initials} "), theme::avatar()));
    let presence = if online {
        Line::from(Span::styled(theme::ONLINE_DOT, theme::online())).right_aligned()
    } else {
        Line::default()
    };
    vec![badge, presence]
}

/// Split `area` into a flexible left part and a right part exactly `width` wide.
pub fn split_right(area: Rect, width: u16) -> (Rect, Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(width)]).areas(area);
    (left, right)
}

/// Render `[label]` into the right edge of `area` and register it as a hit target.
/// Returns the area left over on the left.
pub fn button_right(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    style: Style,
    hits: &mut HitMap,
    target: HitTarget,
) -> Rect {
    let text = format!("[{label}]");
    let (rest, button) = split_right(area, text_width(&text).min(area.width));
    let button = Rect { height: 1, ..button };
    frame.render_widget(Paragraph::new(Span::styled(text, style)), button);
    hits.register(button, target);
    rest
}

/// Bordered, unwired search input with a placeholder.
pub fn search_box(
    frame: &mut Frame,
    area: Rect,
    placeholder: &str,
    control: Control,
    hits: &mut HitMap,
) {
    let line = Line::from(vec![
        Span::styled(theme::SEARCH, theme::muted()),
        Span::raw(" "),
        Span::styled(placeholder.to_string(), theme::muted()),
    ]);
    let input = Paragraph::new(line).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::muted()),
    );
    frame.render_widget(input, area);
    hits.register(area, HitTarget::Control(control));
}
