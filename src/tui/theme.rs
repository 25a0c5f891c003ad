//! Shared colors, glyphs and styles.

use ratatui::style::{Color, Modifier, Style};

pub const ONLINE_DOT: &str = "●";
pub const LOCK: &str = "🔒";
pub const CHECK: &str = "✓";
pub const SEARCH: &str = "⌕";

pub fn accent() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn online() -> Style {
    Style::default().fg(Color::Green)
}

pub fn secure() -> Style {
    Style::default().fg(Color::Green)
}

pub fn title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn avatar() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Gray)
        .add_modifier(Modifier::BOLD)
}

pub fn badge() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn secondary_badge() -> Style {
    Style::default().fg(Color::White).bg(Color::DarkGray)
}

/// Card border: selected cards get the accent ring, the keyboard
/// highlight gets a bold border, everything else is dim.
pub fn card_border(selected: bool, highlighted: bool) -> Style {
    match (selected, highlighted) {
        (true, _) => accent().add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        (false, false) => muted(),
    }
}

pub fn focus_border(focused: bool) -> Style {
    if focused { accent() } else { muted() }
}
