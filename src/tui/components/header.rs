//! # Header Component
//!
//! Top application bar: product name and tagline on the left, the
//! (static) encryption badge on the right. Purely presentational.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;
use crate::tui::components::widgets::{split_right, text_width};
use crate::tui::theme;

pub const APP_NAME: &str = "Nova";
pub const TAGLINE: &str = "Безопасный мессенджер";
pub const ENCRYPTION_BADGE: &str = "Шифрование активно";

/// Rows the header occupies (text plus bottom border).
pub const HEIGHT: u16 = 2;

pub struct Header;

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::muted());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let badge = format!(" {} {ENCRYPTION_BADGE} ", theme::LOCK);
        let (title_area, badge_area) = split_right(inner, text_width(&badge));

        let title = Line::from(vec![
            Span::styled(APP_NAME, theme::accent().patch(theme::title())),
            Span::raw("  "),
            Span::styled(TAGLINE, theme::muted()),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);
        frame.render_widget(
            Paragraph::new(Span::styled(badge, theme::secondary_badge())),
            badge_area,
        );
    }
}
