//! # SettingsList Component
//!
//! Three static setting cards. The theme button and help chevron register
//! hit targets but have nothing behind them; the encryption row is a
//! read-only badge.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::model::{Affordance, SettingRow};
use crate::tui::component::Component;
use crate::tui::components::widgets::{
    AVATAR_WIDTH, CARD_HEIGHT, button_right, card, split_right, text_width,
};
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::theme;

pub struct SettingsList<'a> {
    pub rows: &'a [SettingRow],
    pub hits: &'a mut HitMap,
}

impl Component for SettingsList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = self.rows;
        let mut y = area.y;
        for row in rows {
            if y + CARD_HEIGHT > area.bottom() {
                break;
            }
            self.render_row(frame, Rect::new(area.x, y, area.width, CARD_HEIGHT), row);
            y += CARD_HEIGHT;
        }
    }
}

impl SettingsList<'_> {
    fn render_row(&mut self, frame: &mut Frame, area: Rect, row: &SettingRow) {
        let block = card(false, false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [icon_area, body] =
            Layout::horizontal([Constraint::Length(AVATAR_WIDTH), Constraint::Min(0)])
                .areas(inner);
        frame.render_widget(Paragraph::new(format!(" {}", row.icon)), icon_area);

        let body = match row.affordance {
            Affordance::Badge(label) => {
                let label = format!(" {label} ");
                let (rest, badge) = split_right(body, text_width(&label));
                frame.render_widget(
                    Paragraph::new(Span::styled(label, theme::secondary_badge())),
                    badge,
                );
                rest
            }
            Affordance::Button(label, control) => button_right(
                frame,
                body,
                label,
                theme::accent(),
                self.hits,
                HitTarget::Control(control),
            ),
            Affordance::Link(control) => button_right(
                frame,
                body,
                "›",
                theme::accent(),
                self.hits,
                HitTarget::Control(control),
            ),
        };

        let lines = vec![
            Line::from(Span::styled(row.title, theme::title())),
            Line::from(Span::styled(row.subtitle, theme::muted())),
        ];
        frame.render_widget(Paragraph::new(lines), body);
    }
}
