//! # PanelTabs Component
//!
//! Four equal-width tab triggers across the top of the sidebar. Each tab
//! is a hit target; the active one is drawn reversed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::model::Panel;
use crate::tui::component::Component;
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::theme;

pub const HEIGHT: u16 = 3;

pub struct PanelTabs<'a> {
    pub active: Panel,
    pub hits: &'a mut HitMap,
}

impl Component for PanelTabs<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::muted());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cells: [Rect; 4] = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(inner);
        for (panel, cell) in Panel::ALL.into_iter().zip(cells) {
            let style = if panel == self.active {
                theme::accent().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                Style::default()
            };
            let label = Line::from(format!("{} {}", panel.index() + 1, panel.label()));
            frame.render_widget(
                Paragraph::new(label).style(style).alignment(Alignment::Center),
                cell,
            );
            self.hits.register(cell, HitTarget::Tab(panel));
        }
    }
}
