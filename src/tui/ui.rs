use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ChatPanel, Header, Sidebar, header};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Draw one frame. Rebuilds the hit map from scratch, so mouse handling
/// always refers to what is currently on screen.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Ratio};
    tui.hits.clear();

    let [header_area, body_area] =
        Layout::vertical([Length(header::HEIGHT), Min(0)]).areas(frame.area());
    Header.render(frame, header_area);

    let [sidebar_area, detail_area] =
        Layout::horizontal([Ratio(1, 3), Ratio(2, 3)]).areas(body_area);

    let sidebar_focused = tui.focus == Focus::Sidebar;
    let mut sidebar = Sidebar {
        app,
        conversation_highlight: sidebar_focused.then_some(tui.conversation_cursor),
        contact_highlight: sidebar_focused.then_some(tui.contact_cursor),
        hits: &mut tui.hits,
        visible_rows: None,
    };
    sidebar.render(frame, sidebar_area);
    let visible_rows = sidebar.visible_rows;
    tui.set_visible_rows(app.active_panel, visible_rows);

    ChatPanel {
        detail: app.detail(),
        transcript: app.transcript(),
        draft: &app.draft,
        can_send: app.can_send(),
        composer_focused: tui.focus == Focus::Composer,
        composer: &mut tui.composer,
        transcript_scroll: &mut tui.transcript_scroll,
        hits: &mut tui.hits,
    }
    .render(frame, detail_area);
}
