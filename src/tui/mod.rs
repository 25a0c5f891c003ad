//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! Keys mean different things depending on where focus sits:
//!
//! - **Sidebar**: digits pick a tab, arrows move the list highlight, Enter
//!   opens the highlighted chat, `q` quits.
//! - **Composer**: keys edit the draft, Enter sends, Esc goes back.
//!
//! Tab/Shift+Tab, Ctrl+C, scrolling and mouse clicks work from either.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen animates, so the loop only draws after an event. All
//! pending events are drained before the next frame.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
pub mod components;
mod event;
pub mod hit;
mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::model::{Control, Panel};
use crate::core::state::{App, Detail};
use crate::tui::component::EventHandler;
use crate::tui::components::{Composer, ComposerEvent, ComposerState};
use crate::tui::hit::{HitMap, HitTarget};

pub use crate::tui::event::TuiEvent;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Composer,
}

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub focus: Focus,
    // List highlights, kept per panel so switching tabs doesn't lose them
    pub conversation_cursor: usize,
    pub contact_cursor: usize,
    // Cards that fit in the last frame; None until a list has been drawn
    pub visible_conversations: Option<usize>,
    pub visible_contacts: Option<usize>,
    // Persistent component states
    pub composer: ComposerState,
    pub transcript_scroll: ScrollViewState,
    /// Rebuilt on every draw.
    pub hits: HitMap,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how many cards of `panel`'s list were drawn and pull its
    /// highlight back onto the screen if it fell off.
    pub fn set_visible_rows(&mut self, panel: Panel, rows: Option<usize>) {
        let (visible, cursor) = match panel {
            Panel::Conversations => {
                (&mut self.visible_conversations, &mut self.conversation_cursor)
            }
            Panel::Contacts => (&mut self.visible_contacts, &mut self.contact_cursor),
            Panel::Profile | Panel::Settings => return,
        };
        *visible = rows;
        if let Some(rows) = rows {
            *cursor = (*cursor).min(rows.saturating_sub(1));
        }
    }

    /// Number of rows the keyboard highlight may visit.
    fn reachable_rows(&self, app: &App, panel: Panel) -> usize {
        let (len, visible) = match panel {
            Panel::Conversations => (app.conversations().len(), self.visible_conversations),
            Panel::Contacts => (app.contacts().len(), self.visible_contacts),
            Panel::Profile | Panel::Settings => return 0,
        };
        visible.map_or(len, |rows| rows.min(len))
    }
}

struct TerminalModeGuard {
    mouse: bool,
}

impl TerminalModeGuard {
    fn new(mouse: bool) -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for composer editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
        }
        info!("Terminal modes enabled (bracketed paste, steady block cursor, mouse: {mouse})");
        Ok(Self { mouse })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config.profile);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new(config.mouse)
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            if handle_event(app, tui, event) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Route one input event. Everything that changes the three core fields goes
/// through `update`; focus, highlights and scrolling stay here.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let effect = match event {
        TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        TuiEvent::NextPanel => {
            let panel = app.active_panel.next();
            update(app, Action::SelectPanel(panel))
        }
        TuiEvent::PrevPanel => {
            let panel = app.active_panel.prev();
            update(app, Action::SelectPanel(panel))
        }
        TuiEvent::ScrollUp => scroll(tui, ScrollViewState::scroll_up),
        TuiEvent::ScrollDown => scroll(tui, ScrollViewState::scroll_down),
        TuiEvent::ScrollPageUp => scroll(tui, ScrollViewState::scroll_page_up),
        TuiEvent::ScrollPageDown => scroll(tui, ScrollViewState::scroll_page_down),
        TuiEvent::MouseClick(column, row) => handle_click(app, tui, column, row),
        event => match tui.focus {
            Focus::Sidebar => handle_sidebar_key(app, tui, event),
            Focus::Composer => handle_composer_key(app, tui, event),
        },
    };
    tui.composer.clamp_to(&app.draft);
    effect
}

fn scroll(tui: &mut TuiState, f: fn(&mut ScrollViewState)) -> Effect {
    f(&mut tui.transcript_scroll);
    Effect::None
}

fn handle_click(app: &mut App, tui: &mut TuiState, column: u16, row: u16) -> Effect {
    let Some(target) = tui.hits.target_at(column, row) else {
        return Effect::None;
    };
    debug!("Click at ({column}, {row}) hit {target:?}");
    match target {
        HitTarget::Tab(panel) => update(app, Action::SelectPanel(panel)),
        HitTarget::Conversation(index) => open_conversation(app, tui, index),
        HitTarget::Control(control) => update(app, Action::Press(control)),
        HitTarget::Send => update(app, Action::SendDraft),
        HitTarget::Composer => {
            tui.focus = Focus::Composer;
            Effect::None
        }
    }
}

fn open_conversation(app: &mut App, tui: &mut TuiState, index: usize) -> Effect {
    let Some(conversation) = app.conversations().get(index) else {
        return Effect::None;
    };
    tui.conversation_cursor = index;
    update(app, Action::SelectConversation(conversation.id.to_string()))
}

fn handle_sidebar_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::InputChar(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            match Panel::from_index(index) {
                Some(panel) => update(app, Action::SelectPanel(panel)),
                None => Effect::None,
            }
        }
        TuiEvent::CursorUp => {
            move_highlight(app, tui, false);
            Effect::None
        }
        TuiEvent::CursorDown => {
            move_highlight(app, tui, true);
            Effect::None
        }
        TuiEvent::Submit => match app.active_panel {
            Panel::Conversations => {
                let index = tui.conversation_cursor;
                if index >= tui.reachable_rows(app, Panel::Conversations) {
                    return Effect::None;
                }
                let effect = open_conversation(app, tui, index);
                if matches!(app.detail(), Detail::Active(_)) {
                    tui.focus = Focus::Composer;
                }
                effect
            }
            Panel::Contacts => update(app, Action::Press(Control::MessageContact)),
            Panel::Profile => update(app, Action::Press(Control::EditProfile)),
            Panel::Settings => Effect::None,
        },
        // Typing with a chat open jumps straight into the composer
        TuiEvent::InputChar(_) | TuiEvent::Paste(_)
            if matches!(app.detail(), Detail::Active(_)) =>
        {
            tui.focus = Focus::Composer;
            handle_composer_key(app, tui, event)
        }
        _ => Effect::None,
    }
}

fn move_highlight(app: &App, tui: &mut TuiState, down: bool) {
    let rows = tui.reachable_rows(app, app.active_panel);
    let cursor = match app.active_panel {
        Panel::Conversations => &mut tui.conversation_cursor,
        Panel::Contacts => &mut tui.contact_cursor,
        Panel::Profile | Panel::Settings => return,
    };
    if down {
        if *cursor + 1 < rows {
            *cursor += 1;
        }
    } else {
        *cursor = cursor.saturating_sub(1);
    }
}

fn handle_composer_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if event == TuiEvent::Escape {
        tui.focus = Focus::Sidebar;
        return Effect::None;
    }
    let outcome =
        Composer::new(&app.draft, app.can_send(), &mut tui.composer).handle_event(&event);
    match outcome {
        Some(ComposerEvent::Edit(text)) => update(app, Action::EditDraft(text)),
        Some(ComposerEvent::Send) => update(app, Action::SendDraft),
        Some(ComposerEvent::CursorMoved) | None => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::layout::Rect;

    fn press(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Effect {
        let mut effect = Effect::None;
        for event in events {
            effect = handle_event(app, tui, event.clone());
        }
        effect
    }

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_initial_focus_is_sidebar() {
        let tui = TuiState::new();
        assert_eq!(tui.focus, Focus::Sidebar);
        assert_eq!(tui.conversation_cursor, 0);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(press(&mut app, &mut tui, &[TuiEvent::ForceQuit]), Effect::Quit);

        tui.focus = Focus::Composer;
        assert_eq!(press(&mut app, &mut tui, &[TuiEvent::ForceQuit]), Effect::Quit);
    }

    #[test]
    fn test_q_quits_only_from_sidebar() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(press(&mut app, &mut tui, &[TuiEvent::InputChar('q')]), Effect::Quit);

        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(tui.focus, Focus::Composer);
        assert_eq!(press(&mut app, &mut tui, &[TuiEvent::InputChar('q')]), Effect::None);
        assert_eq!(app.draft, "q");
    }

    #[test]
    fn test_tab_cycles_panels_and_digits_jump() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        press(&mut app, &mut tui, &[TuiEvent::NextPanel]);
        assert_eq!(app.active_panel, Panel::Contacts);
        press(&mut app, &mut tui, &[TuiEvent::PrevPanel, TuiEvent::PrevPanel]);
        assert_eq!(app.active_panel, Panel::Settings);

        press(&mut app, &mut tui, &[TuiEvent::InputChar('3')]);
        assert_eq!(app.active_panel, Panel::Profile);
        press(&mut app, &mut tui, &[TuiEvent::InputChar('1')]);
        assert_eq!(app.active_panel, Panel::Conversations);
    }

    #[test]
    fn test_enter_opens_highlighted_conversation() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        let down = TuiEvent::CursorDown;
        press(&mut app, &mut tui, &[down.clone(), down.clone(), down]);
        assert_eq!(tui.conversation_cursor, 2, "highlight stops at the last row");
        press(&mut app, &mut tui, &[TuiEvent::CursorUp, TuiEvent::Submit]);

        assert_eq!(app.selected_conversation.as_deref(), Some("2"));
        assert_eq!(tui.focus, Focus::Composer);
    }

    #[test]
    fn test_highlight_stays_on_cards_that_fit() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.set_visible_rows(Panel::Conversations, Some(1));

        let down = TuiEvent::CursorDown;
        press(&mut app, &mut tui, &[down.clone(), down, TuiEvent::Submit]);
        assert_eq!(tui.conversation_cursor, 0);
        assert_eq!(app.selected_conversation.as_deref(), Some("1"));
    }

    #[test]
    fn test_enter_does_nothing_when_no_card_fits() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.set_visible_rows(Panel::Conversations, Some(0));

        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.selected_conversation, None);
        assert_eq!(tui.focus, Focus::Sidebar);
    }

    #[test]
    fn test_typing_without_open_chat_does_nothing() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        type_text(&mut app, &mut tui, "hello");

        assert_eq!(app.draft, "");
        assert_eq!(tui.focus, Focus::Sidebar);
    }

    #[test]
    fn test_typing_with_open_chat_focuses_composer() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::SelectConversation("1".into()));

        type_text(&mut app, &mut tui, "hello");
        assert_eq!(tui.focus, Focus::Composer);
        assert_eq!(app.draft, "hello");
    }

    #[test]
    fn test_send_clears_draft_and_keeps_selection() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        type_text(&mut app, &mut tui, "Привет");

        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.draft, "");
        assert_eq!(app.selected_conversation.as_deref(), Some("1"));
        assert_eq!(tui.composer.cursor, 0);
    }

    #[test]
    fn test_whitespace_draft_is_not_sent() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        type_text(&mut app, &mut tui, "   ");

        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.draft, "   ");
    }

    #[test]
    fn test_escape_returns_to_sidebar_and_keeps_draft() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        type_text(&mut app, &mut tui, "abc");

        press(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(tui.focus, Focus::Sidebar);
        assert_eq!(app.draft, "abc");
        assert!(matches!(app.detail(), Detail::Active(_)));
    }

    #[test]
    fn test_switching_panels_keeps_selection_and_draft() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::Submit]);
        type_text(&mut app, &mut tui, "draft");

        for _ in 0..4 {
            press(&mut app, &mut tui, &[TuiEvent::NextPanel]);
            assert_eq!(app.selected_conversation.as_deref(), Some("2"));
            assert_eq!(app.draft, "draft");
        }
        assert_eq!(app.active_panel, Panel::Conversations);
    }

    #[test]
    fn test_clicks_route_through_hit_map() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.hits.register(Rect::new(0, 0, 10, 1), HitTarget::Tab(Panel::Settings));
        tui.hits.register(Rect::new(0, 1, 10, 4), HitTarget::Conversation(2));
        tui.hits.register(Rect::new(20, 0, 10, 1), HitTarget::Composer);

        press(&mut app, &mut tui, &[TuiEvent::MouseClick(3, 0)]);
        assert_eq!(app.active_panel, Panel::Settings);

        press(&mut app, &mut tui, &[TuiEvent::MouseClick(3, 2)]);
        assert_eq!(app.selected_conversation.as_deref(), Some("3"));
        assert_eq!(tui.conversation_cursor, 2);
        assert_eq!(tui.focus, Focus::Sidebar);

        press(&mut app, &mut tui, &[TuiEvent::MouseClick(25, 0)]);
        assert_eq!(tui.focus, Focus::Composer);

        // Empty space does nothing
        assert_eq!(press(&mut app, &mut tui, &[TuiEvent::MouseClick(50, 50)]), Effect::None);
    }

    #[test]
    fn test_nothing_returns_detail_to_empty() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, &[TuiEvent::Submit]);

        let events = [
            TuiEvent::Escape,
            TuiEvent::Escape,
            TuiEvent::NextPanel,
            TuiEvent::InputChar('x'),
            TuiEvent::Backspace,
            TuiEvent::Submit,
            TuiEvent::ScrollPageDown,
            TuiEvent::Resize,
        ];
        for event in events {
            press(&mut app, &mut tui, &[event]);
            assert!(matches!(app.detail(), Detail::Active(_)));
        }
    }
}
