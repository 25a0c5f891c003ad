//! # Domain Model
//!
//! Plain data records shown by the view. None of these are ever mutated:
//! the sample collections are `'static` fixtures and the profile is fixed
//! once the config is resolved.
//!
//! ```text
//! ConversationSummary   one row of the chats list
//! ContactSummary        one row of the contacts list
//! TranscriptMessage     one bubble in the open conversation
//! Profile               the "you" card on the profile tab
//! SettingRow            one card on the settings tab
//! ```

/// The four mutually exclusive sidebar views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Conversations,
    Contacts,
    Profile,
    Settings,
}

impl Panel {
    /// Tab order, left to right.
    pub const ALL: [Panel; 4] = [
        Panel::Conversations,
        Panel::Contacts,
        Panel::Profile,
        Panel::Settings,
    ];

    pub fn index(self) -> usize {
        match self {
            Panel::Conversations => 0,
            Panel::Contacts => 1,
            Panel::Profile => 2,
            Panel::Settings => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Panel> {
        Self::ALL.get(index).copied()
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Panel {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Panel {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Conversations => "Чаты",
            Panel::Contacts => "Контакты",
            Panel::Profile => "Профиль",
            Panel::Settings => "Настройки",
        }
    }
}

/// List-row metadata for a chat thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversationSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub last_message: &'static str,
    /// Display label only, not a parsed timestamp.
    pub time: &'static str,
    pub unread: u32,
    /// Image reference; terminals render the initials fallback instead.
    pub avatar: &'static str,
    pub online: bool,
    /// Cosmetic badge. Nothing is encrypted.
    pub encrypted: bool,
}

impl ConversationSummary {
    pub fn initials(&self) -> String {
        initials(self.name)
    }

    /// Count to show on the unread badge, if any.
    pub fn unread_badge(&self) -> Option<u32> {
        (self.unread > 0).then_some(self.unread)
    }
}

/// A person entry on the contacts tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub status: &'static str,
    pub avatar: &'static str,
    pub online: bool,
}

impl ContactSummary {
    pub fn initials(&self) -> String {
        initials(self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptMessage {
    pub text: &'static str,
    pub time: &'static str,
    pub direction: Direction,
    /// Shows the delivery check mark. Only set on outgoing messages.
    pub delivered: bool,
}

/// The local user's placeholder identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub username: String,
    /// Avatar text. Stored rather than derived: the placeholder shows "ВИ",
    /// which `initials("Ваше имя")` would render as "Ви".
    pub avatar: String,
}

impl Profile {
    /// A profile for a real name: the avatar is its upper-cased initials.
    pub fn named(display_name: impl Into<String>, username: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            avatar: initials(&display_name).to_uppercase(),
            display_name,
            username: username.into(),
        }
    }

    pub fn initials(&self) -> &str {
        &self.avatar
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: String::from("Ваше имя"),
            username: String::from("username"),
            avatar: String::from("ВИ"),
        }
    }
}

/// What sits on the right-hand side of a settings card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Read-only status label.
    Badge(&'static str),
    /// A button that looks wired but does nothing.
    Button(&'static str, Control),
    /// A chevron link that does nothing.
    Link(Control),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingRow {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub affordance: Affordance,
}

/// Visible controls that have no behaviour behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    SearchConversations,
    SearchContacts,
    AddContact,
    MessageContact,
    Call,
    VideoCall,
    MoreActions,
    Attach,
    Emoji,
    EditProfile,
    ToggleTheme,
    OpenHelp,
}

/// First character of each whitespace-separated token, in order.
///
/// "Анна Смирнова" → "АС". Characters are kept as-is, no case folding.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_cyrillic_names() {
        assert_eq!(initials("Анна Смирнова"), "АС");
        assert_eq!(initials("Михаил Петров"), "МП");
        assert_eq!(initials("Команда разработки"), "Кр");
    }

    #[test]
    fn test_initials_collapses_repeated_whitespace() {
        assert_eq!(initials("  Елена \t Козлова "), "ЕК");
        assert_eq!(initials(""), "");
        assert_eq!(initials("Nova"), "N");
    }

    #[test]
    fn test_panel_cycles_both_ways() {
        assert_eq!(Panel::Conversations.next(), Panel::Contacts);
        assert_eq!(Panel::Settings.next(), Panel::Conversations);
        assert_eq!(Panel::Conversations.prev(), Panel::Settings);
        assert_eq!(Panel::Profile.prev(), Panel::Contacts);
    }

    #[test]
    fn test_panel_index_round_trips_in_tab_order() {
        for (i, panel) in Panel::ALL.iter().enumerate() {
            assert_eq!(panel.index(), i);
            assert_eq!(Panel::from_index(i), Some(*panel));
        }
        assert_eq!(Panel::from_index(4), None);
    }

    #[test]
    fn test_default_profile_initials() {
        assert_eq!(Profile::default().initials(), "ВИ");
        // The shared helper keeps case; only the profile avatar is upper-cased
        assert_eq!(initials("Ваше имя"), "Ви");
    }

    #[test]
    fn test_named_profile_upper_cases_avatar() {
        let profile = Profile::named("ирина волкова", "irina");
        assert_eq!(profile.initials(), "ИВ");
        assert_eq!(profile.display_name, "ирина волкова");
        assert_eq!(profile.username, "irina");
    }
}
