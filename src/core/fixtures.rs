//! Sample data the mock-up renders. Immutable for the life of the process.

use crate::core::model::{
    Affordance, ContactSummary, Control, ConversationSummary, Direction, SettingRow,
    TranscriptMessage,
};

pub const CONVERSATIONS: &[ConversationSummary] = &[
    ConversationSummary {
        id: "1",
        name: "Анна Смирнова",
        last_message: "Привет! Как дела? 👋",
        time: "14:32",
        unread: 2,
        avatar: "",
        online: true,
        encrypted: true,
    },
    ConversationSummary {
        id: "2",
        name: "Команда разработки",
        last_message: "Новая версия готова к тестированию",
        time: "13:15",
        unread: 5,
        avatar: "",
        online: false,
        encrypted: true,
    },
    ConversationSummary {
        id: "3",
        name: "Михаил Петров",
        last_message: "Отлично, встречаемся завтра",
        time: "Вчера",
        unread: 0,
        avatar: "",
        online: false,
        encrypted: true,
    },
];

pub const CONTACTS: &[ContactSummary] = &[
    ContactSummary {
        id: "1",
        name: "Анна Смирнова",
        status: "В сети",
        avatar: "",
        online: true,
    },
    ContactSummary {
        id: "2",
        name: "Михаил Петров",
        status: "Был 2 часа назад",
        avatar: "",
        online: false,
    },
    ContactSummary {
        id: "3",
        name: "Елена Козлова",
        status: "В сети",
        avatar: "",
        online: true,
    },
];

/// Shown for every open conversation, whichever one it is.
pub const TRANSCRIPT: &[TranscriptMessage] = &[
    TranscriptMessage {
        text: "Привет! Как дела? 👋",
        time: "14:30",
        direction: Direction::Incoming,
        delivered: false,
    },
    TranscriptMessage {
        text: "Отлично, спасибо! А у тебя как?",
        time: "14:31",
        direction: Direction::Outgoing,
        delivered: true,
    },
    TranscriptMessage {
        text: "Всё хорошо! Работаю над новым проектом",
        time: "14:32",
        direction: Direction::Incoming,
        delivered: false,
    },
];

pub const SETTINGS: &[SettingRow] = &[
    SettingRow {
        icon: "🛡",
        title: "Сквозное шифрование",
        subtitle: "Ваши сообщения защищены",
        affordance: Affordance::Badge("Активно"),
    },
    SettingRow {
        icon: "☾",
        title: "Тёмная тема",
        subtitle: "Переключить оформление",
        affordance: Affordance::Button("Включить", Control::ToggleTheme),
    },
    SettingRow {
        icon: "?",
        title: "Помощь и поддержка",
        subtitle: "FAQ и контакты",
        affordance: Affordance::Link(Control::OpenHelp),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = CONVERSATIONS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CONVERSATIONS.len());
        let ids: HashSet<_> = CONTACTS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CONTACTS.len());
    }

    #[test]
    fn test_unread_badges_match_fixture() {
        let badges: Vec<_> = CONVERSATIONS.iter().map(|c| c.unread_badge()).collect();
        assert_eq!(badges, vec![Some(2), Some(5), None]);
    }

    #[test]
    fn test_transcript_has_one_delivered_outgoing_message() {
        assert_eq!(TRANSCRIPT.len(), 3);
        let outgoing: Vec<_> = TRANSCRIPT
            .iter()
            .filter(|m| m.direction == Direction::Outgoing)
            .collect();
        assert_eq!(outgoing.len(), 1);
        assert!(outgoing[0].delivered);
    }
}
