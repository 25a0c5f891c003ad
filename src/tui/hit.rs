//! Mouse hit testing.
//!
//! Components register the rectangles they draw clickable things into
//! while rendering. The event loop looks up a click against the map left
//! behind by the previous frame.

use ratatui::layout::{Position, Rect};

use crate::core::model::{Control, Panel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Tab(Panel),
    /// Index into the conversation collection.
    Conversation(usize),
    Control(Control),
    Send,
    Composer,
}

#[derive(Debug, Default)]
pub struct HitMap {
    targets: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn register(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.targets.push((area, target));
        }
    }

    /// The target under a screen cell. Later registrations sit on top.
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.targets
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_at_inside_and_outside() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(0, 0, 10, 2), HitTarget::Tab(Panel::Contacts));
        assert_eq!(hits.target_at(9, 1), Some(HitTarget::Tab(Panel::Contacts)));
        assert_eq!(hits.target_at(10, 1), None);
        assert_eq!(hits.target_at(0, 2), None);
    }

    #[test]
    fn test_later_registration_wins() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(0, 0, 20, 4), HitTarget::Conversation(0));
        hits.register(Rect::new(15, 1, 3, 1), HitTarget::Control(Control::MessageContact));
        assert_eq!(hits.target_at(16, 1), Some(HitTarget::Control(Control::MessageContact)));
        assert_eq!(hits.target_at(2, 1), Some(HitTarget::Conversation(0)));
    }

    #[test]
    fn test_empty_rects_are_skipped() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(3, 3, 0, 1), HitTarget::Send);
        assert!(hits.is_empty());
        hits.register(Rect::new(3, 3, 1, 1), HitTarget::Send);
        assert_eq!(hits.len(), 1);
        hits.clear();
        assert!(hits.is_empty());
    }
}
