//! Index state behind the rotating headline, the category tabs and the
//! segmented controls.

use std::time::Duration;

pub const HERO_ROTATE_INTERVAL: Duration = Duration::from_millis(2000);

/// Cycles through a fixed list, one step per tick, wrapping to the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotator<T: 'static> {
    items: &'static [T],
    index: usize,
}

impl<T: 'static> Rotator<T> {
    pub fn new(items: &'static [T]) -> Self {
        Self { items, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'static T> {
        self.items.get(self.index)
    }

    pub fn advance(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
    }
}

/// A group of options where exactly one is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExclusiveChoice<T: 'static> {
    options: &'static [T],
    selected: usize,
}

impl<T: PartialEq + 'static> ExclusiveChoice<T> {
    /// Starts on `initial`, or on the first option when `initial` is not in the group.
    pub fn new(options: &'static [T], initial: &T) -> Self {
        let selected = options.iter().position(|o| o == initial).unwrap_or(0);
        Self { options, selected }
    }

    pub fn options(&self) -> &'static [T] {
        self.options
    }

    pub fn selected(&self) -> Option<&'static T> {
        self.options.get(self.selected)
    }

    pub fn is_selected(&self, value: &T) -> bool {
        self.selected().is_some_and(|s| s == value)
    }

    /// Returns false, leaving the selection alone, for values outside the group.
    pub fn select(&mut self, value: &T) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HERO_CAPABILITIES;
    use crate::lead::{ContactChannel, Timeline};
    use pretty_assertions::assert_eq;

    static WORDS: [&str; 3] = ["Event Coverage", "AI Product Videos", "Launch Campaigns"];

    #[test]
    fn rotator_visits_every_item_then_wraps() {
        let mut rotator = Rotator::new(&WORDS);
        let mut seen = vec![*rotator.current().unwrap()];
        for _ in 0..WORDS.len() {
            rotator.advance();
            seen.push(*rotator.current().unwrap());
        }
        assert_eq!(
            seen,
            vec!["Event Coverage", "AI Product Videos", "Launch Campaigns", "Event Coverage"]
        );
    }

    #[test]
    fn hero_headline_walks_full_list_and_returns_to_start() {
        let mut rotator = Rotator::new(&HERO_CAPABILITIES);
        for (expected_index, expected) in HERO_CAPABILITIES.iter().enumerate() {
            assert_eq!(rotator.index(), expected_index);
            assert_eq!(rotator.current(), Some(expected));
            rotator.advance();
        }
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(), Some(&"Event Coverage"));
        assert_eq!(HERO_CAPABILITIES.len(), 32);
    }

    #[test]
    fn one_step_per_advance() {
        let mut rotator = Rotator::new(&WORDS);
        rotator.advance();
        assert_eq!(rotator.index(), 1);
        rotator.advance();
        assert_eq!(rotator.index(), 2);
    }

    #[test]
    fn empty_rotator_is_inert() {
        static NONE: [&str; 0] = [];
        let mut rotator = Rotator::new(&NONE);
        rotator.advance();
        assert_eq!(rotator.current(), None);
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn selecting_one_option_deselects_the_rest() {
        static CHANNELS: [ContactChannel; 4] = ContactChannel::ALL;
        let mut choice = ExclusiveChoice::new(&CHANNELS, &ContactChannel::Email);
        assert!(choice.select(&ContactChannel::Telegram));

        let active: Vec<_> = CHANNELS
            .iter()
            .filter(|c| choice.is_selected(c))
            .collect();
        assert_eq!(active, vec![&ContactChannel::Telegram]);
    }

    #[test]
    fn unknown_values_leave_selection_unchanged() {
        static SUBSET: [Timeline; 2] = [Timeline::Asap, Timeline::Flexible];
        let mut choice = ExclusiveChoice::new(&SUBSET, &Timeline::Flexible);
        assert!(!choice.select(&Timeline::TwoToFourWeeks));
        assert_eq!(choice.selected(), Some(&Timeline::Flexible));
    }

    #[test]
    fn initial_outside_group_falls_back_to_first() {
        static SUBSET: [Timeline; 1] = [Timeline::Flexible];
        let choice = ExclusiveChoice::new(&SUBSET, &Timeline::Asap);
        assert_eq!(choice.selected(), Some(&Timeline::Flexible));
    }
}
