//! State-dependent text color resolution
//!
//! The host reports the widget's interaction state as a bitset; the
//! configured color table maps state predicates to colors. Resolution is
//! first-match-wins over an ordered entry list, with an empty predicate
//! acting as the catch-all default every table must carry.

use bevel_paint::Color;
use smallvec::SmallVec;
use thiserror::Error;

bitflags::bitflags! {
    /// Interaction state flags supplied by the host view system
    ///
    /// Combine with bitwise OR: `InteractionState::ENABLED | InteractionState::PRESSED`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InteractionState: u32 {
        const ENABLED = 1 << 0;
        const PRESSED = 1 << 1;
        const FOCUSED = 1 << 2;
        const HOVERED = 1 << 3;
        const SELECTED = 1 << 4;
        const WINDOW_FOCUSED = 1 << 5;
    }
}

/// Invalid color table construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorStateError {
    #[error("state color table has no entries")]
    Empty,
    #[error("state color table has no default (empty-state) entry")]
    MissingDefault,
}

/// One `(predicate, color)` row of a color table
///
/// A row matches when the current state contains every flag of its
/// predicate; the empty predicate matches any state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorStateEntry {
    pub states: InteractionState,
    pub color_argb: u32,
}

impl ColorStateEntry {
    pub const fn new(states: InteractionState, color_argb: u32) -> Self {
        Self { states, color_argb }
    }

    fn matches(&self, state: InteractionState) -> bool {
        state.contains(self.states)
    }
}

/// Ordered state-to-color table, resolved first-match-wins
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorStateList {
    entries: SmallVec<[ColorStateEntry; 4]>,
}

impl ColorStateList {
    /// Single-entry table that resolves to `color` in every state
    pub fn solid(color_argb: u32) -> Self {
        Self {
            entries: SmallVec::from_elem(
                ColorStateEntry::new(InteractionState::empty(), color_argb),
                1,
            ),
        }
    }

    /// Build a table from ordered entries
    ///
    /// The table must be non-empty and must contain an empty-predicate
    /// entry so every state resolves; violating either is a caller bug and
    /// fails immediately.
    pub fn from_entries(entries: &[ColorStateEntry]) -> Result<Self, ColorStateError> {
        if entries.is_empty() {
            return Err(ColorStateError::Empty);
        }
        if !entries.iter().any(|entry| entry.states.is_empty()) {
            return Err(ColorStateError::MissingDefault);
        }
        Ok(Self {
            entries: SmallVec::from_slice(entries),
        })
    }

    /// Resolve the current state to one concrete color
    pub fn color_for_state(&self, state: InteractionState) -> Color {
        let argb = self
            .entries
            .iter()
            .find(|entry| entry.matches(state))
            .map(|entry| entry.color_argb)
            .unwrap_or(self.default_color());
        Color::from_argb(argb)
    }

    /// The catch-all color
    pub fn default_color(&self) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.states.is_empty())
            .map(|entry| entry.color_argb)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[ColorStateEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_resolves_everywhere() {
        let list = ColorStateList::solid(0xFF123456);
        for state in [
            InteractionState::empty(),
            InteractionState::ENABLED,
            InteractionState::ENABLED | InteractionState::PRESSED,
        ] {
            assert_eq!(list.color_for_state(state).to_argb(), 0xFF123456);
        }
    }

    #[test]
    fn test_pressed_entry_wins_when_pressed() {
        let list = ColorStateList::from_entries(&[
            ColorStateEntry::new(InteractionState::PRESSED, 0xFFFF0000),
            ColorStateEntry::new(InteractionState::empty(), 0xFF000000),
        ])
        .unwrap();

        let pressed = InteractionState::ENABLED | InteractionState::PRESSED;
        assert_eq!(list.color_for_state(pressed).to_argb(), 0xFFFF0000);

        let idle = InteractionState::ENABLED;
        assert_eq!(list.color_for_state(idle).to_argb(), 0xFF000000);
    }

    #[test]
    fn test_first_match_wins_over_later_entries() {
        let list = ColorStateList::from_entries(&[
            ColorStateEntry::new(InteractionState::empty(), 0xFF00FF00),
            ColorStateEntry::new(InteractionState::PRESSED, 0xFFFF0000),
        ])
        .unwrap();
        // the catch-all comes first, so pressed never reaches its entry
        assert_eq!(
            list.color_for_state(InteractionState::PRESSED).to_argb(),
            0xFF00FF00
        );
    }

    #[test]
    fn test_compound_predicate_needs_all_flags() {
        let list = ColorStateList::from_entries(&[
            ColorStateEntry::new(
                InteractionState::PRESSED | InteractionState::ENABLED,
                0xFFFF0000,
            ),
            ColorStateEntry::new(InteractionState::empty(), 0xFF000000),
        ])
        .unwrap();
        assert_eq!(
            list.color_for_state(InteractionState::PRESSED).to_argb(),
            0xFF000000
        );
        assert_eq!(
            list.color_for_state(InteractionState::PRESSED | InteractionState::ENABLED)
                .to_argb(),
            0xFFFF0000
        );
    }

    #[test]
    fn test_empty_table_fails_loudly() {
        assert_eq!(
            ColorStateList::from_entries(&[]),
            Err(ColorStateError::Empty)
        );
    }

    #[test]
    fn test_table_without_default_fails_loudly() {
        assert_eq!(
            ColorStateList::from_entries(&[ColorStateEntry::new(
                InteractionState::PRESSED,
                0xFFFF0000
            )]),
            Err(ColorStateError::MissingDefault)
        );
    }
}
