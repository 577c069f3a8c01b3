// SPDX-License-Identifier: MPL-2.0
//! Playback state for the slideshow.
//!
//! All index/playing mutations funnel through the named operations here so the
//! controller logic stays testable without any widgets. Manual navigation
//! clamps at the deck boundaries and always stops play mode; auto-advance wraps
//! modulo the deck length and only moves while play mode is active.

/// Mutable slideshow state: which diagram is shown and whether play mode runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    index: usize,
    playing: bool,
}

impl PlaybackState {
    /// Fresh state: first diagram, paused.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Steps to the next diagram, staying on the last one at the boundary.
    /// Any manual navigation stops play mode.
    pub fn show_next(&mut self, deck_len: usize) {
        self.playing = false;
        if deck_len > 0 && self.index < deck_len - 1 {
            self.index += 1;
        }
    }

    /// Steps to the previous diagram, staying on the first one at the boundary.
    /// Any manual navigation stops play mode.
    pub fn show_previous(&mut self) {
        self.playing = false;
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Flips play mode without touching the index.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Jumps directly to `index` (slider navigation) and stops play mode.
    /// The slider range is bound to the deck length, so out-of-range values
    /// cannot normally occur; clamp anyway.
    pub fn seek(&mut self, index: usize, deck_len: usize) {
        self.playing = false;
        if deck_len > 0 {
            self.index = index.min(deck_len - 1);
        }
    }

    /// Called when a render transition completes. Moves to the next diagram,
    /// wrapping around, but only if play mode is still active at that moment.
    /// Returns whether the index moved (i.e. another render is needed).
    pub fn advance(&mut self, deck_len: usize) -> bool {
        if !self.playing || deck_len == 0 {
            return false;
        }
        self.index = (self.index + 1) % deck_len;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_paused_at_zero() {
        let state = PlaybackState::new();
        assert_eq!(state.index(), 0);
        assert!(!state.playing());
    }

    #[test]
    fn show_next_steps_forward_and_clamps_at_end() {
        let mut state = PlaybackState::new();

        state.show_next(3);
        assert_eq!(state.index(), 1);
        state.show_next(3);
        assert_eq!(state.index(), 2);
        state.show_next(3);
        assert_eq!(state.index(), 2, "boundary navigation leaves index unchanged");
    }

    #[test]
    fn show_previous_steps_backward_and_clamps_at_start() {
        let mut state = PlaybackState::new();
        state.seek(2, 3);

        state.show_previous();
        assert_eq!(state.index(), 1);
        state.show_previous();
        assert_eq!(state.index(), 0);
        state.show_previous();
        assert_eq!(state.index(), 0, "boundary navigation leaves index unchanged");
    }

    #[test]
    fn manual_navigation_stops_play_mode() {
        let mut state = PlaybackState::new();

        state.toggle();
        assert!(state.playing());
        state.show_next(3);
        assert!(!state.playing());

        state.toggle();
        state.show_previous();
        assert!(!state.playing());

        state.toggle();
        state.seek(1, 3);
        assert!(!state.playing());
    }

    #[test]
    fn toggle_flips_playing_without_moving_index() {
        let mut state = PlaybackState::new();
        state.seek(1, 3);

        state.toggle();
        assert!(state.playing());
        assert_eq!(state.index(), 1);

        state.toggle();
        assert!(!state.playing());
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn seek_sets_exact_index() {
        let mut state = PlaybackState::new();
        state.seek(2, 5);
        assert_eq!(state.index(), 2);
        state.seek(0, 5);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn seek_clamps_out_of_range_values() {
        let mut state = PlaybackState::new();
        state.seek(99, 5);
        assert_eq!(state.index(), 4);
    }

    #[test]
    fn advance_is_a_no_op_while_paused() {
        let mut state = PlaybackState::new();
        assert!(!state.advance(3));
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn advance_wraps_around_while_playing() {
        let mut state = PlaybackState::new();
        state.toggle();

        assert!(state.advance(3));
        assert_eq!(state.index(), 1);
        assert!(state.advance(3));
        assert_eq!(state.index(), 2);
        assert!(state.advance(3));
        assert_eq!(state.index(), 0, "full wrap returns to the starting index");
        assert!(state.playing(), "auto-advance never stops play mode");
    }

    #[test]
    fn advance_on_single_diagram_deck_stays_put() {
        let mut state = PlaybackState::new();
        state.toggle();
        assert!(state.advance(1));
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn index_stays_in_bounds_for_any_navigation_sequence() {
        for deck_len in 1..6 {
            let mut state = PlaybackState::new();
            // Deterministic pseudo-random walk over all operations.
            for step in 0..200usize {
                match step % 5 {
                    0 | 3 => state.show_next(deck_len),
                    1 => state.show_previous(),
                    2 => state.toggle(),
                    _ => {
                        state.advance(deck_len);
                    }
                }
                assert!(state.index() < deck_len);
            }
        }
    }

    #[test]
    fn empty_deck_operations_do_not_panic() {
        let mut state = PlaybackState::new();
        state.show_next(0);
        state.show_previous();
        state.seek(3, 0);
        assert!(!state.advance(0));
        assert_eq!(state.index(), 0);
    }
}
