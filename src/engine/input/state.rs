// Action press state between game updates

use super::action::Action;
use std::collections::HashSet;

/// Tracks which actions are held and which were pressed since last taken
#[derive(Debug, Default)]
pub struct ActionState {
    /// Actions that are currently held down
    pressed: HashSet<Action>,

    /// Actions pressed since the last call to `take_just_pressed`
    just_pressed: HashSet<Action>,
}

impl ActionState {
    /// Create an empty action state
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register a one-shot press that has no matching release (touch)
    pub(crate) fn tap(&mut self, action: Action) {
        self.just_pressed.insert(action);
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Return the pending presses and clear them
    pub(crate) fn take_just_pressed(&mut self) -> HashSet<Action> {
        std::mem::take(&mut self.just_pressed)
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_taken_once() {
        let mut state = ActionState::new();
        state.press(Action::Start);

        assert!(state.take_just_pressed().contains(&Action::Start));
        assert!(state.take_just_pressed().is_empty());
    }

    #[test]
    fn test_held_key_does_not_repeat() {
        let mut state = ActionState::new();
        state.press(Action::Start);
        state.take_just_pressed();

        state.press(Action::Start);
        assert!(state.take_just_pressed().is_empty());
    }

    #[test]
    fn test_press_survives_release_until_taken() {
        let mut state = ActionState::new();
        state.press(Action::ResetMagnets);
        state.release(Action::ResetMagnets);

        let taken = state.take_just_pressed();
        assert!(taken.contains(&Action::ResetMagnets));

        // Released, so the next press counts again
        state.press(Action::ResetMagnets);
        assert!(state.take_just_pressed().contains(&Action::ResetMagnets));
    }

    #[test]
    fn test_tap_repeats_without_release() {
        let mut state = ActionState::new();
        state.tap(Action::PlaceMagnet);
        assert!(state.take_just_pressed().contains(&Action::PlaceMagnet));

        state.tap(Action::PlaceMagnet);
        assert!(state.take_just_pressed().contains(&Action::PlaceMagnet));
    }

    #[test]
    fn test_reset() {
        let mut state = ActionState::new();
        state.press(Action::Start);
        state.reset();
        assert!(state.take_just_pressed().is_empty());

        // Reset also forgets the held key
        state.press(Action::Start);
        assert!(state.take_just_pressed().contains(&Action::Start));
    }
}
