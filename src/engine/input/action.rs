// Game action definitions and mappings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Leave the title screen and start the preparation countdown
    Start,
    /// Drop a magnet under the pointer
    PlaceMagnet,
    /// Remove all magnets while preparing
    ResetMagnets,
}

/// Represents an input source (keyboard key, mouse button, or touch screen)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
    /// Any new finger on a touch screen
    Touch,
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default bindings: space, left click or touch to start; click or touch
/// to place a magnet; R to clear the magnets
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::Space), Action::Start),
        (InputSource::mouse(MouseButton::Left), Action::Start),
        (InputSource::Touch, Action::Start),
        (InputSource::mouse(MouseButton::Left), Action::PlaceMagnet),
        (InputSource::Touch, Action::PlaceMagnet),
        (InputSource::key(KeyCode::KeyR), Action::ResetMagnets),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::Space);
        assert_eq!(source, InputSource::Keyboard(KeyCode::Space));
    }

    #[test]
    fn test_input_source_mouse_creation() {
        let source = InputSource::mouse(MouseButton::Left);
        assert_eq!(source, InputSource::Mouse(MouseButton::Left));
    }

    #[test]
    fn test_every_action_bound() {
        let bindings = default_bindings();
        for action in [Action::Start, Action::PlaceMagnet, Action::ResetMagnets] {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "{:?} has no default binding",
                action
            );
        }
    }

    #[test]
    fn test_left_click_starts_and_places() {
        let bindings = default_bindings();
        let click = InputSource::mouse(MouseButton::Left);
        let actions: Vec<_> = bindings
            .iter()
            .filter(|(s, _)| *s == click)
            .map(|(_, a)| *a)
            .collect();
        assert_eq!(actions, vec![Action::Start, Action::PlaceMagnet]);
    }

    #[test]
    fn test_no_duplicate_bindings() {
        let bindings = default_bindings();
        let mut seen = std::collections::HashSet::new();
        for binding in bindings {
            assert!(seen.insert(binding), "Duplicate binding found");
        }
    }
}
