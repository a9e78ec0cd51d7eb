// Input manager - turns winit events into per-update game input

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::state::ActionState;
use crate::game::FrameInput;
use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton, Touch, TouchPhase};
use winit::keyboard::PhysicalKey;

/// Collects input events between game updates
pub struct InputManager {
    /// Source to action bindings
    config: InputConfig,

    /// Held and pending actions
    state: ActionState,

    /// Last known cursor position in window pixels
    cursor: Option<Vec2>,

    /// Window position of the latest pointer press not yet consumed
    pending_pointer: Option<Vec2>,
}

impl InputManager {
    /// Create an input manager with the given bindings
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            state: ActionState::new(),
            cursor: None,
            pending_pointer: None,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let source = InputSource::key(key_code);
            match event.state {
                ElementState::Pressed if !event.repeat => self.press_source(source),
                ElementState::Pressed => {}
                ElementState::Released => self.release_source(source),
            }
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        let source = InputSource::mouse(button);
        match state {
            ElementState::Pressed => {
                if let Some(cursor) = self.cursor {
                    self.pending_pointer = Some(cursor);
                }
                self.press_source(source);
            }
            ElementState::Released => self.release_source(source),
        }
    }

    /// Track the cursor position
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(Vec2::new(position.x as f32, position.y as f32));
    }

    /// Process a touch event from winit; only new touches count
    pub fn process_touch(&mut self, touch: &Touch) {
        if touch.phase == TouchPhase::Started {
            self.touch_started(Vec2::new(touch.location.x as f32, touch.location.y as f32));
        }
    }

    /// Register a new touch at a window position
    pub fn touch_started(&mut self, location: Vec2) {
        self.pending_pointer = Some(location);
        for &action in self.config.get_actions(InputSource::Touch) {
            self.state.tap(action);
        }
    }

    /// Register a press of a bound source
    pub fn press_source(&mut self, source: InputSource) {
        for &action in self.config.get_actions(source) {
            self.state.press(action);
        }
    }

    /// Register a release of a bound source
    pub fn release_source(&mut self, source: InputSource) {
        for &action in self.config.get_actions(source) {
            self.state.release(action);
        }
    }

    /// Consume the presses gathered since the last call
    ///
    /// `to_world` maps window pixels to logical screen coordinates; a pointer
    /// press landing outside the play area maps to `None` and places nothing.
    pub fn take_frame_input<F>(&mut self, to_world: F) -> FrameInput
    where
        F: Fn(Vec2) -> Option<Vec2>,
    {
        let pressed = self.state.take_just_pressed();
        let pointer = self.pending_pointer.take();

        let place_magnet = if pressed.contains(&Action::PlaceMagnet) {
            pointer.and_then(to_world)
        } else {
            None
        };

        FrameInput {
            start: pressed.contains(&Action::Start),
            place_magnet,
            reset_magnets: pressed.contains(&Action::ResetMagnets),
        }
    }

    /// Forget held keys, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.state.reset();
        self.pending_pointer = None;
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}
