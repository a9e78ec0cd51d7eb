// Input handling system
//
// Keyboard, mouse and touch events from winit are mapped to game actions and
// handed to the game once per fixed update.
//
// ## Architecture
//
// - `action`: Defines game actions and default bindings
// - `config`: Source to action bindings
// - `state`: Held and pending actions
// - `manager`: Event intake and per-update `FrameInput` assembly
//
// ## Usage Example
//
// ```rust
// use engine::input::InputManager;
//
// let mut input = InputManager::default();
//
// // In your event loop, forward events
// input.process_keyboard_event(&key_event);
//
// // Before the first fixed update of a frame
// let frame_input = input.take_frame_input(|p| camera.screen_to_world(p));
// game.update(&frame_input);
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod state;

pub use manager::InputManager;
