// MagLab game logic
//
// - `phase`: Ready -> Preparing -> Running -> Ended state machine
// - `magnet`: magnets, their pull on the ball and expiry
// - `score`: score rules
// - `level`: wall layouts and start positions
// - `game`: the per-step update tying everything to the physics world
// - `hud`: text overlay for each phase
// - `scene`: shapes to draw for the current state

pub mod game;
pub mod hud;
pub mod level;
pub mod magnet;
pub mod phase;
pub mod scene;
pub mod score;

pub use game::{FrameInput, Game};
