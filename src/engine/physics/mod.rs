// Physics system using rapier2d

pub mod body;
mod collision;
mod world;

pub use collision::BellGate;
pub use world::{ColliderHandle, PhysicsWorld, RigidBodyHandle};
