use rapier2d::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Arena and level walls
    Wall = 0b0000_0001,

    /// The player's ball
    Ball = 0b0000_0010,

    /// The target bell
    Bell = 0b0000_0100,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Walls never move, so they only need to see the dynamic bodies
            CollisionGroups::Wall => Group::from_bits_truncate(
                CollisionGroups::Ball as u32 | CollisionGroups::Bell as u32,
            ),

            CollisionGroups::Ball => Group::from_bits_truncate(
                CollisionGroups::Wall as u32 | CollisionGroups::Bell as u32,
            ),

            CollisionGroups::Bell => Group::from_bits_truncate(
                CollisionGroups::Wall as u32 | CollisionGroups::Ball as u32,
            ),
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// Contact hook deciding what happens when the ball touches the bell
///
/// While the gate is armed (the game is running) a ball/bell contact is
/// solved normally and recorded as a ring. While disarmed the contact is
/// dropped, so the ball passes straight through the bell.
#[derive(Debug)]
pub struct BellGate {
    ball: ColliderHandle,
    bell: ColliderHandle,
    armed: AtomicBool,
    rung: AtomicBool,
}

impl BellGate {
    /// Create a disarmed gate for the given ball and bell colliders
    pub fn new(ball: ColliderHandle, bell: ColliderHandle) -> Self {
        Self {
            ball,
            bell,
            armed: AtomicBool::new(false),
            rung: AtomicBool::new(false),
        }
    }

    /// Arm or disarm the gate before the next physics step
    pub fn set_armed(&self, armed: bool) {
        self.armed.store(armed, Ordering::Relaxed);
    }

    /// Whether the gate is armed
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Relaxed)
    }

    /// Return whether the bell was rung since the last call, clearing the flag
    pub fn take_rung(&self) -> bool {
        self.rung.swap(false, Ordering::Relaxed)
    }

    /// Check whether the pair is the ball/bell pair, in either order
    pub fn is_ball_bell_pair(&self, collider1: ColliderHandle, collider2: ColliderHandle) -> bool {
        (collider1 == self.ball && collider2 == self.bell)
            || (collider1 == self.bell && collider2 == self.ball)
    }

    /// Decide the fate of a contact: returns true to keep it
    pub fn on_contact(&self, collider1: ColliderHandle, collider2: ColliderHandle) -> bool {
        if !self.is_ball_bell_pair(collider1, collider2) {
            return true;
        }

        if self.is_armed() {
            self.rung.store(true, Ordering::Relaxed);
            true
        } else {
            false
        }
    }
}

impl PhysicsHooks for BellGate {
    fn modify_solver_contacts(&self, context: &mut ContactModificationContext) {
        if !self.on_contact(context.collider1, context.collider2) {
            context.solver_contacts.clear();
        }
    }
}
