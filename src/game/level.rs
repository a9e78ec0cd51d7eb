// Levels: wall layout and start positions

use glam::Vec2;
use log::info;

use crate::core::config::{BALL_SIZE, BELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::engine::physics::body::presets;
use crate::engine::physics::{ColliderHandle, PhysicsWorld, RigidBodyHandle};

/// Thickness of the walls surrounding the screen
const ARENA_WALL_THICKNESS: f32 = 10.0;

/// Half thickness of interior walls
const INNER_WALL_HALF_THICKNESS: f32 = 2.0;

/// A straight line to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            start: Vec2::new(x1, y1),
            end: Vec2::new(x2, y2),
        }
    }
}

/// Handles of the bodies a level creates
#[derive(Debug, Clone, Copy)]
pub struct LevelBodies {
    pub ball: RigidBodyHandle,
    pub ball_collider: ColliderHandle,
    pub bell: RigidBodyHandle,
    pub bell_collider: ColliderHandle,
}

/// A playable layout
pub trait Level {
    /// Display name, also used to select the level in the config
    fn name(&self) -> &'static str;

    /// Create the level's walls, ball and bell in `world`
    fn build(&self, world: &mut PhysicsWorld) -> LevelBodies;

    /// Interior wall lines to draw
    fn walls(&self) -> Vec<Segment>;
}

/// All shipped levels
pub fn all() -> Vec<Box<dyn Level>> {
    vec![Box::new(SnakeLevel)]
}

/// Look a level up by name, ignoring case
pub fn find(name: &str) -> Option<Box<dyn Level>> {
    all()
        .into_iter()
        .find(|level| level.name().eq_ignore_ascii_case(name))
}

/// Add the four walls enclosing the screen
pub fn build_arena(world: &mut PhysicsWorld) {
    let (w, h, t) = (SCREEN_WIDTH, SCREEN_HEIGHT, ARENA_WALL_THICKNESS);
    // left, top, right, bottom
    let walls = [
        (-t, -t, w + t, 0.0),
        (-t, h, w + t, h + t),
        (-t, -t, 0.0, h + t),
        (w, -t, w + t, h + t),
    ];

    for (left, top, right, bottom) in walls {
        world.add_static_collider(presets::wall_collider(left, top, right, bottom));
    }
}

/// Lines drawn along the screen border
pub fn arena_outline() -> Vec<Segment> {
    let (w, h) = (SCREEN_WIDTH, SCREEN_HEIGHT);
    vec![
        Segment::new(0.0, 0.0, w, 0.0),
        Segment::new(0.0, h - 1.0, w, h - 1.0),
        Segment::new(1.0, 0.0, 1.0, h),
        Segment::new(w, 0.0, w, h),
    ]
}

fn add_round_body(
    world: &mut PhysicsWorld,
    position: Vec2,
    collider: rapier2d::prelude::Collider,
) -> (RigidBodyHandle, ColliderHandle) {
    let body = world.add_rigid_body(presets::round_body(position.x, position.y));
    let collider = world.add_collider(collider, body);
    (body, collider)
}

/// S-shaped course: the ball starts top right, the bell waits bottom left
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeLevel;

impl SnakeLevel {
    /// Where the ball starts
    pub fn ball_start() -> Vec2 {
        Vec2::new(SCREEN_WIDTH / 6.0 * 5.0, SCREEN_HEIGHT / 6.0)
    }

    /// Where the bell sits
    pub fn bell_start() -> Vec2 {
        Vec2::new(SCREEN_WIDTH / 6.0, SCREEN_HEIGHT / 6.0 * 5.0)
    }
}

impl Level for SnakeLevel {
    fn name(&self) -> &'static str {
        "Snake"
    }

    fn build(&self, world: &mut PhysicsWorld) -> LevelBodies {
        let (w, h, d) = (SCREEN_WIDTH, SCREEN_HEIGHT, INNER_WALL_HALF_THICKNESS);

        // Top wall from one third to the right edge
        world.add_static_collider(presets::wall_collider(
            w / 3.0,
            h / 3.0 - d,
            w + ARENA_WALL_THICKNESS,
            h / 3.0 + d,
        ));
        // Bottom wall from the left edge to two thirds
        world.add_static_collider(presets::wall_collider(
            -ARENA_WALL_THICKNESS,
            h / 3.0 * 2.0 - d,
            w / 3.0 * 2.0,
            h / 3.0 * 2.0 + d,
        ));

        let (ball, ball_collider) =
            add_round_body(world, Self::ball_start(), presets::ball_collider(BALL_SIZE));
        let (bell, bell_collider) =
            add_round_body(world, Self::bell_start(), presets::bell_collider(BELL_SIZE));

        info!("Level '{}' built", self.name());

        LevelBodies {
            ball,
            ball_collider,
            bell,
            bell_collider,
        }
    }

    fn walls(&self) -> Vec<Segment> {
        let (w, h) = (SCREEN_WIDTH, SCREEN_HEIGHT);
        vec![
            Segment::new(w / 3.0, h / 3.0, w, h / 3.0),
            Segment::new(0.0, h / 3.0 * 2.0, w / 3.0 * 2.0, h / 3.0 * 2.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_level_ignores_case() {
        assert!(find("Snake").is_some());
        assert!(find("snake").is_some());
        assert!(find("Spiral").is_none());
    }

    #[test]
    fn test_level_names_unique() {
        let levels = all();
        for (i, a) in levels.iter().enumerate() {
            for b in levels.iter().skip(i + 1) {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_snake_build_positions() {
        let mut world = PhysicsWorld::new();
        build_arena(&mut world);
        let bodies = SnakeLevel.build(&mut world);

        let ball = world.get_rigid_body(bodies.ball).unwrap();
        assert_eq!(ball.translation().x, 270.0);
        assert_eq!(ball.translation().y, 117.0);

        let bell = world.get_rigid_body(bodies.bell).unwrap();
        assert_eq!(bell.translation().x, 54.0);
        assert_eq!(bell.translation().y, 585.0);
    }

    #[test]
    fn test_interior_wall_stops_ball() {
        let mut world = PhysicsWorld::new();
        build_arena(&mut world);
        let bodies = SnakeLevel.build(&mut world);

        // Throw the ball straight down at the upper interior wall
        if let Some(ball) = world.get_rigid_body_mut(bodies.ball) {
            ball.set_linvel(rapier2d::prelude::vector![0.0, 300.0], true);
        }
        for _ in 0..60 {
            world.step(&());
        }

        let ball = world.get_rigid_body(bodies.ball).unwrap();
        assert!(ball.translation().y < SCREEN_HEIGHT / 3.0);
    }

    #[test]
    fn test_snake_walls_split_the_screen() {
        let walls = SnakeLevel.walls();
        assert_eq!(walls.len(), 2);
        assert_eq!(walls[0].start.y, SCREEN_HEIGHT / 3.0);
        assert_eq!(walls[1].start.y, SCREEN_HEIGHT / 3.0 * 2.0);
    }

    #[test]
    fn test_arena_outline() {
        let outline = arena_outline();
        assert_eq!(outline.len(), 4);
        assert!(outline
            .iter()
            .all(|s| s.start.x <= SCREEN_WIDTH && s.end.y <= SCREEN_HEIGHT));
    }
}
