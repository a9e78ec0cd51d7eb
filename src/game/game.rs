// The MagLab game: one run from Ready to Ended

use glam::Vec2;
use log::info;

use super::level::{self, Level, LevelBodies, Segment};
use super::magnet::MagnetField;
use super::phase::{GamePhase, PhaseMachine};
use super::score::ScoreRules;
use crate::core::math::{to_vec2, to_vector};
use crate::core::{ConfigError, GameConfig};
use crate::engine::physics::{BellGate, PhysicsWorld, RigidBodyHandle};

/// Game clock step, kept in f64 so phase deadlines do not drift
const STEP_SECONDS: f64 = 1.0 / 60.0;

/// Player intentions gathered for one update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Space, click or touch: leaves the Ready phase
    pub start: bool,
    /// Click or touch position where a magnet should appear
    pub place_magnet: Option<Vec2>,
    /// Remove every magnet (only honoured while preparing)
    pub reset_magnets: bool,
}

/// Complete game state, driven one fixed step at a time
pub struct Game {
    config: GameConfig,
    rules: ScoreRules,
    world: PhysicsWorld,
    level: Box<dyn Level>,
    bodies: LevelBodies,
    gate: BellGate,
    magnets: MagnetField,
    phase: PhaseMachine,
    /// Simulation time in seconds
    time: f64,
    /// Magnets placed since the start, including cleared ones
    magnets_placed: u32,
    score: i64,
}

impl Game {
    /// Build the world for the configured level and wait for the player
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let level = level::find(&config.level).ok_or_else(|| ConfigError::Invalid {
            field: "level",
            reason: format!("unknown level '{}'", config.level),
        })?;

        let mut world = PhysicsWorld::new();
        level::build_arena(&mut world);
        let bodies = level.build(&mut world);
        let gate = BellGate::new(bodies.ball_collider, bodies.bell_collider);

        let rules = ScoreRules {
            starting_points: config.score_starting_points,
            malus_per_magnet: config.score_malus_magnet,
        };

        let mut phase = PhaseMachine::new();
        phase.ready();

        info!("Game ready on level '{}'", level.name());

        Ok(Self {
            config,
            rules,
            world,
            level,
            bodies,
            gate,
            magnets: MagnetField::new(),
            phase,
            time: 0.0,
            magnets_placed: 0,
            score: 0,
        })
    }

    /// Advance the game by one fixed step
    pub fn update(&mut self, input: &FrameInput) {
        let phase = self.phase.phase();

        if phase == GamePhase::Running {
            let running_secs = self.time - self.phase.prep_deadline();
            self.score = self.rules.score(running_secs, self.magnets_placed);
        }

        if phase.magnets_active() {
            self.magnets.expire_one(self.time);
        }

        self.phase.begin_running_if_due(self.time);

        if input.start {
            self.phase
                .start_preparation(self.time, self.config.preparation_duration);
        }

        if let Some(position) = input.place_magnet {
            if self.phase.phase().accepts_magnets() {
                self.magnets
                    .place(position, self.time, self.config.magnet_ttl);
                self.magnets_placed += 1;
            }
        }

        if input.reset_magnets && self.phase.phase() == GamePhase::Preparing {
            self.magnets.clear();
        }

        self.apply_magnet_force();

        self.gate
            .set_armed(self.phase.phase() == GamePhase::Running);
        self.time += STEP_SECONDS;
        self.world.step(&self.gate);

        if self.gate.take_rung() && self.phase.end() {
            info!("Bell rung at {:.2}s, final score {}", self.time, self.score);
        }

        self.apply_friction();
    }

    /// Set the ball's external force for the coming step
    fn apply_magnet_force(&mut self) {
        let force = if self.phase.phase().magnets_active() {
            self.magnets.net_force(
                self.ball_position(),
                self.config.max_length,
                self.config.max_force,
            )
        } else {
            Vec2::ZERO
        };

        if let Some(ball) = self.world.get_rigid_body_mut(self.bodies.ball) {
            ball.reset_forces(false);
            ball.add_force(to_vector(force), true);
        }
    }

    /// Damp the ball velocity by the friction factor
    fn apply_friction(&mut self) {
        let friction = self.config.friction;
        if let Some(ball) = self.world.get_rigid_body_mut(self.bodies.ball) {
            let damped = *ball.linvel() * friction;
            ball.set_linvel(damped, true);
        }
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.phase.phase()
    }

    /// Simulation time in seconds
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Seconds left before the magnets start pulling
    pub fn preparation_remaining(&self) -> f64 {
        self.phase.prep_deadline() - self.time
    }

    /// Latest score (meaningful once running)
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Magnets placed since the start
    pub fn magnets_placed(&self) -> u32 {
        self.magnets_placed
    }

    /// Active magnets
    pub fn magnets(&self) -> &MagnetField {
        &self.magnets
    }

    /// Ball centre
    pub fn ball_position(&self) -> Vec2 {
        self.body_position(self.bodies.ball)
    }

    /// Ball velocity in pixels per second
    pub fn ball_velocity(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.bodies.ball)
            .map(|b| to_vec2(b.linvel()))
            .unwrap_or(Vec2::ZERO)
    }

    /// Bell centre
    pub fn bell_position(&self) -> Vec2 {
        self.body_position(self.bodies.bell)
    }

    fn body_position(&self, handle: RigidBodyHandle) -> Vec2 {
        self.world
            .get_rigid_body(handle)
            .map(|b| to_vec2(b.translation()))
            .unwrap_or(Vec2::ZERO)
    }

    /// Level interior walls, for drawing
    pub fn level_walls(&self) -> Vec<Segment> {
        self.level.walls()
    }

    /// Active configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
