// Magnets: short-lived attractors placed by the player

use glam::Vec2;
use log::debug;

use crate::core::math::clamp_length;

/// Initial capacity of the magnet list
const MAGNET_CAPACITY: usize = 10;

/// A point attractor that disappears at `time_to_die`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnet {
    /// Position in logical screen pixels
    pub position: Vec2,
    /// Absolute simulation time after which the magnet is removed
    pub time_to_die: f64,
}

impl Magnet {
    /// Create a new magnet that expires at `time_to_die`
    pub fn new(position: Vec2, time_to_die: f64) -> Self {
        Self {
            position,
            time_to_die,
        }
    }

    /// Check if the magnet outlived its time to live
    pub fn is_expired(&self, now: f64) -> bool {
        self.time_to_die <= now
    }

    /// Pull exerted on a ball at `ball`
    ///
    /// The magnitude is `(max_length - distance)^2`, pointing from the ball to
    /// the magnet, and zero beyond `max_length` or when the ball sits exactly
    /// on the magnet.
    pub fn pull(&self, ball: Vec2, max_length: f32) -> Vec2 {
        let offset = self.position - ball;
        let distance = offset.length();
        if distance > max_length {
            return Vec2::ZERO;
        }

        let magnitude = (max_length - distance).powi(2);
        offset.normalize_or_zero() * magnitude
    }
}

/// The ordered set of active magnets
#[derive(Debug, Clone)]
pub struct MagnetField {
    magnets: Vec<Magnet>,
}

impl Default for MagnetField {
    fn default() -> Self {
        Self::new()
    }
}

impl MagnetField {
    /// Create an empty field
    pub fn new() -> Self {
        Self {
            magnets: Vec::with_capacity(MAGNET_CAPACITY),
        }
    }

    /// Add a magnet at `position` living for `ttl` seconds from `now`
    pub fn place(&mut self, position: Vec2, now: f64, ttl: f64) {
        let magnet = Magnet::new(position, now + ttl);
        debug!(
            "Magnet placed at ({:.0}, {:.0}), dies at {:.2}s",
            position.x, position.y, magnet.time_to_die
        );
        self.magnets.push(magnet);
    }

    /// Remove the first expired magnet, if any
    ///
    /// Only one magnet goes per call: when several expire on the same frame
    /// the others linger, still pulling, until the following frames.
    pub fn expire_one(&mut self, now: f64) -> Option<Magnet> {
        let index = self.magnets.iter().position(|m| m.is_expired(now))?;
        let magnet = self.magnets.remove(index);
        debug!(
            "Magnet at ({:.0}, {:.0}) expired",
            magnet.position.x, magnet.position.y
        );
        Some(magnet)
    }

    /// Remove every magnet
    pub fn clear(&mut self) {
        if !self.magnets.is_empty() {
            debug!("Cleared {} magnets", self.magnets.len());
        }
        self.magnets = Vec::with_capacity(MAGNET_CAPACITY);
    }

    /// Sum of every magnet's pull, rescaled to at most `max_force`
    pub fn net_force(&self, ball: Vec2, max_length: f32, max_force: f32) -> Vec2 {
        let total = self
            .magnets
            .iter()
            .map(|m| m.pull(ball, max_length))
            .fold(Vec2::ZERO, |acc, f| acc + f);
        clamp_length(total, max_force)
    }

    /// Iterate over the magnets in placement order
    pub fn iter(&self) -> impl Iterator<Item = &Magnet> {
        self.magnets.iter()
    }

    /// Number of magnets
    pub fn len(&self) -> usize {
        self.magnets.len()
    }

    /// Check if there are no magnets
    pub fn is_empty(&self) -> bool {
        self.magnets.is_empty()
    }
}
