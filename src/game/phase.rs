// Game phase state machine

use log::info;

/// Phase of a MagLab run
///
/// Phases are ordered: play only moves forward through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GamePhase {
    /// World being built
    Initialising,
    /// Waiting for the first input
    Ready,
    /// Countdown before the magnets start pulling
    Preparing,
    /// Magnets pull the ball, the clock runs
    Running,
    /// The ball rang the bell
    Ended,
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Initialising
    }
}

impl GamePhase {
    /// Check if the player may place magnets
    pub fn accepts_magnets(&self) -> bool {
        *self >= Self::Preparing && *self < Self::Ended
    }

    /// Check if magnets pull the ball and expire
    pub fn magnets_active(&self) -> bool {
        *self >= Self::Running
    }

    /// Check if the score is shown
    pub fn shows_score(&self) -> bool {
        *self >= Self::Running
    }

    /// Human readable name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialising => "initialising",
            Self::Ready => "ready",
            Self::Preparing => "preparing",
            Self::Running => "running",
            Self::Ended => "ended",
        }
    }
}

/// State machine driving the phase transitions
#[derive(Debug, Default)]
pub struct PhaseMachine {
    current: GamePhase,
    prep_deadline: f64,
}

impl PhaseMachine {
    /// Create a new machine in the Ready phase
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current phase
    pub fn phase(&self) -> GamePhase {
        self.current
    }

    /// Simulation time at which preparation ends
    pub fn prep_deadline(&self) -> f64 {
        self.prep_deadline
    }

    /// Initialising -> Ready once the world is built
    pub fn ready(&mut self) -> bool {
        self.advance(GamePhase::Initialising, GamePhase::Ready)
    }

    /// Ready -> Preparing, recording the deadline
    pub fn start_preparation(&mut self, now: f64, duration: f64) -> bool {
        if self.advance(GamePhase::Ready, GamePhase::Preparing) {
            self.prep_deadline = now + duration;
            true
        } else {
            false
        }
    }

    /// Preparing -> Running once `now` is past the deadline
    pub fn begin_running_if_due(&mut self, now: f64) -> bool {
        now > self.prep_deadline && self.advance(GamePhase::Preparing, GamePhase::Running)
    }

    /// Running -> Ended
    pub fn end(&mut self) -> bool {
        self.advance(GamePhase::Running, GamePhase::Ended)
    }

    fn advance(&mut self, from: GamePhase, to: GamePhase) -> bool {
        if self.current != from {
            return false;
        }
        info!("Game phase: {} -> {}", from.name(), to.name());
        self.current = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preparing_at(now: f64) -> PhaseMachine {
        let mut machine = PhaseMachine::new();
        machine.ready();
        assert!(machine.start_preparation(now, 5.0));
        machine
    }

    #[test]
    fn test_phase_ordering() {
        assert!(GamePhase::Initialising < GamePhase::Ready);
        assert!(GamePhase::Ready < GamePhase::Preparing);
        assert!(GamePhase::Preparing < GamePhase::Running);
        assert!(GamePhase::Running < GamePhase::Ended);
    }

    #[test]
    fn test_phase_predicates() {
        assert!(!GamePhase::Ready.accepts_magnets());
        assert!(GamePhase::Preparing.accepts_magnets());
        assert!(GamePhase::Running.accepts_magnets());
        assert!(!GamePhase::Ended.accepts_magnets());

        assert!(!GamePhase::Preparing.magnets_active());
        assert!(GamePhase::Running.magnets_active());
        assert!(GamePhase::Ended.magnets_active());
    }

    #[test]
    fn test_starts_initialising() {
        let machine = PhaseMachine::new();
        assert_eq!(machine.phase(), GamePhase::Initialising);
    }

    #[test]
    fn test_preparation_records_deadline() {
        let machine = preparing_at(2.0);
        assert_eq!(machine.phase(), GamePhase::Preparing);
        assert_eq!(machine.prep_deadline(), 7.0);
    }

    #[test]
    fn test_running_requires_strictly_past_deadline() {
        let mut machine = preparing_at(0.0);

        assert!(!machine.begin_running_if_due(4.9));
        assert!(!machine.begin_running_if_due(5.0));
        assert_eq!(machine.phase(), GamePhase::Preparing);

        assert!(machine.begin_running_if_due(5.01));
        assert_eq!(machine.phase(), GamePhase::Running);
    }

    #[test]
    fn test_cannot_skip_phases() {
        let mut machine = PhaseMachine::new();
        assert!(!machine.start_preparation(0.0, 5.0));
        assert!(!machine.end());

        machine.ready();
        assert!(!machine.end());
        assert!(!machine.begin_running_if_due(100.0));
    }

    #[test]
    fn test_start_only_once() {
        let mut machine = preparing_at(0.0);
        assert!(!machine.start_preparation(3.0, 5.0));
        assert_eq!(machine.prep_deadline(), 5.0);
    }

    #[test]
    fn test_ended_is_terminal() {
        let mut machine = preparing_at(0.0);
        machine.begin_running_if_due(6.0);
        assert!(machine.end());

        assert!(!machine.end());
        assert!(!machine.ready());
        assert!(!machine.start_preparation(10.0, 5.0));
        assert_eq!(machine.phase(), GamePhase::Ended);
    }
}
