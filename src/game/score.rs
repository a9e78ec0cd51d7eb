// Score computation

/// Scoring rules: a starting budget minus elapsed time and magnet usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRules {
    /// Score with zero elapsed time and no magnets
    pub starting_points: i64,
    /// Points lost per magnet placed
    pub malus_per_magnet: i64,
}

/// Points lost per second of running time
pub const POINTS_PER_SECOND: f64 = 10.0;

impl ScoreRules {
    /// Score after `running_secs` seconds with `magnets_placed` magnets
    ///
    /// The time malus is truncated toward zero. The result is not floored and
    /// goes negative on long runs.
    pub fn score(&self, running_secs: f64, magnets_placed: u32) -> i64 {
        let time_malus = (running_secs * POINTS_PER_SECOND) as i64;
        self.starting_points - time_malus - self.malus_per_magnet * i64::from(magnets_placed)
    }
}
