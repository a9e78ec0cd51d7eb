// Shared configuration and math helpers

pub mod config;
pub mod math;

pub use config::{ConfigError, GameConfig};
