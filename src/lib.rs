pub mod components;
pub mod utils;

pub use components::{ConfigError, RawRotorConfig, RotorParams, RotorTurningDirection};
