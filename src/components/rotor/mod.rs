mod config;
mod loader;

pub use config::{RotorParams, RotorTurningDirection};
pub use loader::{ConfigError, RawRotorConfig};
