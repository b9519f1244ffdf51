pub mod rotor;

pub use rotor::{ConfigError, RawRotorConfig, RotorParams, RotorTurningDirection};
