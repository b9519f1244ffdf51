use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::config::RotorParams;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing rotor config field: {0}")]
    MissingField(String),
    #[error("Invalid rotor config field (expected a finite number): {0}")]
    InvalidField(String),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Rotor coefficients as they appear in an external parameter document,
/// field names verbatim. `rotor_z` is in centimeters here; it becomes
/// meters on conversion to [`RotorParams`].
#[allow(non_snake_case)]
#[derive(Debug, Clone, Deserialize)]
pub struct RawRotorConfig {
    pub C_T: f64,
    pub C_P: f64,
    pub air_density: f64,
    pub max_rpm: f64,
    pub propeller_diameter: f64,
    pub propeller_height: f64,
    pub control_signal_filter_tc: f64,
    pub rotor_z: f64,
}

impl RawRotorConfig {
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }
}

fn read_field(mapping: &Map<String, Value>, name: &str) -> Result<f64, ConfigError> {
    let value = mapping
        .get(name)
        .ok_or_else(|| ConfigError::MissingField(name.to_string()))?;
    value
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::InvalidField(name.to_string()))
}

impl RotorParams {
    /// Overwrites the base coefficients from an already-parsed flat
    /// key-value mapping (where the mapping came from is the caller's
    /// concern). All eight fields are read before any is assigned, so a
    /// failure leaves the record untouched.
    ///
    /// `rotor_z` arrives in centimeters and is converted to meters here,
    /// the single point where that conversion happens. Derived limits are
    /// not touched; call [`recompute_limits`] afterwards.
    ///
    /// [`recompute_limits`]: RotorParams::recompute_limits
    pub fn load_coefficients(&mut self, mapping: &Map<String, Value>) -> Result<(), ConfigError> {
        let thrust_coefficient = read_field(mapping, "C_T")?;
        let power_coefficient = read_field(mapping, "C_P")?;
        let air_density = read_field(mapping, "air_density")?;
        let max_rpm = read_field(mapping, "max_rpm")?;
        let propeller_diameter = read_field(mapping, "propeller_diameter")?;
        let propeller_height = read_field(mapping, "propeller_height")?;
        let control_signal_filter_tc = read_field(mapping, "control_signal_filter_tc")?;
        let rotor_z = read_field(mapping, "rotor_z")? / 100.0; // cm -> m

        self.thrust_coefficient = thrust_coefficient;
        self.power_coefficient = power_coefficient;
        self.air_density = air_density;
        self.max_rpm = max_rpm;
        self.propeller_diameter = propeller_diameter;
        self.propeller_height = propeller_height;
        self.control_signal_filter_tc = control_signal_filter_tc;
        self.rotor_z = rotor_z;
        Ok(())
    }

    /// Builds a record from a deserialized raw config, with derived limits
    /// already recomputed. Applies the same cm -> m conversion to
    /// `rotor_z` as [`load_coefficients`].
    ///
    /// [`load_coefficients`]: RotorParams::load_coefficients
    pub fn from_raw(raw: &RawRotorConfig) -> Self {
        let mut params = Self {
            thrust_coefficient: raw.C_T,
            power_coefficient: raw.C_P,
            air_density: raw.air_density,
            max_rpm: raw.max_rpm,
            propeller_diameter: raw.propeller_diameter,
            propeller_height: raw.propeller_height,
            control_signal_filter_tc: raw.control_signal_filter_tc,
            rotor_z: raw.rotor_z / 100.0,
            ..Default::default()
        };
        params.recompute_limits();
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_mapping() -> Map<String, Value> {
        let doc = json!({
            "C_T": 0.109919,
            "C_P": 0.040164,
            "air_density": 1.225,
            "max_rpm": 6396.667,
            "propeller_diameter": 0.2286,
            "propeller_height": 1.0,
            "control_signal_filter_tc": 0.005,
            "rotor_z": 100.0,
        });
        match doc {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_load_coefficients_reads_all_fields() {
        let mut params = RotorParams::default();
        params.load_coefficients(&full_mapping()).unwrap();

        assert_eq!(params.thrust_coefficient, 0.109919);
        assert_eq!(params.power_coefficient, 0.040164);
        assert_eq!(params.air_density, 1.225);
        assert_eq!(params.max_rpm, 6396.667);
        assert_eq!(params.propeller_diameter, 0.2286);
        assert_eq!(params.propeller_height, 1.0);
        assert_eq!(params.control_signal_filter_tc, 0.005);
    }

    #[test]
    fn test_rotor_z_converted_from_centimeters() {
        let mut params = RotorParams::default();
        params.load_coefficients(&full_mapping()).unwrap();

        assert_eq!(params.rotor_z, 1.0);
    }

    #[test]
    fn test_missing_field_leaves_record_unchanged() {
        let mut mapping = full_mapping();
        mapping.remove("max_rpm");

        let mut params = RotorParams::default();
        let before = params.clone();
        let err = params.load_coefficients(&mapping).unwrap_err();

        assert!(matches!(err, ConfigError::MissingField(name) if name == "max_rpm"));
        assert_eq!(params, before);
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let mut mapping = full_mapping();
        mapping.insert("air_density".to_string(), Value::String("thick".into()));

        let mut params = RotorParams::default();
        let before = params.clone();
        let err = params.load_coefficients(&mapping).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidField(name) if name == "air_density"));
        assert_eq!(params, before);
    }

    #[test]
    fn test_load_does_not_touch_derived_limits() {
        let mut params = RotorParams::default();
        let derived_before = (params.max_thrust, params.max_torque, params.max_speed);

        let mut mapping = full_mapping();
        mapping.insert("max_rpm".to_string(), json!(10000.0));
        params.load_coefficients(&mapping).unwrap();

        assert_eq!(params.max_thrust, derived_before.0);
        assert_eq!(params.max_torque, derived_before.1);
        assert_eq!(params.max_speed, derived_before.2);
    }

    #[test]
    fn test_from_raw_recomputes_limits() {
        let raw = RawRotorConfig::from_json(
            r#"{
                "C_T": 0.109919,
                "C_P": 0.040164,
                "air_density": 1.225,
                "max_rpm": 6396.667,
                "propeller_diameter": 0.2286,
                "propeller_height": 1.0,
                "control_signal_filter_tc": 0.005,
                "rotor_z": 25.0
            }"#,
        )
        .unwrap();

        let params = RotorParams::from_raw(&raw);
        assert_eq!(params.rotor_z, 0.25);
        assert!(params.max_thrust > 0.0);
        assert!(params.max_torque > 0.0);
    }

    #[test]
    fn test_raw_config_from_yaml() {
        let raw = RawRotorConfig::from_yaml(
            "C_T: 0.1\n\
             C_P: 0.04\n\
             air_density: 1.225\n\
             max_rpm: 6000.0\n\
             propeller_diameter: 0.24\n\
             propeller_height: 1.0\n\
             control_signal_filter_tc: 0.005\n\
             rotor_z: 10.0\n",
        )
        .unwrap();

        assert_eq!(raw.C_T, 0.1);
        assert_eq!(raw.max_rpm, 6000.0);
    }

    #[test]
    fn test_raw_config_missing_field_fails_to_parse() {
        let result = RawRotorConfig::from_json(r#"{"C_T": 0.1}"#);
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }
}
