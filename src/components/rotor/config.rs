use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    DJI_PHANTOM_2_PROPELLER_DIAMETER, GWS_9X5_MAX_RPM, GWS_9X5_POWER_COEFFICIENT,
    GWS_9X5_THRUST_COEFFICIENT, SEA_LEVEL_AIR_DENSITY,
};

/// Turning direction of a rotor. In a NED frame, positive torque
/// generates clockwise rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotorTurningDirection {
    Ccw,
    Cw,
}

impl RotorTurningDirection {
    /// Sign of the reaction torque the rotor applies to the airframe.
    pub fn sign(self) -> i32 {
        match self {
            RotorTurningDirection::Ccw => -1,
            RotorTurningDirection::Cw => 1,
        }
    }
}

/// Static aerodynamic parameters of a single rotor/propeller.
///
/// Thrust and torque at full commanded speed follow the standard
/// propeller relations (see http://physics.stackexchange.com/a/32013/14061):
///
/// ```text
/// thrust (N)   = C_T * rho * n^2 * D^4
/// torque (N.m) = C_P * rho * n^2 * D^5 / (2 * pi)
/// ```
///
/// where `rho` is air density (kg/m^3), `n` revolutions per second and `D`
/// the propeller diameter (m). `C_T` and `C_P` are dimensionless constants
/// measured per propeller, available from the UIUC propeller database
/// (http://m-selig.ae.illinois.edu/props/propDB.html).
///
/// The derived fields are only ever written by [`recompute_limits`], so
/// they always reflect the base coefficients as of the last recomputation.
/// A flight-dynamics loop reads them directly every tick; recomputation is
/// expected during vehicle setup or parameter reloads, not per tick.
///
/// [`recompute_limits`]: RotorParams::recompute_limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotorParams {
    /// Thrust coefficient C_T (dimensionless)
    pub thrust_coefficient: f64,
    /// Power/torque coefficient C_P (dimensionless)
    pub power_coefficient: f64,
    /// Ambient air density (kg/m^3)
    pub air_density: f64,
    /// Maximum rotor speed (rev/min)
    pub max_rpm: f64,
    /// Propeller diameter (m)
    pub propeller_diameter: f64,
    /// Height of the cylindrical area swept by the propeller (m)
    pub propeller_height: f64,
    /// Time constant of the control-signal low-pass filter (s)
    pub control_signal_filter_tc: f64,
    /// Vertical offset of the rotor along the body z axis (m)
    pub rotor_z: f64,

    /// Derived: rotor speed at max RPM (rev/s)
    pub revolutions_per_second: f64,
    /// Derived: maximum angular speed (rad/s)
    pub max_speed: f64,
    /// Derived: maximum angular speed squared (rad^2/s^2)
    pub max_speed_square: f64,
    /// Derived: maximum thrust (N)
    pub max_thrust: f64,
    /// Derived: maximum torque (N.m)
    pub max_torque: f64,
}

impl RotorParams {
    /// Recomputes the derived operating limits from the current base
    /// coefficients.
    ///
    /// Total and idempotent: degenerate bases (zero or negative diameter,
    /// density, RPM) yield degenerate limits rather than an error, so the
    /// simulation loop always has defined values to read. Call again after
    /// mutating any base coefficient.
    pub fn recompute_limits(&mut self) {
        self.revolutions_per_second = self.max_rpm / 60.0;
        self.max_speed = self.revolutions_per_second * 2.0 * PI;
        self.max_speed_square = self.max_speed * self.max_speed;

        let n_squared = self.revolutions_per_second * self.revolutions_per_second;
        self.max_thrust = self.thrust_coefficient
            * self.air_density
            * n_squared
            * self.propeller_diameter.powi(4);
        self.max_torque = self.power_coefficient
            * self.air_density
            * n_squared
            * self.propeller_diameter.powi(5)
            / (2.0 * PI);
    }
}

impl Default for RotorParams {
    /// GWS 9X5 propeller at sea level, DJI Phantom 2 diameter. Derived
    /// limits are already consistent with these bases (max thrust
    /// ~4.1794 N, max torque ~0.0556 N.m).
    fn default() -> Self {
        let mut params = Self {
            thrust_coefficient: GWS_9X5_THRUST_COEFFICIENT,
            power_coefficient: GWS_9X5_POWER_COEFFICIENT,
            air_density: SEA_LEVEL_AIR_DENSITY,
            max_rpm: GWS_9X5_MAX_RPM,
            propeller_diameter: DJI_PHANTOM_2_PROPELLER_DIAMETER,
            propeller_height: 0.01,
            control_signal_filter_tc: 0.005,
            rotor_z: 0.0,
            revolutions_per_second: 0.0,
            max_speed: 0.0,
            max_speed_square: 0.0,
            max_thrust: 0.0,
            max_torque: 0.0,
        };
        params.recompute_limits();
        params
    }
}
