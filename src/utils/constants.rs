pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225; // kg/m^3

// GWS 9X5 propeller, UIUC measurements at 6396.667 RPM.
// Propeller database: http://m-selig.ae.illinois.edu/props/propDB.html
pub const GWS_9X5_THRUST_COEFFICIENT: f64 = 0.109919;
pub const GWS_9X5_POWER_COEFFICIENT: f64 = 0.040164;
pub const GWS_9X5_MAX_RPM: f64 = 6396.667;

pub const DJI_PHANTOM_2_PROPELLER_DIAMETER: f64 = 0.2286; // m
