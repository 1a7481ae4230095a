/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per avoirdupois pound.
pub const KG_PER_POUND: f64 = 0.45359237;

/// Centimeters per meter.
pub const CM_PER_M: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Category thresholds (upper bounds are exclusive)
// ─────────────────────────────────────────────────────────────────────────────

/// Below this BMI is underweight.
pub const UNDERWEIGHT_MAX: f64 = 18.5;

/// Below this BMI (and at least `UNDERWEIGHT_MAX`) is normal weight.
pub const NORMAL_MAX: f64 = 25.0;

/// Below this BMI (and at least `NORMAL_MAX`) is overweight.
pub const OVERWEIGHT_MAX: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Healthy range reported with every result
// ─────────────────────────────────────────────────────────────────────────────

pub const HEALTHY_BMI_MIN: f64 = 18.5;
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// Upper end of the BMI gauge shown beside a result.
pub const BMI_SCALE_MAX: f64 = 40.0;
