pub mod calculations;
pub mod constants;

pub use calculations::{
    calculate_bmi, calculate_bmi_checked, calculate_bmi_value, calculate_from_input,
    classify_bmi, healthy_band, ideal_weight_range, kg_to_display, parse_measurement,
    scale_position, to_si,
};
pub use constants::*;
