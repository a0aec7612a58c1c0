use serde::{Deserialize, Serialize};

/// Column headers an experimental results file must carry. Any further
/// columns are ignored by the loader.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "InletTemp_C",
    "OutletTemp_C",
    "FlowRate_L/min",
    "Concentration_percent",
];

/// One measured row of an experimental results file. Immutable once read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "InletTemp_C")]
    pub inlet_temp_c: f64,
    #[serde(rename = "OutletTemp_C")]
    pub outlet_temp_c: f64,
    #[serde(rename = "FlowRate_L/min")]
    pub flow_rate_l_min: f64,
    #[serde(rename = "Concentration_percent")]
    pub concentration_percent: f64,
}
