use std::collections::BTreeMap;

use nanotherm_schemas::{nominal::Nominal, observation::Observation};
use serde::Serialize;

use crate::error::NanothermError;

/// Smallest inlet-to-ambient differential accepted as a denominator.
/// Anything closer to zero makes the effectiveness ratio meaningless.
pub const MIN_DRIVING_DELTA_C: f64 = 1e-9;

/// An observation augmented with its derived effectiveness ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedObservation {
    pub observation: Observation,
    pub effectiveness: f64,
}

/// Mean effectiveness at one concentration for a fixed flow rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub concentration_percent: f64,
    pub mean_effectiveness: f64,
    pub observations: usize,
}

/// Aggregated effectiveness for one flow rate. Points are ascending by
/// concentration with no duplicate concentration values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedSeries {
    pub flow_rate_l_min: f64,
    pub points: Vec<SeriesPoint>,
}

/// Fraction of the maximum possible temperature drop the radiator achieved:
/// `(inlet - outlet) / (inlet - ambient)`.
///
/// Returns `None` when the inlet sits on the ambient reference and the
/// ratio is undefined.
pub fn effectiveness_ratio(
    inlet_temp_c: f64,
    outlet_temp_c: f64,
    ambient_temp_c: f64,
) -> Option<f64> {
    let driving_delta = inlet_temp_c - ambient_temp_c;
    if driving_delta.abs() < MIN_DRIVING_DELTA_C {
        return None;
    }
    Some((inlet_temp_c - outlet_temp_c) / driving_delta)
}

/// Derive the effectiveness of every observation against the given ambient
/// reference temperature. A row whose inlet temperature sits on the ambient
/// reference fails the whole run rather than propagating a non-finite value
/// into downstream aggregates.
pub fn derive_observations(
    observations: &[Observation],
    ambient_temp_c: f64,
) -> Result<Vec<DerivedObservation>, NanothermError> {
    observations
        .iter()
        .enumerate()
        .map(|(row, observation)| {
            effectiveness_ratio(
                observation.inlet_temp_c,
                observation.outlet_temp_c,
                ambient_temp_c,
            )
            .map(|effectiveness| DerivedObservation {
                observation: observation.clone(),
                effectiveness,
            })
            .ok_or(NanothermError::DegenerateObservation {
                row,
                inlet_temp_c: observation.inlet_temp_c,
            })
        })
        .collect()
}

/// Partition observations by flow rate, group each partition by
/// concentration, and average the effectiveness per group.
///
/// Series come back ascending by flow rate; within a series the points are
/// ascending by concentration. Empty input yields an empty vector.
pub fn aggregate_effectiveness(
    observations: &[Observation],
    ambient_temp_c: f64,
) -> Result<Vec<AggregatedSeries>, NanothermError> {
    let derived = derive_observations(observations, ambient_temp_c)?;

    let mut partitions: BTreeMap<Nominal, BTreeMap<Nominal, (f64, usize)>> = BTreeMap::new();
    for d in &derived {
        let cell = partitions
            .entry(Nominal::new(d.observation.flow_rate_l_min))
            .or_default()
            .entry(Nominal::new(d.observation.concentration_percent))
            .or_insert((0.0, 0));
        cell.0 += d.effectiveness;
        cell.1 += 1;
    }

    let series = partitions
        .into_iter()
        .map(|(flow_rate, groups)| AggregatedSeries {
            flow_rate_l_min: flow_rate.value(),
            points: groups
                .into_iter()
                .map(|(concentration, (sum, count))| SeriesPoint {
                    concentration_percent: concentration.value(),
                    mean_effectiveness: sum / count as f64,
                    observations: count,
                })
                .collect(),
        })
        .collect();

    Ok(series)
}
