use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A discrete experimental setpoint (flow rate, nanoparticle concentration)
/// used as a grouping key.
///
/// The test rig runs a small fixed set of nominal values, so grouping by
/// exact bit-level equality is sound. `Ord` goes through `f64::total_cmp`
/// so the type can key a `BTreeMap` and yields ascending iteration order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nominal(f64);

impl Nominal {
    pub fn new(value: f64) -> Self {
        Nominal(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Nominal {
    fn from(value: f64) -> Self {
        Nominal(value)
    }
}

// -- Manual Eq/Ord so Nominal can live in BTreeMap keys --

impl PartialEq for Nominal {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Nominal {}

impl PartialOrd for Nominal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Nominal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for Nominal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Nominal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_btreemap_keys_iterate_ascending() {
        let mut map = BTreeMap::new();
        for v in [2.0, 0.5, 1.0, 3.0] {
            map.insert(Nominal::new(v), ());
        }
        let keys: Vec<f64> = map.keys().map(|k| k.value()).collect();
        assert_eq!(keys, vec![0.5, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_equal_setpoints_collapse() {
        let mut map = BTreeMap::new();
        map.insert(Nominal::new(1.5), 1);
        map.insert(Nominal::new(1.5), 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&Nominal::new(1.5)], 2);
    }

    #[test]
    fn test_display_keeps_nominal_form() {
        assert_eq!(Nominal::new(2.0).to_string(), "2");
        assert_eq!(Nominal::new(0.5).to_string(), "0.5");
    }
}
