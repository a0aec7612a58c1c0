use csv::Writer;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::analysis::AggregatedSeries;

#[derive(Debug, Serialize)]
struct AggregateRow {
    flow_rate_l_min: f64,
    concentration_percent: f64,
    mean_effectiveness: f64,
    observations: usize,
}

/// Persists aggregated series as a flat CSV, one row per plotted point.
pub struct AggregateWriter {
    writer: Writer<fs::File>,
}

impl AggregateWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn write_series(&mut self, series: &[AggregatedSeries]) -> Result<(), anyhow::Error> {
        for s in series {
            for point in &s.points {
                self.writer.serialize(AggregateRow {
                    flow_rate_l_min: s.flow_rate_l_min,
                    concentration_percent: point.concentration_percent,
                    mean_effectiveness: point.mean_effectiveness,
                    observations: point.observations,
                })?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SeriesPoint;
    use std::fs;

    #[test]
    fn test_writes_one_row_per_point() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aggregated_effectiveness.csv");

        let series = vec![AggregatedSeries {
            flow_rate_l_min: 2.0,
            points: vec![
                SeriesPoint {
                    concentration_percent: 0.5,
                    mean_effectiveness: 0.25,
                    observations: 3,
                },
                SeriesPoint {
                    concentration_percent: 1.0,
                    mean_effectiveness: 0.5,
                    observations: 3,
                },
            ],
        }];

        let mut writer = AggregateWriter::new(&path).unwrap();
        writer.write_series(&series).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "flow_rate_l_min,concentration_percent,mean_effectiveness,observations"
        );
        assert_eq!(lines.next().unwrap(), "2.0,0.5,0.25,3");
        assert_eq!(lines.next().unwrap(), "2.0,1.0,0.5,3");
        assert!(lines.next().is_none());
    }
}
