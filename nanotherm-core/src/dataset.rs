use std::path::Path;

use log::debug;
use nanotherm_schemas::observation::{Observation, REQUIRED_COLUMNS};

use crate::error::NanothermError;

/// Load every observation from an experimental results CSV into memory.
///
/// The file must exist and carry the headers listed in
/// [`REQUIRED_COLUMNS`]; extra columns are ignored. Datasets from a single
/// experimental campaign are small, so the whole table is read in one pass.
pub fn load_observations(path: &Path) -> Result<Vec<Observation>, NanothermError> {
    if !path.exists() {
        return Err(NanothermError::DatasetNotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| NanothermError::Csv(path.display().to_string(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| NanothermError::Csv(path.display().to_string(), e))?
        .clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(NanothermError::MissingColumn(
                path.display().to_string(),
                required.to_string(),
            ));
        }
    }

    let mut observations = Vec::new();
    for result in reader.deserialize() {
        let record: Observation =
            result.map_err(|e| NanothermError::Csv(path.display().to_string(), e))?;
        observations.push(record);
    }

    debug!(
        "Loaded {} observations from '{}'",
        observations.len(),
        path.display()
    );
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_dataset(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_all_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            &dir,
            "results.csv",
            "InletTemp_C,OutletTemp_C,FlowRate_L/min,Concentration_percent\n\
             80.0,60.0,2.0,1.0\n\
             78.5,58.2,1.0,0.5\n",
        );

        let observations = load_observations(&path).unwrap();
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].inlet_temp_c, 80.0);
        assert_eq!(observations[0].outlet_temp_c, 60.0);
        assert_eq!(observations[1].flow_rate_l_min, 1.0);
        assert_eq!(observations[1].concentration_percent, 0.5);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            &dir,
            "results.csv",
            "RunId,InletTemp_C,OutletTemp_C,FlowRate_L/min,Concentration_percent\n\
             7,80.0,60.0,2.0,1.0\n",
        );

        let observations = load_observations(&path).unwrap();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].inlet_temp_c, 80.0);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.csv");

        let err = load_observations(&path).unwrap_err();
        assert!(matches!(err, NanothermError::DatasetNotFound(_)));
    }

    #[test]
    fn test_missing_column_is_named() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            &dir,
            "results.csv",
            "InletTemp_C,OutletTemp_C,Concentration_percent\n80.0,60.0,1.0\n",
        );

        let err = load_observations(&path).unwrap_err();
        match err {
            NanothermError::MissingColumn(_, column) => assert_eq!(column, "FlowRate_L/min"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_value_is_a_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            &dir,
            "results.csv",
            "InletTemp_C,OutletTemp_C,FlowRate_L/min,Concentration_percent\n\
             not-a-number,60.0,2.0,1.0\n",
        );

        let err = load_observations(&path).unwrap_err();
        assert!(matches!(err, NanothermError::Csv(_, _)));
    }
}
