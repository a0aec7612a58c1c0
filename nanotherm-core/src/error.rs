use thiserror::Error;

#[derive(Debug, Error)]
pub enum NanothermError {
    #[error("Dataset file not found at '{0}'")]
    DatasetNotFound(String),

    #[error("Dataset '{0}' is missing required column '{1}'")]
    MissingColumn(String, String),

    #[error("Failed to process CSV file '{0}': {1}")]
    Csv(String, #[source] csv::Error),

    #[error("Row {row}: inlet temperature {inlet_temp_c} °C sits on the ambient reference; effectiveness is undefined")]
    DegenerateObservation { row: usize, inlet_temp_c: f64 },
}
