//! Delimited text output.

use csv::{Terminator, WriterBuilder};

use crate::error::{EngineError, EngineResult};
use crate::models::{NO_DATA_SENTINEL, ScheduleMatrix, ScheduleOutcome};

/// First cell of the header row.
pub const HEADER_LABEL: &str = "Position";

/// Writes the matrix as delimited text: a header row of slot labels, then
/// one row per station. Cells containing the delimiter are quoted.
///
/// # Example
///
/// ```
/// use station_rota::models::{MatrixRow, ScheduleMatrix, Station};
/// use station_rota::report::to_delimited;
///
/// let matrix = ScheduleMatrix {
///     columns: vec!["9:00 AM".to_string()],
///     rows: vec![MatrixRow { station: Station::Handout, cells: vec!["Jane D.".to_string()] }],
/// };
/// let text = to_delimited(&matrix, b',').unwrap();
/// assert_eq!(text, "Position,9:00 AM\nHandout,Jane D.\n");
/// ```
pub fn to_delimited(matrix: &ScheduleMatrix, delimiter: u8) -> EngineResult<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(
        std::iter::once(HEADER_LABEL).chain(matrix.columns.iter().map(String::as_str)),
    )?;
    for row in &matrix.rows {
        writer.write_record(
            std::iter::once(row.station.label()).chain(row.cells.iter().map(String::as_str)),
        )?;
    }

    let bytes = writer.into_inner().map_err(|e| EngineError::ReportError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::ReportError {
        message: e.to_string(),
    })
}

impl ScheduleMatrix {
    /// See [`to_delimited`].
    pub fn to_delimited(&self, delimiter: u8) -> EngineResult<String> {
        to_delimited(self, delimiter)
    }
}

/// Renders an outcome: the delimited table, or the no-data sentinel.
pub fn render(outcome: &ScheduleOutcome, delimiter: u8) -> EngineResult<String> {
    match outcome.matrix() {
        Some(matrix) => to_delimited(matrix, delimiter),
        None => Ok(NO_DATA_SENTINEL.to_string()),
    }
}
