use crate::error::LoadError;
use crate::types::{RawRow, WeatherRecord, WeatherTable};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

const REQUIRED_COLUMNS: [&str; 2] = ["Date", "Temperature"];

pub fn load_weather(path: &Path) -> Result<WeatherTable, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let table = WeatherTable::new(read_weather(file)?).ok_or_else(|| LoadError::Empty {
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), rows = table.len(), "loaded weather table");
    Ok(table)
}

/// Parse CSV text from any reader. Stops at the first bad row.
pub fn read_weather<R: Read>(input: R) -> Result<Vec<WeatherRecord>, LoadError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let headers = rdr.headers().map_err(|e| csv_error(e, 1))?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::Parse {
                row: 1,
                message: format!("missing required column '{}'", column),
            });
        }
    }

    let mut records: Vec<WeatherRecord> = Vec::new();
    for (i, result) in rdr.deserialize::<RawRow>().enumerate() {
        // header is line 1
        let line = i as u64 + 2;
        let row = result.map_err(|e| csv_error(e, line))?;
        if !row.temperature.is_finite() {
            return Err(LoadError::InvalidTemperature {
                row: line,
                value: row.temperature,
            });
        }
        records.push(WeatherRecord {
            date: row.date,
            temperature: row.temperature,
        });
    }
    Ok(records)
}

fn csv_error(e: csv::Error, fallback_line: u64) -> LoadError {
    let row = e.position().map(|p| p.line()).unwrap_or(fallback_line);
    LoadError::Parse {
        row,
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn loads_every_row_in_file_order() {
        let f = csv_file("Date,Temperature\n2024-07-01,31.5\n2024-07-02,29.0\n2024-07-03,35.2\n");
        let table = load_weather(f.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.first().date, "2024-07-01");
        assert_eq!(table.temperatures(), vec![31.5, 29.0, 35.2]);
    }

    #[test]
    fn extra_columns_and_padding_are_tolerated() {
        let records = read_weather(
            "Humidity, Date , Temperature\n60, Mon , 30.5\n55, Tue , 31\n".as_bytes(),
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "Mon");
        assert_eq!(records[1].temperature, 31.0);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_weather(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn header_only_file_is_empty() {
        let f = csv_file("Date,Temperature\n");
        let err = load_weather(f.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn wrong_column_names_fail_to_parse() {
        let f = csv_file("day,temp\n2024-07-01,31.5\n");
        match load_weather(f.path()).unwrap_err() {
            LoadError::Parse { row, message } => {
                assert_eq!(row, 1);
                assert!(message.contains("Date"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_temperature_reports_its_line() {
        let err = read_weather("Date,Temperature\n2024-07-01,31.5\n2024-07-02,hot\n".as_bytes())
            .unwrap_err();
        match err {
            LoadError::Parse { row, .. } => assert_eq!(row, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nan_temperature_is_rejected() {
        let err = read_weather("Date,Temperature\n2024-07-01,NaN\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidTemperature { row: 2, .. }));
    }
}
