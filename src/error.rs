use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a CSV file could not become a `WeatherTable`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File '{}' not found!", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("row {row}: {message}")]
    Parse { row: u64, message: String },
    #[error("row {row}: temperature '{value}' is not a finite number")]
    InvalidTemperature { row: u64, value: f64 },
    #[error("'{}' contains no data rows", path.display())]
    Empty { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("plotting error: {0}")]
    Drawing(String),
    #[error("png encoding error: {0}")]
    Encode(#[from] png::EncodingError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("no image viewer available on this platform")]
    Unsupported,
    #[error("chart has not been saved to a file")]
    NotSaved,
    #[error("could not launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Failures that end a run abruptly (load failures do not: they abort quietly).
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}
