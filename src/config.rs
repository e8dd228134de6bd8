// Fixed run settings.
//
// The binary never reads these from the environment or the command line: the
// only interactive input is the CSV path. Tests swap `output_dir` for a
// scratch directory.
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "weather_data.csv";
pub const LINE_CHART_FILE: &str = "temperature_line_chart.png";
pub const BAR_CHART_FILE: &str = "temperature_bar_chart.png";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Path used when the user just presses Enter at the prompt.
    pub default_input: PathBuf,
    pub output_dir: PathBuf,
    pub line_chart_file: String,
    pub bar_chart_file: String,
    pub dpi: u32,
    pub preview_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            line_chart_file: LINE_CHART_FILE.to_string(),
            bar_chart_file: BAR_CHART_FILE.to_string(),
            dpi: 300,
            preview_rows: 5,
        }
    }
}

impl Settings {
    pub fn line_chart_path(&self) -> PathBuf {
        self.output_path(&self.line_chart_file)
    }

    pub fn bar_chart_path(&self) -> PathBuf {
        self.output_path(&self.bar_chart_file)
    }

    fn output_path(&self, name: &str) -> PathBuf {
        if self.output_dir == Path::new(".") {
            PathBuf::from(name)
        } else {
            self.output_dir.join(name)
        }
    }
}
