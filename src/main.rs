// Entry point and the interactive run.
//
// The flow follows a fixed sequence of stages:
// - prompt for a CSV path until one exists (Enter picks the default),
// - load it; a load failure ends the run with nothing else printed,
// - print a preview and the statistics,
// - render, save and show the line chart, then the bar chart,
// - wait for Enter so the chart windows stay up.
mod charts;
mod config;
mod display;
mod error;
mod loader;
mod output;
mod reports;
mod types;
mod util;

use config::Settings;
use display::{ChartViewer, SystemViewer};
use error::{AppError, LoadError};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use types::WeatherTable;

const BANNER_WIDTH: usize = 55;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    AwaitingPath,
    Loading,
    Aborted,
    Loaded,
    Reporting,
    RenderingLine,
    RenderingBar,
    AwaitingExit,
    Terminated,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Aborted,
}

fn enter(stage: Stage) {
    debug!(%stage, "entering stage");
}

/// One trimmed line of input, or `None` once input is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Ask for a CSV path until an existing one is given.
///
/// An empty answer means `default`. Returns `None` if input runs out first.
fn prompt_for_path<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default: &Path,
) -> io::Result<Option<PathBuf>> {
    loop {
        write!(
            out,
            "\n📁 Enter the path to your weather CSV file (or press Enter for '{}'): ",
            default.display()
        )?;
        out.flush()?;
        let Some(answer) = read_line(input)? else {
            writeln!(out)?;
            return Ok(None);
        };
        let path = if answer.is_empty() {
            default.to_path_buf()
        } else {
            PathBuf::from(answer)
        };
        if path.exists() {
            return Ok(Some(path));
        }
        writeln!(
            out,
            "❌ File '{}' not found. Please enter a valid file path.",
            path.display()
        )?;
    }
}

fn show_chart<V: ChartViewer, W: Write>(
    viewer: &mut V,
    out: &mut W,
    chart: &charts::ChartArtifact,
) -> io::Result<()> {
    if let Err(e) = viewer.show(chart) {
        warn!(error = %e, chart = chart.kind.label(), "could not display chart");
        writeln!(
            out,
            "⚠️  Could not open a window for the {}: {}",
            chart.kind.label().to_lowercase(),
            e
        )?;
    }
    Ok(())
}

/// Run one interactive session. `load` turns the chosen path into a table.
fn run<R, W, V, L>(
    input: &mut R,
    out: &mut W,
    viewer: &mut V,
    settings: &Settings,
    mut load: L,
) -> Result<Outcome, AppError>
where
    R: BufRead,
    W: Write,
    V: ChartViewer,
    L: FnMut(&Path) -> Result<WeatherTable, LoadError>,
{
    writeln!(out, "🌤️  Weather Trends Visualizer - SIMULTANEOUS DISPLAY")?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;

    enter(Stage::AwaitingPath);
    let Some(path) = prompt_for_path(input, out, &settings.default_input)? else {
        enter(Stage::Aborted);
        return Ok(Outcome::Aborted);
    };

    enter(Stage::Loading);
    let table = match load(&path) {
        Ok(loaded) => loaded,
        Err(e) => {
            info!(path = %path.display(), error = %e, "load failed");
            match e {
                LoadError::NotFound { .. } => writeln!(out, "❌ Error: {}", e)?,
                _ => writeln!(out, "❌ Error loading file: {}", e)?,
            }
            enter(Stage::Aborted);
            return Ok(Outcome::Aborted);
        }
    };
    enter(Stage::Loaded);
    writeln!(
        out,
        "✓ Successfully loaded {} records from {}",
        util::format_int(table.len()),
        path.display()
    )?;

    enter(Stage::Reporting);
    writeln!(out, "\n📋 Data Preview (first {} rows):", settings.preview_rows)?;
    let preview = output::preview_rows(&table, settings.preview_rows);
    output::preview_table_rows(out, &preview, settings.preview_rows)?;
    let summary = reports::summarize(&table);
    reports::print_statistics(out, &summary)?;

    writeln!(out, "\n🎨 Creating visualizations...")?;

    enter(Stage::RenderingLine);
    writeln!(out, "\n📈 Generating line chart...")?;
    let line_path = settings.line_chart_path();
    let line = charts::create_line_chart(&table, settings.dpi, Some(line_path.as_path()))?;
    writeln!(out, "✓ Line chart saved as '{}'", line_path.display())?;
    show_chart(viewer, out, &line)?;

    enter(Stage::RenderingBar);
    writeln!(out, "📊 Generating bar chart...")?;
    let bar_path = settings.bar_chart_path();
    let bar = charts::create_bar_chart(&table, settings.dpi, Some(bar_path.as_path()))?;
    writeln!(out, "✓ Bar chart saved as '{}'", bar_path.display())?;
    show_chart(viewer, out, &bar)?;

    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "✅ BOTH CHARTS DISPLAYED SIMULTANEOUSLY!")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "📁 Charts saved as:")?;
    writeln!(out, "   • {}", line_path.display())?;
    writeln!(out, "   • {}", bar_path.display())?;
    writeln!(out, "\n🎉 Weather analysis completed successfully!")?;
    writeln!(out, "\n💡 TIP: Both charts are now open! You can view them side by side.")?;
    writeln!(out, "📝 Close the chart windows when you're done viewing them.")?;

    enter(Stage::AwaitingExit);
    write!(out, "\n⏸️  Press Enter to exit and close all charts...")?;
    out.flush()?;
    read_line(input)?;
    viewer.close_all();

    enter(Stage::Terminated);
    Ok(Outcome::Completed)
}

fn main() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let settings = Settings::default();
    let mut viewer = SystemViewer::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut viewer,
        &settings,
        loader::load_weather,
    )?;
    debug!(?outcome, "run finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartArtifact, ChartKind};
    use crate::error::DisplayError;
    use std::io::Cursor;
    use tempfile::TempDir;

    const CSV: &str = "Date,Temperature\n\
        2024-07-01,29.5\n\
        2024-07-02,31.0\n\
        2024-07-03,35.5\n\
        2024-07-04,33.0\n\
        2024-07-05,28.0\n\
        2024-07-06,36.0\n\
        2024-07-07,30.5\n";

    #[derive(Debug, Default)]
    struct RecordingViewer {
        events: Vec<String>,
    }

    impl ChartViewer for RecordingViewer {
        fn show(&mut self, chart: &ChartArtifact) -> Result<(), DisplayError> {
            self.events.push(format!("show {:?}", chart.kind));
            Ok(())
        }

        fn close_all(&mut self) {
            self.events.push("close".to_string());
        }
    }

    struct FailingViewer;

    impl ChartViewer for FailingViewer {
        fn show(&mut self, _chart: &ChartArtifact) -> Result<(), DisplayError> {
            Err(DisplayError::Unsupported)
        }
    }

    fn workspace() -> (TempDir, PathBuf, Settings) {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("weather.csv");
        std::fs::write(&csv, CSV).unwrap();
        let settings = Settings {
            default_input: dir.path().join("weather_data.csv"),
            output_dir: dir.path().to_path_buf(),
            dpi: 60,
            ..Settings::default()
        };
        (dir, csv, settings)
    }

    fn session<V: ChartViewer>(
        answers: &str,
        settings: &Settings,
        viewer: &mut V,
        loaded: &mut Vec<PathBuf>,
    ) -> (Outcome, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = run(&mut input, &mut out, viewer, settings, |p: &Path| {
            loaded.push(p.to_path_buf());
            loader::load_weather(p)
        })
        .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prompt_retries_until_the_path_exists() {
        let (dir, csv, settings) = workspace();
        let missing = dir.path().join("missing.csv");
        let answers = format!("{}\n{}\n", missing.display(), csv.display());
        let mut input = Cursor::new(answers.into_bytes());
        let mut out = Vec::new();
        let chosen = prompt_for_path(&mut input, &mut out, &settings.default_input).unwrap();
        assert_eq!(chosen, Some(csv));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("not found").count(), 1);
        assert!(text.contains("missing.csv"));
    }

    #[test]
    fn empty_answer_uses_the_default_path() {
        let (_dir, csv, settings) = workspace();
        let settings = Settings {
            default_input: csv.clone(),
            ..settings
        };
        let mut input = Cursor::new(b"\n".to_vec());
        let mut out = Vec::new();
        let chosen = prompt_for_path(&mut input, &mut out, &settings.default_input).unwrap();
        assert_eq!(chosen, Some(csv));
    }

    #[test]
    fn prompt_gives_up_at_end_of_input() {
        let (_dir, _csv, settings) = workspace();
        let mut input = Cursor::new(b"nope.csv\n".to_vec());
        let mut out = Vec::new();
        let chosen = prompt_for_path(&mut input, &mut out, &settings.default_input).unwrap();
        assert_eq!(chosen, None);
    }

    #[test]
    fn loader_runs_once_with_the_valid_path() {
        let (dir, csv, settings) = workspace();
        let answers = format!("{}\n{}\n\n", dir.path().join("nope.csv").display(), csv.display());
        let mut viewer = RecordingViewer::default();
        let mut loaded = Vec::new();
        let (outcome, _) = session(&answers, &settings, &mut viewer, &mut loaded);
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(loaded, vec![csv]);
    }

    #[test]
    fn full_run_saves_and_shows_both_charts_before_exit() {
        let (_dir, csv, settings) = workspace();
        let mut viewer = RecordingViewer::default();
        let mut loaded = Vec::new();
        let answers = format!("{}\n\n", csv.display());
        let (outcome, text) = session(&answers, &settings, &mut viewer, &mut loaded);

        assert_eq!(outcome, Outcome::Completed);
        assert!(text.contains("✓ Successfully loaded 7 records"));
        assert!(text.contains("📅 Date Range: 2024-07-01 to 2024-07-07"));
        assert!(text.contains("Average Temperature: 31.9°C"));
        assert!(text.contains("🔥 Hottest Day: 2024-07-06 (36.0°C)"));
        assert!(text.contains("❄️  Coolest Day: 2024-07-05 (28.0°C)"));
        assert!(text.contains("2024-07-05"));

        for path in [settings.line_chart_path(), settings.bar_chart_path()] {
            assert!(std::fs::metadata(&path).unwrap().len() > 0, "{}", path.display());
        }
        assert_eq!(
            viewer.events,
            vec![
                format!("show {:?}", ChartKind::Line),
                format!("show {:?}", ChartKind::Bar),
                "close".to_string(),
            ]
        );
        let line_saved = text.find("✓ Line chart saved").unwrap();
        let bar_saved = text.find("✓ Bar chart saved").unwrap();
        let exit_prompt = text.find("Press Enter to exit").unwrap();
        assert!(line_saved < bar_saved && bar_saved < exit_prompt);
    }

    #[test]
    fn missing_file_produces_no_statistics_or_charts() {
        let (dir, _csv, settings) = workspace();
        let answers = format!("{}\n", dir.path().join("nope.csv").display());
        let mut viewer = RecordingViewer::default();
        let mut loaded = Vec::new();
        let (outcome, text) = session(&answers, &settings, &mut viewer, &mut loaded);
        assert_eq!(outcome, Outcome::Aborted);
        assert!(loaded.is_empty());
        assert!(!text.contains("STATISTICS"));
        assert!(!settings.line_chart_path().exists());
        assert!(!settings.bar_chart_path().exists());
        assert!(viewer.events.is_empty());
    }

    #[test]
    fn file_vanishing_before_load_aborts_quietly() {
        let (_dir, csv, settings) = workspace();
        let mut input = Cursor::new(format!("{}\n", csv.display()).into_bytes());
        let mut out = Vec::new();
        let mut viewer = RecordingViewer::default();
        let mut calls = 0;
        let outcome = run(&mut input, &mut out, &mut viewer, &settings, |p: &Path| {
            calls += 1;
            Err(LoadError::NotFound {
                path: p.to_path_buf(),
            })
        })
        .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome, Outcome::Aborted);
        assert_eq!(calls, 1);
        assert!(text.contains(&format!("❌ Error: File '{}' not found!", csv.display())));
        assert!(!text.contains("Data Preview"));
        assert!(!text.contains("STATISTICS"));
        assert!(!settings.line_chart_path().exists());
        assert!(!settings.bar_chart_path().exists());
        assert!(viewer.events.is_empty());
    }

    #[test]
    fn unparseable_file_aborts_after_one_load() {
        let (dir, _csv, settings) = workspace();
        let bad = dir.path().join("bad.csv");
        std::fs::write(&bad, "day,temp\nMon,30\n").unwrap();
        let mut viewer = RecordingViewer::default();
        let mut loaded = Vec::new();
        let answers = format!("{}\n", bad.display());
        let (outcome, text) = session(&answers, &settings, &mut viewer, &mut loaded);
        assert_eq!(outcome, Outcome::Aborted);
        assert_eq!(loaded, vec![bad]);
        assert!(text.contains("❌ Error loading file"));
        assert!(!text.contains("STATISTICS"));
        assert!(!settings.line_chart_path().exists());
        assert!(!settings.bar_chart_path().exists());
    }

    #[test]
    fn viewer_failure_does_not_stop_the_run() {
        let (_dir, csv, settings) = workspace();
        let mut loaded = Vec::new();
        let answers = format!("{}\n\n", csv.display());
        let (outcome, text) = session(&answers, &settings, &mut FailingViewer, &mut loaded);
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(text.matches("Could not open a window").count(), 2);
        assert!(settings.bar_chart_path().exists());
    }
}
