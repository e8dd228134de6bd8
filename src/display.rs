// Handing finished charts to the desktop without waiting on them.
//
// Showing a chart launches the platform's image opener and returns at once;
// the window belongs to the desktop from then on.
use crate::charts::ChartArtifact;
use crate::error::DisplayError;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use tracing::{debug, warn};

pub trait ChartViewer {
    /// Request a window for the chart and return immediately.
    fn show(&mut self, chart: &ChartArtifact) -> Result<(), DisplayError>;

    /// Called once the user is done with every open chart.
    fn close_all(&mut self) {}
}

/// Opens charts with the system image viewer.
#[derive(Debug, Default)]
pub struct SystemViewer {
    children: Vec<Child>,
}

impl SystemViewer {
    pub fn new() -> Self {
        Self::default()
    }

    fn opener_command(path: &Path) -> Option<Command> {
        let mut cmd = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c
        } else if cfg!(unix) {
            Command::new("xdg-open")
        } else {
            return None;
        };
        cmd.arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        Some(cmd)
    }
}

impl ChartViewer for SystemViewer {
    fn show(&mut self, chart: &ChartArtifact) -> Result<(), DisplayError> {
        let path = chart.saved_to.as_deref().ok_or(DisplayError::NotSaved)?;
        let mut cmd = Self::opener_command(path).ok_or(DisplayError::Unsupported)?;
        let program = cmd.get_program().to_string_lossy().into_owned();
        let child = cmd
            .spawn()
            .map_err(|source| DisplayError::Launch { program, source })?;
        debug!(pid = child.id(), path = %path.display(), "chart viewer launched");
        self.children.push(child);
        Ok(())
    }

    fn close_all(&mut self) {
        for mut child in self.children.drain(..) {
            // openers usually hand off to a viewer and exit on their own
            match child.try_wait() {
                Ok(Some(_)) => {}
                Ok(None) => {
                    if let Err(e) = child.kill() {
                        warn!(pid = child.id(), error = %e, "could not stop chart viewer");
                    }
                    let _ = child.wait();
                }
                Err(e) => warn!(pid = child.id(), error = %e, "could not poll chart viewer"),
            }
        }
    }
}
