//! The campaign secretary: an append-only narrative log.
//!
//! Nothing in the simulation reads these reports back. They exist for the
//! player and for the runner's end-of-campaign printout.

use std::io::{self, Write};

#[derive(Debug, Clone, Default)]
pub struct Reporter {
    reports: Vec<String>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("report: {message}");
        self.reports.push(message);
    }

    pub fn reports(&self) -> &[String] {
        &self.reports
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Write every report, oldest first, one per line.
    pub fn print_reports<W: Write>(&self, mut out: W) -> io::Result<()> {
        for report in &self.reports {
            writeln!(out, "{report}")?;
        }
        Ok(())
    }

    /// Take all reports, leaving the log empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.reports)
    }
}
