use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{PlayerRecord, Username};

const HEADER: [&str; 6] = [
    "Name",
    "Current Elo",
    "Highest of all time",
    "Current season lowest",
    "Average time pred",
    "Best time pred",
];

/// CSV sink for aggregated players; the header is written on creation
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl ReportWriter<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file {}", path.display()))?;
        Self::new(file)
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer
            .write_record(HEADER)
            .context("Failed to write report header")?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_player(&mut self, username: &Username, record: &PlayerRecord) -> Result<()> {
        self.writer
            .write_record([
                username.to_string(),
                record.current_rating.to_string(),
                record.highest_rating.to_string(),
                record.lowest_rating.to_string(),
                record.average_elo.to_string(),
                record.best_elo.to_string(),
            ])
            .with_context(|| format!("Failed to write report row for {}", username))?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush buffered rows and hand back the underlying sink
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow!("Failed to flush report: {}", e.error()))
    }
}
