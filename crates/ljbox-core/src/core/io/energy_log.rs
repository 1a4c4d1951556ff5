use super::traits::{FrameRecord, FrameSink, OutputError};
use crate::core::diagnostics::temperature;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct EnergyRow {
    frame: u64,
    time: f64,
    kinetic: f64,
    potential: f64,
    total: f64,
    temperature: f64,
}

/// Writes one CSV row of energy diagnostics per recorded frame.
///
/// Columns: `frame,time,kinetic,potential,total,temperature`. The header is emitted with
/// the first row.
pub struct EnergyLogWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl EnergyLogWriter<File> {
    /// Creates (or truncates) an energy log at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, OutputError> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> EnergyLogWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if buffered rows cannot be flushed.
    pub fn into_inner(self) -> Result<W, OutputError> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> FrameSink for EnergyLogWriter<W> {
    fn record(&mut self, frame: &FrameRecord<'_>) -> Result<(), OutputError> {
        self.writer.serialize(EnergyRow {
            frame: frame.frame_index,
            time: frame.time,
            kinetic: frame.energy.kinetic,
            potential: frame.energy.potential,
            total: frame.energy.total(),
            temperature: temperature(frame.system),
        })?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }
}
