use crate::core::diagnostics::EnergyReport;
use crate::core::models::system::ParticleSystem;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error while writing frame output: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error while writing energy log: {0}")]
    Csv(#[from] csv::Error),
}

/// A snapshot of the simulation handed to sinks after a frame completes.
#[derive(Debug, Clone, Copy)]
pub struct FrameRecord<'a> {
    /// Index of the frame; frame 0 is the initial state.
    pub frame_index: u64,
    /// Simulated time at the end of the frame.
    pub time: f64,
    pub system: &'a ParticleSystem,
    pub energy: EnergyReport,
}

/// Consumes recorded frames, typically by serializing them.
///
/// Sinks only ever read the system; they are called after a frame's sub-steps have
/// completed and never while a frame is in flight.
pub trait FrameSink {
    /// Records one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be written.
    fn record(&mut self, frame: &FrameRecord<'_>) -> Result<(), OutputError>;

    /// Flushes any buffered output. Called once after the last frame.
    ///
    /// # Errors
    ///
    /// Returns an error if buffered data cannot be written.
    fn finish(&mut self) -> Result<(), OutputError> {
        Ok(())
    }
}
