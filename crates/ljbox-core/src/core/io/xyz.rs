use super::traits::{FrameRecord, FrameSink, OutputError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const DEFAULT_ELEMENT: &str = "Ar";

/// Writes recorded frames as a multi-frame XYZ trajectory.
///
/// Each frame is a particle-count line, a comment line carrying the frame index, the
/// simulated time and the total energy, then one `element x y z` line per particle in
/// index order. Most molecular viewers can replay the result directly.
pub struct XyzTrajectoryWriter<W: Write> {
    writer: W,
    element: String,
}

impl XyzTrajectoryWriter<BufWriter<File>> {
    /// Creates (or truncates) a trajectory file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, OutputError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> XyzTrajectoryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            element: DEFAULT_ELEMENT.to_string(),
        }
    }

    /// Overrides the element symbol written for every particle.
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for XyzTrajectoryWriter<W> {
    fn record(&mut self, frame: &FrameRecord<'_>) -> Result<(), OutputError> {
        writeln!(self.writer, "{}", frame.system.len())?;
        writeln!(
            self.writer,
            "frame={} time={:.6} energy={:.6}",
            frame.frame_index,
            frame.time,
            frame.energy.total()
        )?;
        for particle in frame.system.particles() {
            let p = &particle.position;
            writeln!(
                self.writer,
                "{:<2} {:>14.8} {:>14.8} {:>14.8}",
                self.element, p.x, p.y, p.z
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagnostics::EnergyReport;
    use crate::core::models::particle::Particle;
    use crate::core::models::system::ParticleSystem;
    use nalgebra::Point3;

    fn sample_system() -> ParticleSystem {
        ParticleSystem::new(
            vec![
                Particle::at_rest(Point3::new(1.0, 2.0, 3.0)),
                Particle::at_rest(Point3::new(4.5, 5.0, 6.25)),
            ],
            1.0,
            10.0,
        )
    }

    fn record(writer: &mut XyzTrajectoryWriter<Vec<u8>>, system: &ParticleSystem, index: u64) {
        writer
            .record(&FrameRecord {
                frame_index: index,
                time: index as f64 * 0.025,
                system,
                energy: EnergyReport::new(0.5, -1.0),
            })
            .unwrap();
    }

    #[test]
    fn writes_count_comment_and_one_line_per_particle() {
        let system = sample_system();
        let mut writer = XyzTrajectoryWriter::new(Vec::new());
        record(&mut writer, &system, 3);
        writer.finish().unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "2");
        assert_eq!(lines[1], "frame=3 time=0.075000 energy=-0.500000");

        let fields: Vec<_> = lines[3].split_whitespace().collect();
        assert_eq!(fields[0], "Ar");
        assert_eq!(fields[1].parse::<f64>().unwrap(), 4.5);
        assert_eq!(fields[2].parse::<f64>().unwrap(), 5.0);
        assert_eq!(fields[3].parse::<f64>().unwrap(), 6.25);
    }

    #[test]
    fn consecutive_frames_are_appended() {
        let system = sample_system();
        let mut writer = XyzTrajectoryWriter::new(Vec::new()).with_element("Ne");
        record(&mut writer, &system, 0);
        record(&mut writer, &system, 1);

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[1].starts_with("frame=0"));
        assert!(lines[5].starts_with("frame=1"));
        assert!(lines[6].starts_with("Ne"));
    }

    #[test]
    fn create_writes_to_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trajectory.xyz");
        let system = sample_system();

        let mut writer = XyzTrajectoryWriter::create(&path).unwrap();
        writer
            .record(&FrameRecord {
                frame_index: 0,
                time: 0.0,
                system: &system,
                energy: EnergyReport::default(),
            })
            .unwrap();
        writer.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("2\nframe=0"));
    }
}
