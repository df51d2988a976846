use core::fmt;

use chrono::{DateTime, Utc};

use crate::frame::{Frame, MEASUREMENT_OFFSET};

/// A single measurement decoded from a validated data frame.
///
/// Concentrations are in µg/m³, particle counts are per 0.1 L of air
/// and cumulative: `particles_1_0um` counts everything 1.0 µm and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Capture time, assigned when the frame was decoded.
    pub timestamp: DateTime<Utc>,
    /// PM1.0, factory (CF=1) calibration
    pub pm1_0_cf1: u16,
    /// PM2.5, factory (CF=1) calibration
    pub pm2_5_cf1: u16,
    /// PM10, factory (CF=1) calibration
    pub pm10_cf1: u16,
    /// PM1.0, atmospheric environment
    pub pm1_0_std: u16,
    /// PM2.5, atmospheric environment
    pub pm2_5_std: u16,
    /// PM10, atmospheric environment
    pub pm10_std: u16,
    /// Particles of 0.3 µm and above
    pub particles_0_3um: u16,
    /// Particles of 0.5 µm and above
    pub particles_0_5um: u16,
    /// Particles of 1.0 µm and above
    pub particles_1_0um: u16,
    /// Particles of 2.5 µm and above
    pub particles_2_5um: u16,
    /// Particles of 5.0 µm and above
    pub particles_5_0um: u16,
    /// Particles of 10 µm and above
    pub particles_10um: u16,
}

impl Reading {
    ///
    /// Maps the twelve big-endian fields of a frame onto a reading.
    /// The frame is expected to have passed `frame::verify` already.
    ///
    pub fn decode(frame: &Frame, timestamp: DateTime<Utc>) -> Self {
        let field = |index: usize| {
            let offset = MEASUREMENT_OFFSET + index * 2;
            u16::from_be_bytes([frame[offset], frame[offset + 1]])
        };

        Self {
            timestamp,
            pm1_0_cf1: field(0),
            pm2_5_cf1: field(1),
            pm10_cf1: field(2),
            pm1_0_std: field(3),
            pm2_5_std: field(4),
            pm10_std: field(5),
            particles_0_3um: field(6),
            particles_0_5um: field(7),
            particles_1_0um: field(8),
            particles_2_5um: field(9),
            particles_5_0um: field(10),
            particles_10um: field(11),
        }
    }
}

/// One CSV line: timestamp, then each size as CF=1/atmospheric pairs, then the counts.
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},", self.timestamp.format("%Y-%m-%d %H:%M:%S"))?;
        for value in [
            self.pm1_0_cf1,
            self.pm1_0_std,
            self.pm2_5_cf1,
            self.pm2_5_std,
            self.pm10_cf1,
            self.pm10_std,
            self.particles_0_3um,
            self.particles_0_5um,
            self.particles_1_0um,
            self.particles_2_5um,
            self.particles_5_0um,
            self.particles_10um,
        ] {
            write!(f, "{},", value)?;
        }
        Ok(())
    }
}
