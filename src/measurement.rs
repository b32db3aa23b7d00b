// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

/// Length of the measure command response: CO2eq word, CRC, TVOC word, CRC.
pub const MEASUREMENT_LEN: usize = 6;

/// One air quality reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sgp30Measurement {
    /// CO2 equivalent in ppm
    pub co2: u16,
    /// Total volatile organic compounds in ppb
    pub tvoc: u16,
}

impl Sgp30Measurement {
    /// Decodes a measure command response.
    ///
    /// The CRC bytes (2 and 5) are skipped, so every input decodes.
    pub fn from_bytes(buf: &[u8; MEASUREMENT_LEN]) -> Self {
        Sgp30Measurement {
            co2: u16::from_be_bytes([buf[0], buf[1]]),
            tvoc: u16::from_be_bytes([buf[3], buf[4]]),
        }
    }
}

impl fmt::Display for Sgp30Measurement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} CO2, {} TVOC", self.co2, self.tvoc)
    }
}
