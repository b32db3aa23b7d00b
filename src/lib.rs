// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! SGP30 driver implementing the basic SGP30 I2C air quality sensor operations
//!
//! Operations taken from the [datasheet](https://sensirion.com/media/documents/984E0DD5/61644B8B/Sensirion_Gas_Sensors_Datasheet_SGP30.pdf)
//! **IMPORTANT**
//! Only the init and measure commands are implemented. The CRC bytes of the
//! response are not checked.
//!
//! Attaching waits the 100 ms power-up time, sends the init command and
//! registers the `sgp30` reading entry point. Each reading afterwards is a
//! fresh measure transaction, nothing is cached.
//!
//! ## Basic Example
//!
//! Obtaining a reading, co2 and tvoc
//!
//!
//!```no_run
//!use sgp30_i2c::registry::EntryTable;
//!use sgp30_i2c::sgp30::Sgp30;
//!
//!fn main() {
//!    let mut entries = EntryTable::new();
//!    // Open the I2C device and run the init sequence
//!    let sgp = Sgp30::open("/dev/i2c-1", &mut entries).unwrap();
//!
//!    match sgp.take_reading() {
//!        Ok(reading) => print!("{}", reading),
//!        Err(e) => println!("Error obtaining measurements. More details: {}", e),
//!    }
//!
//!    sgp.detach(&mut entries);
//!}
//!```
//!

/// SGP30 commands and their wire encoding
pub mod command;
/// Driver errors
pub mod error;
/// Measurement response decoding
pub mod measurement;
/// Reading entry point registration
pub mod registry;
/// Bound SGP30 device and its operations
pub mod sgp30;
/// Byte transport over i2cdev devices
pub mod transport;

#[cfg(test)]
mod fake;

pub use error::{RegistrationError, Sgp30Error};
pub use measurement::Sgp30Measurement;
pub use sgp30::Sgp30;
