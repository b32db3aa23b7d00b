// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

use crate::command::{write_command, Command};
use crate::error::Sgp30Error;
use crate::measurement::{Sgp30Measurement, MEASUREMENT_LEN};
use crate::registry::Registry;
use crate::transport::Transport;
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::{thread, time};

/// Fixed I2C address of the SGP30
pub const SGP30_ADDRESS: u16 = 0x58;
/// Device name the driver binds to
pub const DEVICE_NAME: &str = "SGP30";
/// Device tree compatible string
pub const COMPATIBLE: &str = "sgp30";
/// Name of the reading entry point
pub const ENTRY_NAME: &str = "sgp30";
/// Bus used by [`Sgp30::open`] when nothing else is configured
pub const DEFAULT_BUS: &str = "/dev/i2c-1";
/// Power-up time before the sensor accepts commands
pub const SETTLE_DELAY: time::Duration = time::Duration::from_millis(100);

/// SGP30 Struct, a bound sensor.
///
/// Only [`Sgp30::attach`] creates one, after the init command went out, and
/// [`Sgp30::detach`] consumes it. Each measurement holds the bus lock for its
/// whole write/read transaction, so a shared `&Sgp30` can be read from
/// several threads.
#[derive(Debug)]
pub struct Sgp30<T> {
    bus: Mutex<T>,
    address: u16,
}

impl Sgp30<LinuxI2CDevice> {
    /// Opens the I2C bus at `path` on the standard address 0x58 and
    /// attaches to the sensor.
    ///
    pub fn open<P, R>(path: P, registry: &mut R) -> Result<Self, Sgp30Error<LinuxI2CError>>
    where
        P: AsRef<Path>,
        R: Registry,
    {
        let device = LinuxI2CDevice::new(path, SGP30_ADDRESS).map_err(Sgp30Error::Bus)?;
        Sgp30::attach(device, SGP30_ADDRESS, registry)
    }
}

impl<T: Transport> Sgp30<T> {
    /// Binds the sensor found at `address`.
    ///
    /// Registers the reading entry point, waits [`SETTLE_DELAY`] and sends
    /// the init command. An address other than 0x58 fails before anything
    /// is registered or written. If the init command fails the registration
    /// is removed again.
    pub fn attach<R: Registry>(
        mut bus: T,
        address: u16,
        registry: &mut R,
    ) -> Result<Self, Sgp30Error<T::Error>> {
        tracing::info!(
            address = format_args!("{address:#04x}"),
            compatible = COMPATIBLE,
            "sgp30 init started"
        );
        if address != SGP30_ADDRESS {
            tracing::error!(
                address = format_args!("{address:#04x}"),
                "wrong I2C address for {DEVICE_NAME}"
            );
            return Err(Sgp30Error::WrongAddress {
                expected: SGP30_ADDRESS,
                found: address,
            });
        }

        registry.register(ENTRY_NAME)?;

        thread::sleep(SETTLE_DELAY);
        if let Err(e) = write_command(&mut bus, Command::Init) {
            tracing::error!(error = %e, "sgp30 init command failed");
            registry.remove(ENTRY_NAME);
            return Err(e);
        }

        tracing::info!("sgp30 initialized and probed");
        Ok(Sgp30 {
            bus: Mutex::new(bus),
            address,
        })
    }

    /// Unbinds the sensor, removes its entry point and gives the bus back.
    /// No command is sent to the sensor.
    pub fn detach<R: Registry>(self, registry: &mut R) -> T {
        registry.remove(ENTRY_NAME);
        tracing::info!("sgp30 removed");
        self.bus.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Address the sensor was bound at, always 0x58.
    ///
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Get CO2eq and TVOC from the device.
    ///
    /// Sends the measure command and reads the 6 byte response in one
    /// locked transaction. A failed or short transfer is returned as an
    /// error; the CRC bytes are not checked.
    pub fn measure(&self) -> Result<Sgp30Measurement, Sgp30Error<T::Error>> {
        let mut bus = self.bus.lock().unwrap_or_else(PoisonError::into_inner);
        write_command(&mut *bus, Command::Measure)?;

        let mut data_buffer = [0u8; MEASUREMENT_LEN];
        let got = bus.receive(&mut data_buffer).map_err(Sgp30Error::Bus)?;
        if got != MEASUREMENT_LEN {
            return Err(Sgp30Error::ShortTransfer {
                expected: MEASUREMENT_LEN,
                got,
            });
        }

        let measurement = Sgp30Measurement::from_bytes(&data_buffer);
        tracing::debug!(
            address = self.address,
            co2 = measurement.co2,
            tvoc = measurement.tvoc,
            "measured"
        );
        Ok(measurement)
    }

    /// Takes a fresh reading and formats it as `"<co2> CO2, <tvoc> TVOC\n"`.
    pub fn take_reading(&self) -> Result<String, Sgp30Error<T::Error>> {
        Ok(format!("{}\n", self.measure()?))
    }
}
