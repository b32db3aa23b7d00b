// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

use clap::Parser;
use i2cdev::linux::LinuxI2CDevice;
use sgp30_i2c::registry::EntryTable;
use sgp30_i2c::sgp30::{DEFAULT_BUS, SGP30_ADDRESS};
use sgp30_i2c::Sgp30;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::prelude::*;

    let App {
        bus,
        address,
        trace_filter,
    } = App::parse();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(trace_filter)
        .init();

    let mut entries = EntryTable::new();
    let device = LinuxI2CDevice::new(&bus, address)?;
    let sgp = Sgp30::attach(device, address, &mut entries)?;
    let reading = sgp.take_reading();
    sgp.detach(&mut entries);

    print!("{}", reading?);
    Ok(())
}

/// Take one reading from an SGP30 air quality sensor.
#[derive(Debug, Parser)]
#[clap(about, version)]
struct App {
    /// I2C bus device the sensor is connected to.
    #[clap(long, env = "SGP30_BUS", default_value = DEFAULT_BUS)]
    bus: PathBuf,

    /// I2C address of the sensor, hex (`0x58`) or decimal.
    #[clap(long, env = "SGP30_ADDRESS", default_value_t = SGP30_ADDRESS, value_parser = parse_address)]
    address: u16,

    /// Tracing filter.
    #[clap(long = "trace", alias = "log", env = "RUST_LOG", default_value = "info")]
    trace_filter: tracing_subscriber::filter::Targets,
}

fn parse_address(s: &str) -> Result<u16, std::num::ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    }
}
