// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt::Debug;
use i2cdev::core::I2CDevice;

/// Blocking byte transport to a single bus device.
///
/// Start/stop conditions, the address byte and ACK handling belong to the
/// implementation. Both calls return the number of bytes moved.
pub trait Transport {
    /// Error reported by the bus.
    type Error: Debug;

    /// Write `buf` to the device.
    fn send(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Read `buf.len()` bytes from the device into `buf`.
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Any i2cdev device (`LinuxI2CDevice`, `MockI2CDevice`, ...) either moves the
/// whole buffer or fails.
impl<D> Transport for D
where
    D: I2CDevice,
    D::Error: Debug,
{
    type Error = D::Error;

    fn send(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.write(buf)?;
        Ok(buf.len())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.read(buf)?;
        Ok(buf.len())
    }
}
