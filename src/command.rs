// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::Sgp30Error;
use crate::transport::Transport;

/// SGP30 commands.
///
/// Each code goes on the wire as two bytes, most significant first: the
/// shared `0x20` command byte followed by the parameter byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the air quality algorithm
    Init,
    /// Read the current CO2eq and TVOC values
    Measure,
}

impl Command {
    /// The 16 bit command word
    ///
    pub const fn code(self) -> u16 {
        match self {
            Command::Init => 0x2003,
            Command::Measure => 0x2008,
        }
    }

    /// The command word as sent on the bus, `[0x20, parameter]`
    ///
    pub const fn to_bytes(self) -> [u8; 2] {
        self.code().to_be_bytes()
    }
}

/// Writes `command` to the device. No response is read.
pub fn write_command<T: Transport>(
    bus: &mut T,
    command: Command,
) -> Result<(), Sgp30Error<T::Error>> {
    let buffer = command.to_bytes();
    let sent = bus.send(&buffer).map_err(Sgp30Error::Bus)?;
    tracing::trace!(?command, sent, "wrote command");
    if sent != buffer.len() {
        return Err(Sgp30Error::ShortTransfer {
            expected: buffer.len(),
            got: sent,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{Event, FakeBus};

    #[test]
    fn command_bytes_are_fixed() {
        assert_eq!(Command::Init.to_bytes(), [0x20, 0x03]);
        assert_eq!(Command::Measure.to_bytes(), [0x20, 0x08]);
    }

    #[test]
    fn write_command_sends_exactly_two_bytes() {
        let mut bus = FakeBus::new();
        write_command(&mut bus, Command::Measure).unwrap();
        assert_eq!(bus.events(), vec![Event::Write(vec![0x20, 0x08])]);
    }

    #[test]
    fn write_command_surfaces_bus_failure() {
        let mut bus = FakeBus::new();
        bus.fail_writes();
        let err = write_command(&mut bus, Command::Init).unwrap_err();
        assert!(matches!(err, Sgp30Error::Bus(_)));
    }

    #[test]
    fn write_command_rejects_short_write() {
        let mut bus = FakeBus::new();
        bus.truncate_writes(1);
        let err = write_command(&mut bus, Command::Init).unwrap_err();
        assert!(matches!(
            err,
            Sgp30Error::ShortTransfer {
                expected: 2,
                got: 1
            }
        ));
    }
}
