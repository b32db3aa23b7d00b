// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt::Debug;

///
///SGP30 error enum, generic over the error type of the
///underlying bus. Bus when a read or write operation fails,
///ShortTransfer when fewer bytes than requested moved,
///WrongAddress when binding to an unexpected address and
///Registration when the reading entry point cannot be created.
///
#[derive(Debug, thiserror::Error)]
pub enum Sgp30Error<E>
where
    E: Debug,
{
    /// Underlying bus error from the i2cdev implementation
    #[error("Communication error with device: {0:?}")]
    Bus(E),

    /// A transfer completed with fewer bytes than requested
    #[error("Short transfer: expected {expected} bytes, got {got}")]
    ShortTransfer { expected: usize, got: usize },

    /// The discovered device does not sit at the SGP30 address
    #[error("Wrong I2C address {found:#04x}, expected {expected:#04x}")]
    WrongAddress { expected: u16, found: u16 },

    /// The reading entry point could not be registered
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

/// The entry point `name` could not be created, either because it already
/// exists or because the registry has no room left.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Out of resources registering entry point `{name}`")]
pub struct RegistrationError {
    pub name: &'static str,
}
