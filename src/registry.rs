// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::RegistrationError;
use std::collections::HashSet;

/// Place where the driver publishes its on-demand reading entry point.
///
/// The registry only learns the entry name; reads of the entry are routed
/// to the bound device by whoever holds it.
pub trait Registry {
    /// Creates the entry point `name`.
    fn register(&mut self, name: &'static str) -> Result<(), RegistrationError>;

    /// Drops the entry point `name`. Unknown names are ignored.
    fn remove(&mut self, name: &'static str);
}

/// In-process set of registered entry point names.
///
/// Only the names are tracked. Serving a read of an entry is left to the
/// owner of the bound [`Sgp30`](crate::sgp30::Sgp30), which calls
/// [`take_reading`](crate::sgp30::Sgp30::take_reading) for it.
#[derive(Debug, Default)]
pub struct EntryTable {
    entries: HashSet<&'static str>,
    capacity: Option<usize>,
}

impl EntryTable {
    /// An empty table without a size limit
    ///
    pub fn new() -> Self {
        Self::default()
    }

    /// A table that refuses registrations beyond `capacity` entries.
    ///
    pub fn with_capacity_limit(capacity: usize) -> Self {
        EntryTable {
            entries: HashSet::new(),
            capacity: Some(capacity),
        }
    }

    /// Whether `name` is currently registered
    ///
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    /// Number of registered entry points
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Registry for EntryTable {
    fn register(&mut self, name: &'static str) -> Result<(), RegistrationError> {
        let full = self.capacity.is_some_and(|cap| self.entries.len() >= cap);
        if full || self.entries.contains(name) {
            return Err(RegistrationError { name });
        }
        self.entries.insert(name);
        Ok(())
    }

    fn remove(&mut self, name: &'static str) {
        self.entries.remove(name);
    }
}
