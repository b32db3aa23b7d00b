// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Recording bus used by the unit tests.

use crate::command::Command;
use crate::transport::Transport;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Write(Vec<u8>),
    Read(usize),
}

#[derive(Debug, Default)]
struct State {
    events: Vec<Event>,
    first_write_at: Option<Instant>,
    responses: VecDeque<[u8; 6]>,
    pending: VecDeque<[u8; 6]>,
    fail_writes: bool,
    fail_reads: bool,
    write_limit: Option<usize>,
    read_limit: Option<usize>,
}

/// Fake SGP30: answers each measure command with the next queued response.
///
/// Clones share the same log, so a test can keep one while the driver owns
/// the other.
#[derive(Debug, Clone, Default)]
pub struct FakeBus {
    state: Arc<Mutex<State>>,
}

impl FakeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: [u8; 6]) {
        self.state.lock().unwrap().responses.push_back(response);
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn first_write_at(&self) -> Option<Instant> {
        self.state.lock().unwrap().first_write_at
    }

    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    pub fn fail_reads(&self) {
        self.state.lock().unwrap().fail_reads = true;
    }

    pub fn truncate_writes(&self, len: usize) {
        self.state.lock().unwrap().write_limit = Some(len);
    }

    pub fn truncate_reads(&self, len: usize) {
        self.state.lock().unwrap().read_limit = Some(len);
    }
}

impl Transport for FakeBus {
    type Error = io::Error;

    fn send(&mut self, buf: &[u8]) -> Result<usize, io::Error> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(io::Error::new(io::ErrorKind::Other, "nack"));
        }
        state.first_write_at.get_or_insert_with(Instant::now);
        state.events.push(Event::Write(buf.to_vec()));
        if buf == &Command::Measure.to_bytes()[..] {
            let response = state.responses.pop_front().unwrap_or([0; 6]);
            state.pending.push_back(response);
        }
        Ok(state.write_limit.map_or(buf.len(), |limit| limit.min(buf.len())))
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
        let mut state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(io::Error::new(io::ErrorKind::Other, "bus busy"));
        }
        state.events.push(Event::Read(buf.len()));
        let response = state
            .pending
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no measurement pending"))?;
        let len = state
            .read_limit
            .unwrap_or(response.len())
            .min(buf.len())
            .min(response.len());
        buf[..len].copy_from_slice(&response[..len]);
        Ok(len)
    }
}
