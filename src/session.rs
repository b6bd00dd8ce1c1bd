//! Load supersession
//!
//! One table is current per session; selecting a new file supersedes any
//! load still in flight. Each load carries a generation token taken at
//! start, and a completed load only commits its result when its token is
//! still the newest: a stale, slower-finishing load is discarded rather
//! than overwriting the newer selection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::pipeline::SvTable;

/// Token identifying one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    /// The generation this ticket belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Tracks the current load generation and the committed table.
#[derive(Debug, Default)]
pub struct LoadSession {
    generation: AtomicU64,
    current: Mutex<Option<SvTable>>,
}

impl LoadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding any load still in flight.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Commit a finished load's table if its ticket is still current.
    ///
    /// Returns whether the table was installed; a superseded result is
    /// dropped and the session state is untouched.
    pub fn commit(&self, ticket: LoadTicket, table: SvTable) -> bool {
        if ticket.generation != self.generation.load(Ordering::SeqCst) {
            return false;
        }
        *self.current.lock().expect("session lock poisoned") = Some(table);
        true
    }

    /// The most recently committed table, if any.
    pub fn current(&self) -> Option<SvTable> {
        self.current.lock().expect("session lock poisoned").clone()
    }
}
