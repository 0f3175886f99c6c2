//! In-process session slot

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{SessionStore, StoredSession};
use crate::error::{Result, SessionError};

/// Session store that lives only as long as the process.
///
/// Counts writes so callers can check how often the slot was replaced.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<StoredSession>>,
    writes: AtomicUsize,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: StoredSession) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of `save` calls so far
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<StoredSession>> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| SessionError::Read(e.to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, session: &StoredSession) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| SessionError::Write(e.to_string()))?;
        *slot = Some(session.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
