//! Admission queues feeding the two weapons.
//!
//! Deployed units and groups wait here, in deploy order, until their weapon's
//! single lock is free. Entries are ids; an id can go stale if its target
//! breached while waiting, so admission re-validates before locking.

use std::collections::VecDeque;

/// Bounded FIFO of targets awaiting a weapon lock.
///
/// Pushing never blocks: a full queue hands the entry back to the caller.
#[derive(Debug, Clone)]
pub struct AdmissionQueue<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> AdmissionQueue<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, or return it if the queue is full.
    pub fn try_push(&mut self, entry: T) -> Result<(), T> {
        if self.is_full() {
            return Err(entry);
        }
        self.entries.push_back(entry);
        Ok(())
    }

    /// Pop entries from the head until one passes `is_live`.
    /// Stale entries popped on the way are discarded.
    pub fn admit_next(&mut self, mut is_live: impl FnMut(&T) -> bool) -> Option<T> {
        while let Some(entry) = self.entries.pop_front() {
            if is_live(&entry) {
                return Some(entry);
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}
