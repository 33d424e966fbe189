//! Mutual exclusion for multi-step mutations.
//!
//! Each repository guards its own collection, but operations spanning
//! several repository calls (cascade delete, rename fan-out, the
//! check-then-insert behind location uniqueness) need exclusion across the
//! whole sequence. Services hold this lock for the duration of such an
//! operation; single-step repository calls stay lock-free.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;

use crate::backend::domain::errors::DomainResult;

#[derive(Clone, Default)]
pub struct MutationLock {
    inner: Arc<Mutex<()>>,
}

impl MutationLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the lock is free and hold it for the guard's lifetime.
    pub fn acquire(&self) -> DomainResult<MutexGuard<'_, ()>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("mutation lock poisoned").into())
    }
}
