//! Fixed-capacity admission gate
//!
//! Bounds the number of concurrently in-flight guarded requests. Excess
//! requests are rejected immediately rather than queued: shedding load
//! keeps latency flat for the requests that are admitted.

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore, TryAcquireError};

/// A fixed-size pool of permits gating concurrent request handling
#[derive(Clone)]
pub struct AdmissionGate {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

/// A held admission permit
///
/// Returned to the pool exactly once when dropped, on every exit path of
/// the guarded operation including panic unwinds.
pub struct AdmissionPermit {
    _permit: OwnedSemaphorePermit,
}

impl AdmissionGate {
    /// Create a gate admitting at most `capacity` concurrent requests
    ///
    /// Capacity is validated to be non-zero at configuration time.
    pub fn new(capacity: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Take a permit if one is available; never blocks
    pub fn try_acquire(&self) -> Option<AdmissionPermit> {
        match Arc::clone(&self.semaphore).try_acquire_owned() {
            Ok(permit) => Some(AdmissionPermit { _permit: permit }),
            Err(TryAcquireError::NoPermits) => None,
            // The semaphore is never closed while the gate is alive.
            Err(TryAcquireError::Closed) => None,
        }
    }

    /// Configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Permits currently available
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}
