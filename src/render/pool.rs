//! Bounded render capacity
//!
//! Document renders are heavy, so only a fixed number run at once. Permits
//! live in a bounded channel: taking one is a receive, giving it back is a
//! send from the permit's `Drop`.

use std::time::Duration;

use crossbeam::channel::{bounded, Receiver, RecvTimeoutError, Sender};

use crate::error::{ReportError, ReportResult};

/// Fixed set of render slots shared by all requests
#[derive(Debug)]
pub struct RenderPool {
    release: Sender<()>,
    permits: Receiver<()>,
    capacity: usize,
    queue_timeout: Duration,
}

impl RenderPool {
    /// Create a pool with `capacity` slots (at least one)
    pub fn new(capacity: usize, queue_timeout: Duration) -> Self {
        let capacity = capacity.max(1);
        let (release, permits) = bounded(capacity);
        for _ in 0..capacity {
            // Cannot fail: the channel has room for exactly `capacity` tokens
            let _ = release.send(());
        }

        Self {
            release,
            permits,
            capacity,
            queue_timeout,
        }
    }

    /// Wait for a free slot, up to the queue timeout
    pub fn acquire(&self) -> ReportResult<RenderPermit<'_>> {
        match self.permits.recv_timeout(self.queue_timeout) {
            Ok(()) => {
                log::debug!(
                    "Render slot acquired ({} of {} free)",
                    self.available(),
                    self.capacity
                );
                Ok(RenderPermit {
                    release: &self.release,
                })
            }
            Err(RecvTimeoutError::Timeout) => Err(ReportError::Render(format!(
                "No render slot became free within {:?}",
                self.queue_timeout
            ))),
            Err(RecvTimeoutError::Disconnected) => {
                Err(ReportError::Render("Render pool is closed".into()))
            }
        }
    }

    /// Slots currently free
    pub fn available(&self) -> usize {
        self.permits.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A held render slot, returned to the pool on drop
#[derive(Debug)]
pub struct RenderPermit<'a> {
    release: &'a Sender<()>,
}

impl Drop for RenderPermit<'_> {
    fn drop(&mut self) {
        if self.release.try_send(()).is_err() {
            log::warn!("Render slot could not be returned to the pool");
        }
    }
}
