//! Reference-counted busy indicator.
//!
//! Each network operation holds a [`BusyGuard`] for as long as it runs.
//! The indicator reads busy while at least one guard is alive, so
//! overlapping operations cannot clear it for one another. The count is
//! published on a `watch` channel so a front end can follow it.

use std::sync::Arc;

use log::trace;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct BusyIndicator {
    in_flight: Arc<watch::Sender<usize>>,
}

impl Default for BusyIndicator {
    fn default() -> Self {
        let (sender, _) = watch::channel(0);
        Self {
            in_flight: Arc::new(sender),
        }
    }
}

impl BusyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one more operation as in flight until the guard drops.
    pub fn acquire(&self) -> BusyGuard {
        self.in_flight.send_modify(|count| *count += 1);
        trace!("Busy indicator acquired ({} in flight)", self.in_flight());
        BusyGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        *self.in_flight.borrow()
    }

    /// Receiver of the in-flight count. It closes once every clone of the
    /// indicator and every guard is gone.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.in_flight.subscribe()
    }
}

/// Releases its slot of the [`BusyIndicator`] on drop.
#[derive(Debug)]
#[must_use = "the indicator is released as soon as the guard is dropped"]
pub struct BusyGuard {
    in_flight: Arc<watch::Sender<usize>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight
            .send_modify(|count| *count = count.saturating_sub(1));
        trace!(
            "Busy indicator released ({} in flight)",
            *self.in_flight.borrow()
        );
    }
}
