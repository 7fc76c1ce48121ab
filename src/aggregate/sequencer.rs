//! Last-writer-wins sequencing for in-flight aggregations.
//!
//! The UI kicks off a new aggregation whenever the view is (re-)entered or
//! the requested employee changes. Responses can land out of order; a stale
//! response must never overwrite a newer one. The sequencer hands out
//! monotonically increasing tickets and accepts a result only while its
//! ticket is still the latest.

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues tickets for aggregation requests and arbitrates which result wins.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

/// Proof of when a request was started, relative to its sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
}

impl RequestSequencer {
    /// Creates a sequencer with no outstanding requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new request, superseding every ticket issued before it.
    pub fn begin(&self) -> RequestTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket { seq }
    }

    /// Whether the ticket still belongs to the newest request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.seq
    }

    /// Returns `value` only if `ticket` has not been superseded; a stale
    /// result is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use absence_engine::aggregate::RequestSequencer;
    ///
    /// let sequencer = RequestSequencer::new();
    /// let first = sequencer.begin();
    /// let second = sequencer.begin();
    ///
    /// assert_eq!(sequencer.accept(first, "stale"), None);
    /// assert_eq!(sequencer.accept(second, "fresh"), Some("fresh"));
    /// ```
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }
}
