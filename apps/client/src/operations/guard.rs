use std::sync::atomic::{AtomicBool, Ordering};

/// Marks one operation as having a request in flight.
#[derive(Debug, Default)]
pub struct InFlight {
    busy: AtomicBool,
}

impl InFlight {
    /// Claims the guard, or returns `None` if a request is already pending.
    /// The claim is released when the returned ticket is dropped.
    pub fn try_begin(&self) -> Option<Ticket<'_>> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(Ticket { guard: self })
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

#[must_use]
pub struct Ticket<'a> {
    guard: &'a InFlight,
}

impl Drop for Ticket<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}
