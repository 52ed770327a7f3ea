//! A single-slot mailbox written at most once and drained at most once.
//!
//! # State structure
//!
//! ```text
//! Empty --put--> Full --take--> Drained
//!   \              |               |
//!    `----------close------------' --> Closed
//! ```
//!
//! `Closed` is absorbing. A value still stored at the time of closing is
//! dropped.

/// Capacity-one slot. Not synchronized by itself; the owner guards it.
pub(crate) struct Mailbox<T> {
    slot: Slot<T>,
}

enum Slot<T> {
    Empty,
    Full(T),
    Drained,
    Closed,
}

impl<T> Mailbox<T> {
    pub(crate) const fn new() -> Self {
        Self { slot: Slot::Empty }
    }

    /// Stores `value`. Fails with the value if anything was ever stored
    /// before or the mailbox is closed.
    pub(crate) fn put(&mut self, value: T) -> Result<(), T> {
        match self.slot {
            Slot::Empty => {
                self.slot = Slot::Full(value);
                Ok(())
            }
            Slot::Full(_) | Slot::Drained | Slot::Closed => Err(value),
        }
    }

    /// Removes the stored value without blocking.
    pub(crate) fn take(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.slot, Slot::Drained) {
            Slot::Full(value) => Some(value),
            slot => {
                self.slot = slot;
                None
            }
        }
    }

    /// Prevents any further [`put`](Mailbox::put).
    pub(crate) fn close(&mut self) {
        self.slot = Slot::Closed;
    }

    pub(crate) fn is_full(&self) -> bool {
        matches!(self.slot, Slot::Full(_))
    }

    pub(crate) fn is_closed(&self) -> bool {
        matches!(self.slot, Slot::Closed)
    }
}
