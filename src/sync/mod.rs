//! Synchronization primitives behind the handshake.
//!
//! Under `--cfg loom` the shared state, the condition variable and the body
//! thread come from [`loom`](https://docs.rs/loom), so the model checker can
//! explore every interleaving of the two sides.

mod mailbox;

pub(crate) use self::mailbox::Mailbox;

#[cfg(loom)]
pub(crate) use loom::{
    sync::{Arc, Condvar, Mutex, MutexGuard},
    thread,
};
#[cfg(not(loom))]
pub(crate) use std::{
    sync::{Arc, Condvar, Mutex, MutexGuard},
    thread,
};
