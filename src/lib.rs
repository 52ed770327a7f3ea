//! Generators for Rust code that cannot `yield`.
//!
//! A generator runs an ordinary closure, the *body*, on its own thread and
//! lets an external *driver* exchange values with it one turn at a time. The
//! body suspends itself through a [`Controller`], the driver resumes it
//! through a [`Generator`]. Exactly one of the two sides runs at any moment.
//!
//! # Turns
//!
//! Every [`Generator`] operation returns a [`Turn`]: a yielded value, an
//! error raised by the body, or the body's completion. Every [`Controller`]
//! operation returns a [`Resume`]: the next value sent in, a request to stop,
//! or an error injected by the driver. Injected and raised errors are data;
//! the generator keeps running after them.
//!
//! ```
//! use drone_gen::{Generator, Resume, Turn};
//!
//! let mut gen = Generator::<u32, &str, u32, ()>::new(|co| {
//!     assert_eq!(co.yield_(1), Resume::Next("b"));
//!     assert_eq!(co.yield_(2), Resume::Stop(Some(7)));
//!     Ok(Some(0))
//! });
//! assert_eq!(gen.next("a"), Turn::Yielded(1));
//! assert_eq!(gen.next("b"), Turn::Yielded(2));
//! assert_eq!(gen.terminate(Some(7)), Turn::Complete(Ok(Some(0))));
//! assert_eq!(gen.next("d"), Turn::Complete(Ok(None)));
//! ```
//!
//! # Start-up
//!
//! The body starts running as soon as the generator is created, so its first
//! controller call may happen before the driver asks for anything. That call
//! is kept in a single-slot mailbox until the driver's first operation picks
//! it up. The first operation therefore returns the body's first turn, and
//! its own argument has nothing to resume:
//!
//! * the value passed to the first [`Generator::next`] is discarded;
//! * the error passed to the first [`Generator::raise`] is discarded, unless
//!   the body returns without ever calling its controller, in which case it
//!   replaces the body's completion;
//! * the first [`Generator::terminate`] stops the body and returns its
//!   completion. If the body returns without ever calling its controller, the
//!   completion is replaced by the value passed to `terminate`. If the body's
//!   first turn was a raised error, that error is returned instead and the
//!   completion is discarded.
//!
//! # Termination
//!
//! [`Generator::terminate`] is cooperative. The suspended controller call
//! returns [`Resume::Stop`] and the body is expected to return soon; the
//! driver waits until it does. Once a generator is done, every operation on
//! either half returns immediately: `Turn::Complete(Ok(None))` for the driver,
//! `Resume::Stop(None)` for the body.
//!
//! A panic inside the body finishes the generator and is resumed on the
//! driver's thread by the operation waiting for the body.

#![warn(missing_docs)]

mod builder;
mod controller;
mod generator;
mod handshake;
mod iter;
mod sync;
mod turn;

pub use self::builder::{Builder, SpawnError};
pub use self::controller::Controller;
pub use self::generator::Generator;
pub use self::handshake::State;
pub use self::iter::Iter;
pub use self::turn::{Resume, Turn};
