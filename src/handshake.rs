//! Strict turn-taking between the body (producer) and the driver (consumer).
//!
//! Two one-slot lanes carry the turns: the *resume* lane from the driver to
//! the body and the *suspend* lane from the body to the driver. A side hands
//! its value over and then sleeps on the shared condition variable until the
//! other lane is filled, so exactly one side is runnable at any time.
//!
//! The body starts running as soon as the generator is constructed, possibly
//! long before the driver asks for anything. Its first controller call (or
//! its completion, if it never calls the controller) therefore goes to the
//! start-up [`Mailbox`] instead of the suspend lane. The driver's first call
//! probes the mailbox, blocks on it only if it is still empty, and closes it
//! afterwards. Every later turn uses the lanes.

use crate::{
    sync::{Condvar, Mailbox, Mutex, MutexGuard},
    turn::{Pending, Resume, Turn},
};
use std::{any::Any, panic, sync::PoisonError};

/// Lifecycle of a generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// The driver has not observed any turn yet.
    Created,
    /// The driver has observed the body's first suspension.
    Running,
    /// The body has completed or has been told to stop.
    ///
    /// This state is absorbing.
    Done,
}

pub(crate) type Panic = Box<dyn Any + Send + 'static>;

pub(crate) struct Handshake<Y, S, R, E> {
    inner: Mutex<Inner<Y, S, R, E>>,
    cond: Condvar,
}

struct Inner<Y, S, R, E> {
    state: State,
    pending: Mailbox<Pending<Y, R, E>>,
    resume: Option<Resume<S, R, E>>,
    suspend: Option<Turn<Y, R, E>>,
    panic: Option<Panic>,
    detached: bool,
}

type Guard<'a, Y, S, R, E> = MutexGuard<'a, Inner<Y, S, R, E>>;

impl<Y, S, R, E> Handshake<Y, S, R, E> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: State::Created,
                pending: Mailbox::new(),
                resume: None,
                suspend: None,
                panic: None,
                detached: false,
            }),
            cond: Condvar::new(),
        }
    }

    pub(crate) fn state(&self) -> State {
        self.lock().state
    }

    // Producer side.

    /// Hands `turn` to the driver and parks until the driver resumes the body.
    pub(crate) fn suspend(&self, turn: Turn<Y, R, E>, first: bool) -> Resume<S, R, E> {
        let mut inner = self.lock();
        if inner.state == State::Done {
            return Resume::stopped();
        }
        if first {
            if inner.pending.put(Pending::from(turn)).is_err() {
                return Resume::stopped();
            }
        } else {
            inner.suspend = Some(turn);
        }
        self.cond.notify_all();
        let mut inner = self.wait(inner, |inner| inner.resume.is_some() || inner.detached);
        let resume = inner.resume.take().unwrap_or_else(Resume::stopped);
        tracing::trace!(stop = resume.should_stop(), "body resumed");
        resume
    }

    /// Publishes the terminal turn after the body returned.
    pub(crate) fn complete(&self, result: Result<Option<R>, E>, used: bool) {
        let mut inner = self.lock();
        inner.state = State::Done;
        if used {
            inner.suspend = Some(Turn::Complete(result));
        } else if inner.pending.put(Pending::Returned(result)).is_err() {
            tracing::debug!("generator detached before the body returned");
        }
        self.cond.notify_all();
    }

    /// Records a panic that escaped the body.
    pub(crate) fn poison(&self, payload: Panic) {
        let mut inner = self.lock();
        inner.state = State::Done;
        if inner.detached {
            tracing::debug!("body panicked after the generator was detached");
        } else {
            inner.panic = Some(payload);
        }
        self.cond.notify_all();
    }

    // Consumer side.

    /// Performs the driver's first call.
    ///
    /// The first call observes the body's first outcome instead of resuming
    /// anything. See the crate documentation for how each operation treats
    /// its argument here.
    pub(crate) fn start(&self, resume: Resume<S, R, E>) -> Turn<Y, R, E> {
        let mut inner = self.lock();
        let pending = match inner.pending.take() {
            Some(pending) => pending,
            None => {
                tracing::trace!("nothing pending, waiting for the body");
                inner = self.wait(inner, |inner| inner.pending.is_full() || inner.panic.is_some());
                match inner.pending.take() {
                    Some(pending) => pending,
                    None => self.unwind(inner),
                }
            }
        };
        inner.pending.close();
        match (pending, resume) {
            (Pending::Returned(result), resume) => {
                inner.state = State::Done;
                tracing::debug!("body returned without suspending");
                Turn::Complete(match resume {
                    Resume::Next(_) => result,
                    Resume::Stop(value) => Ok(value),
                    Resume::Raised(err) => Err(err),
                })
            }
            (pending, Resume::Stop(value)) => {
                inner.state = State::Done;
                inner.resume = Some(Resume::Stop(value));
                self.cond.notify_all();
                let completion = self.recv(inner);
                match pending {
                    Pending::Raised(err) => {
                        tracing::debug!("completion discarded in favour of the pending error");
                        drop(completion);
                        Turn::Raised(err)
                    }
                    Pending::Yielded(_) | Pending::Returned(_) => completion,
                }
            }
            (pending, resume) => {
                inner.state = State::Running;
                if let Resume::Raised(_) = resume {
                    tracing::warn!("error raised before the body suspended is discarded");
                } else {
                    tracing::trace!("first resume value discarded");
                }
                pending.into()
            }
        }
    }

    /// Resumes the suspended body and waits for its next turn.
    pub(crate) fn resume(&self, resume: Resume<S, R, E>) -> Turn<Y, R, E> {
        let mut inner = self.lock();
        if inner.state == State::Done {
            return inner.suspend.take().unwrap_or_else(Turn::done);
        }
        if resume.should_stop() {
            inner.state = State::Done;
        }
        inner.resume = Some(resume);
        self.cond.notify_all();
        self.recv(inner)
    }

    /// Releases the body for good. Called when the driver goes away.
    pub(crate) fn detach(&self) {
        let mut inner = self.lock();
        inner.state = State::Done;
        inner.detached = true;
        inner.pending.close();
        inner.panic = None;
        self.cond.notify_all();
    }

    fn recv<'a>(&'a self, inner: Guard<'a, Y, S, R, E>) -> Turn<Y, R, E> {
        let mut inner = self.wait(inner, |inner| inner.suspend.is_some() || inner.panic.is_some());
        match inner.suspend.take() {
            Some(turn) => {
                tracing::trace!(terminal = turn.is_terminal(), "turn received");
                turn
            }
            None => self.unwind(inner),
        }
    }

    fn unwind(&self, mut inner: Guard<'_, Y, S, R, E>) -> ! {
        let payload = inner.panic.take();
        drop(inner);
        match payload {
            Some(payload) => panic::resume_unwind(payload),
            None => unreachable!("woken without a turn or a panic"),
        }
    }

    fn lock(&self) -> Guard<'_, Y, S, R, E> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait<'a>(
        &'a self,
        mut inner: Guard<'a, Y, S, R, E>,
        ready: impl Fn(&Inner<Y, S, R, E>) -> bool,
    ) -> Guard<'a, Y, S, R, E> {
        while !ready(&*inner) {
            inner = self.cond.wait(inner).unwrap_or_else(PoisonError::into_inner);
        }
        inner
    }
}
