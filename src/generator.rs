use crate::{
    handshake::{Handshake, State},
    iter::Iter,
    sync::Arc,
    turn::{Resume, Turn},
    Builder, Controller,
};
use std::panic::{self, AssertUnwindSafe};

/// The consumer half of a generator.
///
/// The body runs on its own thread, started when the generator is created.
/// Every operation resumes the body and blocks until it suspends again or
/// completes. The first operation is special: nothing the driver has seen is
/// suspended yet, so it returns the body's first turn and its argument is
/// discarded, except that [`terminate`](Generator::terminate) still stops the
/// body and that an argument of `terminate` or [`raise`](Generator::raise)
/// replaces the completion of a body which returns without ever calling its
/// [`Controller`].
///
/// Dropping the generator releases a body parked in a controller call with
/// `Stop(None)`. A generator which is kept alive but never driven leaves its
/// body thread parked forever.
pub struct Generator<Y, S, R, E> {
    handshake: Arc<Handshake<Y, S, R, E>>,
    started: bool,
    finished: bool,
}

impl<Y, S, R, E> Generator<Y, S, R, E>
where
    Y: Send + 'static,
    S: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    /// Creates a generator and starts running `body` on a new thread.
    ///
    /// # Panics
    ///
    /// If the operating system fails to create the thread. Use
    /// [`Builder::spawn`] to handle the error.
    pub fn new<F>(body: F) -> Self
    where
        F: FnOnce(&mut Controller<Y, S, R, E>) -> Result<Option<R>, E>,
        F: Send + 'static,
    {
        Builder::new().spawn(body).expect("failed to spawn generator thread")
    }

    pub(crate) fn start<F>(
        thread: crate::sync::thread::Builder,
        body: F,
    ) -> std::io::Result<Self>
    where
        F: FnOnce(&mut Controller<Y, S, R, E>) -> Result<Option<R>, E>,
        F: Send + 'static,
    {
        let handshake = Arc::new(Handshake::new());
        let controller = Controller::new(Arc::clone(&handshake));
        thread.spawn(move || drive(controller, body))?;
        tracing::debug!("generator body spawned");
        Ok(Self { handshake, started: false, finished: false })
    }
}

impl<Y, S, R, E> Generator<Y, S, R, E> {
    /// Resumes the body with `value` and returns its next turn.
    pub fn next(&mut self, value: S) -> Turn<Y, R, E> {
        self.call(Resume::Next(value))
    }

    /// Tells the body to stop and waits until it returns.
    ///
    /// The suspended controller call returns `Stop(value)`. The returned turn
    /// is the body's real completion, which may differ from `value`.
    pub fn terminate(&mut self, value: Option<R>) -> Turn<Y, R, E> {
        let turn = self.call(Resume::Stop(value));
        self.finished = true;
        turn
    }

    /// Injects `err` into the suspended body and returns its next turn.
    ///
    /// The generator keeps running.
    pub fn raise(&mut self, err: E) -> Turn<Y, R, E> {
        self.call(Resume::Raised(err))
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> State {
        if self.finished {
            State::Done
        } else {
            self.handshake.state()
        }
    }

    /// Returns `true` once a terminal turn has been handed out.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.finished
    }

    /// Returns an iterator over the remaining yielded values.
    pub fn iter(&mut self) -> Iter<'_, Y, S, R, E>
    where
        S: Default,
    {
        Iter::new(self)
    }

    fn call(&mut self, resume: Resume<S, R, E>) -> Turn<Y, R, E> {
        if self.finished {
            return Turn::done();
        }
        let turn = if self.started {
            self.handshake.resume(resume)
        } else {
            self.started = true;
            self.handshake.start(resume)
        };
        if turn.is_terminal() {
            self.finished = true;
        }
        turn
    }
}

impl<Y, S, R, E> Drop for Generator<Y, S, R, E> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("generator dropped before completion");
        }
        self.handshake.detach();
    }
}

fn drive<Y, S, R, E, F>(mut controller: Controller<Y, S, R, E>, body: F)
where
    F: FnOnce(&mut Controller<Y, S, R, E>) -> Result<Option<R>, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| body(&mut controller))) {
        Ok(result) => {
            tracing::debug!(used = controller.is_used(), "generator body returned");
            controller.complete(result);
        }
        Err(payload) => {
            tracing::debug!("generator body panicked");
            controller.poison(payload);
        }
    }
}
