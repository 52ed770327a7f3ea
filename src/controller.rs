use crate::{
    handshake::{Handshake, Panic},
    sync::Arc,
    turn::{Resume, Turn},
};

/// The producer half, handed to the body of a [`Generator`](crate::Generator).
///
/// Each operation suspends the body until the driver calls one of the
/// generator operations, and returns what the driver sent back. Once the
/// body has been told to stop, every further call returns `Stop(None)`
/// without waiting.
pub struct Controller<Y, S, R, E> {
    handshake: Arc<Handshake<Y, S, R, E>>,
    used: bool,
    stopped: bool,
}

impl<Y, S, R, E> Controller<Y, S, R, E> {
    pub(crate) fn new(handshake: Arc<Handshake<Y, S, R, E>>) -> Self {
        Self { handshake, used: false, stopped: false }
    }

    /// Hands `value` to the driver and waits to be resumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use drone_gen::{Generator, Resume, Turn};
    ///
    /// let mut gen = Generator::<u32, &str, (), ()>::new(|co| {
    ///     assert_eq!(co.yield_(1), Resume::Next("b"));
    ///     Ok(None)
    /// });
    /// assert_eq!(gen.next("a"), Turn::Yielded(1));
    /// assert_eq!(gen.next("b"), Turn::Complete(Ok(None)));
    /// ```
    pub fn yield_(&mut self, value: Y) -> Resume<S, R, E> {
        self.suspend(Turn::Yielded(value))
    }

    /// Hands `err` to the driver without stopping, and waits to be resumed.
    pub fn raise(&mut self, err: E) -> Resume<S, R, E> {
        self.suspend(Turn::Raised(err))
    }

    /// Returns `true` if the body has called [`yield_`](Controller::yield_) or
    /// [`raise`](Controller::raise) at least once.
    #[inline]
    pub fn is_used(&self) -> bool {
        self.used
    }

    pub(crate) fn complete(self, result: Result<Option<R>, E>) {
        self.handshake.complete(result, self.used);
    }

    pub(crate) fn poison(self, payload: Panic) {
        self.handshake.poison(payload);
    }

    fn suspend(&mut self, turn: Turn<Y, R, E>) -> Resume<S, R, E> {
        if self.stopped {
            return Resume::stopped();
        }
        let first = !self.used;
        self.used = true;
        let resume = self.handshake.suspend(turn, first);
        self.stopped = resume.should_stop();
        resume
    }
}
