//! Values exchanged at every turn of the handshake.

/// What the body handed to the driver when it suspended or completed.
///
/// Returned by every [`Generator`](crate::Generator) operation. Once a
/// terminal turn has been observed, every later operation returns
/// `Complete(Ok(None))`.
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Turn<Y, R, E> {
    /// The body suspended with a value.
    Yielded(Y),
    /// The body suspended with an error. The generator keeps running.
    Raised(E),
    /// The body completed with its return value or error.
    Complete(Result<Option<R>, E>),
}

impl<Y, R, E> Turn<Y, R, E> {
    /// Returns `true` if the generator will never suspend again.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Turn::Complete(_))
    }

    /// Returns the yielded value, if any.
    #[inline]
    pub fn yielded(self) -> Option<Y> {
        match self {
            Turn::Yielded(value) => Some(value),
            Turn::Raised(_) | Turn::Complete(_) => None,
        }
    }

    /// Returns the carried error, raised or terminal.
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Turn::Raised(err) | Turn::Complete(Err(err)) => Some(err),
            Turn::Yielded(_) | Turn::Complete(Ok(_)) => None,
        }
    }

    pub(crate) const fn done() -> Self {
        Turn::Complete(Ok(None))
    }
}

/// What a suspended [`Controller`](crate::Controller) operation returns to
/// the body.
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Resume<S, R, E> {
    /// The driver asked for the next value and sent this one in.
    Next(S),
    /// The driver asked the body to stop, suggesting a return value.
    ///
    /// The suggestion is `None` once the generator is already done.
    Stop(Option<R>),
    /// The driver injected an error. The body is expected to carry on.
    Raised(E),
}

impl<S, R, E> Resume<S, R, E> {
    /// Returns `true` if the body should return as soon as possible.
    #[inline]
    pub fn should_stop(&self) -> bool {
        matches!(self, Resume::Stop(_))
    }

    pub(crate) const fn stopped() -> Self {
        Resume::Stop(None)
    }
}

/// The outcome of the body's first controller call, or of the body itself if
/// it returned without ever calling the controller.
pub(crate) enum Pending<Y, R, E> {
    Yielded(Y),
    Raised(E),
    Returned(Result<Option<R>, E>),
}

impl<Y, R, E> From<Turn<Y, R, E>> for Pending<Y, R, E> {
    fn from(turn: Turn<Y, R, E>) -> Self {
        match turn {
            Turn::Yielded(value) => Pending::Yielded(value),
            Turn::Raised(err) => Pending::Raised(err),
            Turn::Complete(result) => Pending::Returned(result),
        }
    }
}

impl<Y, R, E> From<Pending<Y, R, E>> for Turn<Y, R, E> {
    fn from(pending: Pending<Y, R, E>) -> Self {
        match pending {
            Pending::Yielded(value) => Turn::Yielded(value),
            Pending::Raised(err) => Turn::Raised(err),
            Pending::Returned(result) => Turn::Complete(result),
        }
    }
}
