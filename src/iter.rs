use crate::{Generator, Turn};
use std::iter::FusedIterator;

/// A pull-based view over a [`Generator`].
///
/// Each step resumes the body with `S::default()`. Yielded values come out
/// as `Ok`, errors raised by the body and a failed completion as `Err`. The
/// iterator ends when the body completes, discarding a successful return
/// value.
///
/// This struct is created by [`Generator::iter`].
///
/// # Examples
///
/// ```
/// use drone_gen::Generator;
///
/// let mut gen = Generator::<u32, (), (), &str>::new(|co| {
///     let _ = co.yield_(1);
///     let _ = co.raise("odd");
///     let _ = co.yield_(2);
///     Err("exhausted")
/// });
/// let items = gen.iter().collect::<Vec<_>>();
/// assert_eq!(items, [Ok(1), Err("odd"), Ok(2), Err("exhausted")]);
/// assert!(gen.is_done());
/// ```
pub struct Iter<'a, Y, S, R, E> {
    generator: &'a mut Generator<Y, S, R, E>,
}

impl<'a, Y, S, R, E> Iter<'a, Y, S, R, E> {
    pub(crate) fn new(generator: &'a mut Generator<Y, S, R, E>) -> Self {
        Self { generator }
    }
}

impl<Y, S: Default, R, E> Iterator for Iter<'_, Y, S, R, E> {
    type Item = Result<Y, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.generator.next(S::default()) {
            Turn::Yielded(value) => Some(Ok(value)),
            Turn::Raised(err) | Turn::Complete(Err(err)) => Some(Err(err)),
            Turn::Complete(Ok(_)) => None,
        }
    }
}

impl<Y, S: Default, R, E> FusedIterator for Iter<'_, Y, S, R, E> {}
