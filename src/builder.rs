use crate::{sync::thread, Controller, Generator};

/// Generator factory, which can be used in order to configure the thread the
/// body runs on.
///
/// # Examples
///
/// ```
/// use drone_gen::{Builder, Turn};
///
/// let mut gen = Builder::new()
///     .name("countdown")
///     .stack_size(64 * 1024)
///     .spawn(|co| {
///         for n in (1..=3).rev() {
///             if co.yield_(n).should_stop() {
///                 break;
///             }
///         }
///         Ok::<_, ()>(Some("liftoff"))
///     })
///     .unwrap();
/// assert_eq!(gen.next(()), Turn::Yielded(3));
/// assert_eq!(gen.next(()), Turn::Yielded(2));
/// assert_eq!(gen.next(()), Turn::Yielded(1));
/// assert_eq!(gen.next(()), Turn::Complete(Ok(Some("liftoff"))));
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct Builder {
    name: Option<String>,
    stack_size: Option<usize>,
}

impl Builder {
    /// Creates a builder with an unnamed thread and the platform's default
    /// stack size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the body thread.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the stack size of the body thread, in bytes.
    pub fn stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    /// Creates a generator and starts running `body` on a new thread.
    pub fn spawn<Y, S, R, E, F>(self, body: F) -> Result<Generator<Y, S, R, E>, SpawnError>
    where
        Y: Send + 'static,
        S: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: FnOnce(&mut Controller<Y, S, R, E>) -> Result<Option<R>, E>,
        F: Send + 'static,
    {
        let mut thread = thread::Builder::new();
        if let Some(name) = self.name {
            thread = thread.name(name);
        }
        if let Some(size) = self.stack_size {
            thread = thread.stack_size(size);
        }
        Ok(Generator::start(thread, body)?)
    }
}

/// The body thread could not be spawned.
#[derive(Debug, thiserror::Error)]
#[error("failed to spawn generator thread")]
pub struct SpawnError(#[from] std::io::Error);
