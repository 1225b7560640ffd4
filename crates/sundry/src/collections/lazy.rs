//! A lazily-initialized value.

use std::fmt;

/// A value produced on first use by a factory closure and cached from then
/// on. Single-threaded; for a `Sync` equivalent use
/// `std::sync::LazyLock`.
pub struct Lazy<T> {
    value: Option<T>,
    factory: Option<Box<dyn FnOnce() -> T>>,
}

impl<T> Lazy<T> {
    /// A lazy value that runs `factory` the first time it is forced.
    pub fn new(factory: impl FnOnce() -> T + 'static) -> Self {
        Self {
            value: None,
            factory: Some(Box::new(factory)),
        }
    }

    /// An already-initialized lazy value; no factory will ever run.
    pub fn from_value(value: T) -> Self {
        Self {
            value: Some(value),
            factory: None,
        }
    }

    /// Whether the value has been produced yet.
    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }

    /// The value, forcing initialization if it has not happened yet.
    pub fn get(&mut self) -> &T {
        if self.value.is_none() {
            let factory = self
                .factory
                .take()
                .expect("uninitialized lazy values hold a factory");
            self.value = Some(factory());
        }
        self.value.as_ref().expect("initialized above")
    }

    /// Forces initialization and takes the value out.
    pub fn into_inner(mut self) -> T {
        self.get();
        self.value.expect("initialized above")
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("Lazy").field(value).finish(),
            None => f.write_str("Lazy(<uninitialized>)"),
        }
    }
}
