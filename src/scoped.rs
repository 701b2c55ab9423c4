//! Scoped create/destroy hook
//!
//! A minimal two-callback guard for ad hoc instrumentation of a single
//! creation/destruction pair, independent of clone/transfer semantics.
//! Construct one at the top of a scope; the destroy callback is guaranteed
//! to fire on every exit path, including unwinding.

use std::fmt;

/// RAII guard firing a callback on creation and another on destruction.
///
/// The create callback is parameter-only: it is invoked synchronously inside
/// the constructor and never stored. The destroy callback is retained for
/// the guard's lifetime and invoked exactly once, when the guard is dropped.
/// Rust's deterministic drop on scope exit is the delivery guarantee: the
/// destroy callback fires on normal return, early return, and unwind alike.
///
/// # Panics
///
/// A panicking destroy callback is not caught; it unwinds out of `drop` and
/// aborts the process if the thread is already unwinding.
///
/// # Example
///
/// ```
/// use lifecycle_hooks::ScopedHook;
///
/// fn traced_section() {
///     let _hook = ScopedHook::new(
///         || println!("entered"),
///         || println!("left"),
///     );
///     // "left" prints on every path out of this function.
/// }
/// ```
pub struct ScopedHook {
    on_destroy: Option<Box<dyn FnOnce()>>,
}

impl ScopedHook {
    /// Create a guard with both callbacks.
    ///
    /// `on_create` runs immediately, before this constructor returns;
    /// `on_destroy` is stored and runs when the guard is dropped.
    pub fn new(on_create: impl FnOnce(), on_destroy: impl FnOnce() + 'static) -> Self {
        log::debug!("ScopedHook: created");
        on_create();
        Self {
            on_destroy: Some(Box::new(on_destroy)),
        }
    }

    /// Create a guard that only observes creation.
    ///
    /// `on_create` runs immediately; nothing fires when the guard is
    /// dropped.
    pub fn on_create(on_create: impl FnOnce()) -> Self {
        log::debug!("ScopedHook: created (create-only)");
        on_create();
        Self { on_destroy: None }
    }

    /// Create a guard that only observes destruction.
    pub fn on_destroy(on_destroy: impl FnOnce() + 'static) -> Self {
        log::debug!("ScopedHook: created (destroy-only)");
        Self {
            on_destroy: Some(Box::new(on_destroy)),
        }
    }
}

impl Drop for ScopedHook {
    fn drop(&mut self) {
        log::debug!("ScopedHook: destroyed");
        if let Some(on_destroy) = self.on_destroy.take() {
            on_destroy();
        }
    }
}

impl fmt::Debug for ScopedHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedHook")
            .field("on_destroy", &self.on_destroy.is_some())
            .finish()
    }
}
