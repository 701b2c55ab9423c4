//! Lifecycle Hooks Library
//!
//! A tiny instrumentation library for observing object lifecycle events.
//! It provides callback slots that fire when a value is constructed, cloned,
//! transferred, assigned over, or dropped.
//!
//! # Architecture
//!
//! Two building blocks, both value types with no identity beyond their slots:
//! - [`LifecycleHooks`]: six independent optional callbacks, one per
//!   lifecycle event. Embed it as a field of a host struct and the host
//!   inherits lifecycle notifications, because the field's own clone and
//!   drop run as part of the host's.
//! - [`ScopedHook`]: a two-callback RAII guard for observing a single
//!   creation/destruction pair at a use site, without touching a host type.
//!
//! The library does NOT:
//! - Catch or suppress callback panics (they propagate to the caller,
//!   including out of `drop`)
//! - Provide thread safety (slots are `Rc`-backed; holders are `!Send`)
//! - Order events across multiple instrumented objects
//! - Consume callback return values
//!
//! Every lifecycle operation emits a `log::debug!` trace before evaluating
//! its callback; without a logger installed this is a no-op.
//!
//! # Example Usage
//!
//! ```
//! use lifecycle_hooks::LifecycleHooks;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let drops = Rc::new(Cell::new(0));
//! let d = Rc::clone(&drops);
//! {
//!     let _hooks = LifecycleHooks::builder()
//!         .on_destroy(move || d.set(d.get() + 1))
//!         .build();
//! }
//! assert_eq!(drops.get(), 1);
//! ```

// Public modules
pub mod hooks;
pub mod scoped;

// Re-export main types for convenience
pub use hooks::{Callback, HooksBuilder, LifecycleHooks};
pub use scoped::ScopedHook;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
