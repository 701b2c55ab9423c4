//! Lifecycle hook holder
//!
//! This module defines [`LifecycleHooks`], a value type holding six optional
//! callbacks, one per lifecycle event. Embed it as a field of a host struct
//! and the host inherits lifecycle notifications: the field is constructed,
//! cloned, and dropped exactly when the host is.
//!
//! Each operation emits a `log::debug!` trace before evaluating its callback,
//! so a logger can observe lifecycle traffic even when no slots are set.

use std::fmt;
use std::rc::Rc;

/// Callback invoked on a lifecycle event.
///
/// Zero arguments, no return value. Cloning a `Callback` clones the
/// reference, so a cloned slot fires against the same closed-over state as
/// the original.
pub type Callback = Rc<dyn Fn()>;

/// Invoke a slot if it is set.
fn fire(slot: &Option<Callback>) {
    if let Some(callback) = slot {
        callback();
    }
}

/// Holder of six optional lifecycle callbacks.
///
/// Each slot corresponds to one lifecycle event and is invoked exactly once
/// per triggering operation, after the holder's slot state is fully updated:
///
/// | Slot                | Fired by                                  |
/// |---------------------|-------------------------------------------|
/// | `on_construct`      | [`HooksBuilder::build`]                   |
/// | `on_copy_construct` | [`Clone::clone`]                          |
/// | `on_move_construct` | [`LifecycleHooks::take`]                  |
/// | `on_copy_assign`    | [`Clone::clone_from`]                     |
/// | `on_move_assign`    | [`LifecycleHooks::take_from`]             |
/// | `on_destroy`        | [`Drop`]                                  |
///
/// Slots are public: they can be populated (or cleared) by direct field
/// assignment after construction, which fires nothing. Overwriting a slot
/// drops the old closure silently.
///
/// Implicit Rust moves of a holder fire nothing: the moved-from binding
/// ceases to exist and is not dropped, so `on_destroy` cannot double-fire.
/// Observable transfer is explicit via [`take`](Self::take) and
/// [`take_from`](Self::take_from), which leave the source holder alive with
/// all six slots empty.
///
/// Single-threaded by contract: slots are `Rc`-backed, so the holder is
/// `!Send` and cannot be shared across threads.
///
/// # Panics
///
/// The holder raises no errors of its own. A panicking callback is never
/// caught: it propagates to the caller of the triggering operation. In
/// particular a panicking `on_destroy` callback unwinds out of `drop` - and
/// aborts the process if the thread is already unwinding. Install failing
/// destroy hooks only if you accept that hazard.
pub struct LifecycleHooks {
    /// Fired by [`HooksBuilder::build`] once all slots are installed.
    pub on_construct: Option<Callback>,
    /// Fired on the new holder produced by [`Clone::clone`].
    pub on_copy_construct: Option<Callback>,
    /// Fired on the new holder produced by [`LifecycleHooks::take`].
    pub on_move_construct: Option<Callback>,
    /// Fired on the target of [`Clone::clone_from`], after reassignment.
    pub on_copy_assign: Option<Callback>,
    /// Fired on the target of [`LifecycleHooks::take_from`], after transfer.
    pub on_move_assign: Option<Callback>,
    /// Fired when the holder is dropped.
    pub on_destroy: Option<Callback>,
}

impl LifecycleHooks {
    /// Create a holder with all six slots empty.
    ///
    /// Nothing fires here: a holder constructed this way has no
    /// `on_construct` to invoke yet. Use [`builder`](Self::builder) to
    /// observe construction itself.
    pub fn new() -> Self {
        log::debug!("LifecycleHooks: constructed with all slots empty");
        Self {
            on_construct: None,
            on_copy_construct: None,
            on_move_construct: None,
            on_copy_assign: None,
            on_move_assign: None,
            on_destroy: None,
        }
    }

    /// Start building a holder with pre-populated slots.
    ///
    /// [`HooksBuilder::build`] installs the slots and then fires
    /// `on_construct`, so the callback observes a fully initialized holder.
    pub fn builder() -> HooksBuilder {
        HooksBuilder::default()
    }

    /// True if all six slots are unset.
    pub fn is_empty(&self) -> bool {
        self.on_construct.is_none()
            && self.on_copy_construct.is_none()
            && self.on_move_construct.is_none()
            && self.on_copy_assign.is_none()
            && self.on_move_assign.is_none()
            && self.on_destroy.is_none()
    }

    /// Transfer all six slots into a new holder (move construction).
    ///
    /// The source is left with every slot empty; its eventual drop fires no
    /// `on_destroy`. Fires the new holder's `on_move_construct` after the
    /// transfer completes. Never fails.
    pub fn take(&mut self) -> Self {
        log::debug!("LifecycleHooks: move construction (take), source emptied");
        let hooks = Self {
            on_construct: self.on_construct.take(),
            on_copy_construct: self.on_copy_construct.take(),
            on_move_construct: self.on_move_construct.take(),
            on_copy_assign: self.on_copy_assign.take(),
            on_move_assign: self.on_move_assign.take(),
            on_destroy: self.on_destroy.take(),
        };
        fire(&hooks.on_move_construct);
        hooks
    }

    /// Transfer all six slots from `source` into this holder (move
    /// assignment).
    ///
    /// The target's previous slots are dropped silently; the source is left
    /// with every slot empty. Fires the target's newly assigned
    /// `on_move_assign` after the transfer completes. Never fails.
    ///
    /// Aliased self-assignment cannot be expressed here: the exclusive
    /// borrow of `self` rules out `source` pointing at the same holder, so
    /// no runtime self-assignment guard is needed.
    pub fn take_from(&mut self, source: &mut Self) {
        log::debug!("LifecycleHooks: move assignment (take_from), source emptied");
        self.on_construct = source.on_construct.take();
        self.on_copy_construct = source.on_copy_construct.take();
        self.on_move_construct = source.on_move_construct.take();
        self.on_copy_assign = source.on_copy_assign.take();
        self.on_move_assign = source.on_move_assign.take();
        self.on_destroy = source.on_destroy.take();
        fire(&self.on_move_assign);
    }
}

impl Default for LifecycleHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LifecycleHooks {
    /// Copy construction: clones all six slots into the new holder, then
    /// fires the new holder's `on_copy_construct`. The source is unchanged.
    ///
    /// Slots are cloned as references ([`Rc`]), so both holders fire against
    /// the same closed-over state.
    fn clone(&self) -> Self {
        log::debug!("LifecycleHooks: copy construction (clone)");
        let hooks = Self {
            on_construct: self.on_construct.clone(),
            on_copy_construct: self.on_copy_construct.clone(),
            on_move_construct: self.on_move_construct.clone(),
            on_copy_assign: self.on_copy_assign.clone(),
            on_move_assign: self.on_move_assign.clone(),
            on_destroy: self.on_destroy.clone(),
        };
        fire(&hooks.on_copy_construct);
        hooks
    }

    /// Copy assignment: overwrites all six of the target's slots with clones
    /// of the source's, then fires the target's newly assigned
    /// `on_copy_assign`. The target's previous slots are dropped silently,
    /// without firing `on_destroy`.
    ///
    /// Aliased self-assignment cannot be expressed here (exclusive borrow of
    /// `self`), so no runtime self-assignment guard is needed.
    fn clone_from(&mut self, source: &Self) {
        log::debug!("LifecycleHooks: copy assignment (clone_from)");
        self.on_construct = source.on_construct.clone();
        self.on_copy_construct = source.on_copy_construct.clone();
        self.on_move_construct = source.on_move_construct.clone();
        self.on_copy_assign = source.on_copy_assign.clone();
        self.on_move_assign = source.on_move_assign.clone();
        self.on_destroy = source.on_destroy.clone();
        fire(&self.on_copy_assign);
    }
}

impl Drop for LifecycleHooks {
    /// Destruction: fires `on_destroy` if set. Runs exactly once per live
    /// holder; never for moved-out-of bindings.
    fn drop(&mut self) {
        log::debug!("LifecycleHooks: destroyed");
        fire(&self.on_destroy);
    }
}

impl fmt::Debug for LifecycleHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Closures are opaque; show which slots are populated.
        f.debug_struct("LifecycleHooks")
            .field("on_construct", &self.on_construct.is_some())
            .field("on_copy_construct", &self.on_copy_construct.is_some())
            .field("on_move_construct", &self.on_move_construct.is_some())
            .field("on_copy_assign", &self.on_copy_assign.is_some())
            .field("on_move_assign", &self.on_move_assign.is_some())
            .field("on_destroy", &self.on_destroy.is_some())
            .finish()
    }
}

/// Builder for a [`LifecycleHooks`] holder with pre-populated slots.
///
/// `build()` installs every configured slot and then fires `on_construct`,
/// giving that slot a live trigger (populating it by field assignment after
/// construction would be too late to observe construction).
#[derive(Default)]
pub struct HooksBuilder {
    on_construct: Option<Callback>,
    on_copy_construct: Option<Callback>,
    on_move_construct: Option<Callback>,
    on_copy_assign: Option<Callback>,
    on_move_assign: Option<Callback>,
    on_destroy: Option<Callback>,
}

impl HooksBuilder {
    /// Set the callback fired when `build()` completes.
    pub fn on_construct(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_construct = Some(Rc::new(callback));
        self
    }

    /// Set the callback fired on holders produced by `clone()`.
    pub fn on_copy_construct(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_copy_construct = Some(Rc::new(callback));
        self
    }

    /// Set the callback fired on holders produced by `take()`.
    pub fn on_move_construct(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_move_construct = Some(Rc::new(callback));
        self
    }

    /// Set the callback fired on the target of `clone_from()`.
    pub fn on_copy_assign(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_copy_assign = Some(Rc::new(callback));
        self
    }

    /// Set the callback fired on the target of `take_from()`.
    pub fn on_move_assign(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_move_assign = Some(Rc::new(callback));
        self
    }

    /// Set the callback fired when the holder is dropped.
    pub fn on_destroy(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_destroy = Some(Rc::new(callback));
        self
    }

    /// Construct the holder: install all slots, then fire `on_construct`.
    pub fn build(self) -> LifecycleHooks {
        log::debug!("LifecycleHooks: constructed with pre-populated slots");
        let hooks = LifecycleHooks {
            on_construct: self.on_construct,
            on_copy_construct: self.on_copy_construct,
            on_move_construct: self.on_move_construct,
            on_copy_assign: self.on_copy_assign,
            on_move_assign: self.on_move_assign,
            on_destroy: self.on_destroy,
        };
        fire(&hooks.on_construct);
        hooks
    }
}

impl fmt::Debug for HooksBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HooksBuilder")
            .field("on_construct", &self.on_construct.is_some())
            .field("on_copy_construct", &self.on_copy_construct.is_some())
            .field("on_move_construct", &self.on_move_construct.is_some())
            .field("on_copy_assign", &self.on_copy_assign.is_some())
            .field("on_move_assign", &self.on_move_assign.is_some())
            .field("on_destroy", &self.on_destroy.is_some())
            .finish()
    }
}
