//! End-to-end lifecycle scenarios
//!
//! Exercises the holder embedded in a host struct, assignment between
//! holders, scoped guards across different exit paths, and the documented
//! destroy-callback panic hazard.

use lifecycle_hooks::{LifecycleHooks, ScopedHook};
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bump(counter: &Rc<Cell<u32>>) -> impl Fn() + 'static {
    let counter = Rc::clone(counter);
    move || counter.set(counter.get() + 1)
}

/// Host type that inherits lifecycle notifications from an embedded holder.
struct Tracked {
    hooks: LifecycleHooks,
    label: &'static str,
}

#[test]
fn host_struct_inherits_construct_and_destroy() {
    init_logging();
    let constructs = Rc::new(Cell::new(0));
    let destroys = Rc::new(Cell::new(0));
    {
        let tracked = Tracked {
            hooks: LifecycleHooks::builder()
                .on_construct(bump(&constructs))
                .on_destroy(bump(&destroys))
                .build(),
            label: "session",
        };
        assert_eq!(tracked.label, "session");
        assert_eq!(constructs.get(), 1);
        assert_eq!(destroys.get(), 0);
        assert!(!tracked.hooks.is_empty());
    }
    // Dropping the host dropped the field.
    assert_eq!(constructs.get(), 1);
    assert_eq!(destroys.get(), 1);
}

#[test]
fn cloning_the_host_clones_the_holder() {
    init_logging();
    let copies = Rc::new(Cell::new(0));
    let original = Tracked {
        hooks: LifecycleHooks::builder()
            .on_copy_construct(bump(&copies))
            .build(),
        label: "original",
    };

    let duplicate = Tracked {
        hooks: original.hooks.clone(),
        label: "duplicate",
    };
    assert_eq!(copies.get(), 1);
    assert_eq!(original.label, "original");
    assert_eq!(duplicate.label, "duplicate");
}

#[test]
fn copy_assignment_fires_exactly_once() {
    init_logging();
    let assigns = Rc::new(Cell::new(0));
    let h1 = LifecycleHooks::builder()
        .on_copy_assign(bump(&assigns))
        .build();
    let mut h2 = LifecycleHooks::new();

    h2.clone_from(&h1);
    assert_eq!(assigns.get(), 1);

    // Repeating the assignment fires again; each operation is one event.
    h2.clone_from(&h1);
    assert_eq!(assigns.get(), 2);
}

#[test]
fn transfer_chain_keeps_destroy_with_the_live_holder() {
    init_logging();
    let destroys = Rc::new(Cell::new(0));
    let mut first = LifecycleHooks::builder().on_destroy(bump(&destroys)).build();
    let mut second = first.take();
    let mut third = LifecycleHooks::new();
    third.take_from(&mut second);

    drop(first);
    drop(second);
    assert_eq!(destroys.get(), 0);

    drop(third);
    assert_eq!(destroys.get(), 1);
}

#[test]
fn scoped_hook_fires_destroy_on_early_return() {
    init_logging();
    let created = Rc::new(Cell::new(0));
    let destroyed = Rc::new(Cell::new(0));

    fn guarded(created: &Rc<Cell<u32>>, destroyed: &Rc<Cell<u32>>) -> &'static str {
        let c = Rc::clone(created);
        let d = Rc::clone(destroyed);
        let _hook = ScopedHook::new(move || c.set(c.get() + 1), move || d.set(d.get() + 1));
        if created.get() == 1 {
            return "early";
        }
        "normal"
    }

    assert_eq!(guarded(&created, &destroyed), "early");
    assert_eq!(created.get(), 1);
    assert_eq!(destroyed.get(), 1);
}

#[test]
fn destroy_callback_panic_propagates_out_of_the_scope() {
    init_logging();
    let result = catch_unwind(AssertUnwindSafe(|| {
        let _hooks = LifecycleHooks::builder()
            .on_destroy(|| panic!("teardown hook failed"))
            .build();
        // Normal scope exit; the panic comes from drop itself.
    }));
    assert!(result.is_err());
}
