//! Integration test: the named-block registry.
//!
//! `run_blocks` drains process-global state, so the tests serialize on a
//! local mutex, and the ordering test asserts only on its own markers.
//!
//! Run: cargo test -p minicheck --test registry_test

use std::sync::Arc;

use parking_lot::Mutex;

use minicheck::{BlockError, register_block, run_blocks};

static SERIAL: Mutex<()> = Mutex::new(());

#[test]
fn blocks_run_once_in_insertion_order() {
    let _guard = SERIAL.lock();
    let markers: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    for name in ["order-first", "order-second", "order-third"] {
        let markers = Arc::clone(&markers);
        register_block(name, move || markers.lock().push(name)).expect("fresh name registers");
    }

    let ran = run_blocks().expect("first run succeeds");
    assert!(ran >= 3);
    assert_eq!(
        *markers.lock(),
        vec!["order-first", "order-second", "order-third"]
    );

    assert!(matches!(run_blocks(), Err(BlockError::AlreadyRan)));
}

#[test]
fn duplicate_names_are_rejected() {
    let _guard = SERIAL.lock();
    register_block("duplicate-probe", || {}).expect("first registration succeeds");
    let err = register_block("duplicate-probe", || {}).expect_err("second registration fails");
    assert!(matches!(err, BlockError::Duplicate(name) if name == "duplicate-probe"));
}
