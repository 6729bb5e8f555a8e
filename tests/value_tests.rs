// Host-side tests for value ownership rules.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod value {
    include!("../src/core/value.rs");
}

use value::{Ownership, ValueStore};

#[test]
fn ownership_is_decided_by_presence_of_an_explicit_value() {
    assert_eq!(
        ValueStore::new(Some(10.0), 40.0).ownership(),
        Ownership::Controlled
    );
    assert_eq!(
        ValueStore::new(None, 40.0).ownership(),
        Ownership::Uncontrolled
    );
}

#[test]
fn uncontrolled_seeds_from_default() {
    let store = ValueStore::new(None, 40.0);
    assert_eq!(store.read(), 40.0);
}

#[test]
fn uncontrolled_write_replaces_local_value() {
    let mut store = ValueStore::new(None, 40.0);
    assert_eq!(store.write(55.0), 55.0);
    assert_eq!(store.read(), 55.0);
}

#[test]
fn controlled_write_forwards_but_never_stores() {
    let mut store = ValueStore::new(Some(10.0), 40.0);
    // The value is still forwarded to the change notification...
    assert_eq!(store.write(55.0), 55.0);
    // ...but only the external owner can move the readable value.
    assert_eq!(store.read(), 10.0);
}

#[test]
fn controlled_sync_external_updates_read() {
    let mut store = ValueStore::new(Some(10.0), 40.0);
    store.sync_external(70.0);
    assert_eq!(store.read(), 70.0);
}

#[test]
fn sync_external_is_ignored_when_uncontrolled() {
    let mut store = ValueStore::new(None, 40.0);
    store.sync_external(70.0);
    assert_eq!(store.read(), 40.0);
}
