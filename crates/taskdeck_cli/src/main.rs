//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskdeck_core::{MemoryStorage, Store, ALL_TASKS};

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from any UI runtime setup.
    println!("taskdeck_core ping={}", taskdeck_core::ping());
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    let store = match Store::open(MemoryStorage::new()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("taskdeck_core store_open failed: {err}");
            std::process::exit(1);
        }
    };

    println!("selection={}", store.selection().name());
    println!("count[{ALL_TASKS}]={}", store.count_for_list(ALL_TASKS));
    for list in store.lists() {
        println!("list name={} count={}", list.name, store.count_for_list(&list.name));
    }
}
