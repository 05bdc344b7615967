/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Reference Example
//!
//! Demonstrates publishing shared configuration through an atomic
//! reference cell.

use prism3_atomic_cell::AtomicRef;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, PartialEq)]
struct Config {
    version: u32,
    name: String,
    value: i32,
}

fn main() {
    println!("=== Atomic Reference Example ===\n");

    // Example 1: Basic reference operations
    println!("1. Basic Reference Operations:");
    let atomic_config: AtomicRef<Config> = AtomicRef::empty();
    println!("   Initial config: {:?}", atomic_config.get());

    atomic_config.set(Some(Arc::new(Config {
        version: 1,
        name: "initial".to_string(),
        value: 100,
    })));
    println!("   Updated config: {:?}", atomic_config.get());

    let displaced = atomic_config.get_and_set(None);
    println!("   Displaced config: {:?}", displaced);

    // Example 2: Compare-and-set by identity
    println!("\n2. Compare-and-Set:");
    let v1 = Arc::new(Config {
        version: 1,
        name: "v1".to_string(),
        value: 10,
    });
    let atomic_config = AtomicRef::new(Some(v1.clone()));

    let lookalike = Some(Arc::new((*v1).clone()));
    let v2 = Some(Arc::new(Config {
        version: 2,
        name: "v2".to_string(),
        value: 20,
    }));
    println!(
        "   CAS with an equal copy: {}",
        atomic_config.compare_and_set(&lookalike, v2.clone())
    );
    println!(
        "   CAS with the held object: {}",
        atomic_config.compare_and_set(&Some(v1), v2)
    );
    println!("   Current: {:?}", atomic_config.get());

    // Example 3: Multi-threaded updates
    println!("\n3. Multi-threaded Updates:");
    let atomic_config = Arc::new(AtomicRef::new(Some(Arc::new(Config {
        version: 0,
        name: "shared".to_string(),
        value: 0,
    }))));
    let mut handles = vec![];

    for i in 0..10 {
        let atomic_config = atomic_config.clone();
        let handle = thread::spawn(move || {
            for _ in 0..10 {
                atomic_config.update_and_get(|current| {
                    current.map(|c| {
                        Arc::new(Config {
                            version: c.version + 1,
                            name: c.name.clone(),
                            value: c.value + 1,
                        })
                    })
                });
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    if let Some(final_config) = atomic_config.get() {
        println!("   Final config: {:?}", final_config);
        println!("   Expected version: 100, actual: {}", final_config.version);
    }

    println!("\n=== Example completed ===");
}
