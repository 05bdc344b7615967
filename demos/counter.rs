/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Integer Example
//!
//! Demonstrates the atomic integer cell: counters, flag masks, and
//! optimistic updates with compare-and-set.

use prism3_atomic_cell::{AtomicI8, AtomicInteger};
use std::sync::Arc;
use std::thread;

const READY: i64 = 0b001;
const RUNNING: i64 = 0b010;
const STOPPED: i64 = 0b100;

fn main() {
    println!("=== Atomic Integer Example ===\n");

    // Example 1: Fetch-and-modify pairs
    println!("1. Fetch-and-Modify:");
    let counter = AtomicInteger::new(1);
    println!("   get_and_add(2)  -> {} (now {})", counter.get_and_add(2), counter.get());
    println!("   add_and_get(2)  -> {}", counter.add_and_get(2));
    println!("   nand_and_get(2) -> {} (= !(5 & 2))", counter.nand_and_get(2));

    // Example 2: Multi-threaded counter
    println!("\n2. Multi-threaded Counter:");
    let counter = Arc::new(AtomicInteger::new(0));
    let num_threads = 10;
    let increments_per_thread = 1000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..increments_per_thread {
                counter.add_and_get(1);
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Final count: {} (expected: {})",
        counter.get(),
        num_threads * increments_per_thread
    );

    // Example 3: Compare-and-set
    println!("\n3. Compare-and-Set:");
    let cell = AtomicInteger::new(1);
    println!("   compare_and_set(1, 99)  -> {} (now {})", cell.compare_and_set(1, 99), cell.get());
    println!("   compare_and_set(1, 100) -> {} (now {})", cell.compare_and_set(1, 100), cell.get());

    // Example 4: State flags
    println!("\n4. State Flags:");
    let state = AtomicInteger::new(READY);
    state.or_and_get(RUNNING);
    println!("   running: {}", state.get() & RUNNING != 0);
    let previous = state.get_and_and(!RUNNING);
    state.get_and_or(STOPPED);
    println!("   was running: {}, now: {:#05b}", previous & RUNNING != 0, state.get());

    // Example 5: Checked input from a wider domain
    println!("\n5. Checked Input:");
    let small = AtomicI8::new(0);
    match small.try_set(300) {
        Ok(()) => println!("   stored {}", small.get()),
        Err(err) => println!("   rejected: {}", err),
    }
    println!("   cell still holds {}", small);

    println!("\n=== Example completed ===");
}
