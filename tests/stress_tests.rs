//! Stress tests that push the queues with large workloads
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use binomial_forest::simple_binary::SimpleBinaryQueue;
use binomial_forest::{BinomialForest, PriorityQueue};
use std::collections::BinaryHeap;

/// Test massive numbers of inserts and deletes
fn test_massive_operations<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();

    for i in 0..10_000 {
        queue.insert(i);
    }
    assert_eq!(queue.len(), 10_000);

    for i in (0..10_000).rev() {
        assert_eq!(queue.delete_max(), Ok(i));
    }
    assert!(queue.is_empty());
}

/// Test alternating insert and delete
fn test_alternating_ops<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();

    for i in 0..2_000 {
        queue.insert(i * 2);
        queue.insert(i * 2 + 1);
        assert!(queue.delete_max().is_ok());
    }
    assert_eq!(queue.len(), 2_000);

    let mut last = i32::MAX;
    while let Ok(value) = queue.delete_max() {
        assert!(value <= last);
        last = value;
    }
}

/// Test many merges of small queues into one
fn test_many_merges<Q: PriorityQueue<i32>>() {
    let mut total = Q::new();

    for batch in 0..500 {
        let mut small = Q::new();
        for j in 0..(batch % 7) {
            small.insert(batch * 10 + j);
        }
        total.merge(&mut small);
        assert!(small.is_empty());
    }

    let expected: usize = (0..500).map(|batch| (batch % 7) as usize).sum();
    assert_eq!(total.len(), expected);

    let mut last = i32::MAX;
    let mut count = 0;
    while let Ok(value) = total.delete_max() {
        assert!(value <= last);
        last = value;
        count += 1;
    }
    assert_eq!(count, expected);
}

/// Test merging two large queues
fn test_large_merge<Q: PriorityQueue<i32>>() {
    let mut queue1 = Q::new();
    let mut queue2 = Q::new();

    for i in 0..5_000 {
        queue1.insert(i * 2);
        queue2.insert(i * 2 + 1);
    }

    queue1.merge(&mut queue2);
    assert!(queue2.is_empty());
    assert_eq!(queue1.len(), 10_000);

    for i in (0..10_000).rev() {
        assert_eq!(queue1.delete_max(), Ok(i));
    }
}

/// Test pseudo-random interleavings with a reproducible generator
fn test_pseudo_random_ops<Q: PriorityQueue<u64>>() {
    let mut queue = Q::new();
    let mut reference = BinaryHeap::new();
    let mut state = 0x2545_f491_4f6c_dd1du64;

    for _ in 0..20_000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;

        if state % 3 == 0 {
            assert_eq!(queue.delete_max().ok(), reference.pop());
        } else {
            let value = state % 1_000;
            queue.insert(value);
            reference.push(value);
        }
    }
    assert_eq!(queue.len(), reference.len());
}

#[test]
fn test_binomial_massive_operations() {
    test_massive_operations::<BinomialForest<i32>>();
}

#[test]
fn test_binomial_alternating_ops() {
    test_alternating_ops::<BinomialForest<i32>>();
}

#[test]
fn test_binomial_many_merges() {
    test_many_merges::<BinomialForest<i32>>();
}

#[test]
fn test_binomial_large_merge() {
    test_large_merge::<BinomialForest<i32>>();
}

#[test]
fn test_binomial_pseudo_random_ops() {
    test_pseudo_random_ops::<BinomialForest<u64>>();
}

#[test]
fn test_simple_binary_massive_operations() {
    test_massive_operations::<SimpleBinaryQueue<i32>>();
}

#[test]
fn test_simple_binary_large_merge() {
    test_large_merge::<SimpleBinaryQueue<i32>>();
}

#[test]
fn test_simple_binary_pseudo_random_ops() {
    test_pseudo_random_ops::<SimpleBinaryQueue<u64>>();
}

#[test]
fn test_binomial_invariants_after_heavy_use() {
    let mut forest = BinomialForest::with_capacity(4_096);
    for i in 0..4_096 {
        forest.insert((i * 7919) % 4_096);
    }
    assert!(forest.verify_invariants());
    assert_eq!(forest.degrees().collect::<Vec<_>>(), vec![12]);

    for _ in 0..1_000 {
        forest.delete_max().unwrap();
    }
    assert!(forest.verify_invariants());
    assert_eq!(forest.len(), 3_096);
}
