//! Simple Binary Heap adapter
//!
//! [`SimpleBinaryQueue`] puts `std::collections::BinaryHeap` behind the
//! [`PriorityQueue`] trait, so generic tests can use it as a reference oracle
//! for the binomial forest and benchmarks can use it as a baseline for the
//! same trait calls.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity              |
//! |--------------|-------------------------|
//! | `insert`     | O(1) expected, O(log n) |
//! | `delete_max` | O(log n)                |
//! | `merge`      | O(n + m)                |
//!
//! # Example
//!
//! ```rust
//! use binomial_forest::PriorityQueue;
//! use binomial_forest::simple_binary::SimpleBinaryQueue;
//!
//! let mut queue = SimpleBinaryQueue::new();
//! queue.insert(3);
//! queue.insert(1);
//! queue.insert(2);
//!
//! assert_eq!(queue.delete_max(), Ok(3));
//! assert_eq!(queue.delete_max(), Ok(2));
//! assert_eq!(queue.delete_max(), Ok(1));
//! assert!(queue.delete_max().is_err());
//! ```

use crate::traits::{EmptyQueueError, PriorityQueue};
use std::collections::BinaryHeap;

/// A binary max-heap queue
#[derive(Debug, Clone)]
pub struct SimpleBinaryQueue<T: Ord> {
    heap: BinaryHeap<T>,
}

impl<T: Ord> PriorityQueue<T> for SimpleBinaryQueue<T> {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insert(&mut self, value: T) {
        self.heap.push(value);
    }

    fn delete_max(&mut self) -> Result<T, EmptyQueueError> {
        self.heap.pop().ok_or(EmptyQueueError)
    }

    /// Moves `other`'s values in with `BinaryHeap::append`, which rebuilds
    /// from the larger heap
    fn merge(&mut self, other: &mut Self) {
        self.heap.append(&mut other.heap);
    }
}

impl<T: Ord> Default for SimpleBinaryQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
