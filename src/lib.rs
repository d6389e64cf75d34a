//! Mergeable max-priority queues for Rust
//!
//! This crate provides a binomial forest (binomial heap) ordered for the
//! maximum, together with a simple binary heap behind the same trait.
//!
//! # Features
//!
//! - **Binomial Forest**: O(log n) insert and delete-max; merge links in O(log n)
//!   by ripple-carry addition over degree slots
//! - **Simple Binary Queue**: array-backed reference heap with O(m log n) merge
//!
//! Removing from an empty queue is reported as [`EmptyQueueError`], never as a
//! sentinel value.
//!
//! # Example
//!
//! ```rust
//! use binomial_forest::{BinomialForest, PriorityQueue};
//!
//! let mut morning: BinomialForest<u32> = [10, 20, 20, 50].into_iter().collect();
//! let mut evening: BinomialForest<u32> = [30, 10, 10, 40, 30].into_iter().collect();
//!
//! morning.merge(&mut evening);
//! assert!(evening.is_empty());
//!
//! let drained: Vec<u32> = morning.into_iter().collect();
//! assert_eq!(drained, vec![50, 40, 30, 30, 20, 20, 10, 10, 10]);
//! ```

pub mod binomial;
mod carry;
pub mod simple_binary;
pub mod traits;

// Re-export the main types for convenience
pub use binomial::BinomialForest;
pub use traits::{EmptyQueueError, PriorityQueue};
