//! Common traits for mergeable max-priority queues
//!
//! [`PriorityQueue`] is the interface shared by the queues in this crate:
//!
//! - [`BinomialForest`](crate::binomial::BinomialForest): forest of binomial trees, O(log n) merge
//! - [`SimpleBinaryQueue`](crate::simple_binary::SimpleBinaryQueue): array-backed binary heap
//!
//! Unlike `BinaryHeap::pop`, [`PriorityQueue::delete_max`] reports an empty
//! queue through [`EmptyQueueError`] instead of `None`.

use std::fmt;

/// Error returned by `delete_max` on an empty queue
///
/// The queue is left untouched when this error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot delete the maximum of an empty queue")
    }
}

impl std::error::Error for EmptyQueueError {}

/// Base trait for mergeable max-priority queues
///
/// Values are ordered by their own `Ord` implementation; the greatest value
/// is removed first.
///
/// # Example
///
/// ```rust
/// use binomial_forest::{BinomialForest, EmptyQueueError, PriorityQueue};
///
/// let mut queue = BinomialForest::new();
/// queue.insert(3);
/// queue.insert(7);
/// queue.insert(5);
///
/// assert_eq!(queue.delete_max(), Ok(7));
/// assert_eq!(queue.delete_max(), Ok(5));
/// assert_eq!(queue.delete_max(), Ok(3));
/// assert_eq!(queue.delete_max(), Err(EmptyQueueError));
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue holds no values
    fn is_empty(&self) -> bool;

    /// Returns the number of values in the queue
    fn len(&self) -> usize;

    /// Inserts a value
    ///
    /// # Time Complexity
    /// O(log n) for all implementations.
    fn insert(&mut self, value: T);

    /// Removes and returns the greatest value
    ///
    /// # Errors
    /// Returns [`EmptyQueueError`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n) for all implementations.
    fn delete_max(&mut self) -> Result<T, EmptyQueueError>;

    /// Moves every value of `other` into this queue
    ///
    /// `other` is left empty and can be reused.
    ///
    /// # Time Complexity
    /// Varies by implementation: O(log n) linking for the binomial forest,
    /// O(m log(n + m)) for the binary heap.
    fn merge(&mut self, other: &mut Self);
}
