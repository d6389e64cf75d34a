//! Binomial forest: a mergeable max-priority queue
//!
//! A binomial forest is a collection of binomial trees with:
//! - O(log n) insert and delete_max
//! - O(log n) linking during merge
//!
//! # Algorithm Overview
//!
//! The forest keeps a sequence of root slots indexed by degree:
//! - Slot k, if occupied, holds a binomial tree whose root has exactly k children
//! - At most one tree per degree, so the occupied slots spell out the element
//!   count in binary
//! - Every tree is max-heap ordered: a node is never less than its children
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes; its root's children are B_{k-1}, ..., B₀
//!
//! **Key Operations**:
//! - **Insert**: merge a one-node forest into the forest
//! - **Delete-max**: remove the greatest root, merge its children back in
//! - **Merge**: ripple-carry addition over the degree slots (see the `carry` module)
//!
//! # Storage
//!
//! Every node exclusively owns its first child and its next sibling through
//! `Box` links, and the forest owns the roots. Merging only moves root boxes
//! between slots; no node is copied or reallocated. Children hang off their
//! parent in decreasing degree order, so the first child of a Bₖ root is a
//! B_{k-1}.
//!
//! # Tie-breaking
//!
//! - When two trees of equal root value are linked, the tree already in the
//!   receiving forest wins (argument order is fixed by `carry::add_slot`).
//! - When several roots share the maximum value, the lowest degree wins.

use crate::carry::{add_slot, SlotCase};
use crate::traits::{EmptyQueueError, PriorityQueue};
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use tracing::{debug, trace};

/// Owning link to a subtree
type Link<T> = Option<Box<Node<T>>>;

/// Internal node structure for the binomial forest
///
/// The degree of a node is not stored: roots get it from their slot index and
/// children from their position in the parent's sibling chain.
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    /// First child, the root of the highest-degree subtree (None if leaf)
    child: Link<T>,
    /// Next sibling, one degree lower (None if last child or a root)
    sibling: Link<T>,
}

impl<T: Ord> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            child: None,
            sibling: None,
        })
    }

    /// Links two trees of the same degree into one tree of degree+1
    ///
    /// **Time Complexity**: O(1)
    ///
    /// The root with the smaller value becomes the first child of the other
    /// root, so its subtree sits in front of the parent's existing children
    /// (which all have lower degree). `a` stays the parent on ties.
    fn link(mut a: Box<Self>, mut b: Box<Self>) -> Box<Self> {
        if a.value < b.value {
            mem::swap(&mut a, &mut b);
        }
        b.sibling = a.child.take();
        a.child = Some(b);
        a
    }

    /// Node count of this subtree if it is a heap-ordered binomial tree of
    /// `degree`
    fn tree_size(&self, degree: usize) -> Option<usize> {
        let mut size = 1;
        let mut expected = degree;
        let mut next = self.child.as_deref();

        while let Some(child) = next {
            if expected == 0 || child.value > self.value {
                return None;
            }
            expected -= 1;
            size += child.tree_size(expected)?;
            next = child.sibling.as_deref();
        }

        (expected == 0).then_some(size)
    }
}

/// Binomial forest max-priority queue
///
/// # Example
///
/// ```rust
/// use binomial_forest::{BinomialForest, PriorityQueue};
///
/// let mut forest = BinomialForest::new();
/// forest.insert(10);
/// forest.insert(50);
///
/// let mut other = BinomialForest::new();
/// other.insert(30);
///
/// forest.merge(&mut other);
/// assert!(other.is_empty());
/// assert_eq!(forest.delete_max(), Ok(50));
/// assert_eq!(forest.delete_max(), Ok(30));
/// ```
#[derive(Clone)]
pub struct BinomialForest<T> {
    /// Trees indexed by degree; the last slot is always occupied
    roots: Vec<Link<T>>,
    /// Number of values in the forest
    len: usize,
}

impl<T: Ord> PriorityQueue<T> for BinomialForest<T> {
    fn new() -> Self {
        Self {
            roots: Vec::new(),
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Inserts a value into the forest
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The value becomes a one-node B₀ forest that is merged in like adding 1
    /// to a binary counter: the carry ripples up through occupied slots until
    /// it lands in an empty one.
    fn insert(&mut self, value: T) {
        self.len += 1;
        self.merge_roots(vec![Some(Node::leaf(value))]);
    }

    /// Removes and returns the greatest value
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Scan the roots for the greatest value (O(log n) roots)
    /// 2. Detach that tree from its slot
    /// 3. Its children B_{k-1}, ..., B₀ form a forest once reversed into
    ///    increasing degree order
    /// 4. Merge that forest back in and drop the old root
    ///
    /// An empty forest returns [`EmptyQueueError`] and is left unchanged.
    fn delete_max(&mut self) -> Result<T, EmptyQueueError> {
        let degree = self.find_max_root().ok_or(EmptyQueueError)?;
        let mut root = self.roots[degree].take().ok_or(EmptyQueueError)?;

        let children = detach_children(&mut root);
        self.len -= 1;
        self.merge_roots(children);

        debug!(degree, remaining = self.len, "deleted maximum");
        Ok(root.value)
    }

    /// Moves every value of `other` into this forest
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// Only root boxes move: `other`'s trees are relinked into this forest's
    /// slots by the ripple-carry walk, and `other` is left empty.
    fn merge(&mut self, other: &mut Self) {
        let theirs = mem::take(&mut other.roots);
        let incoming = mem::take(&mut other.len);

        self.len += incoming;
        self.merge_roots(theirs);

        debug!(len = self.len, incoming, "merged forests");
    }
}

impl<T: Ord> BinomialForest<T> {
    /// Creates an empty forest with root slots for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = (usize::BITS - capacity.leading_zeros()) as usize;
        Self {
            roots: Vec::with_capacity(slots),
            len: 0,
        }
    }

    /// Creates a forest holding a single B₀ tree
    pub fn singleton(value: T) -> Self {
        Self {
            roots: vec![Some(Node::leaf(value))],
            len: 1,
        }
    }

    /// Returns the degree (slot index) of the tree with the greatest root
    ///
    /// On equal root values the lowest degree wins. Returns `None` if the
    /// forest is empty.
    pub fn find_max_root(&self) -> Option<usize> {
        let mut best: Option<(usize, &T)> = None;
        for (degree, slot) in self.roots.iter().enumerate() {
            let Some(root) = slot else { continue };
            match best {
                Some((_, max)) if root.value <= *max => {}
                _ => best = Some((degree, &root.value)),
            }
        }
        best.map(|(degree, _)| degree)
    }

    /// Returns an iterator over all values in arbitrary order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.roots.iter().filter_map(|slot| slot.as_deref()).collect(),
            remaining: self.len,
        }
    }

    /// Returns the occupied root degrees in increasing order
    ///
    /// These are the set bits of `len()`.
    pub fn degrees(&self) -> impl Iterator<Item = usize> + '_ {
        self.roots
            .iter()
            .enumerate()
            .filter_map(|(degree, slot)| slot.as_ref().map(|_| degree))
    }

    /// Drains the forest into a vector in non-increasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Ok(value) = self.delete_max() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks every structural invariant of the forest
    ///
    /// - the last root slot is occupied (or there are no slots)
    /// - the tree in slot k is a binomial tree of degree k with 2ᵏ nodes
    /// - every node is at least as great as each of its children
    /// - the trees hold exactly `len()` nodes
    pub fn verify_invariants(&self) -> bool {
        if matches!(self.roots.last(), Some(None)) {
            return false;
        }

        let mut total = 0usize;
        for (degree, slot) in self.roots.iter().enumerate() {
            let Some(root) = slot else { continue };
            if root.sibling.is_some() {
                return false;
            }
            match root.tree_size(degree) {
                Some(size) if size == 1 << degree => total += size,
                _ => return false,
            }
        }

        total == self.len
    }

    /// Ripple-carry merge of `theirs` into this forest's root slots
    ///
    /// Stops once `theirs` is exhausted and no carry is pending; the remaining
    /// slots of `self` are unaffected by the rest of the walk.
    fn merge_roots(&mut self, mut theirs: Vec<Link<T>>) {
        let mut carry: Link<T> = None;
        let mut degree = 0;

        while degree < theirs.len() || carry.is_some() {
            if degree == self.roots.len() {
                self.roots.push(None);
            }

            let mine = self.roots[degree].take();
            let other = theirs.get_mut(degree).and_then(Option::take);

            let case = SlotCase::classify(mine.is_some(), other.is_some(), carry.is_some());
            trace!(degree, %case, links = case.links(), "merge step");

            let outcome = add_slot(mine, other, carry, Node::link);
            self.roots[degree] = outcome.slot;
            carry = outcome.carry;
            degree += 1;
        }

        while let Some(None) = self.roots.last() {
            self.roots.pop();
        }
    }
}

/// Detaches the children of `root` as a forest in increasing degree order
fn detach_children<T>(root: &mut Node<T>) -> Vec<Link<T>> {
    let mut children = Vec::new();
    let mut next = root.child.take();

    while let Some(mut node) = next {
        next = node.sibling.take();
        children.push(Some(node));
    }

    // the sibling chain runs from degree k-1 down to 0
    children.reverse();
    children
}

impl<T: Ord> Default for BinomialForest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinomialForest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees: Vec<usize> = self
            .roots
            .iter()
            .enumerate()
            .filter_map(|(degree, slot)| slot.as_ref().map(|_| degree))
            .collect();
        f.debug_struct("BinomialForest")
            .field("len", &self.len)
            .field("degrees", &degrees)
            .finish()
    }
}

impl<T: Ord> FromIterator<T> for BinomialForest<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut forest = Self::with_capacity(iter.size_hint().0);
        forest.extend(iter);
        forest
    }
}

impl<T: Ord> Extend<T> for BinomialForest<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Borrowing iterator over all values in arbitrary order
///
/// Created by [`BinomialForest::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        if let Some(sibling) = node.sibling.as_deref() {
            self.stack.push(sibling);
        }
        if let Some(child) = node.child.as_deref() {
            self.stack.push(child);
        }
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Owning iterator yielding values in non-increasing order
///
/// Created by [`BinomialForest::into_iter`]; each step is a `delete_max`.
#[derive(Debug)]
pub struct IntoIter<T> {
    forest: BinomialForest<T>,
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.forest.delete_max().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.forest.len;
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> IntoIterator for BinomialForest<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { forest: self }
    }
}
