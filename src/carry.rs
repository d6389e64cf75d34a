//! Ripple-carry table for merging binomial forests
//!
//! Merging two forests walks degree slots from 0 upward, exactly like adding
//! two binary numbers. At each degree there are up to three candidate trees:
//!
//! - `mine`: the tree already in the receiving forest's slot
//! - `theirs`: the other forest's tree of the same degree
//! - `carry`: the tree produced by linking at the previous degree
//!
//! The eight combinations are listed below. Two trees always link into one
//! carry of the next degree; a slot holds at most one tree, so three
//! candidates resolve to "one stays, two move forward".
//!
//! | mine | theirs | carry | slot keeps | new carry |
//! |------|--------|-------|------------|-----------|
//! |  -   |   -    |   -   |     -      |     -     |
//! |  a   |   -    |   -   |     a      |     -     |
//! |  -   |   b    |   -   |     b      |     -     |
//! |  -   |   -    |   c   |     c      |     -     |
//! |  a   |   b    |   -   |     -      | link(a,b) |
//! |  a   |   -    |   c   |     -      | link(a,c) |
//! |  -   |   b    |   c   |     -      | link(b,c) |
//! |  a   |   b    |   c   |     c      | link(a,b) |
//!
//! The table is generic over the tree handle `K` so it can be tested without
//! building any trees.

use std::fmt;

/// Which of the three candidate trees are present at one degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotCase {
    Empty,
    MineOnly,
    TheirsOnly,
    CarryOnly,
    MineTheirs,
    MineCarry,
    TheirsCarry,
    All,
}

impl SlotCase {
    pub(crate) fn classify(mine: bool, theirs: bool, carry: bool) -> Self {
        match (mine, theirs, carry) {
            (false, false, false) => SlotCase::Empty,
            (true, false, false) => SlotCase::MineOnly,
            (false, true, false) => SlotCase::TheirsOnly,
            (false, false, true) => SlotCase::CarryOnly,
            (true, true, false) => SlotCase::MineTheirs,
            (true, false, true) => SlotCase::MineCarry,
            (false, true, true) => SlotCase::TheirsCarry,
            (true, true, true) => SlotCase::All,
        }
    }

    /// Whether this step links two trees into a new carry
    pub(crate) fn links(self) -> bool {
        matches!(
            self,
            SlotCase::MineTheirs | SlotCase::MineCarry | SlotCase::TheirsCarry | SlotCase::All
        )
    }
}

impl fmt::Display for SlotCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlotCase::Empty => "empty",
            SlotCase::MineOnly => "mine",
            SlotCase::TheirsOnly => "theirs",
            SlotCase::CarryOnly => "carry",
            SlotCase::MineTheirs => "mine+theirs",
            SlotCase::MineCarry => "mine+carry",
            SlotCase::TheirsCarry => "theirs+carry",
            SlotCase::All => "mine+theirs+carry",
        };
        f.write_str(name)
    }
}

/// Result of resolving one degree slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SlotOutcome<K> {
    /// Tree left in the receiving forest at this degree
    pub slot: Option<K>,
    /// Tree of the next degree, to be resolved at the next slot
    pub carry: Option<K>,
}

/// Resolves one degree slot of a ripple-carry merge
///
/// `link(a, b)` must combine two trees of the current degree into one tree of
/// the next degree. The first argument is always the tree that wins ties:
/// `mine` over `theirs`, `mine` over `carry`, `theirs` over `carry`.
pub(crate) fn add_slot<K>(
    mine: Option<K>,
    theirs: Option<K>,
    carry: Option<K>,
    mut link: impl FnMut(K, K) -> K,
) -> SlotOutcome<K> {
    let (slot, carry) = match (mine, theirs, carry) {
        (None, None, None) => (None, None),
        (Some(a), None, None) => (Some(a), None),
        (None, Some(b), None) => (Some(b), None),
        (None, None, Some(c)) => (Some(c), None),
        (Some(a), Some(b), None) => (None, Some(link(a, b))),
        (Some(a), None, Some(c)) => (None, Some(link(a, c))),
        (None, Some(b), Some(c)) => (None, Some(link(b, c))),
        // the incoming carry takes the slot, the two forest trees move on
        (Some(a), Some(b), Some(c)) => (Some(c), Some(link(a, b))),
    };
    SlotOutcome { slot, carry }
}
