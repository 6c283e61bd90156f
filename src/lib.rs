//! Generic in-memory collections: a doubly-linked list, a stack, a queue, and two disjoint-set
//! strategies sharing the [`UnionFind`] interface.
//!
//! ```
//! use plus_collections::{DisjointSet, Strategy, UnionFind};
//!
//! let mut set = DisjointSet::from_elements(Strategy::QuickUnion, 1..=4);
//! set.union(&1, &2)?;
//! set.union(&3, &4)?;
//! assert!(!set.is_connected(&1, &3)?);
//! set.union(&2, &3)?;
//! assert!(set.is_connected(&1, &4)?);
//! # Ok::<(), plus_collections::UnionFindError<i32>>(())
//! ```

mod arena;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod union_find;

pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
pub use union_find::{
    DisjointSet, QuickFind, QuickUnion, Root, Strategy, UnionFind, UnionFindError,
};
