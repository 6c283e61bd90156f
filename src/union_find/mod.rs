//! Disjoint-set ("union-find") structures over arbitrary hashable elements.
//!
//! Two strategies implement the same [`UnionFind`] contract:
//!
//! - [`QuickUnion`] keeps a parent link per element. Unions are cheap, connectivity queries walk
//!   parent chains.
//! - [`QuickFind`] keeps a group id per element. Connectivity queries are a single comparison,
//!   every union rescans all registered elements.
//!
//! [`DisjointSet`] picks one of them at runtime from a [`Strategy`].
//!
//! Adding an element that is already registered resets that element to a fresh singleton. Only
//! the re-added element is affected: elements it was previously merged with keep their own
//! state. In [`QuickUnion`] the elements linked directly below a re-added element are moved to
//! its parent, or under one of them if it was a root.

mod quick_find;
mod quick_union;
mod registry;

pub use quick_find::QuickFind;
pub use quick_union::{QuickUnion, Root};

use core::fmt::{self, Display};
use core::hash::Hash;
use displaydoc::Display;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UnionFindError<T> {
    #[error("Element {0:?} is not registered")]
    NotFound(T),
}

pub trait UnionFind {
    type Element;

    /// Registers `element` as a singleton group, resetting it if it was already registered.
    fn add(&mut self, element: Self::Element);

    /// Merges the groups containing `first` and `second`.
    ///
    /// Fails if either element was never added; merging two already connected elements is
    /// a no-op.
    fn union(
        &mut self,
        first: &Self::Element,
        second: &Self::Element,
    ) -> Result<(), UnionFindError<Self::Element>>;

    /// Checks whether `first` and `second` belong to the same group.
    fn is_connected(
        &self,
        first: &Self::Element,
        second: &Self::Element,
    ) -> Result<bool, UnionFindError<Self::Element>>;

    /// Number of distinct registered elements.
    fn len(&self) -> usize;

    /// Checks whether `element` has been added.
    fn contains(&self, element: &Self::Element) -> bool;

    /// Checks whether no element has been added yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds every element in order, with the same reset rule as [`add`](Self::add).
    fn add_all(&mut self, elements: impl IntoIterator<Item = Self::Element>)
    where
        Self: Sized,
    {
        for element in elements {
            self.add(element);
        }
    }
}

// Trade-off between union and query cost.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// quick union
    QuickUnion,
    /// quick find
    QuickFind,
}

#[derive(Clone, Debug)]
pub enum DisjointSet<T> {
    QuickUnion(QuickUnion<T>),
    QuickFind(QuickFind<T>),
}

impl<T: Hash + Eq + Clone> DisjointSet<T> {
    pub fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::QuickUnion => Self::QuickUnion(QuickUnion::new()),
            Strategy::QuickFind => Self::QuickFind(QuickFind::new()),
        }
    }

    pub fn from_elements(strategy: Strategy, elements: impl IntoIterator<Item = T>) -> Self {
        match strategy {
            Strategy::QuickUnion => Self::QuickUnion(elements.into_iter().collect()),
            Strategy::QuickFind => Self::QuickFind(elements.into_iter().collect()),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Self::QuickUnion(_) => Strategy::QuickUnion,
            Self::QuickFind(_) => Strategy::QuickFind,
        }
    }
}

impl<T: Hash + Eq + Clone> UnionFind for DisjointSet<T> {
    type Element = T;

    fn add(&mut self, element: T) {
        match self {
            Self::QuickUnion(set) => set.add(element),
            Self::QuickFind(set) => set.add(element),
        }
    }

    fn union(&mut self, first: &T, second: &T) -> Result<(), UnionFindError<T>> {
        match self {
            Self::QuickUnion(set) => set.union(first, second),
            Self::QuickFind(set) => set.union(first, second),
        }
    }

    fn is_connected(&self, first: &T, second: &T) -> Result<bool, UnionFindError<T>> {
        match self {
            Self::QuickUnion(set) => set.is_connected(first, second),
            Self::QuickFind(set) => set.is_connected(first, second),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::QuickUnion(set) => set.len(),
            Self::QuickFind(set) => set.len(),
        }
    }

    fn contains(&self, element: &T) -> bool {
        match self {
            Self::QuickUnion(set) => set.contains(element),
            Self::QuickFind(set) => set.contains(element),
        }
    }
}

impl<T: Display> Display for DisjointSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuickUnion(set) => Display::fmt(set, f),
            Self::QuickFind(set) => Display::fmt(set, f),
        }
    }
}
