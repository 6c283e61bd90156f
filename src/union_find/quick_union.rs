use super::registry::{ElementId, Registration, Registry};
use super::{UnionFind, UnionFindError};
use core::fmt::{self, Display};
use core::hash::Hash;

/// Tree-based disjoint set.
///
/// Each element links to a parent, roots link to themselves. Lookups walk the chain without
/// compressing it, so the cost of a query is the depth of the queried element.
///
/// Unions attach the root reached through the shorter walk under the other root. The walk
/// length of the two queried elements stands in for the size of their trees: this is only an
/// approximation of union-by-size, and ties attach the second root under the first.
///
/// Re-adding an element walks all entries to re-link its direct children, so it is linear in
/// the number of registered elements.
#[derive(Clone, Debug)]
pub struct QuickUnion<T> {
    registry: Registry<T>,
    parents: Vec<ElementId>,
}

/// The representative of an element's group, along with the number of links followed to reach
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Root<'a, T> {
    pub element: &'a T,
    pub depth: usize,
}

impl<T> Default for QuickUnion<T> {
    fn default() -> Self {
        Self {
            registry: Registry::default(),
            parents: Vec::new(),
        }
    }
}

impl<T: Hash + Eq + Clone> QuickUnion<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: Registry::with_capacity(capacity),
            parents: Vec::with_capacity(capacity),
        }
    }

    pub fn root(&self, element: &T) -> Result<Root<'_, T>, UnionFindError<T>> {
        let (root, depth) = self.resolve(self.registry.id_of(element)?);
        Ok(Root {
            element: &self.registry[root],
            depth,
        })
    }

    fn resolve(&self, mut id: ElementId) -> (ElementId, usize) {
        let mut depth = 0;
        while self.parents[id.index()] != id {
            id = self.parents[id.index()];
            depth += 1;
        }
        (id, depth)
    }

    // Turns `id` into a singleton while keeping everything else connected as before. Direct
    // children move to the old parent or, if `id` was a root, under its first child, which
    // becomes the new root.
    fn detach(&mut self, id: ElementId) {
        let parent = self.parents[id.index()];
        let mut new_parent = (parent != id).then_some(parent);
        let mut moved = 0;
        for (child, _) in self.registry.iter() {
            if child == id || self.parents[child.index()] != id {
                continue;
            }
            self.parents[child.index()] = *new_parent.get_or_insert(child);
            moved += 1;
        }
        log::debug!(
            "detaching re-added element #{} and moving {moved} children",
            id.index()
        );
        self.parents[id.index()] = id;
    }
}

impl<T: Hash + Eq + Clone> UnionFind for QuickUnion<T> {
    type Element = T;

    fn add(&mut self, element: T) {
        match self.registry.register(element) {
            Registration::Fresh(id) => self.parents.push(id),
            Registration::Existing(id) => self.detach(id),
        }
    }

    fn union(&mut self, first: &T, second: &T) -> Result<(), UnionFindError<T>> {
        let first = self.registry.id_of(first)?;
        let second = self.registry.id_of(second)?;
        let (first_root, first_depth) = self.resolve(first);
        let (second_root, second_depth) = self.resolve(second);
        if first_root == second_root {
            return Ok(());
        }

        let (child, parent) = if first_depth < second_depth {
            (first_root, second_root)
        } else {
            (second_root, first_root)
        };
        log::trace!(
            "attaching root #{} under root #{} (depths {first_depth} and {second_depth})",
            child.index(),
            parent.index(),
        );
        self.parents[child.index()] = parent;
        Ok(())
    }

    fn is_connected(&self, first: &T, second: &T) -> Result<bool, UnionFindError<T>> {
        let first = self.registry.id_of(first)?;
        let second = self.registry.id_of(second)?;
        Ok(self.resolve(first).0 == self.resolve(second).0)
    }

    fn len(&self) -> usize {
        self.registry.len()
    }

    fn contains(&self, element: &T) -> bool {
        self.registry.contains(element)
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for QuickUnion<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut set = Self::new();
        set.add_all(elements);
        set
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for QuickUnion<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.add_all(elements);
    }
}

impl<T: Display> Display for QuickUnion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (id, element)) in self.registry.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{element}: {}", self.registry[self.parents[id.index()]])?;
        }
        Ok(())
    }
}
