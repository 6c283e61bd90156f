use super::registry::{Registration, Registry};
use super::{UnionFind, UnionFindError};
use core::fmt::{self, Display};
use core::hash::Hash;

/// Disjoint set storing an explicit group id per element.
///
/// Queries compare two ids, unions relabel every member of the first group, which is linear in
/// the number of registered elements.
#[derive(Clone, Debug)]
pub struct QuickFind<T> {
    registry: Registry<T>,
    groups: Vec<usize>,
    // Ids are never handed out twice, even to re-added elements.
    next_group: usize,
}

impl<T> Default for QuickFind<T> {
    fn default() -> Self {
        Self {
            registry: Registry::default(),
            groups: Vec::new(),
            next_group: 0,
        }
    }
}

impl<T: Hash + Eq + Clone> QuickFind<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: Registry::with_capacity(capacity),
            groups: Vec::with_capacity(capacity),
            next_group: 0,
        }
    }

    /// Returns the label of the group `element` currently belongs to.
    ///
    /// Labels are only meaningful for equality: they are not reused, so they don't count the
    /// number of groups.
    pub fn group_id(&self, element: &T) -> Result<usize, UnionFindError<T>> {
        Ok(self.groups[self.registry.id_of(element)?.index()])
    }
}

impl<T: Hash + Eq + Clone> UnionFind for QuickFind<T> {
    type Element = T;

    fn add(&mut self, element: T) {
        let group = self.next_group;
        self.next_group += 1;
        match self.registry.register(element) {
            Registration::Fresh(_) => self.groups.push(group),
            Registration::Existing(id) => {
                log::debug!(
                    "moving re-added element #{} from group {} to group {group}",
                    id.index(),
                    self.groups[id.index()],
                );
                self.groups[id.index()] = group;
            }
        }
    }

    fn union(&mut self, first: &T, second: &T) -> Result<(), UnionFindError<T>> {
        let from = self.group_id(first)?;
        let to = self.group_id(second)?;
        if from == to {
            return Ok(());
        }

        let mut relabeled = 0;
        for group in self.groups.iter_mut().filter(|group| **group == from) {
            *group = to;
            relabeled += 1;
        }
        log::trace!("relabeled {relabeled} elements from group {from} to group {to}");
        Ok(())
    }

    fn is_connected(&self, first: &T, second: &T) -> Result<bool, UnionFindError<T>> {
        Ok(self.group_id(first)? == self.group_id(second)?)
    }

    fn len(&self) -> usize {
        self.registry.len()
    }

    fn contains(&self, element: &T) -> bool {
        self.registry.contains(element)
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for QuickFind<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut set = Self::new();
        set.add_all(elements);
        set
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for QuickFind<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.add_all(elements);
    }
}

impl<T: Display> Display for QuickFind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self
            .registry
            .iter()
            .map(|(id, element)| (self.groups[id.index()], element))
            .collect();
        // Stable, so equal groups keep registration order.
        entries.sort_by_key(|(group, _)| *group);

        for (i, (group, element)) in entries.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{element}: {group}")?;
        }
        Ok(())
    }
}
