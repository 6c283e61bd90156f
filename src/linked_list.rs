use crate::arena::{Arena, NodeId};
use core::fmt::{self, Debug, Display};
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};

// Nodes live in an arena owned by the list. `next` and `prev` are plain ids, so unlinking a node
// only rewrites its neighbours' ids and returns the slot to the arena.
#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A doubly-linked list.
///
/// Both ends are O(1) to push to and pop from. Positional access walks from the front.
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, value: T) {
        let id = self.nodes.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let id = self.nodes.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Pushes each element to the front in turn, so the last one ends up first.
    pub fn extend_front(&mut self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.push_front(value);
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.nodes.free(self.head?);
        self.head = node.next;
        match self.head {
            Some(head) => self.nodes[head].prev = None,
            None => self.tail = None,
        }
        self.len -= 1;
        Some(node.value)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.nodes.free(self.tail?);
        self.tail = node.prev;
        match self.tail {
            Some(tail) => self.nodes[tail].next = None,
            None => self.head = None,
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Inserts `value` before the element at `index`, or at the back if `index == len`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );
        if index == 0 {
            return self.push_front(value);
        }
        let Some(next) = self.node_at(index) else {
            return self.push_back(value);
        };

        let prev = self.nodes[next].prev;
        let id = self.nodes.alloc(Node {
            value,
            prev,
            next: Some(next),
        });
        self.nodes[next].prev = Some(id);
        if let Some(prev) = prev {
            self.nodes[prev].next = Some(id);
        }
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|id| &self.nodes[id].value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let id = self.node_at(index)?;
        Some(&mut self.nodes[id].value)
    }

    fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        let mut id = self.head?;
        for _ in 0..index {
            id = self.nodes[id].next?;
        }
        Some(id)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Index of the first occurrence of `value`, counting from the front.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    /// Index of the last occurrence of `value`, counting from the back (the last element has
    /// index 0).
    pub fn rposition(&self, value: &T) -> Option<usize> {
        self.iter().rev().position(|element| element == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|element| element == value)
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("index out of bounds: the len is {} but the index is {index}", self.len),
        }
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::new();
        list.extend(values);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push_back(value);
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ←→ ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Consuming iterator: every step pops the front element off the list.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::SmallRng};
    use std::collections::VecDeque;

    #[test]
    fn creation() {
        let list: LinkedList<_> = [1, 8, 3, 10, 15].into_iter().collect();
        assert_eq!(list.len(), 5);
        assert!(!list.is_empty());
        assert_eq!(list.to_string(), "[1 ←→ 8 ←→ 3 ←→ 10 ←→ 15]");
        assert_eq!(format!("{list:?}"), "[1, 8, 3, 10, 15]");
        assert_eq!(LinkedList::<i32>::new().to_string(), "[]");
    }

    #[test]
    fn push_to_both_ends() {
        let mut list = LinkedList::new();
        assert!(list.is_empty());
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(list.to_string(), "[3 ←→ 2 ←→ 1]");

        list.extend_front([4, 5]);
        assert_eq!(list.len(), 5);
        assert_eq!(list.to_string(), "[5 ←→ 4 ←→ 3 ←→ 2 ←→ 1]");

        list.push_back(0);
        list.extend([-1, -2]);
        assert_eq!(list.to_string(), "[5 ←→ 4 ←→ 3 ←→ 2 ←→ 1 ←→ 0 ←→ -1 ←→ -2]");
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn pop_front_until_empty() {
        let mut list: LinkedList<_> = (1..=3).collect();
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.to_string(), "[2 ←→ 3]");
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.to_string(), "[3]");
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.to_string(), "[]");
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn pop_back_until_empty() {
        let mut list: LinkedList<_> = (1..=3).collect();
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.to_string(), "[1 ←→ 2]");
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.to_string(), "[1]");
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.to_string(), "[]");
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        // The list is still usable after draining.
        list.push_back(7);
        assert_eq!(list.front(), Some(&7));
        assert_eq!(list.back(), Some(&7));
    }

    #[test]
    fn lookups() {
        let mut list: LinkedList<_> = [1, 2, 3, 1].into_iter().collect();
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.iter().map(|v| v.to_string()).collect::<String>(), "1231");

        assert_eq!(list.position(&1), Some(0));
        assert_eq!(list.position(&3), Some(2));
        assert_eq!(list.rposition(&1), Some(0));
        assert_eq!(list.rposition(&2), Some(2));
        assert_eq!(list.position(&8), None);
        assert_eq!(list.rposition(&8), None);
        assert!(list.contains(&2));
        assert!(!list.contains(&8));

        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "[]");
    }

    #[test]
    fn insertion() {
        let mut list: LinkedList<_> = (1..=3).collect();
        list.insert(0, 4);
        assert_eq!(list.to_string(), "[4 ←→ 1 ←→ 2 ←→ 3]");
        list.insert(3, 5);
        assert_eq!(list.to_string(), "[4 ←→ 1 ←→ 2 ←→ 5 ←→ 3]");
        list.insert(2, 6);
        assert_eq!(list.to_string(), "[4 ←→ 1 ←→ 6 ←→ 2 ←→ 5 ←→ 3]");
        list.insert(6, 7);
        assert_eq!(list.to_string(), "[4 ←→ 1 ←→ 6 ←→ 2 ←→ 5 ←→ 3 ←→ 7]");
        assert_eq!(list.len(), 7);

        // Back links must follow the insertions too.
        let reversed: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(reversed, [7, 3, 5, 2, 6, 1, 4]);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 4) should be <= len (is 3)")]
    fn insertion_out_of_range() {
        let mut list: LinkedList<_> = (1..=3).collect();
        list.insert(4, 0);
    }

    #[test]
    fn indexing() {
        let mut list: LinkedList<_> = ["Test", "Get", "Subscript"].into_iter().collect();
        assert_eq!(list[0], "Test");
        assert_eq!(list[1], "Get");
        assert_eq!(list[2], "Subscript");
        assert_eq!(list.get(3), None);

        list[1] = "Set";
        assert_eq!(list.to_string(), "[Test ←→ Set ←→ Subscript]");
        *list.get_mut(2).unwrap() = "Index";
        assert_eq!(list.to_string(), "[Test ←→ Set ←→ Index]");
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the len is 2 but the index is 2")]
    fn indexing_out_of_range() {
        let list: LinkedList<_> = (1..=2).collect();
        let _value = list[2];
    }

    #[test]
    fn consuming_pops_from_the_front() {
        let list: LinkedList<_> = (1..=5).collect();
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.collect::<Vec<_>>(), [2, 3, 4]);
    }

    #[test]
    fn matches_vec_deque() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut list = LinkedList::new();
        let mut expected = VecDeque::new();

        for step in 0..10000 {
            match rng.gen_range(0..6) {
                0 => {
                    list.push_front(step);
                    expected.push_front(step);
                }
                1 => {
                    list.push_back(step);
                    expected.push_back(step);
                }
                2 => assert_eq!(list.pop_front(), expected.pop_front()),
                3 => assert_eq!(list.pop_back(), expected.pop_back()),
                4 => {
                    let index = rng.gen_range(0..=expected.len());
                    list.insert(index, step);
                    expected.insert(index, step);
                }
                _ => {
                    if !expected.is_empty() {
                        let index = rng.gen_range(0..expected.len());
                        assert_eq!(list[index], expected[index]);
                    }
                }
            }
            assert_eq!(list.len(), expected.len());
        }

        assert!(list.iter().eq(expected.iter()));
        assert!(list.iter().rev().eq(expected.iter().rev()));
    }
}
