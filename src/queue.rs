use crate::linked_list::{self, LinkedList};
use core::fmt::{self, Display};

/// A FIFO queue backed by [`LinkedList`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Queue<T> {
    data: LinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self {
            data: LinkedList::new(),
        }
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, value: T) {
        self.data.push_back(value);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.data.pop_front()
    }

    /// The element `dequeue` would return next.
    pub fn front(&self) -> Option<&T> {
        self.data.front()
    }

    /// The most recently enqueued element.
    pub fn top(&self) -> Option<&T> {
        self.data.back()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: PartialEq> Queue<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.data.contains(value)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            data: values.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.data.extend(values);
    }
}

// Head first.
impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ← ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

// Dequeuing and popping the front of the list are the same operation.
impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = linked_list::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
