use core::ops::{Index, IndexMut};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

// Storage for values addressed by stable ids. Freed slots are chained into a free list and
// recycled by later allocations.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    first_free: Option<NodeId>,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<NodeId> },
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            first_free: None,
        }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, value: T) -> NodeId {
        if let Some(id) = self.first_free {
            let slot = core::mem::replace(&mut self.slots[id.0 as usize], Slot::Occupied(value));
            let Slot::Vacant { next_free } = slot else {
                unreachable!("occupied slot on the free list");
            };
            self.first_free = next_free;
            return id;
        }

        let id = NodeId(self.slots.len().try_into().expect("node ID overflow"));
        self.slots.push(Slot::Occupied(value));
        id
    }

    pub fn free(&mut self, id: NodeId) -> T {
        let slot = core::mem::replace(
            &mut self.slots[id.0 as usize],
            Slot::Vacant {
                next_free: self.first_free,
            },
        );
        let Slot::Occupied(value) = slot else {
            panic!("double free of node ID");
        };
        self.first_free = Some(id);
        value
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.first_free = None;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match &self.slots[id.0 as usize] {
            Slot::Occupied(value) => value,
            Slot::Vacant { .. } => panic!("non-existing node ID"),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match &mut self.slots[id.0 as usize] {
            Slot::Occupied(value) => value,
            Slot::Vacant { .. } => panic!("non-existing node ID"),
        }
    }
}
