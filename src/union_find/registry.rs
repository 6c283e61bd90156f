use super::UnionFindError;
use core::hash::Hash;
use core::ops::Index;
use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

pub enum Registration {
    Fresh(ElementId),
    Existing(ElementId),
}

// Elements are kept in registration order next to the lookup table, so ids are dense and stable,
// and dumps don't depend on hash order.
#[derive(Clone, Debug)]
pub struct Registry<T> {
    ids: FxHashMap<T, ElementId>,
    elements: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            ids: FxHashMap::default(),
            elements: Vec::new(),
        }
    }
}

impl<T: Hash + Eq + Clone> Registry<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn register(&mut self, element: T) -> Registration {
        if let Some(&id) = self.ids.get(&element) {
            return Registration::Existing(id);
        }
        let id = ElementId(self.elements.len());
        self.ids.insert(element.clone(), id);
        self.elements.push(element);
        Registration::Fresh(id)
    }

    pub fn id_of(&self, element: &T) -> Result<ElementId, UnionFindError<T>> {
        self.ids
            .get(element)
            .copied()
            .ok_or_else(|| UnionFindError::NotFound(element.clone()))
    }

    pub fn contains(&self, element: &T) -> bool {
        self.ids.contains_key(element)
    }
}

impl<T> Registry<T> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &T)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, element)| (ElementId(index), element))
    }
}

impl<T> Index<ElementId> for Registry<T> {
    type Output = T;

    fn index(&self, id: ElementId) -> &T {
        &self.elements[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_registration_order() {
        let mut registry = Registry::default();
        for element in ["a", "b", "c"] {
            assert!(matches!(registry.register(element), Registration::Fresh(_)));
        }
        let Registration::Existing(id) = registry.register("b") else {
            panic!("duplicate registration produced a fresh id");
        };
        assert_eq!(id.index(), 1);
        assert_eq!(registry[id], "b");
        assert_eq!(registry.len(), 3);

        let order: Vec<_> = registry.iter().map(|(_, element)| *element).collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn ids_are_registration_positions() {
        let mut registry = Registry::default();
        for element in 0..1000u64 {
            let Registration::Fresh(id) = registry.register(element * 7) else {
                panic!("distinct element reported as existing");
            };
            assert_eq!(id.index() as u64, element);
        }
        assert!(registry.iter().all(|(id, element)| *element == id.index() as u64 * 7));
    }

    #[test]
    fn missing_element_is_reported() {
        let mut registry = Registry::with_capacity(1);
        registry.register(1);
        assert!(registry.contains(&1));
        assert!(!registry.contains(&2));
        assert_eq!(registry.id_of(&2), Err(UnionFindError::NotFound(2)));
    }
}
