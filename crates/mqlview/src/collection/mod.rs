//! Ordered containers for schema and view objects.

/// Lookup support for elements stored in a [`Collection`].
pub trait Identified {
    /// Stable identifier of the element.
    fn id(&self) -> &str;
    /// Human-readable name, empty when the store reported none.
    fn name(&self) -> &str;
}

/// An ordered container with first-match lookup by id or name.
///
/// Duplicates are permitted; callers decide whether they matter. Intended
/// sizes are tens of elements, so lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append one element.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Append every element of another collection, preserving order.
    pub fn concat(&mut self, other: Collection<T>) {
        self.items.extend(other.items);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Identified> Collection<T> {
    /// First element with the given id, if any.
    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// First element with the given name, if any.
    pub fn find_by_name(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
