use crate::err::ModelError;

/// An element that can be stored in a [`UniqueList`].
///
/// `is_same` is the identity comparison and is deliberately weaker than
/// `PartialEq`, which stays full field-by-field equality.
pub trait Entity: PartialEq {
    /// Name used in error messages
    const KIND: &'static str;

    fn is_same(&self, other: &Self) -> bool;
}

/// An ordered list in which no two elements are identity-equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an element identity-equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|stored| stored.is_same(item))
    }

    /// Appends `item`, rejecting it if its identity is already taken.
    pub fn add(&mut self, item: T) -> Result<(), ModelError> {
        if self.contains(&item) {
            return Err(ModelError::Duplicate { kind: T::KIND });
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces `target` with `replacement` at the same position.
    ///
    /// `target` is located by exact equality. `replacement` may share the
    /// identity of `target`, but not of any other stored element.
    pub fn set(&mut self, target: &T, replacement: T) -> Result<(), ModelError> {
        let position = self
            .items
            .iter()
            .position(|stored| stored == target)
            .ok_or(ModelError::NotFound { kind: T::KIND })?;

        let clashes_with_other = self
            .items
            .iter()
            .enumerate()
            .any(|(i, stored)| i != position && stored.is_same(&replacement));
        if clashes_with_other {
            return Err(ModelError::Duplicate { kind: T::KIND });
        }

        self.items[position] = replacement;
        Ok(())
    }

    /// Removes the element exactly equal to `item`.
    pub fn remove(&mut self, item: &T) -> Result<(), ModelError> {
        let position = self
            .items
            .iter()
            .position(|stored| stored == item)
            .ok_or(ModelError::NotFound { kind: T::KIND })?;
        self.items.remove(position);
        Ok(())
    }

    /// Replaces the whole content. Nothing changes if `items` holds duplicates.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<(), ModelError> {
        let mut fresh = Self::new();
        for item in items {
            fresh.add(item)?;
        }
        *self = fresh;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
