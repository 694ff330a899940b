use crate::container::core::Container;

/// Iterator over the payload of a borrowed container: one item or none.
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Owning iterator over the payload of a container.
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T, E> IntoIterator for Container<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

impl<'a, T, E> IntoIterator for &'a Container<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> Container<T, E> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.value() }
    }

    /// Iterates the errors in insertion order; empty for valid containers.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, E> {
        match self {
            Self::Valid(_) => [].iter(),
            Self::Invalid(errors) => errors.iter(),
        }
    }
}
