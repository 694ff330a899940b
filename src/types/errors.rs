use core::hash::{Hash, Hasher};
use core::ops::Index;

use crate::types::alloc_type::Vec;
use crate::types::{ContractViolation, ErrorVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Non-empty, insertion-ordered sequence of errors.
///
/// This is the error side of an invalid [`Container`](crate::Container). There is
/// no way to build an empty one: every constructor takes at least one error or
/// reports [`ContractViolation::EmptyErrors`].
///
/// # Examples
///
/// ```
/// use ddd_rail::Errors;
///
/// let mut errors = Errors::new("first");
/// errors.push("second");
/// errors.append(Errors::new("third"));
///
/// assert_eq!(errors.len(), 3);
/// assert_eq!(errors.as_slice(), &["first", "second", "third"]);
/// assert!(Errors::<&str>::try_from_iter([]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Errors<E> {
    items: ErrorVec<E>,
}

#[allow(clippy::len_without_is_empty)]
impl<E> Errors<E> {
    /// Creates a sequence holding exactly one error.
    #[inline]
    pub fn new(first: E) -> Self {
        let mut items = ErrorVec::new();
        items.push(first);
        Self { items }
    }

    /// Collects an iterator, refusing an empty one.
    #[inline]
    pub fn try_from_iter<I>(errors: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = E>,
    {
        let items: ErrorVec<E> = errors.into_iter().collect();
        if items.is_empty() {
            Err(ContractViolation::EmptyErrors)
        } else {
            Ok(Self { items })
        }
    }

    /// Collects an iterator that is known to yield at least one error.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::EmptyErrors`] if the iterator is empty.
    #[inline]
    #[track_caller]
    pub fn from_iter_nonempty<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        match Self::try_from_iter(errors) {
            Ok(errors) => errors,
            Err(violation) => panic!("{}", violation),
        }
    }

    /// Appends a single error.
    #[inline]
    pub fn push(&mut self, error: E) {
        self.items.push(error);
    }

    /// Appends every error yielded by `iter`, in order.
    #[inline]
    pub fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Appends another sequence after this one.
    #[inline]
    pub fn append(&mut self, other: Errors<E>) {
        self.items.extend(other.items);
    }

    /// Returns `self` followed by `other`.
    #[inline]
    pub fn concat(mut self, other: Errors<E>) -> Self {
        self.append(other);
        self
    }

    /// The first error; always present.
    #[inline]
    pub fn first(&self) -> &E {
        &self.items[0]
    }

    /// Number of errors, never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Transforms every error, keeping order and length.
    #[inline]
    pub fn map<G, F>(self, f: F) -> Errors<G>
    where
        F: FnMut(E) -> G,
    {
        Errors { items: self.items.into_iter().map(f).collect() }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<E> {
        self.items.into_vec()
    }

    /// Consumes the sequence and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<E> {
        self.items
    }
}

impl<E: PartialOrd> PartialOrd for Errors<E> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.items.partial_cmp(&other.items)
    }
}

impl<E: Ord> Ord for Errors<E> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.items.cmp(&other.items)
    }
}

impl<E: Hash> Hash for Errors<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<E> TryFrom<ErrorVec<E>> for Errors<E> {
    type Error = ContractViolation;

    fn try_from(items: ErrorVec<E>) -> Result<Self, Self::Error> {
        if items.is_empty() {
            Err(ContractViolation::EmptyErrors)
        } else {
            Ok(Self { items })
        }
    }
}

impl<E> TryFrom<Vec<E>> for Errors<E> {
    type Error = ContractViolation;

    fn try_from(items: Vec<E>) -> Result<Self, Self::Error> {
        Self::try_from(ErrorVec::from_vec(items))
    }
}

impl<E> Index<usize> for Errors<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.items[index]
    }
}

impl<E> AsRef<[E]> for Errors<E> {
    fn as_ref(&self) -> &[E] {
        &self.items
    }
}

impl<E> IntoIterator for Errors<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Errors<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl<E: Serialize> Serialize for Errors<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E: Deserialize<'de>> Deserialize<'de> for Errors<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = ErrorVec::<E>::deserialize(deserializer)?;
        Self::try_from(items).map_err(serde::de::Error::custom)
    }
}
