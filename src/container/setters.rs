//! Field-by-field assembly of a composite payload.
//!
//! Each setter takes a parent container, a source of child data and a function
//! installing the unwrapped child into the parent payload. Errors from every
//! source touched are kept, with one rule for all sources: when a child is
//! invalid the result carries the child's errors followed by the parent's own
//! prior errors. A valid child never clears an invalid parent.
//!
//! # Examples
//!
//! ```
//! use ddd_rail::{Container, Error, IntoValid};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Cart {
//!     id: u32,
//!     items: Vec<u32>,
//! }
//!
//! fn amount(raw: u32) -> Container<u32> {
//!     if raw <= 1000 { Container::valid(raw) } else { Container::invalid(Error::new("too large")) }
//! }
//!
//! let cart = Cart::default()
//!     .into_valid()
//!     .set(Some(7), |mut cart, id| {
//!         cart.id = id;
//!         cart
//!     })
//!     .set_all([amount(10), amount(5000), amount(20)], |mut cart, items: Vec<u32>| {
//!         cart.items = items;
//!         cart
//!     });
//!
//! assert_eq!(cart.into_errors().unwrap().first().message(), "too large");
//! ```

use crate::container::core::Container;
use crate::container::installer::{Installer, Mutate, Replace};
use crate::container::traverse::{sequence_into, traverse_map, traverse_option};

impl<T, E> Container<T, E> {
    /// Installs a valid child into a valid parent, merging errors otherwise.
    fn install_child<V, I>(self, child: Container<V, E>, installer: I) -> Self
    where
        I: Installer<T, V>,
    {
        match (self, child) {
            (Self::Valid(parent), Container::Valid(value)) => {
                Self::Valid(installer.install(parent, value))
            },
            (parent @ Self::Invalid(_), Container::Valid(_)) => parent,
            (Self::Valid(_), Container::Invalid(errors)) => Self::Invalid(errors),
            (Self::Invalid(prior), Container::Invalid(errors)) => Self::Invalid(errors.concat(prior)),
        }
    }

    fn install_value<V, I>(self, value: Option<V>, installer: I) -> Self
    where
        I: Installer<T, V>,
    {
        match (self, value) {
            (Self::Valid(parent), Some(value)) => Self::Valid(installer.install(parent, value)),
            (untouched, _) => untouched,
        }
    }

    /// Sets a plain field from a value that may be absent.
    ///
    /// `None` leaves the container untouched, as does an invalid parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// let c = Container::<(i32, i32), &str>::valid((0, 0));
    /// let c = c.set(Some(5), |(_, b), a| (a, b)).set(None, |(a, _), b| (a, b));
    /// assert_eq!(c.into_value(), Some((5, 0)));
    /// ```
    #[inline]
    pub fn set<V, F>(self, value: Option<V>, f: F) -> Self
    where
        F: FnOnce(T, V) -> T,
    {
        self.install_value(value, Replace(f))
    }

    /// Like [`set`](Self::set), mutating the payload in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// let c = Container::<Vec<i32>, &str>::valid(vec![]).set_mut(Some(3), |v, x| v.push(x));
    /// assert_eq!(c.into_value(), Some(vec![3]));
    /// ```
    #[inline]
    pub fn set_mut<V, F>(self, value: Option<V>, f: F) -> Self
    where
        F: FnOnce(&mut T, V),
    {
        self.install_value(value, Mutate(f))
    }

    /// Sets a field from a single child container.
    ///
    /// | child     | parent  | result                          |
    /// |-----------|---------|---------------------------------|
    /// | `None`    | any     | parent unchanged                |
    /// | invalid   | any     | child errors, then parent errors |
    /// | valid     | invalid | parent unchanged                |
    /// | valid     | valid   | child installed                 |
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// let parent = Container::<(i32, i32), &str>::invalid("parent");
    /// let child = Container::<i32, &str>::invalid("child");
    /// let merged = parent.set_child(Some(child), |(_, b), a| (a, b));
    /// assert_eq!(merged.into_errors().unwrap().as_slice(), &["child", "parent"]);
    /// ```
    #[inline]
    pub fn set_child<V, F>(self, child: Option<Container<V, E>>, f: F) -> Self
    where
        F: FnOnce(T, V) -> T,
    {
        match child {
            Some(child) => self.install_child(child, Replace(f)),
            None => self,
        }
    }

    /// Like [`set_child`](Self::set_child), mutating the payload in place.
    #[inline]
    pub fn set_child_mut<V, F>(self, child: Option<Container<V, E>>, f: F) -> Self
    where
        F: FnOnce(&mut T, V),
    {
        match child {
            Some(child) => self.install_child(child, Mutate(f)),
            None => self,
        }
    }

    /// Sets a collection field from a sequence of child containers.
    ///
    /// The children are traversed first; all their errors are harvested in
    /// order and followed by the parent's prior errors. An empty sequence
    /// installs an empty collection.
    #[inline]
    pub fn set_all<V, C, I, F>(self, children: I, f: F) -> Self
    where
        I: IntoIterator<Item = Container<V, E>>,
        C: FromIterator<V>,
        F: FnOnce(T, C) -> T,
    {
        self.install_child(sequence_into::<C, V, E, I>(children), Replace(f))
    }

    /// Sets a keyed collection field from keyed child containers.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use ddd_rail::Container;
    ///
    /// let prices = [("apple", Container::<u32, &str>::valid(3)), ("pear", Container::valid(4))];
    /// let c = Container::<BTreeMap<&str, u32>, &str>::valid(BTreeMap::new())
    ///     .set_map(prices, |_, map: BTreeMap<&str, u32>| map);
    /// assert_eq!(c.into_value().unwrap()["pear"], 4);
    /// ```
    #[inline]
    pub fn set_map<K, V, M, I, F>(self, entries: I, f: F) -> Self
    where
        I: IntoIterator<Item = (K, Container<V, E>)>,
        M: FromIterator<(K, V)>,
        F: FnOnce(T, M) -> T,
    {
        self.install_child(traverse_map::<M, K, V, E, I>(entries), Replace(f))
    }

    /// Sets an optional field from an optional child container.
    ///
    /// `None` installs `None`; a valid child installs `Some(value)`; an
    /// invalid child contributes its errors.
    #[inline]
    pub fn set_optional<V, F>(self, child: Option<Container<V, E>>, f: F) -> Self
    where
        F: FnOnce(T, Option<V>) -> T,
    {
        self.install_child(traverse_option(child), Replace(f))
    }

    /// Sets an optional field only when `predicate` holds.
    ///
    /// Both closures run only for a valid parent; an invalid parent is
    /// returned untouched. A false predicate, or a supplier yielding `None`,
    /// installs `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// let c = Container::<Option<i32>, &str>::valid(None)
    ///     .set_when(|| false, || Some(Container::valid(1)), |_, v| v);
    /// assert_eq!(c.into_value(), Some(None));
    /// ```
    #[inline]
    pub fn set_when<V, P, S, F>(self, predicate: P, supplier: S, f: F) -> Self
    where
        P: FnOnce() -> bool,
        S: FnOnce() -> Option<Container<V, E>>,
        F: FnOnce(T, Option<V>) -> T,
    {
        if self.is_invalid() {
            return self;
        }
        let child = if predicate() { traverse_option(supplier()) } else { Container::Valid(None) };
        self.install_child(child, Replace(f))
    }

    /// Sets an optional field from a child whose valid payload must also pass
    /// `predicate`; a payload failing it installs `None`.
    #[inline]
    pub fn set_filtered<V, P, F>(self, child: Option<Container<V, E>>, predicate: P, f: F) -> Self
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(T, Option<V>) -> T,
    {
        let filtered = traverse_option(child).map(|value| value.filter(predicate));
        self.install_child(filtered, Replace(f))
    }
}
