use crate::types::{ContractViolation, Error, Errors};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Holds either exactly one valid payload or a non-empty list of errors.
///
/// `Container<T, E>` is the unit every assembly step consumes and produces.
/// Unlike `Result`, combining containers accumulates errors from every invalid
/// source instead of stopping at the first one, so the final container of an
/// aggregate carries a complete, ordered record of what went wrong.
///
/// Containers are immutable values: every operation consumes `self` and yields
/// a new container.
///
/// # Type Parameters
///
/// * `T` - The payload type
/// * `E` - The error type, [`Error`] by default
///
/// # Examples
///
/// ```
/// use ddd_rail::{Container, Error};
///
/// let valid: Container<i32> = Container::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid: Container<i32> = Container::invalid(Error::new("too small"));
/// let message = invalid.fold(|errors| errors.first().to_string(), |v| v.to_string());
/// assert_eq!(message, "too small");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Container<T, E = Error> {
    Valid(T),
    Invalid(Errors<E>),
}

/// A container whose payload is a composite value (an aggregate or entity).
pub type Entity<T, E = Error> = Container<T, E>;

/// A container whose payload is an atomic, immutable value.
pub type ValueObject<T, E = Error> = Container<T, E>;

impl<T, E> Container<T, E> {
    /// Creates a valid container.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// let c = Container::<i32, &str>::valid(42);
    /// assert_eq!(c.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates a valid container from a payload that may be absent.
    ///
    /// Returns [`ContractViolation::AbsentPayload`] for `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::{Container, ContractViolation};
    ///
    /// assert!(Container::<i32, &str>::try_valid(Some(1)).is_ok());
    /// assert_eq!(
    ///     Container::<i32, &str>::try_valid(None).unwrap_err(),
    ///     ContractViolation::AbsentPayload
    /// );
    /// ```
    #[inline]
    pub fn try_valid(value: Option<T>) -> Result<Self, ContractViolation> {
        value.map(Self::Valid).ok_or(ContractViolation::AbsentPayload)
    }

    /// Creates a valid container from a payload that must be present.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::AbsentPayload`] if `value` is `None`.
    #[inline]
    #[track_caller]
    pub fn valid_present(value: Option<T>) -> Self {
        match Self::try_valid(value) {
            Ok(container) => container,
            Err(violation) => panic!("{}", violation),
        }
    }

    /// Creates an invalid container from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// let c = Container::<(), &str>::invalid("missing field");
    /// assert!(c.is_invalid());
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(Errors::new(error))
    }

    /// Creates an invalid container from an already harvested error list.
    #[inline]
    pub fn from_errors(errors: Errors<E>) -> Self {
        Self::Invalid(errors)
    }

    /// Creates an invalid container from an iterator of errors.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::EmptyErrors`] if the iterator is empty.
    /// Use [`try_invalid_many`](Self::try_invalid_many) when emptiness is a
    /// runtime possibility.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// let c = Container::<(), &str>::invalid_many(["missing", "invalid"]);
    /// assert_eq!(c.into_errors().unwrap().len(), 2);
    /// ```
    #[inline]
    #[track_caller]
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Invalid(Errors::from_iter_nonempty(errors))
    }

    /// Creates an invalid container, refusing an empty error list.
    #[inline]
    pub fn try_invalid_many<I>(errors: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = E>,
    {
        Errors::try_from_iter(errors).map(Self::Invalid)
    }

    /// Returns `true` if the container holds a payload.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if the container holds errors.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the payload, if valid.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Borrows the errors, if invalid.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> Option<&Errors<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Converts `&Container<T, E>` into `Container<&T, E>`, cloning errors.
    #[inline]
    pub fn as_ref(&self) -> Container<&T, E>
    where
        E: Clone,
    {
        match self {
            Self::Valid(value) => Container::Valid(value),
            Self::Invalid(errors) => Container::Invalid(errors.clone()),
        }
    }

    /// Eliminates the container: exactly one of the two functions is called.
    ///
    /// This is the checked way to get at the payload; there is no unchecked
    /// unwrap.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// let status = Container::<i32, &str>::valid(5).fold(|_| 422, |_| 200);
    /// assert_eq!(status, 200);
    /// ```
    #[inline]
    pub fn fold<R, I, V>(self, on_invalid: I, on_valid: V) -> R
    where
        I: FnOnce(Errors<E>) -> R,
        V: FnOnce(T) -> R,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Maps the payload, passing errors through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// let doubled = Container::<i32, &str>::valid(21).map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<R, F>(self, f: F) -> Container<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Valid(value) => Container::Valid(f(value)),
            Self::Invalid(errors) => Container::Invalid(errors),
        }
    }

    /// Runs a side-effecting action on the payload and returns the container
    /// unchanged. The action is not called for invalid containers.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// let mut seen = 0;
    /// let c = Container::<i32, &str>::valid(7).inspect(|v| seen = *v);
    /// assert_eq!(seen, 7);
    /// assert_eq!(c.into_value(), Some(7));
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Valid(value) = &self {
            f(value);
        }
        self
    }

    /// Chains a step that may itself be invalid.
    ///
    /// Invalid containers short-circuit: `f` is never called and the errors
    /// are forwarded. For valid containers `f`'s result is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// fn even(n: i32) -> Container<i32, &'static str> {
    ///     if n % 2 == 0 { Container::valid(n) } else { Container::invalid("odd") }
    /// }
    ///
    /// assert_eq!(Container::valid(4).and_then(even).into_value(), Some(4));
    /// assert!(Container::valid(3).and_then(even).is_invalid());
    /// ```
    #[inline]
    pub fn and_then<R, F>(self, f: F) -> Container<R, E>
    where
        F: FnOnce(T) -> Container<R, E>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => Container::Invalid(errors),
        }
    }

    /// Chains a step that takes an extra argument next to the payload.
    ///
    /// The argument comes from a [`Supplier`](crate::Supplier): either
    /// [`Eager`](crate::Eager) or [`Lazy`](crate::Lazy). It is only produced
    /// when the container is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::{Container, Eager, Lazy};
    ///
    /// let add = |x: i32, y: i32| Container::<i32, &str>::valid(x + y);
    /// assert_eq!(Container::valid(1).and_then_with(Eager(2), add).into_value(), Some(3));
    /// assert_eq!(Container::valid(1).and_then_with(Lazy(|| 5), add).into_value(), Some(6));
    /// ```
    #[inline]
    pub fn and_then_with<P, R, S, F>(self, arg: S, f: F) -> Container<R, E>
    where
        S: crate::Supplier<P>,
        F: FnOnce(T, P) -> Container<R, E>,
    {
        match self {
            Self::Valid(value) => f(value, arg.supply()),
            Self::Invalid(errors) => Container::Invalid(errors),
        }
    }

    /// Recovers from errors; valid containers pass through.
    #[inline]
    pub fn or_else<F>(self, op: F) -> Self
    where
        F: FnOnce(Errors<E>) -> Self,
    {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(errors) => op(errors),
        }
    }

    /// Combines two containers into a tuple, accumulating all errors.
    ///
    /// When both are invalid, `self`'s errors come first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// let a = Container::<i32, &str>::invalid("a");
    /// let b = Container::<i32, &str>::invalid("b");
    /// assert_eq!(a.zip(b).into_errors().unwrap().as_slice(), &["a", "b"]);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Container<U, E>) -> Container<(T, U), E> {
        match (self, other) {
            (Self::Valid(a), Container::Valid(b)) => Container::Valid((a, b)),
            (Self::Invalid(e), Container::Valid(_)) => Container::Invalid(e),
            (Self::Valid(_), Container::Invalid(e)) => Container::Invalid(e),
            (Self::Invalid(e1), Container::Invalid(e2)) => Container::Invalid(e1.concat(e2)),
        }
    }

    /// Maps each error while preserving the payload.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Container<T, G>
    where
        F: FnMut(E) -> G,
    {
        match self {
            Self::Valid(value) => Container::Valid(value),
            Self::Invalid(errors) => Container::Invalid(errors.map(f)),
        }
    }

    /// Converts into a `Result` keeping every error.
    #[inline]
    pub fn to_result(self) -> Result<T, Errors<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Wraps a `Result`, turning the error side into a single-error container.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// Extracts the errors, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<Errors<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Extracts the payload, if valid.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Reads this container as an [`Entity`]. State is untouched.
    #[inline]
    pub fn into_entity(self) -> Entity<T, E> {
        self
    }

    /// Reads this container as a [`ValueObject`]. State is untouched.
    #[inline]
    pub fn into_value_object(self) -> ValueObject<T, E> {
        self
    }
}
