//! Installer strategies used by the assembly setters.
//!
//! An installer writes an unwrapped child value into a parent payload. The two
//! forms, pure replacement and in-place mutation, are picked once by the public
//! setter being called; everything downstream is written against
//! [`Installer`] only.

pub(crate) trait Installer<P, V> {
    fn install(self, parent: P, value: V) -> P;
}

/// `(parent, value) -> parent'`
pub(crate) struct Replace<F>(pub(crate) F);

/// `(&mut parent, value)`, applied to the payload the setter already owns.
pub(crate) struct Mutate<F>(pub(crate) F);

impl<P, V, F> Installer<P, V> for Replace<F>
where
    F: FnOnce(P, V) -> P,
{
    #[inline]
    fn install(self, parent: P, value: V) -> P {
        (self.0)(parent, value)
    }
}

impl<P, V, F> Installer<P, V> for Mutate<F>
where
    F: FnOnce(&mut P, V),
{
    #[inline]
    fn install(self, mut parent: P, value: V) -> P {
        (self.0)(&mut parent, value);
        parent
    }
}
