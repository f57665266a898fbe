//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the simplest possible wrapper around a value. It serves as:
//!
//! - The target monad for interpreters that add no effect of their own
//! - A simple model for testing type class laws

use std::fmt::{self, Debug, Formatter};

use super::functor::Functor;
use super::higher::{Clone1, Debug1, Eq1, TypeConstructor};
use super::monad::Monad;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use liftfree::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Brand for [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityKind;

impl TypeConstructor for IdentityKind {
    type Applied<A> = Identity<A>;
}

impl Functor for IdentityKind {
    #[inline]
    fn fmap<A, B, F>(value: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        Identity(function(value.0))
    }
}

impl Monad for IdentityKind {
    #[inline]
    fn pure<A>(value: A) -> Identity<A>
    where
        A: 'static,
    {
        Identity(value)
    }

    #[inline]
    fn bind<A, B, F>(value: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Identity<B> + Clone + 'static,
    {
        function(value.into_inner())
    }
}

impl Clone1 for IdentityKind {
    #[inline]
    fn clone_applied<A: Clone>(value: &Identity<A>) -> Identity<A> {
        value.clone()
    }
}

impl Eq1 for IdentityKind {
    #[inline]
    fn eq_applied<A: PartialEq>(left: &Identity<A>, right: &Identity<A>) -> bool {
        left == right
    }
}

impl Debug1 for IdentityKind {
    fn fmt_applied<A: Debug>(value: &Identity<A>, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(value, formatter)
    }
}

static_assertions::assert_impl_all!(IdentityKind: Functor, Monad);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_new_creates_wrapper() {
        let wrapped = Identity::new(42);
        assert_eq!(wrapped.0, 42);
    }

    #[rstest]
    fn test_identity_as_inner_returns_reference() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn test_identity_from_wraps_value() {
        let wrapped: Identity<&str> = "value".into();
        assert_eq!(wrapped, Identity("value"));
    }

    #[rstest]
    fn test_identity_fmap_applies_function() {
        assert_eq!(IdentityKind::fmap(Identity(20), |x| x + 1), Identity(21));
    }

    #[rstest]
    fn test_identity_bind_applies_function() {
        let result = IdentityKind::bind(Identity(21), |x: i32| Identity(x * 2));
        assert_eq!(result, Identity(42));
    }

    #[rstest]
    fn test_identity_pure_wraps_value() {
        let value: Identity<char> = IdentityKind::pure('x');
        assert_eq!(value.into_inner(), 'x');
    }
}
