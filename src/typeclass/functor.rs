//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents type
//! constructors whose values can have a function applied to their contents
//! while preserving the structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent functor:
//!
//! ```text
//! F::fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence is equivalent to mapping their composition:
//!
//! ```text
//! F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Function requirements
//!
//! The mapped function is `Fn + Clone + 'static`. Multi-element functors call
//! it once per element, and recursive functors such as `Free` hand a clone of
//! it to every nested layer.
//!
//! # Examples
//!
//! ```rust
//! use liftfree::typeclass::{fmap, Functor, OptionKind, VecKind};
//!
//! let lengths: Vec<usize> = fmap::<VecKind, _, _, _>(|s: &str| s.len(), vec!["a", "bcd"]);
//! assert_eq!(lengths, vec![1, 3]);
//!
//! let none: Option<i32> = OptionKind::fmap(None::<i32>, |n| n + 1);
//! assert_eq!(none, None);
//! ```

use super::higher::{OptionKind, ResultKind, TypeConstructor, VecKind};

/// A type class for type constructors whose contents can be mapped over.
///
/// Implemented on a brand (see [`TypeConstructor`]); `fmap` turns an
/// `Applied<A>` into an `Applied<B>` without changing its shape.
///
/// # Laws
///
/// ```text
/// F::fmap(fa, |x| x) == fa
/// F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use liftfree::typeclass::{Functor, VecKind};
///
/// let doubled = VecKind::fmap(vec![1, 2, 3], |n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Functor",
    label = "no `Functor` implementation for `{Self}`",
    note = "implement `Functor` for the type-constructor brand `{Self}` to map over its values"
)]
pub trait Functor: TypeConstructor {
    /// Applies `function` to every value inside `value`.
    ///
    /// The elements are visited in the functor's own order (left to right
    /// for ordered containers).
    fn fmap<A, B, F>(value: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static;

    /// Replaces every value inside the functor with `replacement`.
    ///
    /// Equivalent to `fmap(value, |_| replacement)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::typeclass::{Functor, OptionKind};
    ///
    /// assert_eq!(OptionKind::replace(Some(5), "replaced"), Some("replaced"));
    /// assert_eq!(OptionKind::replace(None::<i32>, "replaced"), None);
    /// ```
    #[inline]
    fn replace<A, B>(value: Self::Applied<A>, replacement: B) -> Self::Applied<B>
    where
        A: 'static,
        B: Clone + 'static,
    {
        Self::fmap::<A, B, _>(value, move |_| replacement.clone())
    }

    /// Discards the values inside the functor, keeping only its shape.
    #[inline]
    fn void<A>(value: Self::Applied<A>) -> Self::Applied<()>
    where
        A: 'static,
    {
        Self::replace::<A, ()>(value, ())
    }
}

/// Maps `function` over `value` using the [`Functor`] instance of brand `F`.
///
/// This is the free-standing form of [`Functor::fmap`], with the function
/// first as in `fmap :: (a -> b) -> f a -> f b`.
///
/// # Examples
///
/// ```rust
/// use liftfree::typeclass::{fmap, OptionKind};
///
/// let shown = fmap::<OptionKind, _, _, _>(|n: i32| n.to_string(), Some(5));
/// assert_eq!(shown, Some("5".to_string()));
/// ```
#[inline]
pub fn fmap<F, A, B, G>(function: G, value: F::Applied<A>) -> F::Applied<B>
where
    F: Functor,
    A: 'static,
    B: 'static,
    G: Fn(A) -> B + Clone + 'static,
{
    F::fmap::<A, B, G>(value, function)
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Functor for OptionKind {
    #[inline]
    fn fmap<A, B, F>(value: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        value.map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<E: 'static> Functor for ResultKind<E> {
    #[inline]
    fn fmap<A, B, F>(value: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        value.map(function)
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl Functor for VecKind {
    #[inline]
    fn fmap<A, B, F>(value: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        value.into_iter().map(function).collect()
    }
}
