//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Functor` with the
//! ability to lift plain values (`pure`) and to sequence computations where
//! each step can depend on the result of the previous one (`bind`).
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying the function:
//!
//! ```text
//! M::bind(M::pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` to a monad returns the original monad:
//!
//! ```text
//! M::bind(m, M::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! The order of binding operations can be reassociated:
//!
//! ```text
//! M::bind(M::bind(m, f), g) == M::bind(m, |x| M::bind(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use liftfree::typeclass::{bind, pure, VecKind};
//!
//! // The list monad: every element branches into two results.
//! let branched = bind::<VecKind, _, _, _>(vec![1, 2, 3], |x: i32| vec![x, x * 10]);
//! assert_eq!(branched, vec![1, 10, 2, 20, 3, 30]);
//!
//! let single: Vec<i32> = pure::<VecKind, _>(3);
//! assert_eq!(single, vec![3]);
//! ```

use super::functor::Functor;
use super::higher::{OptionKind, ResultKind, VecKind};

/// A type class for type constructors that support sequencing of computations.
///
/// `Monad` extends [`Functor`] with `pure`, which lifts a value without any
/// effect, and `bind` (Haskell's `>>=`), which feeds the result of one
/// computation into a function producing the next one.
///
/// # Laws
///
/// ```text
/// M::bind(M::pure(a), f) == f(a)
/// M::bind(m, M::pure) == m
/// M::bind(M::bind(m, f), g) == M::bind(m, |x| M::bind(f(x), g))
/// ```
///
/// # Examples
///
/// ```rust
/// use liftfree::typeclass::{Monad, OptionKind};
///
/// let halved = OptionKind::bind(Some(10), |n: i32| if n % 2 == 0 { Some(n / 2) } else { None });
/// assert_eq!(halved, Some(5));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Monad",
    label = "no `Monad` implementation for `{Self}`",
    note = "implement `Functor` and `Monad` for the brand `{Self}` to sequence its computations"
)]
pub trait Monad: Functor {
    /// Lifts a value into the monad with no effect.
    fn pure<A>(value: A) -> Self::Applied<A>
    where
        A: 'static;

    /// Sequences `value` with `function`, which receives each result of
    /// `value` and returns the next computation.
    fn bind<A, B, F>(value: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Self::Applied<B> + Clone + 'static;

    /// Sequences two computations, discarding the result of the first
    /// (Haskell's `>>`).
    ///
    /// The effects of `value` are still performed in full before `next`: a
    /// failure in `value` propagates, and a multi-valued `value` repeats
    /// `next` once per result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::typeclass::{Monad, OptionKind, VecKind};
    ///
    /// assert_eq!(OptionKind::then(Some(5), Some("hello")), Some("hello"));
    /// assert_eq!(OptionKind::then(None::<i32>, Some("hello")), None);
    /// assert_eq!(VecKind::then(vec![1, 2], vec!['a']), vec!['a', 'a']);
    /// ```
    #[inline]
    fn then<A, B>(value: Self::Applied<A>, next: Self::Applied<B>) -> Self::Applied<B>
    where
        A: 'static,
        B: 'static,
        Self::Applied<B>: Clone,
    {
        Self::bind::<A, B, _>(value, move |_| next.clone())
    }

    /// Flattens one level of nesting.
    #[inline]
    fn join<A>(value: Self::Applied<Self::Applied<A>>) -> Self::Applied<A>
    where
        A: 'static,
    {
        Self::bind::<Self::Applied<A>, A, _>(value, |inner| inner)
    }
}

/// Lifts `value` into the monad `M`.
///
/// # Examples
///
/// ```rust
/// use liftfree::typeclass::{pure, OptionKind};
///
/// assert_eq!(pure::<OptionKind, _>(7), Some(7));
/// ```
#[inline]
pub fn pure<M, A>(value: A) -> M::Applied<A>
where
    M: Monad,
    A: 'static,
{
    M::pure::<A>(value)
}

/// Sequences `value` with `function` using the [`Monad`] instance of `M`.
#[inline]
pub fn bind<M, A, B, F>(value: M::Applied<A>, function: F) -> M::Applied<B>
where
    M: Monad,
    A: 'static,
    B: 'static,
    F: Fn(A) -> M::Applied<B> + Clone + 'static,
{
    M::bind::<A, B, F>(value, function)
}

/// Runs `value` for its effects, then yields `next` (Haskell's `>>`).
#[inline]
pub fn then<M, A, B>(value: M::Applied<A>, next: M::Applied<B>) -> M::Applied<B>
where
    M: Monad,
    A: 'static,
    B: 'static,
    M::Applied<B>: Clone,
{
    M::then::<A, B>(value, next)
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Monad for OptionKind {
    #[inline]
    fn pure<A>(value: A) -> Option<A>
    where
        A: 'static,
    {
        Some(value)
    }

    #[inline]
    fn bind<A, B, F>(value: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Option<B> + Clone + 'static,
    {
        value.and_then(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<E: 'static> Monad for ResultKind<E> {
    #[inline]
    fn pure<A>(value: A) -> Result<A, E>
    where
        A: 'static,
    {
        Ok(value)
    }

    #[inline]
    fn bind<A, B, F>(value: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Result<B, E> + Clone + 'static,
    {
        value.and_then(function)
    }
}

// =============================================================================
// Vec<A> Implementation
//
// The list monad represents non-deterministic computation: `bind` applies the
// function to each element and concatenates all results in order.
// =============================================================================

impl Monad for VecKind {
    #[inline]
    fn pure<A>(value: A) -> Vec<A>
    where
        A: 'static,
    {
        vec![value]
    }

    #[inline]
    fn bind<A, B, F>(value: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Vec<B> + Clone + 'static,
    {
        value.into_iter().flat_map(function).collect()
    }
}

static_assertions::assert_impl_all!(OptionKind: Functor, Monad);
static_assertions::assert_impl_all!(ResultKind<String>: Functor, Monad);
static_assertions::assert_impl_all!(VecKind: Functor, Monad);
