//! Capability detection for Functor and Monad.
//!
//! Capabilities are declared nominally: a brand is a Functor exactly when it
//! implements [`Functor`], and a Monad exactly when it implements [`Monad`]
//! (which requires [`Functor`]). Generic code states the capability it needs
//! as a trait bound, so using a brand that lacks it is rejected at compile
//! time:
//!
//! ```compile_fail
//! use liftfree::typeclass::{fmap, TypeConstructor};
//!
//! struct Opaque;
//! impl TypeConstructor for Opaque {
//!     type Applied<A> = Vec<A>;
//! }
//!
//! // error: `Opaque` is not a Functor
//! let _ = fmap::<Opaque, _, _, _>(|x: i32| x + 1, vec![1]);
//! ```
//!
//! For code that wants a yes/no answer instead of an error, [`is_functor!`]
//! and [`is_monad!`] classify any concrete type. A type without an
//! implementation is classified `false`; it is never an error:
//!
//! ```rust
//! use liftfree::typeclass::{OptionKind, VecKind};
//! use liftfree::{is_functor, is_monad};
//!
//! struct NotAFunctor;
//!
//! assert!(is_functor!(VecKind));
//! assert!(is_monad!(OptionKind));
//! assert!(!is_functor!(NotAFunctor));
//! assert!(!is_monad!(String));
//! ```
//!
//! The classification is resolved statically by method lookup on a probe
//! value: the probe's preferred method exists only when the brand implements
//! the trait, and a fallback reached through one extra auto-reference
//! answers `false` otherwise. It works for concrete types; inside generic
//! code, state the bound instead.

use std::marker::PhantomData;

use super::functor::Functor;
use super::monad::Monad;

/// Zero-sized probe used by [`is_functor!`] and [`is_monad!`].
#[doc(hidden)]
pub struct Probe<T: ?Sized>(PhantomData<fn() -> PhantomData<T>>);

impl<T: ?Sized> Probe<T> {
    #[doc(hidden)]
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for Probe<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Preferred probe method, present when the brand is a [`Functor`].
#[doc(hidden)]
pub trait FunctorProbe {
    fn is_functor(&self) -> bool {
        true
    }
}

impl<F: Functor> FunctorProbe for Probe<F> {}

/// Fallback probe method, reached through an extra auto-reference.
#[doc(hidden)]
pub trait FunctorFallback {
    fn is_functor(&self) -> bool {
        false
    }
}

impl<T: ?Sized> FunctorFallback for &Probe<T> {}

/// Preferred probe method, present when the brand is a [`Monad`].
#[doc(hidden)]
pub trait MonadProbe {
    fn is_monad(&self) -> bool {
        true
    }
}

impl<M: Monad> MonadProbe for Probe<M> {}

/// Fallback probe method, reached through an extra auto-reference.
#[doc(hidden)]
pub trait MonadFallback {
    fn is_monad(&self) -> bool {
        false
    }
}

impl<T: ?Sized> MonadFallback for &Probe<T> {}

/// Evaluates to `true` when the brand implements
/// [`Functor`](crate::typeclass::Functor), `false` otherwise.
///
/// # Examples
///
/// ```rust
/// use liftfree::is_functor;
/// use liftfree::typeclass::VecKind;
///
/// assert!(is_functor!(VecKind));
/// assert!(!is_functor!(Vec<i32>));
/// ```
#[macro_export]
macro_rules! is_functor {
    ($brand:ty) => {{
        #[allow(unused_imports)]
        use $crate::typeclass::capability::{FunctorFallback as _, FunctorProbe as _};
        (&$crate::typeclass::capability::Probe::<$brand>::new()).is_functor()
    }};
}

/// Evaluates to `true` when the brand implements
/// [`Monad`](crate::typeclass::Monad), `false` otherwise.
///
/// Every Monad is a Functor, so `is_monad!(T)` implies `is_functor!(T)`.
///
/// # Examples
///
/// ```rust
/// use liftfree::is_monad;
/// use liftfree::typeclass::{IdentityKind, OptionKind};
///
/// assert!(is_monad!(IdentityKind));
/// assert!(is_monad!(OptionKind));
/// assert!(!is_monad!(u8));
/// ```
#[macro_export]
macro_rules! is_monad {
    ($brand:ty) => {{
        #[allow(unused_imports)]
        use $crate::typeclass::capability::{MonadFallback as _, MonadProbe as _};
        (&$crate::typeclass::capability::Probe::<$brand>::new()).is_monad()
    }};
}
