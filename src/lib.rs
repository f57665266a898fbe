//! # liftfree
//!
//! Functor and Monad type classes for Rust, and a free monad that lifts any
//! functor into a monad so effectful programs can be described as data and
//! interpreted later.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor) and
//!   [`Monad`](typeclass::Monad) over type-constructor brands, with
//!   compile-time capability detection
//! - **Free Monad**: [`Free`](control::Free) programs built from any effect
//!   functor, composed with `fmap` / `bind` / `>>`
//! - **Interpretation**: [`fold_free`](control::Free::fold_free) with a
//!   [`Handler`](control::Handler) into any target monad
//! - **Target Monads**: `Option`, `Result`, `Vec`, `Identity`,
//!   [`State`](effect::State) and the stack-safe
//!   [`Trampoline`](control::Trampoline)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad) and capability detection
//! - `control`: Free monad, interpreters, Trampoline
//! - `effect`: State target monad
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use liftfree::prelude::*;
//!
//! // A two-step program in the list functor: each step offers alternatives.
//! let program: Free<VecKind, i32> = Free::<VecKind, i32>::lift(vec![1, 2, 3])
//!     .bind(|x| Free::lift(vec![x, x * 10]));
//!
//! // Interpreting with the identity handler explores every alternative.
//! let outcomes = program.fold_free::<VecKind, _>(IdentityHandler);
//! assert_eq!(outcomes, vec![1, 10, 2, 20, 3, 30]);
//!
//! assert!(is_monad!(FreeKind<VecKind>));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use liftfree::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "typeclass")]
    pub use crate::{is_functor, is_monad};

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
