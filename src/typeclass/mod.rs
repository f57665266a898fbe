//! Type class traits for functor and monad abstractions.
//!
//! This module provides the two type classes the rest of the crate is built
//! on, together with the machinery needed to express them in Rust:
//!
//! - [`Functor`]: Mapping over the values inside a context
//! - [`Monad`]: Lifting values and sequencing dependent computations
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT). This
//! library uses Generic Associated Types (GAT) on zero-sized *brands* to
//! emulate them: [`VecKind`] stands for `Vec<_>`, [`OptionKind`] for
//! `Option<_>`, and so on. Type classes are implemented on the brand.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Clone1`], [`Eq1`], [`Debug1`]: Standard traits lifted to brands
//! - [`Identity`]: Identity wrapper type (identity functor)
//!
//! ## Capability detection
//!
//! [`is_functor!`](crate::is_functor) and [`is_monad!`](crate::is_monad)
//! classify a type as Functor / Monad without failing on types that are
//! neither.
//!
//! # Examples
//!
//! ## Using Functor
//!
//! ```rust
//! use liftfree::typeclass::{fmap, OptionKind, VecKind};
//!
//! assert_eq!(fmap::<OptionKind, _, _, _>(|x: i32| x + 1, Some(1)), Some(2));
//! assert_eq!(fmap::<VecKind, _, _, _>(|x: i32| x * 2, vec![1, 2]), vec![2, 4]);
//! ```
//!
//! ## Using Monad
//!
//! ```rust
//! use liftfree::typeclass::{bind, pure, VecKind};
//!
//! let pairs = bind::<VecKind, _, _, _>(vec![1, 2], |x: i32| {
//!     bind::<VecKind, _, _, _>(vec!['a', 'b'], move |c: char| pure::<VecKind, _>((x, c)))
//! });
//! assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
//! ```

pub mod capability;
mod functor;
mod higher;
mod identity;
mod monad;

pub use functor::{Functor, fmap};
pub use higher::{
    Clone1, Debug1, DebugApplied, Eq1, OptionKind, ResultKind, TypeConstructor, VecKind,
};
pub use identity::{Identity, IdentityKind};
pub use monad::{Monad, bind, pure, then};
