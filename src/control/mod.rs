//! Control structures built on the type classes.
//!
//! - [`Free`]: The free monad over any functor, describing effectful
//!   programs as data
//! - [`Handler`]: Natural transformations giving effects a meaning in a
//!   target monad, consumed by [`Free::fold_free`]
//! - [`Trampoline`]: Stack-safe computations, usable as a fold target
//!
//! # Examples
//!
//! ## Describing and interpreting a program
//!
//! ```rust
//! use liftfree::control::{Free, IdentityHandler};
//! use liftfree::typeclass::VecKind;
//!
//! // Each layer of the list functor offers alternatives.
//! let program: Free<VecKind, (i32, char)> = Free::<VecKind, i32>::lift(vec![1, 2])
//!     .bind(|n| Free::<VecKind, char>::lift(vec!['a', 'b']).fmap(move |c| (n, c)));
//!
//! // Folding with the identity handler collects every outcome.
//! let outcomes = program.fold_free::<VecKind, _>(IdentityHandler);
//! assert_eq!(outcomes, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
//! ```
//!
//! ## Stack-Safe Interpretation
//!
//! ```rust
//! use liftfree::control::{Free, Handler, Trampoline, TrampolineKind};
//! use liftfree::typeclass::{Identity, IdentityKind};
//!
//! struct Deferred;
//!
//! impl Handler<IdentityKind, TrampolineKind> for Deferred {
//!     fn handle<X: 'static>(&self, layer: Identity<X>) -> Trampoline<X> {
//!         Trampoline::suspend(move || Trampoline::done(layer.into_inner()))
//!     }
//! }
//!
//! let mut program: Free<IdentityKind, u32> = Free::pure(7);
//! for _ in 0..100_000 {
//!     program = Free::make_bind(Identity(program));
//! }
//!
//! assert_eq!(program.fold_free::<TrampolineKind, _>(Deferred).run(), 7);
//! ```

mod fold;
mod free;
mod trampoline;

pub use fold::{Handler, IdentityHandler, fold_free};
pub use free::{Free, FreeKind};
pub use trampoline::{Trampoline, TrampolineKind};
