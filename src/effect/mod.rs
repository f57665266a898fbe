//! Target monads for interpreting free programs.
//!
//! An interpreter gives each effect of a [`Free`](crate::control::Free)
//! program a meaning in some monad. Besides the built-in instances for
//! `Option`, `Result`, `Vec` and [`Identity`](crate::typeclass::Identity),
//! this module provides:
//!
//! - [`State`]: Computations that thread a state, for simulating effects
//!   against an in-memory model
//!
//! # Examples
//!
//! ```rust
//! use liftfree::control::{Free, Handler};
//! use liftfree::effect::{State, StateKind};
//! use liftfree::typeclass::{Identity, IdentityKind};
//!
//! /// Counts every layer it interprets.
//! struct Counting;
//!
//! impl Handler<IdentityKind, StateKind<u32>> for Counting {
//!     fn handle<X: 'static>(&self, layer: Identity<X>) -> State<u32, X> {
//!         State::modify(|count| count + 1).then(State::pure(layer.into_inner()))
//!     }
//! }
//!
//! let program: Free<IdentityKind, &str> =
//!     Free::make_bind(Identity(Free::make_bind(Identity(Free::pure("done")))));
//!
//! let (result, count) = program.fold_free::<StateKind<u32>, _>(Counting).run(0);
//! assert_eq!(result, "done");
//! assert_eq!(count, 2);
//! ```

mod state;

pub use state::{State, StateKind};
