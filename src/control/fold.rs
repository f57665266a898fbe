//! Interpreting free programs.
//!
//! A [`Free`] program is inert until it is folded into a target [`Monad`].
//! The fold replaces every effect layer with the target monad's meaning for
//! it and glues the results together with the target's `bind`:
//!
//! ```text
//! fold_free(h, Return(a)) = pure_M(a)
//! fold_free(h, Bind(x))   = bind_M(h(x), |inner| fold_free(h, inner))
//! ```
//!
//! The meaning of an effect is given by a [`Handler`], a natural
//! transformation `F<X> -> M<X>` that works for every payload type `X`.
//! Choosing another handler gives the same program another semantics: a
//! state simulation, a fallible execution, a log, and so on.
//!
//! Handler failures are not intercepted. A target such as
//! [`ResultKind`](crate::typeclass::ResultKind) skips every later layer once
//! a handler returns `Err`, because that is what its `bind` does.
//!
//! # Examples
//!
//! ```rust
//! use liftfree::control::{Free, Handler};
//! use liftfree::typeclass::{Identity, IdentityKind, VecKind};
//!
//! /// Always follows the first alternative of a list layer.
//! struct First;
//!
//! impl Handler<VecKind, IdentityKind> for First {
//!     fn handle<X: 'static>(&self, layer: Vec<X>) -> Identity<X> {
//!         Identity(layer.into_iter().next().expect("non-empty layer"))
//!     }
//! }
//!
//! let program: Free<VecKind, i32> = Free::lift(vec![1, 2, 3]).fmap(|x| x * 10);
//! assert_eq!(program.fold_free::<IdentityKind, _>(First), Identity(10));
//! ```

use std::rc::Rc;

use super::free::Free;
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A natural transformation from the effect functor `F` to the target `M`.
///
/// `handle` gives one effect layer its meaning in `M`, for every payload
/// type `X`. It must not inspect or alter the payload beyond what the effect
/// itself means; the fold relies on the payload coming back unchanged.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot interpret `{F}` effects into `{M}`",
    label = "no `Handler<{F}, {M}>` implementation",
    note = "implement `Handler<{F}, {M}>` to give every `{F}` layer a meaning in `{M}`"
)]
pub trait Handler<F: TypeConstructor, M: TypeConstructor> {
    /// Translates one effect layer into the target monad.
    fn handle<X: 'static>(&self, layer: F::Applied<X>) -> M::Applied<X>;
}

/// The handler that leaves every layer as it is.
///
/// Folding with it into the effect functor itself rebuilds the effect a
/// program was lifted from, and collapses a program over a monad into that
/// monad (see [`Free::retract`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityHandler;

impl<F: TypeConstructor> Handler<F, F> for IdentityHandler {
    #[inline]
    fn handle<X: 'static>(&self, layer: F::Applied<X>) -> F::Applied<X> {
        layer
    }
}

impl<F: Functor, A: 'static> Free<F, A> {
    /// Folds the program into the monad `M` using `handler` for every layer.
    ///
    /// Layers are interpreted in the order the tree implies, visiting each
    /// payload in the order `F::fmap` does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::control::{Free, IdentityHandler};
    /// use liftfree::typeclass::VecKind;
    ///
    /// let effect = vec!['a', 'b'];
    /// let program: Free<VecKind, char> = Free::lift(effect.clone());
    /// assert_eq!(program.fold_free::<VecKind, _>(IdentityHandler), effect);
    /// ```
    pub fn fold_free<M, H>(self, handler: H) -> M::Applied<A>
    where
        M: Monad,
        H: Handler<F, M> + 'static,
    {
        self.interpret::<M, _>(move |layer: F::Applied<Self>| handler.handle::<Self>(layer))
    }

    /// Folds the program into `M` with a closure that handles layers of this
    /// program only.
    ///
    /// Unlike a [`Handler`], the closure is not required to work for every
    /// payload type, so it can be written inline and may capture state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::control::Free;
    /// use liftfree::typeclass::{OptionKind, VecKind};
    ///
    /// // Keep the last alternative of every layer, failing on empty layers.
    /// let program: Free<VecKind, i32> = Free::lift(vec![1, 2, 3]);
    /// let last = program
    ///     .interpret::<OptionKind, _>(|layer: Vec<Free<VecKind, i32>>| layer.into_iter().last());
    /// assert_eq!(last, Some(3));
    /// ```
    pub fn interpret<M, H>(self, handler: H) -> M::Applied<A>
    where
        M: Monad,
        H: Fn(F::Applied<Self>) -> M::Applied<Self> + 'static,
    {
        self.interpret_shared::<M, H>(&Rc::new(handler))
    }

    fn interpret_shared<M, H>(self, handler: &Rc<H>) -> M::Applied<A>
    where
        M: Monad,
        H: Fn(F::Applied<Self>) -> M::Applied<Self> + 'static,
    {
        match self {
            Self::Return(value) => M::pure::<A>(value),
            Self::Bind(layer) => {
                tracing::trace!("interpreting effect layer");
                let next = handler(*layer);
                let handler = Rc::clone(handler);
                M::bind::<Self, A, _>(next, move |inner: Self| {
                    inner.interpret_shared::<M, H>(&handler)
                })
            }
        }
    }
}

impl<F: Monad, A: 'static> Free<F, A> {
    /// Collapses a program over a monad into that monad.
    ///
    /// `retract(lift(m)) == m`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::control::Free;
    /// use liftfree::typeclass::OptionKind;
    ///
    /// let program = Free::<OptionKind, i32>::lift(Some(1)).bind(|x| Free::lift(Some(x + 1)));
    /// assert_eq!(program.retract(), Some(2));
    ///
    /// let failed = Free::<OptionKind, i32>::lift(None).bind(|x| Free::lift(Some(x + 1)));
    /// assert_eq!(failed.retract(), None);
    /// ```
    #[inline]
    pub fn retract(self) -> F::Applied<A> {
        self.fold_free::<F, _>(IdentityHandler)
    }
}

impl<F: TypeConstructor, A> Free<F, A> {
    /// Runs the program to its final value in a loop.
    ///
    /// `step` resolves one effect layer to the continuation that should run
    /// next. It is the driver for effects that select exactly one
    /// continuation per layer. The loop itself uses constant stack space, so
    /// trees built with [`Free::make_bind`] or by right-nested `bind` / `then`
    /// may have any number of layers. A long left-nested chain still recurses
    /// inside `step` (see the recursion notes on [`Free`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::control::Free;
    /// use liftfree::typeclass::{Identity, IdentityKind};
    ///
    /// let mut program: Free<IdentityKind, u32> = Free::pure(0);
    /// for _ in 0..10_000 {
    ///     program = Free::make_bind(Identity(program));
    /// }
    ///
    /// assert_eq!(program.run(|layer| layer.into_inner()), 0);
    /// ```
    pub fn run<S>(self, mut step: S) -> A
    where
        S: FnMut(F::Applied<Self>) -> Self,
    {
        let mut current = self;
        let mut steps: usize = 0;

        loop {
            match current {
                Self::Return(value) => {
                    tracing::debug!(steps, "free program finished");
                    return value;
                }
                Self::Bind(layer) => {
                    steps += 1;
                    tracing::trace!(step = steps, "running effect layer");
                    current = step(*layer);
                }
            }
        }
    }
}

/// Folds `program` into the monad `M` using `handler` for every layer.
///
/// This is the free-standing form of [`Free::fold_free`].
#[inline]
pub fn fold_free<F, M, A, H>(handler: H, program: Free<F, A>) -> M::Applied<A>
where
    F: Functor,
    M: Monad,
    A: 'static,
    H: Handler<F, M> + 'static,
{
    program.fold_free::<M, H>(handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, IdentityKind, OptionKind, ResultKind, VecKind};
    use rstest::rstest;
    use std::cell::RefCell;

    struct Head;

    impl Handler<VecKind, OptionKind> for Head {
        fn handle<X: 'static>(&self, layer: Vec<X>) -> Option<X> {
            layer.into_iter().next()
        }
    }

    struct Everything;

    impl Handler<VecKind, VecKind> for Everything {
        fn handle<X: 'static>(&self, layer: Vec<X>) -> Vec<X> {
            layer
        }
    }

    fn choice(values: Vec<i32>) -> Free<VecKind, i32> {
        Free::lift(values)
    }

    // =========================================================================
    // fold_free
    // =========================================================================

    #[rstest]
    fn test_fold_free_return_is_pure() {
        let program: Free<VecKind, i32> = Free::pure(7);
        assert_eq!(program.fold_free::<OptionKind, _>(Head), Some(7));
    }

    #[rstest]
    fn test_fold_free_with_identity_handler_rebuilds_effect() {
        let folded = choice(vec![4, 5, 6]).fold_free::<VecKind, _>(IdentityHandler);
        assert_eq!(folded, vec![4, 5, 6]);
    }

    #[rstest]
    fn test_fold_free_into_list_accumulates_all_branches() {
        let program = choice(vec![1, 2]).bind(|x| choice(vec![x, x * 10]));
        let folded = program.fold_free::<VecKind, _>(Everything);
        assert_eq!(folded, vec![1, 10, 2, 20]);
    }

    #[rstest]
    #[case(vec![3, 4], Some(30))]
    #[case(vec![], None)]
    fn test_fold_free_into_option_follows_handler(
        #[case] values: Vec<i32>,
        #[case] expected: Option<i32>,
    ) {
        let program = choice(values).fmap(|x| x * 10);
        assert_eq!(program.fold_free::<OptionKind, _>(Head), expected);
    }

    #[rstest]
    fn test_fold_free_function_matches_method() {
        let program = choice(vec![9, 8]);
        assert_eq!(fold_free::<_, OptionKind, _, _>(Head, program), Some(9));
    }

    // =========================================================================
    // interpret
    // =========================================================================

    #[rstest]
    fn test_interpret_short_circuits_on_failure() {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let program = choice(vec![1])
            .bind(|_| choice(vec![]))
            .bind(|_| choice(vec![3]));

        let log = Rc::clone(&visited);
        let result =
            program.interpret::<ResultKind<String>, _>(move |layer: Vec<Free<VecKind, i32>>| {
                log.borrow_mut().push(layer.len());
                layer.into_iter().next().ok_or_else(|| "empty layer".to_string())
            });

        assert_eq!(result, Err("empty layer".to_string()));
        assert_eq!(*visited.borrow(), vec![1, 0]);
    }

    #[rstest]
    fn test_interpret_short_circuit_drops_unvisited_layers() {
        struct Tracked(Rc<RefCell<usize>>);

        impl Drop for Tracked {
            fn drop(&mut self) {
                *self.0.borrow_mut() += 1;
            }
        }

        let dropped = Rc::new(RefCell::new(0));
        let mut program: Free<OptionKind, Tracked> = Free::pure(Tracked(Rc::clone(&dropped)));
        for _ in 0..1_000 {
            program = Free::make_bind(Some(program));
        }

        let result = program.interpret::<ResultKind<String>, _>(
            |_: Option<Free<OptionKind, Tracked>>| Err("stopped".to_string()),
        );

        assert!(result.is_err());
        assert_eq!(*dropped.borrow(), 1);
    }

    #[rstest]
    fn test_interpret_into_identity() {
        let program = choice(vec![2, 3]).bind(|x| choice(vec![x + 40]));
        let result = program.interpret::<IdentityKind, _>(|layer: Vec<Free<VecKind, i32>>| {
            Identity(layer.into_iter().next().unwrap_or(Free::pure(0)))
        });
        assert_eq!(result, Identity(42));
    }

    // =========================================================================
    // retract / run
    // =========================================================================

    #[rstest]
    fn test_retract_collapses_into_monad() {
        let program = Free::<VecKind, i32>::lift(vec![1, 2]).bind(|x| Free::lift(vec![x; 2]));
        assert_eq!(program.retract(), vec![1, 1, 2, 2]);
    }

    #[rstest]
    fn test_run_follows_selected_continuations() {
        let program = choice(vec![1, 2]).bind(|x| choice(vec![x * 100, x]));
        let result = program.run(|layer| layer.into_iter().last().unwrap_or(Free::pure(-1)));
        assert_eq!(result, 2);
    }

    #[rstest]
    fn test_run_on_return_takes_no_step() {
        let program: Free<VecKind, i32> = Free::pure(5);
        let result = program.run(|_| panic!("no layer to run"));
        assert_eq!(result, 5);
    }
}
