//! State Monad - stateful computation.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`: given the current state
//! it produces a result and the next state. Running a chain of `State`
//! values threads the state through every step in order.
//!
//! `State` is a one-shot computation: [`State::run`] consumes it. That is
//! what lets [`StateKind`] lift any value with `pure`, and it is enough for
//! the fold of a free program, which builds every step exactly once.
//!
//! # Laws
//!
//! ## Monad Laws
//!
//! - Left Identity: `State::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(State::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## `MonadState` Laws
//!
//! - Put Get Law: `put(s).then(get())` returns `s`
//! - Put Put Law: `put(s1).then(put(s2)) == put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use liftfree::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! let (count, _) = computation.run(0);
//! assert_eq!(count, 3);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A computation that threads a state of type `S` and produces an `A`.
///
/// # Examples
///
/// ```rust
/// use liftfree::effect::State;
///
/// let computation: State<i32, i32> = State::get()
///     .flat_map(|current| State::put(current + 1).then(State::pure(current)));
///
/// let (result, final_state) = computation.run(10);
/// assert_eq!(result, 10);
/// assert_eq!(final_state, 11);
/// ```
pub struct State<S, A> {
    run_function: Box<dyn FnOnce(S) -> (A, S)>,
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Creates a State from a state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Runs the computation from `initial_state`, returning the result and
    /// the final state.
    pub fn run(self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and returns only the result.
    pub fn eval(self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and returns only the final state.
    pub fn exec(self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Returns `value` without touching the state.
    pub fn pure(value: A) -> Self {
        Self::new(move |state| (value, state))
    }

    /// Maps a function over the result.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        State::new(move |state| {
            let (result, new_state) = self.run(state);
            (function(result), new_state)
        })
    }

    /// Runs `self`, then the State produced from its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.flat_map(|value| State::new(move |s: i32| (value + s, s * 2)));
    /// // First: (10, 11), then with state 11: (10 + 11, 22)
    /// assert_eq!(chained.run(10), (21, 22));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: FnOnce(A) -> State<S, B> + 'static,
        B: 'static,
    {
        State::new(move |state| {
            let (result, intermediate_state) = self.run(state);
            function(result).run(intermediate_state)
        })
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: FnOnce(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two States, discarding the first result.
    #[must_use]
    pub fn then<B: 'static>(self, next: State<S, B>) -> State<S, B> {
        self.flat_map(move |_| next)
    }
}

// =============================================================================
// MonadState Operations (as inherent methods)
// =============================================================================

impl<S: Clone + 'static> State<S, S> {
    /// Returns the current state without modifying it.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S: 'static> State<S, ()> {
    /// Replaces the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::effect::State;
    ///
    /// assert_eq!(State::put(100).exec(42), 100);
    /// ```
    pub fn put(new_state: S) -> Self {
        Self::new(move |_| ((), new_state))
    }

    /// Transforms the current state with `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::effect::State;
    ///
    /// let push = State::modify(|mut log: Vec<i32>| {
    ///     log.push(5);
    ///     log
    /// });
    /// assert_eq!(push.exec(vec![1]), vec![1, 5]);
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: FnOnce(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Returns a projection of the current state without modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::effect::State;
    ///
    /// let last = State::gets(|log: &Vec<i32>| log.last().copied());
    /// assert_eq!(last.eval(vec![1, 2, 3]), Some(3));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: FnOnce(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }
}

impl<S, A> fmt::Display for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}

impl<S, A> fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("State(<function>)")
    }
}

// =============================================================================
// Type class instances
// =============================================================================

/// Brand for `State<S, _>` with a fixed state type `S`.
pub struct StateKind<S>(PhantomData<fn() -> S>);

impl<S> fmt::Debug for StateKind<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("StateKind")
    }
}

impl<S> Clone for StateKind<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StateKind<S> {}

impl<S> Default for StateKind<S> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<S: 'static> TypeConstructor for StateKind<S> {
    type Applied<A> = State<S, A>;
}

impl<S: 'static> Functor for StateKind<S> {
    #[inline]
    fn fmap<A, B, F>(value: State<S, A>, function: F) -> State<S, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        value.fmap(function)
    }
}

impl<S: 'static> Monad for StateKind<S> {
    #[inline]
    fn pure<A>(value: A) -> State<S, A>
    where
        A: 'static,
    {
        State::pure(value)
    }

    #[inline]
    fn bind<A, B, F>(value: State<S, A>, function: F) -> State<S, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> State<S, B> + Clone + 'static,
    {
        value.flat_map(function)
    }
}

static_assertions::assert_impl_all!(StateKind<Vec<i32>>: Functor, Monad);
