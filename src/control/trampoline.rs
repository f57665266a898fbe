//! Stack-safe sequencing via trampolining.
//!
//! `Trampoline<A>` represents a computation as data that is evaluated in a
//! loop rather than on the call stack. Its brand, [`TrampolineKind`], is a
//! [`Monad`], which makes it a target for
//! [`Free::fold_free`](crate::control::Free::fold_free): folding a program
//! into a trampoline only builds continuations, and [`Trampoline::run`]
//! then executes them iteratively, however long the program is.
//!
//! # Examples
//!
//! ```rust
//! use liftfree::control::Trampoline;
//!
//! fn count_down(n: u64) -> Trampoline<u64> {
//!     if n == 0 {
//!         Trampoline::done(0)
//!     } else {
//!         Trampoline::suspend(move || count_down(n - 1))
//!     }
//! }
//!
//! assert_eq!(count_down(100_000).run(), 0);
//! ```

use std::fmt;

use crate::typeclass::{Functor, Monad, TypeConstructor};

/// One erased `flat_map` step.
trait TrampolineContinuation<A> {
    fn step(self: Box<Self>) -> Trampoline<A>;
}

#[doc(hidden)]
pub struct ContinuationBox<A>(Box<dyn TrampolineContinuation<A>>);

impl<A> ContinuationBox<A> {
    fn new<T: TrampolineContinuation<A> + 'static>(continuation: T) -> Self {
        Self(Box::new(continuation))
    }

    fn step(self) -> Trampoline<A> {
        self.0.step()
    }
}

/// A computation producing `A`, encoded as data and run in constant stack.
///
/// # Laws
///
/// - **Left Identity**: `Trampoline::done(a).flat_map(f).run() == f(a).run()`
/// - **Right Identity**: `m.flat_map(Trampoline::done).run() == m.run()`
/// - **Associativity**: `m.flat_map(f).flat_map(g).run() == m.flat_map(|x| f(x).flat_map(g)).run()`
pub enum Trampoline<A> {
    /// The computation has completed with value `A`.
    Done(A),
    /// The computation needs another step.
    Suspend(Box<dyn FnOnce() -> Trampoline<A> + 'static>),
    #[doc(hidden)]
    FlatMapInternal(ContinuationBox<A>),
}

impl<A> Trampoline<A> {
    /// Creates a completed trampoline.
    #[inline]
    pub const fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Creates a trampoline that continues with `thunk` when run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::control::Trampoline;
    ///
    /// let trampoline = Trampoline::suspend(|| Trampoline::done(42));
    /// assert_eq!(trampoline.run(), 42);
    /// ```
    #[inline]
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::Suspend(Box::new(thunk))
    }

    /// Returns `true` if no steps are left.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

impl<A: 'static> Trampoline<A> {
    /// Runs the trampoline to completion.
    ///
    /// Evaluation uses constant stack space.
    pub fn run(self) -> A {
        let mut current = self;

        loop {
            match current {
                Self::Done(value) => return value,
                Self::Suspend(thunk) => current = thunk(),
                Self::FlatMapInternal(continuation) => current = continuation.step(),
            }
        }
    }

    /// Applies `function` to the final value.
    pub fn map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.flat_map(move |value| Trampoline::done(function(value)))
    }

    /// Continues with the trampoline produced from the final value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::control::Trampoline;
    ///
    /// let result = Trampoline::done(21).flat_map(|x| Trampoline::done(x * 2));
    /// assert_eq!(result.run(), 42);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
        B: 'static,
    {
        Trampoline::FlatMapInternal(ContinuationBox::new(FlatMapContinuation {
            trampoline: self,
            function,
        }))
    }

    /// Runs `self`, discards its value, then runs `next`.
    #[inline]
    pub fn then<B: 'static>(self, next: Trampoline<B>) -> Trampoline<B> {
        self.flat_map(move |_| next)
    }
}

struct FlatMapContinuation<A, B, F>
where
    F: FnOnce(A) -> Trampoline<B>,
{
    trampoline: Trampoline<A>,
    function: F,
}

impl<A: 'static, B: 'static, F> TrampolineContinuation<B> for FlatMapContinuation<A, B, F>
where
    F: FnOnce(A) -> Trampoline<B> + 'static,
{
    fn step(self: Box<Self>) -> Trampoline<B> {
        let function = self.function;
        match self.trampoline {
            Trampoline::Done(value) => function(value),
            Trampoline::Suspend(thunk) => Trampoline::suspend(move || thunk().flat_map(function)),
            // (m >>= f) >>= g == m >>= (\x -> f x >>= g)
            Trampoline::FlatMapInternal(inner) => inner.step().flat_map(function),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Trampoline<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Suspend(_) => formatter.debug_tuple("Suspend").field(&"<thunk>").finish(),
            Self::FlatMapInternal(_) => formatter
                .debug_tuple("FlatMapInternal")
                .field(&"<continuation>")
                .finish(),
        }
    }
}

// =============================================================================
// Type class instances
// =============================================================================

/// Brand for [`Trampoline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TrampolineKind;

impl TypeConstructor for TrampolineKind {
    type Applied<A> = Trampoline<A>;
}

impl Functor for TrampolineKind {
    #[inline]
    fn fmap<A, B, F>(value: Trampoline<A>, function: F) -> Trampoline<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        value.map(function)
    }
}

impl Monad for TrampolineKind {
    #[inline]
    fn pure<A>(value: A) -> Trampoline<A>
    where
        A: 'static,
    {
        Trampoline::done(value)
    }

    #[inline]
    fn bind<A, B, F>(value: Trampoline<A>, function: F) -> Trampoline<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Trampoline<B> + Clone + 'static,
    {
        value.flat_map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_trampoline_done_runs_to_value() {
        let trampoline = Trampoline::done(42);
        assert!(trampoline.is_done());
        assert_eq!(trampoline.run(), 42);
    }

    #[rstest]
    fn test_trampoline_suspend_is_not_done() {
        let trampoline = Trampoline::suspend(|| Trampoline::done(42));
        assert!(!trampoline.is_done());
        assert_eq!(trampoline.run(), 42);
    }

    #[rstest]
    fn test_trampoline_map_and_flat_map() {
        let result = Trampoline::done(20)
            .map(|x| x + 1)
            .flat_map(|x| Trampoline::suspend(move || Trampoline::done(x * 2)));
        assert_eq!(result.run(), 42);
    }

    #[rstest]
    fn test_trampoline_mutual_recursion() {
        fn is_even(n: u64) -> Trampoline<bool> {
            if n == 0 {
                Trampoline::done(true)
            } else {
                Trampoline::suspend(move || is_odd(n - 1))
            }
        }

        fn is_odd(n: u64) -> Trampoline<bool> {
            if n == 0 {
                Trampoline::done(false)
            } else {
                Trampoline::suspend(move || is_even(n - 1))
            }
        }

        assert!(is_even(100_000).run());
        assert!(!is_odd(100_000).run());
    }

    #[rstest]
    fn test_trampoline_kind_bind_sequences() {
        let result = TrampolineKind::bind(TrampolineKind::pure(3), |x: i32| {
            Trampoline::suspend(move || Trampoline::done(x * 14))
        });
        assert_eq!(result.run(), 42);
    }

    #[rstest]
    fn test_trampoline_kind_fmap_maps() {
        let result = TrampolineKind::fmap(Trampoline::done("abc"), str::len);
        assert_eq!(result.run(), 3);
    }

    #[rstest]
    fn test_trampoline_debug_hides_thunks() {
        assert_eq!(format!("{:?}", Trampoline::done(1)), "Done(1)");
        let suspended = Trampoline::suspend(|| Trampoline::done(1));
        assert_eq!(format!("{suspended:?}"), "Suspend(\"<thunk>\")");
    }

    static_assertions::assert_impl_all!(TrampolineKind: Functor, Monad);
}
