//! Free monad over an arbitrary functor.
//!
//! `Free<F, A>` turns any [`Functor`] `F` into a [`Monad`] by recording each
//! effect as data instead of performing it. A program is a tree:
//!
//! ```text
//! Free<F, A> = Return(A)
//!            | Bind(F<Free<F, A>>)
//! ```
//!
//! `Return` is a finished computation. `Bind` is one layer of the effect
//! functor whose payload holds the rest of the program. Nothing is executed
//! while the tree is built; the meaning of every effect is chosen later by
//! folding the tree into a target monad (see
//! [`fold_free`](Free::fold_free)).
//!
//! Every effect supplied at construction time appears as exactly one `Bind`
//! layer: `fmap` and `bind` rebuild the tree around the existing layers and
//! never drop, merge or reorder them.
//!
//! # Examples
//!
//! ```rust
//! use liftfree::control::Free;
//! use liftfree::typeclass::{IdentityKind, OptionKind};
//!
//! // One effect in the Option functor, then a pure continuation.
//! let program: Free<OptionKind, i32> = Free::lift(Some(20)).bind(|x| Free::pure(x + 1));
//! assert!(program.is_bind());
//!
//! // Option is itself a monad, so the program can be collapsed into it.
//! assert_eq!(program.retract(), Some(21));
//!
//! // A program without effects is just its value.
//! let pure: Free<IdentityKind, &str> = Free::pure("done");
//! assert_eq!(pure.into_return(), Some("done"));
//! ```
//!
//! # Recursion
//!
//! `fmap` and `bind` descend through every layer that already exists. Their
//! recursion depth is the number of chained effects. For very long programs,
//! drive the tree with [`Free::run`] or fold it into
//! [`TrampolineKind`](crate::control::TrampolineKind), both of which evaluate
//! iteratively.
//!
//! That only holds for trees built with [`Free::make_bind`] or by right-nested
//! recursion (`effect.bind(|x| rest(x))`, `effect.then(rest)`). A long
//! left-nested chain (`p = p.then(effect)` in a loop) wraps the first layer in
//! one more continuation per step, so both building and running it recurse
//! through the whole chain; associate long `bind` / `then` chains to the
//! right.
//!
//! `Free` has no custom `Drop`: dropping an eagerly built tree, for example
//! the unvisited rest of a program after a `ResultKind` fold short-circuits,
//! recurses once per layer.

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Shr;

use crate::typeclass::{Clone1, Debug1, DebugApplied, Eq1, Functor, Monad, TypeConstructor};

/// A program over the effect functor `F` that produces an `A`.
///
/// # Laws
///
/// `Free<F, _>` is a monad for every functor `F`:
///
/// - **Left Identity**: `Free::pure(a).bind(f) == f(a)`
/// - **Right Identity**: `m.bind(Free::pure) == m`
/// - **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
pub enum Free<F: TypeConstructor, A> {
    /// A finished computation.
    Return(A),
    /// One effect layer whose payload is the rest of the program.
    Bind(Box<F::Applied<Free<F, A>>>),
}

impl<F: TypeConstructor, A> Free<F, A> {
    /// Wraps a value as a finished program.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::control::Free;
    /// use liftfree::typeclass::VecKind;
    ///
    /// let program: Free<VecKind, i32> = Free::make_return(5);
    /// assert!(program.is_return());
    /// ```
    #[inline]
    pub const fn make_return(value: A) -> Self {
        Self::Return(value)
    }

    /// Alias for [`make_return`](Self::make_return).
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Return(value)
    }

    /// Records one effect layer whose payload holds the continuations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::control::Free;
    /// use liftfree::typeclass::VecKind;
    ///
    /// // Two alternative continuations in the list functor.
    /// let program: Free<VecKind, i32> = Free::make_bind(vec![Free::pure(1), Free::pure(2)]);
    /// assert!(program.is_bind());
    /// ```
    #[inline]
    pub fn make_bind(layer: F::Applied<Self>) -> Self {
        Self::Bind(Box::new(layer))
    }

    /// Returns `true` for a finished program.
    #[inline]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return(_))
    }

    /// Returns `true` if at least one effect layer remains.
    #[inline]
    pub const fn is_bind(&self) -> bool {
        matches!(self, Self::Bind(_))
    }

    /// Returns the value of a finished program, or `None` if effects remain.
    #[inline]
    pub fn into_return(self) -> Option<A> {
        match self {
            Self::Return(value) => Some(value),
            Self::Bind(_) => None,
        }
    }
}

impl<F: Functor, A: 'static> Free<F, A> {
    /// Embeds a single effect as a program that yields the effect's result.
    ///
    /// `lift(x) == make_bind(fmap(make_return, x))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::control::Free;
    /// use liftfree::typeclass::VecKind;
    ///
    /// let program: Free<VecKind, char> = Free::lift(vec!['a', 'b']);
    /// assert_eq!(
    ///     program,
    ///     Free::make_bind(vec![Free::make_return('a'), Free::make_return('b')])
    /// );
    /// ```
    pub fn lift(effect: F::Applied<A>) -> Self {
        Self::make_bind(F::fmap::<A, Self, _>(effect, Self::make_return))
    }

    /// Applies `function` to every result the program can produce.
    ///
    /// Effect layers are kept as they are; only the leaves change.
    pub fn fmap<B, G>(self, function: G) -> Free<F, B>
    where
        B: 'static,
        G: Fn(A) -> B + Clone + 'static,
    {
        match self {
            Self::Return(value) => Free::Return(function(value)),
            Self::Bind(layer) => Free::make_bind(F::fmap::<Self, Free<F, B>, _>(
                *layer,
                move |inner: Self| inner.fmap(function.clone()),
            )),
        }
    }

    /// Continues every result of the program with `function` (Haskell's `>>=`).
    ///
    /// `Return(a)` is replaced by `function(a)`; a `Bind` layer is kept and
    /// the continuation is pushed into its payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::control::Free;
    /// use liftfree::typeclass::OptionKind;
    ///
    /// let program: Free<OptionKind, i32> = Free::pure(20).bind(|x| Free::lift(Some(x + 1)));
    /// assert_eq!(program.retract(), Some(21));
    /// ```
    pub fn bind<B, G>(self, function: G) -> Free<F, B>
    where
        B: 'static,
        G: Fn(A) -> Free<F, B> + Clone + 'static,
    {
        match self {
            Self::Return(value) => function(value),
            Self::Bind(layer) => Free::make_bind(F::fmap::<Self, Free<F, B>, _>(
                *layer,
                move |inner: Self| inner.bind(function.clone()),
            )),
        }
    }

    /// Alias for [`bind`](Self::bind).
    #[inline]
    pub fn and_then<B, G>(self, function: G) -> Free<F, B>
    where
        B: 'static,
        G: Fn(A) -> Free<F, B> + Clone + 'static,
    {
        self.bind(function)
    }

    /// Runs this program, discards its result, then continues with `next`
    /// (Haskell's `>>`, also available as the `>>` operator).
    ///
    /// Every effect of `self` is kept. If a layer has several continuations,
    /// `next` is grafted onto each of them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftfree::control::Free;
    /// use liftfree::typeclass::VecKind;
    ///
    /// let first: Free<VecKind, i32> = Free::lift(vec![1, 2]);
    /// let program = first >> Free::pure('x');
    /// assert_eq!(program, Free::make_bind(vec![Free::pure('x'), Free::pure('x')]));
    /// ```
    #[inline]
    pub fn then<B>(self, next: Free<F, B>) -> Free<F, B>
    where
        F: Clone1,
        B: Clone + 'static,
    {
        self.bind(move |_| next.clone())
    }
}

impl<F, A, B> Shr<Free<F, B>> for Free<F, A>
where
    F: Functor + Clone1,
    A: 'static,
    B: Clone + 'static,
{
    type Output = Free<F, B>;

    #[inline]
    fn shr(self, next: Free<F, B>) -> Free<F, B> {
        self.then(next)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<F: Clone1, A: Clone> Clone for Free<F, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Return(value) => Self::Return(value.clone()),
            Self::Bind(layer) => Self::Bind(Box::new(F::clone_applied::<Self>(&**layer))),
        }
    }
}

impl<F: Eq1, A: PartialEq> PartialEq for Free<F, A> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Return(left), Self::Return(right)) => left == right,
            (Self::Bind(left), Self::Bind(right)) => F::eq_applied::<Self>(&**left, &**right),
            _ => false,
        }
    }
}

impl<F: Eq1, A: Eq> Eq for Free<F, A> {}

impl<F: Debug1, A: Debug> Debug for Free<F, A> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Return(value) => formatter.debug_tuple("Return").field(value).finish(),
            Self::Bind(layer) => formatter
                .debug_tuple("Bind")
                .field(&DebugApplied::<F, Self>(&**layer))
                .finish(),
        }
    }
}

// =============================================================================
// FreeKind
// =============================================================================

/// Brand for `Free<F, _>`.
///
/// Makes a free monad usable wherever a [`Functor`] or [`Monad`] brand is
/// expected, for example as the target of another interpreter.
pub struct FreeKind<F>(PhantomData<fn() -> F>);

impl<F> Debug for FreeKind<F> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("FreeKind")
    }
}

impl<F> Clone for FreeKind<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FreeKind<F> {}

impl<F> Default for FreeKind<F> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<F: TypeConstructor> TypeConstructor for FreeKind<F> {
    type Applied<A> = Free<F, A>;
}

impl<F: Functor> Functor for FreeKind<F> {
    #[inline]
    fn fmap<A, B, G>(value: Free<F, A>, function: G) -> Free<F, B>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + Clone + 'static,
    {
        value.fmap(function)
    }
}

impl<F: Functor> Monad for FreeKind<F> {
    #[inline]
    fn pure<A>(value: A) -> Free<F, A>
    where
        A: 'static,
    {
        Free::Return(value)
    }

    #[inline]
    fn bind<A, B, G>(value: Free<F, A>, function: G) -> Free<F, B>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> Free<F, B> + Clone + 'static,
    {
        value.bind(function)
    }
}

impl<F: Clone1> Clone1 for FreeKind<F> {
    #[inline]
    fn clone_applied<A: Clone>(value: &Free<F, A>) -> Free<F, A> {
        value.clone()
    }
}

impl<F: Eq1> Eq1 for FreeKind<F> {
    #[inline]
    fn eq_applied<A: PartialEq>(left: &Free<F, A>, right: &Free<F, A>) -> bool {
        left == right
    }
}

impl<F: Debug1> Debug1 for FreeKind<F> {
    fn fmt_applied<A: Debug>(value: &Free<F, A>, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(value, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionKind, VecKind};
    use rstest::rstest;

    fn branches() -> Free<VecKind, i32> {
        Free::make_bind(vec![Free::pure(1), Free::pure(2)])
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn test_make_return_is_return() {
        let program: Free<VecKind, i32> = Free::make_return(42);
        assert!(program.is_return());
        assert!(!program.is_bind());
        assert_eq!(program.into_return(), Some(42));
    }

    #[rstest]
    fn test_make_bind_keeps_layer() {
        let program = branches();
        assert!(program.is_bind());
        assert_eq!(program.into_return(), None);
    }

    #[rstest]
    fn test_lift_wraps_each_value_in_return() {
        let program: Free<VecKind, i32> = Free::lift(vec![1, 2]);
        assert_eq!(program, branches());
    }

    #[rstest]
    fn test_lift_empty_effect_has_no_continuation() {
        let program: Free<OptionKind, i32> = Free::lift(None);
        assert_eq!(program, Free::make_bind(None));
    }

    // =========================================================================
    // fmap
    // =========================================================================

    #[rstest]
    fn test_fmap_return_applies_function() {
        let program: Free<VecKind, i32> = Free::pure(20);
        assert_eq!(program.fmap(|x| x + 1), Free::pure(21));
    }

    #[rstest]
    fn test_fmap_bind_maps_every_leaf() {
        let mapped = branches().fmap(|x| x * 10);
        assert_eq!(mapped, Free::make_bind(vec![Free::pure(10), Free::pure(20)]));
    }

    #[rstest]
    fn test_fmap_keeps_nested_layers() {
        let nested: Free<VecKind, i32> =
            Free::make_bind(vec![Free::make_bind(vec![Free::pure(1)]), Free::pure(2)]);
        let expected: Free<VecKind, String> = Free::make_bind(vec![
            Free::make_bind(vec![Free::pure("1".to_string())]),
            Free::pure("2".to_string()),
        ]);
        assert_eq!(nested.fmap(|x| x.to_string()), expected);
    }

    // =========================================================================
    // bind / then
    // =========================================================================

    #[rstest]
    fn test_bind_return_applies_function() {
        let program: Free<VecKind, i32> = Free::pure(3);
        let bound = program.bind(|x| Free::lift(vec![x, x * 10]));
        assert_eq!(bound, Free::make_bind(vec![Free::pure(3), Free::pure(30)]));
    }

    #[rstest]
    fn test_bind_pushes_continuation_into_every_branch() {
        let bound = branches().bind(|x| Free::lift(vec![x]));
        let expected = Free::make_bind(vec![
            Free::make_bind(vec![Free::pure(1)]),
            Free::make_bind(vec![Free::pure(2)]),
        ]);
        assert_eq!(bound, expected);
    }

    #[rstest]
    fn test_bind_on_empty_layer_never_calls_function() {
        let program: Free<OptionKind, i32> = Free::lift(None);
        let bound = program.bind(|_| -> Free<OptionKind, i32> { panic!("must not run") });
        assert_eq!(bound, Free::make_bind(None));
    }

    #[rstest]
    fn test_then_keeps_left_effects() {
        let program = branches().then(Free::<VecKind, char>::pure('x'));
        assert_eq!(program, Free::make_bind(vec![Free::pure('x'), Free::pure('x')]));
    }

    #[rstest]
    fn test_shr_operator_is_then() {
        let left = branches() >> Free::<VecKind, char>::lift(vec!['a']);
        let right = branches().then(Free::lift(vec!['a']));
        assert_eq!(left, right);
    }

    // =========================================================================
    // Trait implementations
    // =========================================================================

    #[rstest]
    fn test_clone_is_structurally_equal() {
        let program = branches();
        assert_eq!(program.clone(), program);
    }

    #[rstest]
    #[case(Free::pure(1), Free::pure(1), true)]
    #[case(Free::pure(1), Free::pure(2), false)]
    #[case(Free::pure(1), Free::make_bind(vec![Free::pure(1)]), false)]
    #[case(Free::make_bind(vec![]), Free::make_bind(vec![]), true)]
    fn test_equality_compares_structure(
        #[case] left: Free<VecKind, i32>,
        #[case] right: Free<VecKind, i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(left == right, expected);
    }

    #[rstest]
    fn test_debug_renders_variants() {
        let program: Free<VecKind, i32> =
            Free::make_bind(vec![Free::pure(1), Free::make_bind(vec![])]);
        assert_eq!(format!("{program:?}"), "Bind([Return(1), Bind([])])");
    }

    // =========================================================================
    // FreeKind
    // =========================================================================

    #[rstest]
    fn test_free_kind_delegates_to_inherent_methods() {
        let mapped = FreeKind::<VecKind>::fmap(branches(), |x| x + 1);
        assert_eq!(mapped, Free::make_bind(vec![Free::pure(2), Free::pure(3)]));

        let bound = FreeKind::<VecKind>::bind(FreeKind::<VecKind>::pure(1), |x: i32| {
            Free::lift(vec![x, x])
        });
        assert_eq!(bound, Free::make_bind(vec![Free::pure(1), Free::pure(1)]));
    }

    #[rstest]
    fn test_free_kind_debug_is_brand_name() {
        assert_eq!(format!("{:?}", FreeKind::<VecKind>::default()), "FreeKind");
    }

    static_assertions::assert_impl_all!(FreeKind<VecKind>: Functor, Monad, Clone1, Eq1, Debug1);
    static_assertions::assert_impl_all!(Free<VecKind, i32>: Clone, PartialEq, Eq, Debug);
}
