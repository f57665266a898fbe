//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native Higher-Kinded Types: a trait cannot abstract over
//! `Option<_>` or `Vec<_>` as type constructors. This module works around the
//! limitation with *brands*: zero-sized marker types that stand for a type
//! constructor and expose it through a generic associated type.
//!
//! ```text
//! VecKind::Applied<A>    == Vec<A>
//! OptionKind::Applied<A> == Option<A>
//! ```
//!
//! Because the brand is separate from any applied type, generic code can
//! re-apply the same constructor to a new argument and the compiler knows
//! the result is the same constructor again. This is what allows recursive
//! constructions such as `Free<F, A>`, which embeds `F::Applied<Free<F, A>>`.
//!
//! # Lifted capabilities
//!
//! [`Clone1`], [`Eq1`] and [`Debug1`] lift `Clone`, `PartialEq` and `Debug`
//! to the level of a brand: "if the contents can be cloned, the applied type
//! can be cloned". Recursive types over a brand use them instead of where
//! clauses on the applied type, which the trait solver cannot resolve without
//! cycling.
//!
//! # Example
//!
//! ```rust
//! use liftfree::typeclass::{TypeConstructor, VecKind};
//!
//! fn empty<F: TypeConstructor>() -> F::Applied<String>
//! where
//!     F::Applied<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let strings: Vec<String> = empty::<VecKind>();
//! assert!(strings.is_empty());
//! ```

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

/// A brand standing for a type constructor.
///
/// Implementors are marker types; `Applied<A>` is the constructor applied to
/// `A`. Brands are `'static` so that applied types built from `'static`
/// arguments are `'static` as well, which boxed continuations require.
///
/// # Laws
///
/// `Applied<A>` must be the *same* constructor for every `A`: a brand may not
/// pick a structurally different representation depending on its argument.
pub trait TypeConstructor: 'static {
    /// The constructor applied to `A`.
    type Applied<A>;
}

/// Brand for [`Option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionKind;

/// Brand for [`Result`] with a fixed error type `E`.
///
/// The error type is part of the brand, so `ResultKind<E>` maps and binds
/// over the success value only.
pub struct ResultKind<E>(PhantomData<fn() -> E>);

/// Brand for [`Vec`], the list monad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecKind;

impl TypeConstructor for OptionKind {
    type Applied<A> = Option<A>;
}

impl<E: 'static> TypeConstructor for ResultKind<E> {
    type Applied<A> = Result<A, E>;
}

impl TypeConstructor for VecKind {
    type Applied<A> = Vec<A>;
}

impl<E> Debug for ResultKind<E> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("ResultKind")
    }
}

impl<E> Clone for ResultKind<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ResultKind<E> {}

impl<E> Default for ResultKind<E> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

// =============================================================================
// Lifted capabilities
// =============================================================================

/// `Clone` lifted to a type constructor.
pub trait Clone1: TypeConstructor {
    /// Clones an applied value whose contents are clonable.
    fn clone_applied<A: Clone>(value: &Self::Applied<A>) -> Self::Applied<A>;
}

/// `PartialEq` lifted to a type constructor.
pub trait Eq1: TypeConstructor {
    /// Compares two applied values whose contents are comparable.
    fn eq_applied<A: PartialEq>(left: &Self::Applied<A>, right: &Self::Applied<A>) -> bool;
}

/// `Debug` lifted to a type constructor.
pub trait Debug1: TypeConstructor {
    /// Formats an applied value whose contents are debuggable.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying formatter.
    fn fmt_applied<A: Debug>(value: &Self::Applied<A>, formatter: &mut Formatter<'_>)
    -> fmt::Result;
}

/// Adapter that renders an applied value through its brand's [`Debug1`].
///
/// Useful inside `Debug` implementations of types that hold `F::Applied<_>`
/// fields for a generic brand `F`.
pub struct DebugApplied<'a, F: Debug1, A: Debug>(pub &'a F::Applied<A>);

impl<F: Debug1, A: Debug> Debug for DebugApplied<'_, F, A> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        F::fmt_applied::<A>(self.0, formatter)
    }
}

impl Clone1 for OptionKind {
    #[inline]
    fn clone_applied<A: Clone>(value: &Option<A>) -> Option<A> {
        value.clone()
    }
}

impl Eq1 for OptionKind {
    #[inline]
    fn eq_applied<A: PartialEq>(left: &Option<A>, right: &Option<A>) -> bool {
        left == right
    }
}

impl Debug1 for OptionKind {
    fn fmt_applied<A: Debug>(value: &Option<A>, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(value, formatter)
    }
}

impl<E: Clone + 'static> Clone1 for ResultKind<E> {
    #[inline]
    fn clone_applied<A: Clone>(value: &Result<A, E>) -> Result<A, E> {
        value.clone()
    }
}

impl<E: PartialEq + 'static> Eq1 for ResultKind<E> {
    #[inline]
    fn eq_applied<A: PartialEq>(left: &Result<A, E>, right: &Result<A, E>) -> bool {
        left == right
    }
}

impl<E: Debug + 'static> Debug1 for ResultKind<E> {
    fn fmt_applied<A: Debug>(value: &Result<A, E>, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(value, formatter)
    }
}

impl Clone1 for VecKind {
    #[inline]
    fn clone_applied<A: Clone>(value: &Vec<A>) -> Vec<A> {
        value.clone()
    }
}

impl Eq1 for VecKind {
    #[inline]
    fn eq_applied<A: PartialEq>(left: &Vec<A>, right: &Vec<A>) -> bool {
        left == right
    }
}

impl Debug1 for VecKind {
    fn fmt_applied<A: Debug>(value: &Vec<A>, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(value, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Type-level tests (compile-time verification)
    // =========================================================================

    #[rstest]
    fn test_option_kind_applies_to_option() {
        let value: <OptionKind as TypeConstructor>::Applied<i32> = Some(42);
        assert_eq!(value, Some(42));
    }

    #[rstest]
    fn test_result_kind_preserves_error_type() {
        fn assert_applied<E: 'static, A>()
        where
            ResultKind<E>: TypeConstructor<Applied<A> = Result<A, E>>,
        {
        }

        assert_applied::<String, i32>();
        assert_applied::<std::io::Error, Vec<u8>>();
    }

    #[rstest]
    fn test_vec_kind_reapplies_to_new_argument() {
        fn transform<F: TypeConstructor>() -> F::Applied<char>
        where
            F::Applied<char>: Default,
        {
            Default::default()
        }

        let result: Vec<char> = transform::<VecKind>();
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_chained_applications_stay_in_brand() {
        type Nested =
            <VecKind as TypeConstructor>::Applied<<OptionKind as TypeConstructor>::Applied<bool>>;

        let nested: Nested = vec![Some(true), None];
        assert_eq!(nested.len(), 2);
    }

    // =========================================================================
    // Lifted capability tests
    // =========================================================================

    #[rstest]
    #[case(vec![], vec![], true)]
    #[case(vec![1, 2], vec![1, 2], true)]
    #[case(vec![1, 2], vec![2, 1], false)]
    fn test_vec_kind_eq_applied(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(VecKind::eq_applied(&left, &right), expected);
    }

    #[rstest]
    fn test_option_kind_clone_applied() {
        let original = Some(String::from("kept"));
        let cloned = OptionKind::clone_applied(&original);
        assert_eq!(cloned, original);
    }

    #[rstest]
    fn test_result_kind_clone_applied_keeps_error() {
        let original: Result<i32, String> = Err("boom".to_string());
        assert_eq!(ResultKind::<String>::clone_applied(&original), original);
    }

    #[rstest]
    fn test_debug_applied_uses_brand_rendering() {
        let value = vec![1, 2, 3];
        let rendered = format!("{:?}", DebugApplied::<VecKind, i32>(&value));
        assert_eq!(rendered, "[1, 2, 3]");
    }

    #[rstest]
    fn test_result_kind_debug_is_brand_name() {
        let kind = ResultKind::<String>::default();
        assert_eq!(format!("{kind:?}"), "ResultKind");
    }
}
