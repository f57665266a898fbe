//! The Read/Write effect functor
//!
//! ```text
//! ReadWrite<Next> = Read(i32 -> Next)
//!                 | Write(i32, () -> Next)
//! ```
//!
//! Each operation carries the continuation that receives its result. The
//! continuations are shared behind `Rc`, so cloning a program is cheap and
//! the same program can be handed to several interpreters.

use std::fmt;
use std::rc::Rc;

use liftfree::control::Free;
use liftfree::typeclass::{Clone1, Debug1, Functor, TypeConstructor};

/// One operation of the language, followed by `Next`.
pub enum ReadWrite<Next> {
    /// Obtain a number.
    Read {
        /// Continuation receiving the number read
        next: Rc<dyn Fn(i32) -> Next>,
    },
    /// Emit a number.
    Write {
        /// The number written
        value: i32,
        /// Continuation run after the write
        next: Rc<dyn Fn(()) -> Next>,
    },
}

impl<Next> ReadWrite<Next> {
    /// Creates a `Read` operation continuing with `next`.
    pub fn read<F>(next: F) -> Self
    where
        F: Fn(i32) -> Next + 'static,
    {
        Self::Read {
            next: Rc::new(next),
        }
    }

    /// Creates a `Write` of `value` continuing with `next`.
    pub fn write<F>(value: i32, next: F) -> Self
    where
        F: Fn(()) -> Next + 'static,
    {
        Self::Write {
            value,
            next: Rc::new(next),
        }
    }
}

impl<Next> Clone for ReadWrite<Next> {
    fn clone(&self) -> Self {
        match self {
            Self::Read { next } => Self::Read {
                next: Rc::clone(next),
            },
            Self::Write { value, next } => Self::Write {
                value: *value,
                next: Rc::clone(next),
            },
        }
    }
}

impl<Next> fmt::Debug for ReadWrite<Next> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { .. } => formatter.write_str("Read(<continuation>)"),
            Self::Write { value, .. } => write!(formatter, "Write({value}, <continuation>)"),
        }
    }
}

/// Brand for [`ReadWrite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReadWriteKind;

impl TypeConstructor for ReadWriteKind {
    type Applied<A> = ReadWrite<A>;
}

impl Functor for ReadWriteKind {
    fn fmap<A, B, F>(value: ReadWrite<A>, function: F) -> ReadWrite<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        match value {
            ReadWrite::Read { next } => ReadWrite::read(move |input| function(next(input))),
            ReadWrite::Write { value, next } => {
                ReadWrite::write(value, move |unit| function(next(unit)))
            }
        }
    }
}

impl Clone1 for ReadWriteKind {
    fn clone_applied<A: Clone>(value: &ReadWrite<A>) -> ReadWrite<A> {
        value.clone()
    }
}

impl Debug1 for ReadWriteKind {
    fn fmt_applied<A: fmt::Debug>(
        value: &ReadWrite<A>,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Debug::fmt(value, formatter)
    }
}

/// A program in the Read/Write language producing an `A`.
pub type Program<A> = Free<ReadWriteKind, A>;

/// A program that reads one number and yields it.
pub fn read() -> Program<i32> {
    Free::lift(ReadWrite::read(|input| input))
}

/// A program that writes `value`.
pub fn write(value: i32) -> Program<()> {
    Free::lift(ReadWrite::write(value, |()| ()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_fmap_composes_read_continuation() {
        let mapped = ReadWriteKind::fmap(ReadWrite::read(|x| x + 1), |x| x * 10);
        match mapped {
            ReadWrite::Read { next } => assert_eq!(next(4), 50),
            ReadWrite::Write { .. } => panic!("fmap must keep the operation"),
        }
    }

    #[rstest]
    fn test_fmap_keeps_written_value() {
        let mapped = ReadWriteKind::fmap(ReadWrite::write(7, |()| "done"), str::len);
        match mapped {
            ReadWrite::Write { value, next } => {
                assert_eq!(value, 7);
                assert_eq!(next(()), 4);
            }
            ReadWrite::Read { .. } => panic!("fmap must keep the operation"),
        }
    }

    #[rstest]
    fn test_debug_rendering() {
        assert_eq!(format!("{:?}", write(5)), "Bind(Write(5, <continuation>))");
        assert_eq!(format!("{:?}", read()), "Bind(Read(<continuation>))");
    }

    #[rstest]
    fn test_clone_shares_continuation() {
        let original = ReadWrite::read(|x| x * 2);
        let cloned = ReadWriteKind::clone_applied(&original);
        match (original, cloned) {
            (ReadWrite::Read { next: left }, ReadWrite::Read { next: right }) => {
                assert!(Rc::ptr_eq(&left, &right));
            }
            _ => panic!("clone must keep the operation"),
        }
    }
}
