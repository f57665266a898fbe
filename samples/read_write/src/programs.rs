//! Example programs in the Read/Write language

use liftfree::control::Free;

use crate::language::{Program, ReadWrite, read, write};

/// Writes `value`, then reads a number back.
///
/// Built layer by layer from `make_bind` / `make_return` rather than the
/// lifted operations, to show the raw shape of a program.
pub fn write_then_read(value: i32) -> Program<i32> {
    Free::make_bind(ReadWrite::write(value, |()| {
        Free::make_bind(ReadWrite::read(Free::make_return))
    }))
}

/// Reads a number and writes it back.
pub fn echo() -> Program<()> {
    read().bind(write)
}

/// Reads a number, writes its double, and yields what a second read returns.
pub fn double_and_read() -> Program<i32> {
    read().bind(|x| write(x * 2)).then(read())
}

/// Writes every value in order, then yields what a read returns.
///
/// The chain is built from the back so every `then` is right-associated and
/// the program stays cheap to build and run at any length.
pub fn write_all(values: &[i32]) -> Program<i32> {
    values
        .iter()
        .rev()
        .fold(read(), |rest, &value| write(value).then(rest))
}

/// Reads `count` numbers and yields their sum.
pub fn sum_reads(count: usize) -> Program<i32> {
    fn go(remaining: usize, total: i32) -> Program<i32> {
        if remaining == 0 {
            Free::pure(total)
        } else {
            read().bind(move |x| go(remaining - 1, total + x))
        }
    }

    go(count, 0)
}
