//! Interpreters for the Read/Write language
//!
//! Every interpreter gives the same program description a different
//! meaning. None of them changes the program itself.

use std::cell::RefCell;
use std::rc::Rc;

use liftfree::control::Handler;
use liftfree::effect::{State, StateKind};
use liftfree::typeclass::{Identity, IdentityKind, ResultKind};

use crate::error::ProgramError;
use crate::language::{Program, ReadWrite, ReadWriteKind};

/// Value a read yields before anything has been written.
pub const EMPTY_READ: i32 = 0;

// =============================================================================
// Simulate
// =============================================================================

/// Simulates a program against an in-memory log of written values.
///
/// `Write(x)` appends `x` to the log. `Read` yields the most recently
/// written value, or [`EMPTY_READ`] if nothing has been written yet.
///
/// # Examples
///
/// ```
/// use liftfree::effect::StateKind;
/// use read_write_sample::interpreter::Simulate;
/// use read_write_sample::programs::write_then_read;
///
/// let (value, log) = write_then_read(5)
///     .fold_free::<StateKind<Vec<i32>>, _>(Simulate)
///     .run(Vec::new());
///
/// assert_eq!(value, 5);
/// assert_eq!(log, vec![5]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulate;

impl Handler<ReadWriteKind, StateKind<Vec<i32>>> for Simulate {
    fn handle<X: 'static>(&self, layer: ReadWrite<X>) -> State<Vec<i32>, X> {
        match layer {
            ReadWrite::Read { next } => State::gets(move |log: &Vec<i32>| {
                next(log.last().copied().unwrap_or(EMPTY_READ))
            }),
            ReadWrite::Write { value, next } => State::modify(move |mut log: Vec<i32>| {
                log.push(value);
                log
            })
            .fmap(move |()| next(())),
        }
    }
}

/// Runs `program` with [`Simulate`] from an empty log.
pub fn simulate<A: 'static>(program: Program<A>) -> (A, Vec<i32>) {
    program
        .fold_free::<StateKind<Vec<i32>>, _>(Simulate)
        .run(Vec::new())
}

// =============================================================================
// Execute
// =============================================================================

/// Executes a program against a fixed input and a bounded output buffer.
///
/// Every read yields `input`. A write of a negative number, or a write when
/// the buffer already holds `capacity` values, fails; the failure stops the
/// program and no later operation runs.
///
/// Clones share the same output buffer, so keep a clone to inspect what was
/// written after the run.
#[derive(Debug, Clone)]
pub struct Execute {
    input: i32,
    capacity: usize,
    output: Rc<RefCell<Vec<i32>>>,
}

impl Execute {
    /// Creates an executor reading `input` and holding at most `capacity`
    /// written values.
    #[must_use]
    pub fn new(input: i32, capacity: usize) -> Self {
        Self {
            input,
            capacity,
            output: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Returns the values written so far.
    pub fn written(&self) -> Vec<i32> {
        self.output.borrow().clone()
    }

    /// Runs `program`, stopping at the first failing write.
    ///
    /// # Errors
    ///
    /// Returns the [`ProgramError`] of the first write that fails.
    pub fn execute<A: 'static>(&self, program: Program<A>) -> Result<A, ProgramError> {
        program.fold_free::<ResultKind<ProgramError>, _>(self.clone())
    }
}

impl Handler<ReadWriteKind, ResultKind<ProgramError>> for Execute {
    fn handle<X: 'static>(&self, layer: ReadWrite<X>) -> Result<X, ProgramError> {
        match layer {
            ReadWrite::Read { next } => Ok(next(self.input)),
            ReadWrite::Write { value, next } => {
                if value < 0 {
                    tracing::warn!(value, "rejected negative write");
                    return Err(ProgramError::NegativeWrite(value));
                }
                let mut output = self.output.borrow_mut();
                if output.len() >= self.capacity {
                    tracing::warn!(capacity = self.capacity, "output buffer is full");
                    return Err(ProgramError::OutputFull {
                        capacity: self.capacity,
                    });
                }
                output.push(value);
                drop(output);
                Ok(next(()))
            }
        }
    }
}

// =============================================================================
// Console
// =============================================================================

/// Runs a program and reports every operation through `tracing`.
///
/// Reads yield `input`.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    /// Value every read yields
    pub input: i32,
}

impl Handler<ReadWriteKind, IdentityKind> for Console {
    fn handle<X: 'static>(&self, layer: ReadWrite<X>) -> Identity<X> {
        match layer {
            ReadWrite::Read { next } => {
                tracing::info!(value = self.input, "read");
                Identity(next(self.input))
            }
            ReadWrite::Write { value, next } => {
                tracing::info!(value, "write");
                Identity(next(()))
            }
        }
    }
}

// =============================================================================
// Replay
// =============================================================================

/// Simulates `program` like [`Simulate`], one operation at a time in a loop.
///
/// The loop uses constant stack space, so it handles programs of any length
/// as long as their `then` / `bind` chains are right-associated, like the ones
/// in [`programs`](crate::programs).
pub fn replay<A>(program: Program<A>) -> (A, Vec<i32>) {
    let mut log = Vec::new();
    let result = program.run(|layer| match layer {
        ReadWrite::Read { next } => next(log.last().copied().unwrap_or(EMPTY_READ)),
        ReadWrite::Write { value, next } => {
            log.push(value);
            next(())
        }
    });
    (result, log)
}
