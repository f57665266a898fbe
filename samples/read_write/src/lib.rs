//! # Read/Write Sample Application
//!
//! A tiny effect language with two operations, built on the liftfree free
//! monad.
//!
//! ## Overview
//!
//! Programs are described with `read` (obtain a number) and `write`
//! (emit a number). The same description can then be run by several
//! interpreters:
//!
//! - [`interpreter::Simulate`]: a pure simulation where `read` returns the
//!   most recently written value
//! - [`interpreter::Execute`]: an execution against a fixed input and a
//!   bounded output buffer that can fail
//! - [`interpreter::Console`]: an execution that reports every effect
//!   through `tracing`
//! - [`interpreter::replay`]: an iterative simulation for programs of any
//!   length
//!
//! ## Module Structure
//!
//! - `language`: The effect functor and the lifted operations
//! - `programs`: Example programs
//! - `interpreter`: Interpreters
//! - `error`: Execution failures

#![forbid(unsafe_code)]

pub mod error;
pub mod interpreter;
pub mod language;
pub mod programs;

pub use error::ProgramError;
pub use language::{Program, ReadWrite, ReadWriteKind, read, write};
