//! picol - a small Tcl-style command interpreter
//!
//! This crate provides a tokenizer, evaluator, and built-in command set for
//! a string-based scripting language in the Tcl tradition. Process spawn and
//! file I/O are delegated to a [`host::HostServices`] implementation supplied
//! by the embedder; this crate never touches the real OS on its own.

pub mod host;
pub mod interp;
pub mod list;
pub mod parser;

pub use interp::status::Status;
pub use interp::{ExecutionLimits, Interp};
