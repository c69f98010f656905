//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for Specscout.

mod repl;

pub use repl::ChatRepl;
