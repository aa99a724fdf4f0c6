//! Interactive chat module
//!
//! Provides a readline-based interface: pick a country, see its facts, then
//! ask follow-up questions about it.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::ChatRepl;
