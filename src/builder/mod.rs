//! Builder API for ergonomic table and machine construction.
//!
//! This module provides fluent builders and macros for declaring transition
//! tables and the machines that run them, with validation at build time.

pub mod error;
pub mod machine;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use table::TableBuilder;
