//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! result to the given writer; logs go to stderr.

pub mod check;
pub mod demo;
pub mod summary;
pub mod views;
