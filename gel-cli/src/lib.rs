//! Support code for the `gel` binary: element table generation and demo trees.

pub mod codegen;
pub mod demos;
