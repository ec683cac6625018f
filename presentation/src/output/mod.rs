//! Console output helpers for the non-interactive commands

pub mod console;
