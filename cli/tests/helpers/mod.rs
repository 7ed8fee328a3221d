//! Shared test utilities.
//!
//! - `cli_runner`: `CliRunner` drives the compiled `lotto` binary when
//!   available and falls back to calling the library entry point in-process,
//!   capturing stdout, stderr, and the exit code.
//! - `temp_files`: `TempFileManager` creates collision-free paths under
//!   `target/` and removes them on drop.

pub mod cli_runner;
pub mod temp_files;
