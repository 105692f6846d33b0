//! # System Interaction Layer
//!
//! Everything that touches the operating system's process facilities lives here.
//!
//! ## Modules
//!
//! - **`executor`**: Spawns an executable directly, captures both output streams and
//!   normalizes the way it ended into an `ExecutionResult`.
//! - **`shell`**: Joins command fragments into one line and hands it to a command
//!   interpreter (`/bin/sh -c` or `cmd.exe /C` by default) through the executor.

pub mod executor;
pub mod shell;
