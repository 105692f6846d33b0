// src/constants.rs

/// The command interpreter used on every non-Windows platform when none is given.
pub const POSIX_SHELL: &str = "/bin/sh";

/// The flag that makes a POSIX shell run the following string as a command.
pub const POSIX_SHELL_FLAG: &str = "-c";

/// The command interpreter used on Windows when none is given.
pub const WINDOWS_SHELL: &str = "cmd.exe";

/// The flag that makes `cmd.exe` run the following string as a command.
pub const WINDOWS_SHELL_FLAG: &str = "/C";

/// The exit code reported when the platform provides no status of its own
/// (e.g. the executable could not be started at all).
pub const SENTINEL_EXIT_CODE: i32 = 1;

/// The exit code reported for a process killed by a signal, which has no exit status of its own.
pub const SIGNALED_EXIT_CODE: i32 = -1;

/// Separator placed between command fragments before they reach the shell.
pub const COMMAND_PART_SEPARATOR: &str = " ";
