// src/models.rs

use serde::{Deserialize, Serialize};

use crate::constants::{POSIX_SHELL, POSIX_SHELL_FLAG, WINDOWS_SHELL, WINDOWS_SHELL_FLAG};

/// Everything a finished (or failed) invocation produced.
///
/// One value is created per call and is fully populated before the call returns.
/// A nonzero `exit_code` from a process that could not run normally always comes
/// with a non-empty `stderr`; see [`crate::system::executor`] for the exact rules.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Everything the child wrote to standard output, decoded lossily as UTF-8.
    pub stdout: String,
    /// Everything the child wrote to standard error, or a launch diagnostic.
    pub stderr: String,
    /// The child's exit status, `-1` for signalled processes, or `1`
    /// when no status could be obtained.
    pub exit_code: i32,
}

impl ExecutionResult {
    /// Returns `true` when the process exited with status `0`.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// The command interpreter used by shell invocations.
///
/// Missing fields deserialize to the current platform's defaults, so this can
/// be embedded as-is in a caller's own configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Path or name of the interpreter, resolved through `PATH`.
    #[serde(default = "default_shell_path")]
    pub path: String,
    /// Flag telling the interpreter to run the next argument as a command.
    #[serde(default = "default_shell_flag")]
    pub flag: String,
}

impl ShellConfig {
    /// `/bin/sh -c` everywhere except Windows, where it is `cmd.exe /C`.
    pub fn platform_default() -> Self {
        Self {
            path: default_shell_path(),
            flag: default_shell_flag(),
        }
    }

    /// Builds a config from possibly-empty overrides, falling back to the
    /// platform default for each empty field independently.
    pub fn resolve(path: &str, flag: &str) -> Self {
        Self {
            path: if path.is_empty() {
                default_shell_path()
            } else {
                path.to_string()
            },
            flag: if flag.is_empty() {
                default_shell_flag()
            } else {
                flag.to_string()
            },
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::platform_default()
    }
}

fn default_shell_path() -> String {
    if cfg!(target_os = "windows") {
        WINDOWS_SHELL.to_string()
    } else {
        POSIX_SHELL.to_string()
    }
}

fn default_shell_flag() -> String {
    if cfg!(target_os = "windows") {
        WINDOWS_SHELL_FLAG.to_string()
    } else {
        POSIX_SHELL_FLAG.to_string()
    }
}
