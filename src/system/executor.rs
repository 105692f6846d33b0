// EN: src/system/executor.rs

//! Direct invocation of executables and normalization of their outcome.
//!
//! Every path through [`invoke`] ends in [`normalize`], which turns what the
//! operating system reported into an [`ExecutionResult`]:
//!
//! - A process that exits on its own keeps its exit code and its stderr as-is,
//!   even when it failed silently.
//! - A process killed by a signal reports `-1`.
//! - A process that could not be started reports the sentinel `1`.
//!
//! In the last two cases an empty stderr is replaced with a description of
//! the failure, so a caller always has something to show for the failure.

use crate::constants::SENTINEL_EXIT_CODE;
use crate::models::ExecutionResult;
use std::io::ErrorKind;
use std::process::{Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

/// Why a child process could not run to a normal exit.
#[derive(Error, Debug)]
pub(crate) enum LaunchError {
    /// Nothing named `program` was found on `PATH` or at the given path.
    #[error("executable '{program}' not found")]
    NotFound { program: String },
    /// `program` exists but may not be executed.
    #[error("permission denied while launching '{program}'")]
    PermissionDenied { program: String },
    /// Any other spawn failure.
    #[error("command '{program}' could not be executed: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The child was killed by `signal`.
    #[error("command '{program}' was terminated by signal {signal}")]
    Signaled { program: String, signal: i32 },
    /// The child ended with neither an exit code nor a signal.
    #[error("command '{program}' terminated without an exit status")]
    Terminated { program: String },
}

impl LaunchError {
    fn from_io(program: &str, source: std::io::Error) -> Self {
        let program = program.to_string();
        match source.kind() {
            ErrorKind::NotFound => Self::NotFound { program },
            ErrorKind::PermissionDenied => Self::PermissionDenied { program },
            _ => Self::Spawn { program, source },
        }
    }
}

/// What the platform reported about a child once it was done (or never started).
#[derive(Debug)]
pub(crate) enum Outcome {
    /// The process chose its own exit code.
    Exited(i32),
    /// The process was killed or could not be launched. `status` is the
    /// platform's code for the condition, if it has one.
    Abnormal {
        status: Option<i32>,
        error: LaunchError,
    },
}

impl Outcome {
    fn from_status(program: &str, status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited(code);
        }

        #[cfg(unix)]
        {
            use crate::constants::SIGNALED_EXIT_CODE;
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Abnormal {
                    status: Some(SIGNALED_EXIT_CODE),
                    error: LaunchError::Signaled {
                        program: program.to_string(),
                        signal,
                    },
                };
            }
        }

        Self::Abnormal {
            status: None,
            error: LaunchError::Terminated {
                program: program.to_string(),
            },
        }
    }
}

/// Builds the result for a finished invocation. Pure: no I/O happens here.
pub(crate) fn normalize(outcome: Outcome, stdout: &[u8], stderr: &[u8]) -> ExecutionResult {
    let stdout = String::from_utf8_lossy(stdout).into_owned();
    let mut stderr = String::from_utf8_lossy(stderr).into_owned();

    let exit_code = match outcome {
        Outcome::Exited(code) => code,
        Outcome::Abnormal { status, error } => {
            let code = status.unwrap_or(SENTINEL_EXIT_CODE);
            if stderr.is_empty() && code != 0 {
                stderr = error.to_string();
            }
            code
        }
    };

    ExecutionResult {
        stdout,
        stderr,
        exit_code,
    }
}

/// Runs `program` with `args` and waits for it to finish, capturing both output streams.
///
/// `program` is looked up through `PATH` unless it contains a path separator.
/// Each element of `args` reaches the child as exactly one argument; nothing is
/// split, quoted or globbed. The child's stdin is connected to the null device.
///
/// This never fails: launch errors and abnormal terminations are reported
/// through the returned [`ExecutionResult`].
pub fn invoke<I, S>(program: &str, args: I) -> ExecutionResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Launching: {}", display_command_line(program, &args));
    }

    // `output()` owns the pipes and reaps the child on every path, including errors.
    let output = StdCommand::new(program)
        .args(args.iter().map(AsRef::<str>::as_ref))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    let result = match output {
        Ok(output) => {
            let outcome = Outcome::from_status(program, output.status);
            if let Outcome::Abnormal { error, .. } = &outcome {
                log::debug!("{}", error);
            }
            normalize(outcome, &output.stdout, &output.stderr)
        }
        Err(e) => {
            let error = LaunchError::from_io(program, e);
            log::debug!("{}", error);
            normalize(
                Outcome::Abnormal {
                    status: None,
                    error,
                },
                &[],
                &[],
            )
        }
    };

    log::trace!(
        "'{}' finished with exit code {} ({} bytes stdout, {} bytes stderr)",
        program,
        result.exit_code,
        result.stdout.len(),
        result.stderr.len()
    );
    result
}

/// Shell-quoted rendering of an argv, for log lines only.
fn display_command_line<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    let words = std::iter::once(program).chain(args.iter().map(AsRef::<str>::as_ref));
    // Quoting only fails on interior NUL bytes, which could never be spawned anyway.
    shlex::try_join(words.clone()).unwrap_or_else(|_| words.collect::<Vec<_>>().join(" "))
}
