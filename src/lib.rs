//! Run external executables and shell commands, capturing their standard output,
//! standard error and exit code into a single [`ExecutionResult`].
//!
//! ```no_run
//! let result = subexec::invoke("git", ["--help"]);
//! if result.success() {
//!     println!("{}", result.stdout);
//! } else {
//!     eprintln!("exit {}: {}", result.exit_code, result.stderr);
//! }
//!
//! // `/bin/sh -c "ls -l"` on Unix, `cmd.exe /C "ls -l"` on Windows.
//! let listing = subexec::invoke_via_shell("", "", ["ls", "-l"]);
//! # let _ = listing;
//! ```
//!
//! Calls block until the child exits. They never return an error: a program that
//! could not be started shows up as a nonzero `exit_code` with a diagnostic in `stderr`.

pub mod constants;
pub mod models;
pub mod system;

pub use models::{ExecutionResult, ShellConfig};
pub use system::executor::invoke;
pub use system::shell::{invoke_via_shell, invoke_with_shell};

/// Runs an executable with a variadic argument list.
///
/// `invoke!("git", "--help")` is `invoke("git", ["--help"])`; any argument that
/// implements `Display` is accepted.
#[macro_export]
macro_rules! invoke {
    ($program:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::ToString::to_string(&$arg)),*];
        $crate::invoke($program, args)
    }};
}

/// Runs command fragments through the platform's default shell.
///
/// `invoke_shell!("ls", "-l")` is `invoke_via_shell("", "", ["ls", "-l"])`.
#[macro_export]
macro_rules! invoke_shell {
    ($($part:expr),* $(,)?) => {{
        let parts: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::ToString::to_string(&$part)),*];
        $crate::invoke_via_shell("", "", parts)
    }};
}
