// EN: src/system/shell.rs

use crate::{
    constants::COMMAND_PART_SEPARATOR,
    models::{ExecutionResult, ShellConfig},
    system::executor,
};

/// Runs `command_parts` through a command interpreter and captures the result.
///
/// An empty `shell_path` or `shell_flag` falls back to the platform default
/// (`/bin/sh -c`, or `cmd.exe /C` on Windows). The parts are joined with single
/// spaces, so `["ls", "-l"]` and `["ls -l"]` run the same command line. That line
/// is parsed by the interpreter itself; quoting and metacharacters follow its rules.
pub fn invoke_via_shell<I, S>(
    shell_path: &str,
    shell_flag: &str,
    command_parts: I,
) -> ExecutionResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    invoke_with_shell(&ShellConfig::resolve(shell_path, shell_flag), command_parts)
}

/// Same as [`invoke_via_shell`], with the interpreter already resolved.
pub fn invoke_with_shell<I, S>(shell: &ShellConfig, command_parts: I) -> ExecutionResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let command_line = join_command_parts(command_parts);
    log::debug!(
        "Running through shell '{}' ({}): {}",
        shell.path,
        shell.flag,
        command_line
    );
    executor::invoke(&shell.path, [shell.flag.as_str(), command_line.as_str()])
}

fn join_command_parts<I, S>(command_parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    command_parts
        .into_iter()
        .map(|part| part.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(COMMAND_PART_SEPARATOR)
}
