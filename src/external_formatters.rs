//! Running an external formatter process.
//!
//! The buffer is piped to the formatter's stdin from a helper thread while the
//! calling thread drains stdout and stderr, so neither side can block on a full
//! pipe. There is no timeout: a formatter that never exits blocks the caller.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;
use std::process::{ChildStdin, Command, Stdio};
use std::thread;

pub use crate::error::FormatError;
use crate::utils::expand_vars;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

fn write_input(stdin: Option<ChildStdin>, input: &str) -> io::Result<()> {
    if let Some(mut stdin) = stdin {
        stdin.write_all(input.as_bytes())?;
        // Dropping stdin closes it and signals EOF
    }
    Ok(())
}

/// Run `command` in `working_directory`, feeding `input` on stdin.
///
/// # Arguments
/// * `command` - Executable followed by its arguments
/// * `working_directory` - Directory the formatter runs in
/// * `input` - Text written to the formatter's stdin
/// * `extra_env` - Variables layered over the inherited environment; values
///   are expanded with `$VAR` / `${VAR}` first
///
/// # Returns
/// * `Ok(Some(String))` - Formatted text
/// * `Ok(None)` - The formatter succeeded but printed nothing; there is nothing to replace
/// * `Err(FormatError)` - Spawn failure, I/O failure or non-zero exit
pub fn execute(
    command: &[String],
    working_directory: &Path,
    input: &str,
    extra_env: &HashMap<String, String>,
) -> Result<Option<String>, FormatError> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| FormatError::SpawnFailed("empty command".to_string()))?;

    log::debug!(
        "Invoking formatter in {}: {}",
        working_directory.display(),
        command.join(" ")
    );

    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(working_directory)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    for (key, value) in extra_env {
        cmd.env(key, &*expand_vars(value));
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }

    let mut child = cmd.spawn().map_err(|e| {
        log::error!("Failed to spawn formatter '{}': {}", program, e);
        FormatError::SpawnFailed(format!("{}: {}", program, e))
    })?;

    let stdin = child.stdin.take();
    let (output, written) = thread::scope(|s| {
        let writer = s.spawn(move || write_input(stdin, input));
        let output = child.wait_with_output();
        let written = writer
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
        (output, written)
    });
    let output = output?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        log::warn!("Formatter '{}' exited with code {}", program, code);

        return Err(if !output.stderr.is_empty() {
            FormatError::NonZeroExit {
                code,
                message: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
        } else if !output.stdout.is_empty() {
            FormatError::NonZeroExit {
                code,
                message: String::from_utf8_lossy(&output.stdout).into_owned(),
            }
        } else {
            FormatError::UnknownFailure { code }
        });
    }

    // A formatter may exit without reading all of its input
    if let Err(e) = written
        && e.kind() != io::ErrorKind::BrokenPipe
    {
        return Err(FormatError::IoError(e));
    }

    if output.stdout.is_empty() {
        log::debug!("Formatter '{}' produced no output", program);
        return Ok(None);
    }

    let formatted = String::from_utf8_lossy(&output.stdout).into_owned();
    log::debug!(
        "Formatter '{}' succeeded ({} bytes -> {} bytes)",
        program,
        input.len(),
        formatted.len()
    );
    Ok(Some(formatted))
}
