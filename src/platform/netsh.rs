//! Synchronous `netsh` invocation.

use std::process::{Command, Output};

use thiserror::Error;

/// Program invoked by [`NetshRunner`].
const NETSH: &str = "netsh";

/// `CREATE_NO_WINDOW` process creation flag.
/// Value from Windows SDK `WinBase.h`.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Error type for a single `netsh` invocation.
#[derive(Debug, Error)]
pub enum NetshError {
    /// The process could not be started.
    #[error("Failed to execute netsh {command}: {source}")]
    Spawn {
        /// Arguments that were passed
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The process ran but reported failure.
    #[error("netsh {command} failed (exit code {}): {output}", exit_code_label(*code))]
    Failed {
        /// Arguments that were passed
        command: String,
        /// Exit code, if the process exited normally
        code: Option<i32>,
        /// Trimmed output explaining the failure
        output: String,
    },
}

fn exit_code_label(code: Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Trait for running a `netsh` command line and capturing its output.
///
/// # Design
///
/// - Calls block until the command exits; there is no timeout
/// - Enables dependency injection so probe and applier command lines can be
///   tested without touching the system
pub trait CommandRunner: Send + Sync {
    /// Runs `netsh` with the given argument tokens and returns its stdout.
    ///
    /// Tokens are passed through verbatim, so quoting (e.g. `name="Wi-Fi 2"`)
    /// is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`NetshError`] if the process cannot be started or exits
    /// with a non-zero status.
    fn run(&self, args: &[String]) -> Result<String, NetshError>;
}

/// Runs the real `netsh` executable.
#[derive(Debug, Clone, Default)]
pub struct NetshRunner {
    // Currently no configuration needed, but struct allows future extension
    _private: (),
}

impl NetshRunner {
    /// Creates a new runner.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl CommandRunner for NetshRunner {
    fn run(&self, args: &[String]) -> Result<String, NetshError> {
        let mut command = Command::new(NETSH);
        push_args(&mut command, args);

        let output = command.output().map_err(|source| NetshError::Spawn {
            command: args.join(" "),
            source,
        })?;

        interpret_output(args, &output)
    }
}

/// Converts captured process output into the runner's result.
fn interpret_output(args: &[String], output: &Output) -> Result<String, NetshError> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if output.status.success() {
        return Ok(stdout);
    }

    // netsh reports most errors on stdout
    let message = if stdout.trim().is_empty() {
        String::from_utf8_lossy(&output.stderr).trim().to_string()
    } else {
        stdout.trim().to_string()
    };

    Err(NetshError::Failed {
        command: args.join(" "),
        code: output.status.code(),
        output: message,
    })
}

#[cfg(windows)]
fn push_args(command: &mut Command, args: &[String]) {
    use std::os::windows::process::CommandExt;

    command.creation_flags(CREATE_NO_WINDOW);
    for arg in args {
        command.raw_arg(arg);
    }
}

#[cfg(not(windows))]
fn push_args(command: &mut Command, args: &[String]) {
    command.args(args);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[cfg(unix)]
    fn output(code: i32, stdout: &str, stderr: &str) -> Output {
        use std::os::unix::process::ExitStatusExt;

        Output {
            status: std::process::ExitStatus::from_raw(code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[cfg(windows)]
    fn output(code: i32, stdout: &str, stderr: &str) -> Output {
        use std::os::windows::process::ExitStatusExt;

        #[allow(clippy::cast_sign_loss)]
        let raw = code as u32;
        Output {
            status: std::process::ExitStatus::from_raw(raw),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn success_returns_stdout() {
        let result = interpret_output(
            &args(&["wlan", "show", "interfaces"]),
            &output(0, "Name : Wi-Fi\n", ""),
        );

        assert_eq!(result.unwrap(), "Name : Wi-Fi\n");
    }

    #[test]
    fn failure_prefers_stdout_message() {
        let error = interpret_output(
            &args(&["interface", "ipv4", "set", "dns"]),
            &output(1, "  The requested operation requires elevation.\r\n", "ignored"),
        )
        .unwrap_err();

        match error {
            NetshError::Failed { command, code, output } => {
                assert_eq!(command, "interface ipv4 set dns");
                assert_eq!(code, Some(1));
                assert_eq!(output, "The requested operation requires elevation.");
            }
            NetshError::Spawn { .. } => panic!("expected Failed"),
        }
    }

    #[test]
    fn failure_falls_back_to_stderr() {
        let error = interpret_output(&args(&["wlan"]), &output(1, "   ", "service not running\n"))
            .unwrap_err();

        assert!(error.to_string().contains("service not running"));
        assert!(error.to_string().contains("exit code 1"));
    }

    #[test]
    fn spawn_error_displays_command() {
        let error = NetshError::Spawn {
            command: "wlan show interfaces".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
        };

        assert_eq!(
            error.to_string(),
            "Failed to execute netsh wlan show interfaces: program not found"
        );
    }

    #[test]
    fn runner_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NetshRunner>();
    }
}
