//! Process-backed CommandRunner

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandRunner, Invocation};
use crate::error::{SoupError, SoupResult};

/// Runs invocations as child processes and waits for them
///
/// The child's stderr is inherited. Its stdout is inherited too, unless
/// `stdout_to_stderr` is set (NDJSON mode keeps stdout for events).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    stdout_to_stderr: bool,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the child's stdout to our stderr
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    /// Check if `program` can be started at all
    pub fn check_available(program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> SoupResult<()> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit());

        if self.stdout_to_stderr {
            cmd.stdout(std::io::stderr());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let status = cmd.status().map_err(|source| SoupError::ToolUnavailable {
            tool: invocation.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(SoupError::ToolFailed {
                tool: invocation.program.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
