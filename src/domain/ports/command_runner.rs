//! CommandRunner port - runs the external compiler and bindgen tools

use std::fmt;
use std::path::PathBuf;

use crate::error::SoupResult;

/// A fully specified external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path (`cargo`, `wasm-bindgen`)
    pub program: String,
    pub args: Vec<String>,
    /// Working directory the program runs in
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Runs an invocation to completion
///
/// Returns `Ok(())` only if the program exited successfully; a non-zero
/// exit is `SoupError::ToolFailed`, a spawn failure `SoupError::ToolUnavailable`.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> SoupResult<()>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, invocation: &Invocation) -> SoupResult<()> {
        (**self).run(invocation)
    }
}
