//! Installer invocations.
//!
//! pip is always driven through the environment's interpreter as
//! `python -m pip`, never through a bare `pip` executable, so the commands
//! land in the isolated environment regardless of what PATH says. Both
//! operations are strict: a non-zero exit aborts the bootstrap.

use crate::error::{Result, SetupError};
use crate::process::{self, OutputCallback};
use std::path::Path;

/// pip driver bound to one interpreter.
#[derive(Debug)]
pub struct PipClient<'a> {
    interpreter: &'a Path,
}

const UPGRADE_ARGS: &[&str] = &["-m", "pip", "install", "--upgrade", "pip"];

impl<'a> PipClient<'a> {
    pub fn new(interpreter: &'a Path) -> Self {
        Self { interpreter }
    }

    /// The self-upgrade command, rendered for previews and diagnostics.
    pub fn upgrade_display(&self) -> String {
        process::display_command(self.interpreter, UPGRADE_ARGS)
    }

    /// The batch install command, rendered for previews and diagnostics.
    pub fn install_display(&self, requirements: &[String]) -> String {
        let args = install_args(requirements);
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        process::display_command(self.interpreter, &refs)
    }

    /// Upgrade pip itself. Re-running against a current pip is a no-op
    /// upgrade as far as the installer is concerned.
    pub fn upgrade_self(&self, callback: OutputCallback) -> Result<()> {
        self.run(UPGRADE_ARGS, callback)
    }

    /// Install all declared requirements in one batch invocation.
    pub fn install(&self, requirements: &[String], callback: OutputCallback) -> Result<()> {
        let args = install_args(requirements);
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(&refs, callback)
    }

    fn run(&self, args: &[&str], callback: OutputCallback) -> Result<()> {
        tracing::debug!("running {}", process::display_command(self.interpreter, args));
        let result = process::run_streaming(self.interpreter, args, callback)?;
        if result.success {
            Ok(())
        } else {
            Err(SetupError::CommandFailed {
                command: process::display_command(self.interpreter, args),
                code: result.exit_code,
            })
        }
    }
}

fn install_args(requirements: &[String]) -> Vec<String> {
    let mut args = vec!["-m".to_string(), "pip".to_string(), "install".to_string()];
    args.extend(requirements.iter().cloned());
    args
}
