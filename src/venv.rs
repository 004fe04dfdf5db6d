//! Per-project isolated environment.
//!
//! Packages are installed into a virtual environment owned by the project
//! directory, never into the global interpreter. Creation is idempotent: an
//! environment whose interpreter already exists is reused as-is.

use crate::error::{Result, SetupError};
use crate::platform::PlatformSpec;
use crate::process::{self, OutputCallback};
use std::path::{Path, PathBuf};

/// Directory name of the environment inside the project root.
pub const VENV_DIR: &str = ".venv";

/// A project virtual environment, existing or planned.
#[derive(Debug, Clone)]
pub struct VirtualEnv {
    root: PathBuf,
    interpreter: PathBuf,
}

impl VirtualEnv {
    /// Compute the environment layout for a project without touching disk.
    pub fn locate(project_root: &Path, spec: &PlatformSpec) -> Self {
        let root = project_root.join(VENV_DIR);
        let interpreter = root.join(spec.venv_interpreter);
        Self { root, interpreter }
    }

    /// Environment root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The environment's own interpreter; all installer invocations use this.
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Whether the environment is already usable.
    pub fn exists(&self) -> bool {
        self.interpreter.is_file()
    }

    /// Arguments for the creation command, relative to the base runtime.
    pub fn create_args(&self) -> Vec<String> {
        vec![
            "-m".to_string(),
            "venv".to_string(),
            self.root.display().to_string(),
        ]
    }
}

/// Outcome of [`ensure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created,
    Reused,
}

/// Make sure the project environment exists, creating it with the base
/// runtime when absent.
///
/// Re-running against an existing environment performs no command at all.
pub fn ensure(
    env: &VirtualEnv,
    runtime: &Path,
    callback: OutputCallback,
) -> Result<EnsureOutcome> {
    if env.exists() {
        tracing::debug!("reusing virtual environment at {}", env.root().display());
        return Ok(EnsureOutcome::Reused);
    }

    let args = env.create_args();
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    tracing::debug!("creating virtual environment at {}", env.root().display());

    let result = process::run_streaming(runtime, &arg_refs, callback)?;
    if !result.success {
        return Err(SetupError::CommandFailed {
            command: process::display_command(runtime, &arg_refs),
            code: result.exit_code,
        });
    }

    if !env.exists() {
        return Err(SetupError::VenvIncomplete {
            path: env.root().display().to_string(),
        });
    }

    Ok(EnsureOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformSpec;
    use std::fs;
    use tempfile::TempDir;

    fn posix_spec() -> PlatformSpec {
        PlatformSpec {
            runtime_candidates: &["python3", "python"],
            venv_interpreter: "bin/python",
            media_player: "vlc",
            gui_probe: true,
        }
    }

    fn null_callback() -> OutputCallback {
        Box::new(|_| {})
    }

    #[test]
    fn locate_puts_environment_inside_project() {
        let temp = TempDir::new().unwrap();
        let env = VirtualEnv::locate(temp.path(), &posix_spec());
        assert_eq!(env.root(), temp.path().join(".venv"));
        assert_eq!(env.interpreter(), temp.path().join(".venv/bin/python"));
    }

    #[test]
    fn create_args_target_the_venv_module() {
        let temp = TempDir::new().unwrap();
        let env = VirtualEnv::locate(temp.path(), &posix_spec());
        let args = env.create_args();
        assert_eq!(args[0], "-m");
        assert_eq!(args[1], "venv");
        assert!(args[2].ends_with(".venv"));
    }

    #[test]
    fn ensure_reuses_existing_environment_without_running_anything() {
        let temp = TempDir::new().unwrap();
        let env = VirtualEnv::locate(temp.path(), &posix_spec());
        fs::create_dir_all(env.interpreter().parent().unwrap()).unwrap();
        fs::write(env.interpreter(), "").unwrap();

        // A bogus runtime path proves no command is spawned on the reuse path.
        let outcome = ensure(&env, Path::new("/nonexistent/python"), null_callback()).unwrap();
        assert_eq!(outcome, EnsureOutcome::Reused);
    }

    #[cfg(unix)]
    #[test]
    fn ensure_creates_environment_with_the_runtime() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();

        // Fake runtime: `python -m venv <dir>` materializes an interpreter.
        let runtime = temp.path().join("python3");
        fs::write(
            &runtime,
            "#!/bin/sh\nmkdir -p \"$3/bin\"\ntouch \"$3/bin/python\"\n",
        )
        .unwrap();
        fs::set_permissions(&runtime, fs::Permissions::from_mode(0o755)).unwrap();

        let project = temp.path().join("proj");
        fs::create_dir_all(&project).unwrap();
        let env = VirtualEnv::locate(&project, &posix_spec());

        let outcome = ensure(&env, &runtime, null_callback()).unwrap();
        assert_eq!(outcome, EnsureOutcome::Created);
        assert!(env.exists());
    }

    #[cfg(unix)]
    #[test]
    fn ensure_propagates_creation_failure() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let runtime = temp.path().join("python3");
        fs::write(&runtime, "#!/bin/sh\nexit 4\n").unwrap();
        fs::set_permissions(&runtime, fs::Permissions::from_mode(0o755)).unwrap();

        let env = VirtualEnv::locate(temp.path(), &posix_spec());
        let err = ensure(&env, &runtime, null_callback()).unwrap_err();
        assert!(matches!(
            err,
            SetupError::CommandFailed { code: Some(4), .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn ensure_flags_environment_without_interpreter() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        // Exits zero but creates nothing.
        let runtime = temp.path().join("python3");
        fs::write(&runtime, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&runtime, fs::Permissions::from_mode(0o755)).unwrap();

        let env = VirtualEnv::locate(temp.path(), &posix_spec());
        let err = ensure(&env, &runtime, null_callback()).unwrap_err();
        assert!(matches!(err, SetupError::VenvIncomplete { .. }));
    }
}
