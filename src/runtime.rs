//! Python runtime discovery.
//!
//! Locating the runtime is the one fatal precondition of the bootstrap:
//! nothing is installed until an interpreter has been resolved on PATH.
//! Resolution walks PATH entries directly rather than shelling out to
//! `which`, whose behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling.

use crate::platform::PlatformSpec;
use crate::process;
use regex::Regex;
use std::path::{Path, PathBuf};

/// A resolved Python interpreter.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    /// Absolute path of the interpreter executable.
    pub path: PathBuf,
    /// Version string (e.g. "3.12.4") extracted from `--version` output,
    /// when the interpreter answered.
    pub version: Option<String>,
}

/// Parse the PATH environment variable into a list of directories.
pub fn search_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve an executable by iterating over PATH entries.
///
/// Returns the first candidate that exists and is executable.
pub fn resolve_executable(name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Locate the Python runtime using the platform's candidate names.
///
/// Candidates are tried in order; the first hit wins. Returns `None` when no
/// candidate resolves, which callers treat as the fatal precondition.
pub fn locate(spec: &PlatformSpec) -> Option<RuntimeInfo> {
    let entries = search_path();
    for name in spec.runtime_candidates {
        if let Some(path) = resolve_executable(name, &entries) {
            tracing::debug!("resolved runtime candidate {} at {}", name, path.display());
            let version = query_version(&path);
            return Some(RuntimeInfo { path, version });
        }
    }
    None
}

/// Ask the interpreter for its version.
///
/// Old interpreters printed `--version` to stderr, so both streams are
/// scanned. A runtime that fails to answer is still usable; version display
/// is cosmetic.
fn query_version(interpreter: &Path) -> Option<String> {
    let result = process::run_captured(interpreter, &["--version"]).ok()?;
    if !result.success {
        return None;
    }
    extract_version(&result.stdout).or_else(|| extract_version(&result.stderr))
}

/// Pull a dotted version number out of interpreter output.
fn extract_version(output: &str) -> Option<String> {
    let re = Regex::new(r"(\d+\.\d+(?:\.\d+)?)").ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn resolve_executable_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::create_dir_all(&dir_b).unwrap();

        create_fake_binary(&dir_a.join("python3"));
        create_fake_binary(&dir_b.join("python3"));

        let result = resolve_executable("python3", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_a.join("python3")));
    }

    #[test]
    fn resolve_executable_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        assert!(resolve_executable("python3", &[dir]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_executable_skips_non_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::write(dir_a.join("python3"), "not executable").unwrap();
        fs::set_permissions(dir_a.join("python3"), fs::Permissions::from_mode(0o644)).unwrap();
        create_fake_binary(&dir_b.join("python3"));

        let result = resolve_executable("python3", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("python3")));
    }

    #[test]
    fn extract_version_from_python3_output() {
        assert_eq!(
            extract_version("Python 3.12.4\n"),
            Some("3.12.4".to_string())
        );
    }

    #[test]
    fn extract_version_accepts_two_components() {
        assert_eq!(extract_version("Python 3.9"), Some("3.9".to_string()));
    }

    #[test]
    fn extract_version_rejects_noise() {
        assert_eq!(extract_version("no interpreter here"), None);
    }

    #[cfg(unix)]
    #[test]
    fn locate_uses_candidate_order() {
        use crate::platform::PlatformSpec;

        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("python"));

        let spec = PlatformSpec {
            runtime_candidates: &["python3", "python"],
            venv_interpreter: "bin/python",
            media_player: "vlc",
            gui_probe: true,
        };

        // Narrow PATH to just the temp dir for this lookup.
        let saved = std::env::var_os("PATH");
        std::env::set_var("PATH", temp.path());
        let found = locate(&spec);
        match saved {
            Some(p) => std::env::set_var("PATH", p),
            None => std::env::remove_var("PATH"),
        }

        let info = found.expect("fallback candidate should resolve");
        assert_eq!(info.path, temp.path().join("python"));
    }
}
