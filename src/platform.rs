//! Platform capability record.
//!
//! Everything that differs between a Windows host and a POSIX host lives in
//! one [`PlatformSpec`] value resolved at startup. The bootstrap control flow
//! is written once against this record, so there are no duplicated
//! per-platform code paths.

/// Where to point the user when no Python runtime is installed.
pub const RUNTIME_DOWNLOAD_URL: &str = "https://www.python.org/downloads/";

/// Host-specific lookup names and toggles.
#[derive(Debug, Clone, Copy)]
pub struct PlatformSpec {
    /// Runtime executable names to try on PATH, in order.
    pub runtime_candidates: &'static [&'static str],

    /// Interpreter location inside a virtual environment, relative to its root.
    pub venv_interpreter: &'static str,

    /// Media player executable name to probe for.
    pub media_player: &'static str,

    /// Whether to probe that the GUI toolkit module is importable.
    ///
    /// The python.org Windows installer bundles Tk, so the probe (and its
    /// `python3-tk` hint, which names a Linux system package) only makes
    /// sense on POSIX hosts.
    pub gui_probe: bool,
}

#[cfg(windows)]
const CURRENT: PlatformSpec = PlatformSpec {
    runtime_candidates: &["py.exe", "python.exe"],
    venv_interpreter: "Scripts/python.exe",
    media_player: "vlc.exe",
    gui_probe: false,
};

#[cfg(not(windows))]
const CURRENT: PlatformSpec = PlatformSpec {
    runtime_candidates: &["python3", "python"],
    venv_interpreter: "bin/python",
    media_player: "vlc",
    gui_probe: true,
};

/// The capability record for the compile-time target.
pub fn current() -> &'static PlatformSpec {
    &CURRENT
}

impl PlatformSpec {
    /// Candidate names joined for diagnostics, e.g. `"python3, python"`.
    pub fn candidates_display(&self) -> String {
        self.runtime_candidates.join(", ")
    }
}
