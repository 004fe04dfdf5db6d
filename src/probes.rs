//! Preflight capability probes.
//!
//! After the mandatory install steps, a short list of (probe, advisory)
//! pairs checks optional capabilities of the host. Each probe is
//! independently best-effort: a miss prints one advisory and never affects
//! the overall outcome.

use crate::platform::PlatformSpec;
use crate::process;
use crate::runtime;
use std::path::{Path, PathBuf};

/// How a capability is detected.
#[derive(Debug, Clone)]
pub enum ProbeKind {
    /// An executable resolvable on PATH.
    Executable { name: String },
    /// A module importable by the environment's interpreter.
    PythonImport { module: String },
}

/// How loudly to report a missing capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryTone {
    /// A feature area will be degraded.
    Warning,
    /// Points at a system package the user may want.
    Hint,
}

/// One optional capability and what to say when it is missing.
#[derive(Debug, Clone)]
pub struct CapabilityProbe {
    /// Short label for status lines (e.g. "VLC media player").
    pub label: String,
    pub kind: ProbeKind,
    /// Advisory printed exactly once when the capability is absent.
    pub advisory: String,
    pub tone: AdvisoryTone,
}

/// Result of running one probe.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub label: String,
    pub available: bool,
    pub advisory: String,
    pub tone: AdvisoryTone,
}

/// Build the probe list for this host.
///
/// The media player check runs everywhere; the GUI toolkit import only where
/// the platform record asks for it.
pub fn preflight(spec: &PlatformSpec) -> Vec<CapabilityProbe> {
    let mut probes = vec![CapabilityProbe {
        label: "VLC media player".to_string(),
        kind: ProbeKind::Executable {
            name: spec.media_player.to_string(),
        },
        advisory: "VLC media player not found on PATH: video support will be degraded"
            .to_string(),
        tone: AdvisoryTone::Warning,
    }];

    if spec.gui_probe {
        probes.push(CapabilityProbe {
            label: "Tk GUI toolkit".to_string(),
            kind: ProbeKind::PythonImport {
                module: "tkinter".to_string(),
            },
            advisory:
                "tkinter is not importable: install your distribution's Tk package (python3-tk)"
                    .to_string(),
            tone: AdvisoryTone::Hint,
        });
    }

    probes
}

/// Run every probe. Never fails; a probe that cannot even be attempted
/// (e.g. the interpreter refuses to spawn) counts as unavailable.
pub fn run_all(
    probes: &[CapabilityProbe],
    interpreter: &Path,
    search_path: &[PathBuf],
) -> Vec<ProbeOutcome> {
    probes
        .iter()
        .map(|probe| {
            let available = check(probe, interpreter, search_path);
            tracing::debug!("probe '{}' available={}", probe.label, available);
            ProbeOutcome {
                label: probe.label.clone(),
                available,
                advisory: probe.advisory.clone(),
                tone: probe.tone,
            }
        })
        .collect()
}

fn check(probe: &CapabilityProbe, interpreter: &Path, search_path: &[PathBuf]) -> bool {
    match &probe.kind {
        ProbeKind::Executable { name } => {
            runtime::resolve_executable(name, search_path).is_some()
        }
        ProbeKind::PythonImport { module } => {
            let statement = format!("import {}", module);
            process::run_captured(interpreter, &["-c", &statement])
                .map(|r| r.success)
                .unwrap_or(false)
        }
    }
}
