//! Bootstrap orchestration.
//!
//! One sequential pass: locate the runtime, ensure the isolated environment,
//! upgrade the installer, install the declared manifest, run the preflight
//! probes, and print the downstream invocation hint. The first two install
//! steps are strict; probes never escalate.

use crate::error::{Result, SetupError};
use crate::manifest::Manifest;
use crate::pip::PipClient;
use crate::platform::{PlatformSpec, RUNTIME_DOWNLOAD_URL};
use crate::probes::{self, AdvisoryTone};
use crate::process::{OutputCallback, OutputLine};
use crate::runtime::{self, RuntimeInfo};
use crate::ui::{live_output_callback, Output, StepSpinner};
use crate::venv::{self, EnsureOutcome, VirtualEnv};
use std::path::PathBuf;

/// Options resolved from the CLI.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Directory the environment lives in (and the photo sorter runs from).
    pub project_root: PathBuf,
    /// Preview the commands without executing anything.
    pub dry_run: bool,
}

/// Run the whole bootstrap.
pub fn run(
    spec: &PlatformSpec,
    manifest: &Manifest,
    output: &Output,
    opts: &BootstrapOptions,
) -> Result<()> {
    output.header("Photo sorter environment setup");

    // Fatal precondition; checked before anything is mutated.
    let info = runtime::locate(spec).ok_or_else(|| SetupError::RuntimeNotFound {
        candidates: spec.candidates_display(),
        download_url: RUNTIME_DOWNLOAD_URL.to_string(),
    })?;
    output.success(&describe_runtime(&info));

    let env = VirtualEnv::locate(&opts.project_root, spec);

    if opts.dry_run {
        preview(spec, manifest, output, &info, &env);
        return Ok(());
    }

    ensure_environment(output, &info, &env)?;

    let interpreter = env.interpreter().to_path_buf();
    let pip = PipClient::new(&interpreter);

    run_step(output, "Upgrading pip...", "pip is up to date", |cb| {
        pip.upgrade_self(cb)
    })?;

    let requirements = manifest.requirements();
    let summary = requirements.join(", ");
    run_step(
        output,
        &format!("Installing {}...", summary),
        &format!("Installed {}", summary),
        |cb| pip.install(&requirements, cb),
    )?;

    report_probes(spec, output, &env);

    output.completion(&format!(
        "Environment ready. Run the photo sorter with: {}",
        invocation_hint(&env)
    ));

    Ok(())
}

/// The command line the user runs once setup has finished.
fn invocation_hint(env: &VirtualEnv) -> String {
    format!(
        "{} sort-photos.py <source-dir> <destination-dir> <destination-dir> [...]",
        env.interpreter().display()
    )
}

fn describe_runtime(info: &RuntimeInfo) -> String {
    match &info.version {
        Some(v) => format!("Found Python {} at {}", v, info.path.display()),
        None => format!("Found Python at {}", info.path.display()),
    }
}

fn ensure_environment(output: &Output, info: &RuntimeInfo, env: &VirtualEnv) -> Result<()> {
    if env.exists() {
        output.success(&format!(
            "Reusing virtual environment at {}",
            env.root().display()
        ));
        return Ok(());
    }

    let spinner = step_spinner(output, "Creating virtual environment...");
    let callback = step_callback(output, &spinner, "Creating virtual environment...");
    match venv::ensure(env, &info.path, callback) {
        Ok(EnsureOutcome::Created | EnsureOutcome::Reused) => {
            spinner.finish_success(&format!(
                "Virtual environment created at {}",
                env.root().display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.finish_error("Virtual environment creation failed");
            Err(e)
        }
    }
}

/// Run one strict install step behind a spinner.
fn run_step<F>(output: &Output, running: &str, done: &str, step: F) -> Result<()>
where
    F: FnOnce(OutputCallback) -> Result<()>,
{
    let spinner = step_spinner(output, running);
    let callback = step_callback(output, &spinner, running);
    match step(callback) {
        Ok(()) => {
            spinner.finish_success(done);
            Ok(())
        }
        Err(e) => {
            spinner.finish_error(&e.to_string());
            Err(e)
        }
    }
}

fn step_spinner(output: &Output, message: &str) -> StepSpinner {
    if output.mode().shows_spinners() {
        StepSpinner::new(message)
    } else {
        StepSpinner::hidden()
    }
}

/// Route child output either straight to the console (verbose) or into the
/// spinner's live ring buffer.
fn step_callback(output: &Output, spinner: &StepSpinner, running: &str) -> OutputCallback {
    if output.mode().shows_command_output() {
        let theme = output.theme().clone();
        Box::new(move |line: OutputLine| {
            let text = match line {
                OutputLine::Stdout(s) | OutputLine::Stderr(s) => s,
            };
            println!("  {}", theme.dim.apply_to(text));
        })
    } else {
        live_output_callback(spinner.bar_clone(), running.to_string(), 2)
    }
}

/// Best-effort capability probes; advisories only, never fatal.
fn report_probes(spec: &PlatformSpec, output: &Output, env: &VirtualEnv) {
    let probes = probes::preflight(spec);
    let outcomes = probes::run_all(&probes, env.interpreter(), &runtime::search_path());
    for outcome in outcomes {
        if outcome.available {
            output.success(&format!("{} available", outcome.label));
        } else {
            match outcome.tone {
                AdvisoryTone::Warning => output.warning(&outcome.advisory),
                AdvisoryTone::Hint => output.hint(&outcome.advisory),
            }
        }
    }
}

/// Dry-run preview: every command that would run, nothing executed.
fn preview(
    spec: &PlatformSpec,
    manifest: &Manifest,
    output: &Output,
    info: &RuntimeInfo,
    env: &VirtualEnv,
) {
    output.println("Dry run: the following commands would be executed");

    if !env.exists() {
        let args = env.create_args();
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        output.command(&crate::process::display_command(&info.path, &refs));
    }

    let interpreter = env.interpreter().to_path_buf();
    let pip = PipClient::new(&interpreter);
    output.command(&pip.upgrade_display());
    output.command(&pip.install_display(&manifest.requirements()));

    for probe in probes::preflight(spec) {
        output.println(&format!("Would check: {}", probe.label));
    }

    output.completion("Dry run complete. No commands were executed.");
}
