//! Output mode and writer.

use super::theme::SetupTheme;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including full command output.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show minimal output (final status and warnings).
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows command output.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows routine status lines.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}

/// Console writer that respects the output mode.
///
/// Warnings, hints, and errors always print; the mode only gates routine
/// status lines and raw command output. Errors go to stderr.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: SetupTheme,
}

impl Output {
    pub fn new(mode: OutputMode, theme: SetupTheme) -> Self {
        Self { mode, theme }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn theme(&self) -> &SetupTheme {
        &self.theme
    }

    /// Header banner at the start of a run.
    pub fn header(&self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_header(title));
        }
    }

    /// Routine status line.
    pub fn println(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Success line.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    /// Final completion line; prints in every mode.
    pub fn completion(&self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    /// Advisory warning; prints in every mode.
    pub fn warning(&self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    /// Advisory hint; prints in every mode.
    pub fn hint(&self, msg: &str) {
        println!("{}", self.theme.format_hint(msg));
    }

    /// Error line on stderr; prints in every mode.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// A command about to run (or previewed under --dry-run).
    pub fn command(&self, cmd: &str) {
        if self.mode.shows_status() {
            println!("  {}", self.theme.command.apply_to(cmd));
        }
    }
}
