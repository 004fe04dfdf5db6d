//! Console output: theme, modes, and progress spinners.

pub mod output;
pub mod spinner;
pub mod theme;

pub use output::{Output, OutputMode};
pub use spinner::{live_output_callback, StepSpinner};
pub use theme::{should_use_colors, SetupTheme};
