//! photosort-setup - Environment bootstrapper for the photo sorter application.
//!
//! Prepares a machine to run the downstream photo sorter: finds the Python
//! runtime on PATH, creates an isolated per-project environment, upgrades pip,
//! installs the declared package manifest, and probes optional capabilities
//! (media player, GUI toolkit) with advisory-only results.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result alias
//! - [`manifest`] - Declared dependency manifest
//! - [`pip`] - Installer invocations
//! - [`platform`] - Per-host capability record
//! - [`probes`] - Preflight capability probes
//! - [`process`] - Child process execution
//! - [`runner`] - Bootstrap orchestration
//! - [`runtime`] - Python runtime discovery
//! - [`ui`] - Terminal output, theme, and spinners
//! - [`venv`] - Per-project isolated environment
//!
//! # Example
//!
//! ```
//! use photosort_setup::manifest::Manifest;
//!
//! // The packages the bootstrap installs are declared data, not code.
//! let manifest = Manifest::embedded().unwrap();
//! assert!(manifest.requirements().iter().any(|r| r.contains("Pillow")));
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod pip;
pub mod platform;
pub mod probes;
pub mod process;
pub mod runner;
pub mod runtime;
pub mod ui;
pub mod venv;

pub use error::{Result, SetupError};
