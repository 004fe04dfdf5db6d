//! Declared dependency manifest.
//!
//! The packages the downstream application needs are data, not install
//! commands scattered through the code: a YAML manifest embedded at compile
//! time, deserialized once at startup. Installation consumes the manifest as
//! a single batch.

use crate::error::{Result, SetupError};
use serde::Deserialize;

const MANIFEST_YML: &str = include_str!("manifest.yml");

/// One required package.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageSpec {
    /// Distribution name as the installer knows it (e.g. "Pillow").
    pub name: String,

    /// Optional version requirement, verbatim in installer syntax
    /// (e.g. "==10.3.0" or ">=9"). Absent means unpinned.
    #[serde(default)]
    pub version: Option<String>,

    /// Short human-readable reason the package is needed.
    #[serde(default)]
    pub purpose: Option<String>,
}

impl PackageSpec {
    /// Requirement string handed to the installer.
    pub fn requirement(&self) -> String {
        match &self.version {
            Some(v) => format!("{}{}", self.name, v),
            None => self.name.clone(),
        }
    }
}

/// The full set of required packages.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub packages: Vec<PackageSpec>,
}

impl Manifest {
    /// Parse the manifest embedded in the binary.
    pub fn embedded() -> Result<Self> {
        Self::parse(MANIFEST_YML)
    }

    fn parse(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| SetupError::ManifestParse {
            message: e.to_string(),
        })
    }

    /// Requirement strings for a batch install invocation.
    pub fn requirements(&self) -> Vec<String> {
        self.packages.iter().map(PackageSpec::requirement).collect()
    }
}
