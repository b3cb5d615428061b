use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::{ConfigError, Result};

/// package.json metadata for the application being configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: HashMap<String, String>,
}

impl PackageManifest {
    /// Read `<root>/package.json`.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join("package.json");
        let content = std::fs::read_to_string(&path)?;

        Self::parse(&content).map_err(|e| {
            ConfigError::manifest(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Recorded version for a regular dependency.
    pub fn dependency_version(&self, package: &str) -> Option<&str> {
        self.dependencies.get(package).map(String::as_str)
    }
}
