use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Workspace packages the bundler must transpile from source.
pub const TRANSPILE_PACKAGES: [&str; 4] = [
    "@affine/component",
    "@affine/i18n",
    "@affine/datacenter",
    "@toeverything/pathfinder-logger",
];

/// A development-proxy rewrite: requests matching `source` are forwarded to
/// `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub source: String,
    pub destination: String,
}

/// Build toggles surfaced to the bundler host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    pub browser_source_maps: bool,
    pub strict_mode: bool,
    pub minify: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            browser_source_maps: true,
            strict_mode: true,
            minify: false,
        }
    }
}

/// Values exposed to the running application at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicRuntimeConfig {
    pub node_env: Option<String>,
    pub project_name: String,
    pub build_date: String,
    pub ci: Option<String>,
    pub version: String,
    pub commit_hash: String,
    pub editor_version: String,
}

/// The assembled bundler configuration. Built once per invocation and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebConfig {
    pub effective_profile: String,
    pub proxy_target: String,
    pub rewrites: Vec<RewriteRule>,
    pub overrides: BTreeMap<String, PathBuf>,
    pub transpile_packages: Vec<String>,
    pub base_path: Option<String>,
    pub build: BuildOptions,
    pub public_runtime: PublicRuntimeConfig,
}
