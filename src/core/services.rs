use chrono::Utc;

use crate::core::models::{BuildOptions, PublicRuntimeConfig, WebConfig, TRANSPILE_PACKAGES};
use crate::core::{overrides, profile};
use crate::infrastructure::{environment, EnvSnapshot, GitInfo, PackageManifest};
use crate::utils::{ConfigError, Logger, Result};

/// The package whose recorded version is surfaced in the public runtime
/// configuration and replaced by the sentinel while overrides are active.
pub const EDITOR_PACKAGE: &str = "@blocksuite/editor";

/// Assembles the bundler configuration from its collaborators. Runs once per
/// invocation; both resolvers are pure, so identical inputs produce an
/// identical configuration.
pub struct ConfigService;

impl ConfigService {
    pub fn assemble(
        env: &EnvSnapshot,
        manifest: &PackageManifest,
        git: &GitInfo,
    ) -> Result<WebConfig> {
        let editor_dependency = manifest
            .dependency_version(EDITOR_PACKAGE)
            .ok_or_else(|| ConfigError::MissingDependency(EDITOR_PACKAGE.to_string()))?;

        let proxy = profile::resolve(env.active_profile.as_deref());
        Logger::proxy_target(&proxy.profile, &proxy.target);

        let local = overrides::resolve(env.local_override_path.as_deref(), editor_dependency);
        if local.enabled {
            Logger::overrides_enabled(
                env.local_override_path.as_deref().unwrap_or_default(),
                local.table.len(),
            );
        } else {
            Logger::overrides_disabled();
        }

        // Advisory only; assembly proceeds either way.
        if env.firebase_api_key.is_some() {
            Logger::credential_present(environment::FIREBASE_API_KEY);
        } else {
            Logger::credential_missing(environment::FIREBASE_API_KEY);
        }

        Ok(WebConfig {
            effective_profile: proxy.profile,
            proxy_target: proxy.target,
            rewrites: proxy.rules,
            overrides: local.table,
            transpile_packages: TRANSPILE_PACKAGES.iter().map(|p| p.to_string()).collect(),
            base_path: env.base_path.clone(),
            build: BuildOptions::default(),
            public_runtime: PublicRuntimeConfig {
                node_env: env.node_env.clone(),
                project_name: manifest.name.clone(),
                build_date: Utc::now().to_rfc3339(),
                ci: env.ci.clone(),
                version: git.version.clone(),
                commit_hash: git.commit_hash.clone(),
                editor_version: local.editor_version,
            },
        })
    }
}
