use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::core::profile::Profile;
use crate::core::services::ConfigService;
use crate::infrastructure::{EnvSnapshot, GitInfo, PackageManifest};
use crate::utils::{Logger, Timer};

#[derive(Parser)]
#[command(name = "pathfinder-config")]
#[command(about = "Build configuration resolver for the Pathfinder web app")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the bundler configuration and print it as JSON
    Resolve {
        /// Project root containing package.json
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
        /// Deployment profile (overrides ACTIVE_PROFILE)
        #[arg(short, long)]
        profile: Option<String>,
        /// Local editor checkout path (overrides LOCAL_OVERRIDE_PATH)
        #[arg(short, long)]
        local_override: Option<String>,
        /// Print compact JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Assemble the configuration and report diagnostics only
    Check {
        /// Project root containing package.json
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
    /// Show the known deployment profiles and their backend targets
    Info,
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<()> {
        // Initialize logging
        Logger::init();

        let cli = Cli::parse();

        match cli.command {
            Commands::Resolve {
                root,
                profile,
                local_override,
                compact,
            } => self.handle_resolve_command(&root, profile, local_override, compact),
            Commands::Check { root } => self.handle_check_command(&root),
            Commands::Info => self.handle_info_command(),
        }
    }

    fn handle_resolve_command(
        &self,
        root: &Path,
        profile: Option<String>,
        local_override: Option<String>,
        compact: bool,
    ) -> Result<()> {
        let _timer = Timer::start("configuration assembly");

        let config = self.assemble(root, profile, local_override)?;

        let json = if compact {
            serde_json::to_string(&config)?
        } else {
            serde_json::to_string_pretty(&config)?
        };
        println!("{json}");

        Ok(())
    }

    fn handle_check_command(&self, root: &Path) -> Result<()> {
        Logger::resolve_start(&root.display().to_string());

        let config = self.assemble(root, None, None)?;

        println!("✅ Configuration assembled");
        println!(
            "  • Profile: {} → {}",
            config.effective_profile, config.proxy_target
        );
        println!("  • Rewrite rules: {}", config.rewrites.len());
        if config.overrides.is_empty() {
            println!("  • Local overrides: disabled");
        } else {
            println!("  • Local overrides: {} packages", config.overrides.len());
        }
        println!(
            "  • Editor version: {}",
            config.public_runtime.editor_version
        );
        println!(
            "  • Build: {} ({})",
            config.public_runtime.version, config.public_runtime.commit_hash
        );

        Ok(())
    }

    fn handle_info_command(&self) -> Result<()> {
        println!("pathfinder-config v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Known deployment profiles:");
        for profile in Profile::ALL {
            let target = profile.target();
            if target.is_empty() {
                println!("  {:<6} (no address recorded)", profile.name());
            } else {
                println!("  {:<6} {}", profile.name(), target);
            }
        }

        Ok(())
    }

    fn assemble(
        &self,
        root: &Path,
        profile: Option<String>,
        local_override: Option<String>,
    ) -> Result<crate::core::models::WebConfig> {
        let mut env = EnvSnapshot::capture();

        // CLI flags win over the captured environment
        if profile.is_some() {
            env.active_profile = profile;
        }
        if local_override.is_some() {
            env.local_override_path = local_override;
        }

        let manifest = PackageManifest::load(root)
            .with_context(|| format!("loading package.json from {}", root.display()))?;
        let git = GitInfo::discover(root);

        let config = ConfigService::assemble(&env, &manifest, &git)?;
        Ok(config)
    }
}
