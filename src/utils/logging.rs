use std::time::Instant;
use tracing::{debug, info, warn};

pub struct Logger;

impl Logger {
    pub fn init() {
        tracing_subscriber::fmt()
            .with_env_filter("pathfinder_config=info")
            .with_target(false)
            .init();
    }

    pub fn resolve_start(root: &str) {
        info!("🔧 Pathfinder Web - Build Configuration");
        info!("📁 Project root: {}", root);
    }

    pub fn proxy_target(profile: &str, target: &str) {
        info!("API request proxy to [{} Server]: {}", profile, target);
    }

    pub fn overrides_enabled(base: &str, count: usize) {
        info!("🔗 Local editor overrides enabled: {} packages from {}", count, base);
    }

    pub fn overrides_disabled() {
        debug!("Local editor overrides disabled");
    }

    pub fn credential_present(name: &str) {
        info!("{} found", name);
    }

    pub fn credential_missing(name: &str) {
        warn!("⚠️  {} not found, please check it", name);
    }

    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
