use std::env;

/// Names the active deployment profile.
pub const ACTIVE_PROFILE: &str = "ACTIVE_PROFILE";
/// Points at a local editor checkout; only absolute paths take effect.
pub const LOCAL_OVERRIDE_PATH: &str = "LOCAL_OVERRIDE_PATH";
/// Credential checked for the startup diagnostic. Not consumed here.
pub const FIREBASE_API_KEY: &str = "FIREBASE_API_KEY";
pub const NODE_ENV: &str = "NODE_ENV";
pub const CI: &str = "CI";
/// Base path the application is served under.
pub const BASE_PATH: &str = "BASE_PATH";

/// One-shot snapshot of the process environment. Every ambient read happens
/// here so the resolvers stay pure over explicit inputs. Empty values are
/// treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub active_profile: Option<String>,
    pub local_override_path: Option<String>,
    pub firebase_api_key: Option<String>,
    pub node_env: Option<String>,
    pub ci: Option<String>,
    pub base_path: Option<String>,
}

impl EnvSnapshot {
    /// Capture the relevant variables from the process environment.
    pub fn capture() -> Self {
        Self {
            active_profile: read(ACTIVE_PROFILE),
            local_override_path: read(LOCAL_OVERRIDE_PATH),
            firebase_api_key: read(FIREBASE_API_KEY),
            node_env: read(NODE_ENV),
            ci: read(CI),
            base_path: read(BASE_PATH),
        }
    }

    /// Build a snapshot from explicit key/value pairs. Unknown keys are
    /// ignored.
    pub fn from_vars<'a, I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut snapshot = Self::default();
        for (key, value) in vars {
            let value = Some(value.to_string()).filter(|v| !v.is_empty());
            match key {
                ACTIVE_PROFILE => snapshot.active_profile = value,
                LOCAL_OVERRIDE_PATH => snapshot.local_override_path = value,
                FIREBASE_API_KEY => snapshot.firebase_api_key = value,
                NODE_ENV => snapshot.node_env = value,
                CI => snapshot.ci = value,
                BASE_PATH => snapshot.base_path = value,
                _ => {}
            }
        }
        snapshot
    }
}

fn read(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vars_picks_known_keys() {
        let snapshot = EnvSnapshot::from_vars([
            (ACTIVE_PROFILE, "pro"),
            (LOCAL_OVERRIDE_PATH, "/checkout"),
            ("UNRELATED", "ignored"),
        ]);

        assert_eq!(snapshot.active_profile.as_deref(), Some("pro"));
        assert_eq!(snapshot.local_override_path.as_deref(), Some("/checkout"));
        assert_eq!(snapshot.firebase_api_key, None);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let snapshot = EnvSnapshot::from_vars([(ACTIVE_PROFILE, ""), (CI, "true")]);

        assert_eq!(snapshot.active_profile, None);
        assert_eq!(snapshot.ci.as_deref(), Some("true"));
    }
}
