use crate::core::models::RewriteRule;

/// Deployment profiles with a recorded backend target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Ac,
    Dev,
    Test,
    Stage,
    Pro,
    Local,
}

impl Profile {
    pub const ALL: [Profile; 6] = [
        Profile::Ac,
        Profile::Dev,
        Profile::Test,
        Profile::Stage,
        Profile::Pro,
        Profile::Local,
    ];

    /// Parse a profile name. Unknown names yield `None` and the caller falls
    /// back to `Dev`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ac" => Some(Profile::Ac),
            "dev" => Some(Profile::Dev),
            "test" => Some(Profile::Test),
            "stage" => Some(Profile::Stage),
            "pro" => Some(Profile::Pro),
            "local" => Some(Profile::Local),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Ac => "ac",
            Profile::Dev => "dev",
            Profile::Test => "test",
            Profile::Stage => "stage",
            Profile::Pro => "pro",
            Profile::Local => "local",
        }
    }

    /// Backend address for this profile. `Stage` has no address recorded.
    pub fn target(self) -> &'static str {
        match self {
            Profile::Ac => "100.85.73.88:12001",
            Profile::Dev => "100.84.105.99:11001",
            Profile::Test => "100.84.105.99:11001",
            Profile::Stage => "",
            Profile::Pro => "http://pathfinder.affine.pro",
            Profile::Local => "127.0.0.1:3000",
        }
    }
}

/// Outcome of resolving the active deployment profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProxy {
    pub rules: Vec<RewriteRule>,
    pub target: String,
    pub profile: String,
}

/// Map the requested profile to its backend target and the rewrite rules the
/// development proxy installs. Absent, empty, or unrecognized input falls
/// back to the `dev` target, but the reported profile keeps the caller's
/// original spelling when one was given.
///
/// The destination template always prepends `http://`, even for targets that
/// already carry a scheme (`pro`) or are empty (`stage`). That matches the
/// proxy table as currently deployed; see DESIGN.md before changing it.
pub fn resolve(input: Option<&str>) -> ResolvedProxy {
    let requested = input.filter(|name| !name.is_empty());
    let target = requested
        .and_then(Profile::parse)
        .unwrap_or(Profile::Dev)
        .target()
        .to_string();

    let rules = vec![
        RewriteRule {
            source: "/api/:path*".to_string(),
            destination: format!("http://{}/api/:path*", target),
        },
        RewriteRule {
            source: "/collaboration/:path*".to_string(),
            destination: format!("http://{}/collaboration/:path*", target),
        },
    ];

    ResolvedProxy {
        rules,
        target,
        profile: requested.unwrap_or("dev").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_profiles_use_table_targets() {
        assert_eq!(resolve(Some("ac")).target, "100.85.73.88:12001");
        assert_eq!(resolve(Some("dev")).target, "100.84.105.99:11001");
        assert_eq!(resolve(Some("test")).target, "100.84.105.99:11001");
        assert_eq!(resolve(Some("stage")).target, "");
        assert_eq!(resolve(Some("pro")).target, "http://pathfinder.affine.pro");
        assert_eq!(resolve(Some("local")).target, "127.0.0.1:3000");
    }

    #[test]
    fn test_absent_and_empty_input_fall_back_to_dev() {
        let absent = resolve(None);
        assert_eq!(absent.target, "100.84.105.99:11001");
        assert_eq!(absent.profile, "dev");

        let empty = resolve(Some(""));
        assert_eq!(empty.target, "100.84.105.99:11001");
        assert_eq!(empty.profile, "dev");
    }

    #[test]
    fn test_unknown_profile_reports_original_name_but_dev_target() {
        let resolved = resolve(Some("qa"));
        assert_eq!(resolved.target, "100.84.105.99:11001");
        assert_eq!(resolved.profile, "qa");
    }

    #[test]
    fn test_two_rules_always_produced() {
        let resolved = resolve(Some("local"));
        assert_eq!(resolved.rules.len(), 2);
        assert_eq!(resolved.rules[0].source, "/api/:path*");
        assert_eq!(resolved.rules[0].destination, "http://127.0.0.1:3000/api/:path*");
        assert_eq!(resolved.rules[1].source, "/collaboration/:path*");
        assert_eq!(
            resolved.rules[1].destination,
            "http://127.0.0.1:3000/collaboration/:path*"
        );
    }

    #[test]
    fn test_pro_keeps_duplicated_scheme() {
        let resolved = resolve(Some("pro"));
        assert_eq!(
            resolved.rules[0].destination,
            "http://http://pathfinder.affine.pro/api/:path*"
        );
        assert_eq!(
            resolved.rules[1].destination,
            "http://http://pathfinder.affine.pro/collaboration/:path*"
        );
    }

    #[test]
    fn test_stage_keeps_empty_host() {
        let resolved = resolve(Some("stage"));
        assert_eq!(resolved.rules[0].destination, "http:///api/:path*");
        assert_eq!(resolved.rules[1].destination, "http:///collaboration/:path*");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        assert_eq!(resolve(Some("pro")), resolve(Some("pro")));
        assert_eq!(resolve(None), resolve(None));
        assert_eq!(resolve(Some("unknown")), resolve(Some("unknown")));
    }
}
