use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Version label reported for the editor package while local overrides are
/// active.
pub const LOCAL_VERSION_LABEL: &str = "local-version";

/// Package specifiers redirected as a unit when local editor development is
/// enabled, each with its path segments under the checkout root. The
/// `models` and `std` entries resolve into the blocks package's `src` tree,
/// one level deeper than the package roots.
const OVERRIDE_SPECIFIERS: [(&str, &[&str]); 5] = [
    ("@blocksuite/editor", &["packages", "editor"]),
    ("@blocksuite/blocks/models", &["packages", "blocks", "src", "models"]),
    ("@blocksuite/blocks/std", &["packages", "blocks", "src", "std"]),
    ("@blocksuite/blocks", &["packages", "blocks"]),
    ("@blocksuite/store", &["packages", "store"]),
];

/// Outcome of resolving the local editor checkout path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalOverrides {
    pub enabled: bool,
    pub table: BTreeMap<String, PathBuf>,
    pub editor_version: String,
}

/// Decide whether local editor development is active and, if so, build the
/// full specifier table.
///
/// Only an absolute `base` enables overrides; the path is accepted without
/// checking that it exists. The table is all-or-nothing: empty when
/// disabled, all five specifiers when enabled. While enabled, the reported
/// editor version is the `local-version` sentinel instead of the recorded
/// dependency version.
pub fn resolve(base: Option<&str>, editor_dependency_version: &str) -> LocalOverrides {
    let base = base.filter(|path| Path::new(path).is_absolute());

    match base {
        Some(base) => {
            let root = Path::new(base);
            let table = OVERRIDE_SPECIFIERS
                .iter()
                .map(|(specifier, segments)| {
                    let path = segments.iter().fold(root.to_path_buf(), |p, s| p.join(s));
                    (specifier.to_string(), path)
                })
                .collect();

            LocalOverrides {
                enabled: true,
                table,
                editor_version: LOCAL_VERSION_LABEL.to_string(),
            }
        }
        None => LocalOverrides {
            enabled: false,
            table: BTreeMap::new(),
            editor_version: editor_dependency_version.to_string(),
        },
    }
}
