//! The host package's manifest, as reported by the build tool.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};

use crate::domain::defaults::FrameworkType;

/// Subset of `swift package dump-package` output the initializer reads.
///
/// Unknown fields are ignored. `name` is required; a dump without it does not
/// deserialize, which callers treat as an introspection failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    #[serde(default)]
    pub targets: Vec<ManifestTarget>,
    #[serde(default)]
    pub dependencies: Vec<ManifestDependency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestTarget {
    pub name: String,
    /// `None` when the dump has no list of dependency names for the target.
    /// Such targets take no part in executable inference.
    #[serde(default, deserialize_with = "name_list")]
    pub dependencies: Option<Vec<String>>,
}

/// Accept a list of strings; anything else (absent, objects) reads as `None`.
fn name_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestDependency {
    #[serde(default)]
    pub url: Option<String>,
}

impl PackageManifest {
    /// Parse a manifest dump.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Targets that no other target depends on.
    ///
    /// These are assumed to be the leaf (executable) targets of the package.
    /// Targets without a dependency list are left out on both sides.
    pub fn executable_candidates(&self) -> BTreeSet<&str> {
        let listed = || {
            self.targets
                .iter()
                .filter_map(|t| t.dependencies.as_deref().map(|deps| (t.name.as_str(), deps)))
        };
        let target_names: BTreeSet<&str> = listed().map(|(name, _)| name).collect();
        let dependency_names: BTreeSet<&str> = listed()
            .flat_map(|(_, deps)| deps.iter().map(String::as_str))
            .collect();

        target_names.difference(&dependency_names).copied().collect()
    }

    /// The executable to deploy, if it can be decided.
    ///
    /// With no targets declared the package name is the executable. With
    /// targets, exactly one candidate must remain.
    pub fn inferred_executable(&self) -> Option<String> {
        if self.targets.is_empty() {
            return Some(self.name.clone());
        }

        let candidates = self.executable_candidates();
        if candidates.len() == 1 {
            candidates.into_iter().next().map(str::to_owned)
        } else {
            None
        }
    }

    /// First recognised web framework among the declared dependencies.
    pub fn framework(&self) -> FrameworkType {
        self.dependencies
            .iter()
            .filter_map(|d| d.url.as_deref())
            .find_map(FrameworkType::from_repository_url)
            .unwrap_or(FrameworkType::Generic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(name: &str, deps: &[&str]) -> ManifestTarget {
        ManifestTarget {
            name: name.into(),
            dependencies: Some(deps.iter().map(|d| d.to_string()).collect()),
        }
    }

    fn manifest(targets: Vec<ManifestTarget>, urls: &[&str]) -> PackageManifest {
        PackageManifest {
            name: "Server".into(),
            targets,
            dependencies: urls
                .iter()
                .map(|u| ManifestDependency {
                    url: Some(u.to_string()),
                })
                .collect(),
        }
    }

    #[test]
    fn single_leaf_target_is_executable() {
        let m = manifest(vec![target("A", &[]), target("B", &["A"])], &[]);
        assert_eq!(m.inferred_executable().as_deref(), Some("B"));
    }

    #[test]
    fn two_independent_targets_are_ambiguous() {
        let m = manifest(vec![target("A", &[]), target("B", &[])], &[]);
        assert_eq!(m.executable_candidates().len(), 2);
        assert_eq!(m.inferred_executable(), None);
    }

    #[test]
    fn cyclic_targets_leave_no_candidate() {
        let m = manifest(vec![target("A", &["B"]), target("B", &["A"])], &[]);
        assert_eq!(m.inferred_executable(), None);
    }

    #[test]
    fn no_targets_falls_back_to_package_name() {
        let m = manifest(vec![], &[]);
        assert_eq!(m.inferred_executable().as_deref(), Some("Server"));
    }

    #[test]
    fn vapor_dependency_detected() {
        let m = manifest(
            vec![],
            &[
                "https://github.com/jakeheis/Spawn",
                "https://github.com/vapor/vapor",
            ],
        );
        assert_eq!(m.framework(), FrameworkType::Vapor);
    }

    #[test]
    fn first_matching_dependency_wins() {
        let m = manifest(
            vec![],
            &[
                "https://github.com/IBM-Swift/Kitura",
                "https://github.com/vapor/vapor",
            ],
        );
        assert_eq!(m.framework(), FrameworkType::Kitura);
    }

    #[test]
    fn unknown_dependencies_are_generic() {
        let m = manifest(vec![], &["https://github.com/jakeheis/SwiftCLI"]);
        assert_eq!(m.framework(), FrameworkType::Generic);
    }

    #[test]
    fn parses_dump_with_extra_fields() {
        let json = r#"{
            "name": "Api",
            "targets": [{"name": "Api", "dependencies": ["Core"]}, {"name": "Core"}],
            "dependencies": [{"url": "https://github.com/Zewo/Zewo", "version": {}}],
            "exclude": []
        }"#;
        let m = PackageManifest::from_json(json).unwrap();
        assert_eq!(m.name, "Api");
        assert_eq!(m.inferred_executable().as_deref(), Some("Api"));
        assert_eq!(m.framework(), FrameworkType::Zewo);
    }

    #[test]
    fn target_without_dependency_list_is_ignored() {
        let json = r#"{"name": "P", "targets": [{"name": "A"}, {"name": "B", "dependencies": []}]}"#;
        let m = PackageManifest::from_json(json).unwrap();
        assert_eq!(m.targets[0].dependencies, None);
        assert_eq!(m.inferred_executable().as_deref(), Some("B"));
    }

    #[test]
    fn structured_dependency_entries_read_as_unlisted() {
        let json = r#"{"name": "P", "targets": [
            {"name": "App", "dependencies": [{"byName": ["Core"]}]},
            {"name": "Core", "dependencies": []}
        ]}"#;
        let m = PackageManifest::from_json(json).unwrap();
        assert_eq!(m.targets[0].dependencies, None);
        assert_eq!(m.inferred_executable().as_deref(), Some("Core"));
    }

    #[test]
    fn targets_all_unlisted_leave_placeholder() {
        let json = r#"{"name": "P", "targets": [{"name": "A"}]}"#;
        assert_eq!(PackageManifest::from_json(json).unwrap().inferred_executable(), None);
    }

    #[test]
    fn missing_name_is_rejected() {
        assert!(PackageManifest::from_json(r#"{"targets": []}"#).is_err());
    }
}
