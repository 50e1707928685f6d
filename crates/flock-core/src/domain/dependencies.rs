//! The dependency descriptor (`FlockDependencies.json`).

use serde::{Deserialize, Serialize};

/// Packages the deployment project depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyList {
    pub dependencies: Vec<DependencySpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySpec {
    pub url: String,
    pub major: u32,
}

impl DependencyList {
    pub const FLOCK_REPOSITORY: &'static str = "https://github.com/jakeheis/Flock";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for DependencyList {
    /// Flock itself, pinned to major version 0.
    fn default() -> Self {
        Self {
            dependencies: vec![DependencySpec {
                url: Self::FLOCK_REPOSITORY.into(),
                major: 0,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_flock() {
        let list = DependencyList::default();
        assert_eq!(list.dependencies.len(), 1);
        assert_eq!(list.dependencies[0].url, DependencyList::FLOCK_REPOSITORY);
        assert_eq!(list.dependencies[0].major, 0);
    }

    #[test]
    fn parses_user_additions() {
        let json = r#"{ "dependencies": [
            { "url": "https://github.com/jakeheis/Flock", "major": 0 },
            { "url": "https://github.com/jakeheis/VaporFlock", "major": 1 }
        ] }"#;
        let list = DependencyList::from_json(json).unwrap();
        assert_eq!(list.dependencies[1].major, 1);
    }
}
