//! Values inferred from the host package that seed the base environment.

use std::fmt;

use crate::domain::manifest::PackageManifest;

/// Server framework the deployed executable is built on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrameworkType {
    #[default]
    Generic,
    Vapor,
    Zewo,
    Kitura,
    Perfect,
}

impl FrameworkType {
    /// Recognised frameworks in detection priority order.
    pub const RECOGNISED: [(FrameworkType, &'static str); 4] = [
        (Self::Vapor, "https://github.com/vapor/vapor"),
        (Self::Zewo, "https://github.com/Zewo/Zewo"),
        (Self::Kitura, "https://github.com/IBM-Swift/Kitura"),
        (Self::Perfect, "https://github.com/PerfectlySoft/Perfect"),
    ];

    /// Match a dependency URL against the recognised framework repositories.
    pub fn from_repository_url(url: &str) -> Option<Self> {
        Self::RECOGNISED
            .iter()
            .find(|(_, repo)| *repo == url)
            .map(|(framework, _)| *framework)
    }

    /// Name of the framework's type in the Flock runtime, minus `Framework`.
    pub fn type_prefix(self) -> &'static str {
        match self {
            Self::Generic => "GenericServer",
            Self::Vapor => "Vapor",
            Self::Zewo => "Zewo",
            Self::Kitura => "Kitura",
            Self::Perfect => "Perfect",
        }
    }
}

impl fmt::Display for FrameworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Framework", self.type_prefix())
    }
}

/// Defaults computed once per run from the package manifest.
///
/// `None` means the value could not be inferred; the rendered file then
/// carries a placeholder for the user to fill in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDefaults {
    pub project_name: Option<String>,
    pub executable_name: Option<String>,
    pub framework: FrameworkType,
}

impl ProjectDefaults {
    pub const PROJECT_NAME_PLACEHOLDER: &'static str = "nil // Fill this in!";
    pub const EXECUTABLE_NAME_PLACEHOLDER: &'static str = "nil // Fill this in! (same as Config.projectName unless your project is divided into modules)";

    /// Defaults used when nothing could be learned from the manifest.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Derive defaults from a successfully parsed manifest.
    pub fn from_manifest(manifest: &PackageManifest) -> Self {
        Self {
            project_name: Some(manifest.name.clone()),
            executable_name: manifest.inferred_executable(),
            framework: manifest.framework(),
        }
    }

    /// Swift expression for `Config.projectName`.
    pub fn project_name_literal(&self) -> String {
        self.project_name
            .as_deref()
            .map_or_else(|| Self::PROJECT_NAME_PLACEHOLDER.to_owned(), quote)
    }

    /// Swift expression for `Config.executableName`.
    pub fn executable_name_literal(&self) -> String {
        self.executable_name
            .as_deref()
            .map_or_else(|| Self::EXECUTABLE_NAME_PLACEHOLDER.to_owned(), quote)
    }
}

fn quote(value: &str) -> String {
    format!("\"{value}\"")
}
