//! Best-effort inference of base-environment defaults from the host package.

use tracing::{debug, instrument};

use crate::{
    application::{IntrospectionError, ports::PackageTool},
    domain::ProjectDefaults,
};

/// Reads the host manifest through a [`PackageTool`].
pub struct ManifestIntrospector<'a> {
    tool: &'a dyn PackageTool,
}

impl<'a> ManifestIntrospector<'a> {
    pub fn new(tool: &'a dyn PackageTool) -> Self {
        Self { tool }
    }

    /// Query the manifest and derive defaults from it.
    ///
    /// The manifest is queried fresh on every call. Any failure is returned
    /// whole; callers decide whether to fall back to
    /// [`ProjectDefaults::placeholder`].
    #[instrument(skip_all)]
    pub fn introspect(&self) -> Result<ProjectDefaults, IntrospectionError> {
        let manifest = self.tool.query_manifest()?;
        let defaults = ProjectDefaults::from_manifest(&manifest);
        debug!(
            project = %manifest.name,
            targets = manifest.targets.len(),
            executable = defaults.executable_name.as_deref().unwrap_or("<ambiguous>"),
            framework = %defaults.framework,
            "Manifest introspected"
        );

        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ToolError, ports::MockPackageTool};
    use crate::domain::{FrameworkType, ManifestDependency, ManifestTarget, PackageManifest};

    fn tool_returning(manifest: PackageManifest) -> MockPackageTool {
        let mut tool = MockPackageTool::new();
        tool.expect_query_manifest()
            .times(1)
            .return_once(move || Ok(manifest));
        tool
    }

    #[test]
    fn vapor_project_with_single_executable() {
        let tool = tool_returning(PackageManifest {
            name: "Blog".into(),
            targets: vec![
                ManifestTarget {
                    name: "Models".into(),
                    dependencies: Some(vec![]),
                },
                ManifestTarget {
                    name: "Server".into(),
                    dependencies: Some(vec!["Models".into()]),
                },
            ],
            dependencies: vec![ManifestDependency {
                url: Some("https://github.com/vapor/vapor".into()),
            }],
        });

        let defaults = ManifestIntrospector::new(&tool).introspect().unwrap();
        assert_eq!(defaults.project_name.as_deref(), Some("Blog"));
        assert_eq!(defaults.executable_name.as_deref(), Some("Server"));
        assert_eq!(defaults.framework, FrameworkType::Vapor);
    }

    #[test]
    fn any_string_name_is_used_verbatim() {
        let tool = tool_returning(PackageManifest {
            name: "  ".into(),
            targets: vec![],
            dependencies: vec![],
        });
        let defaults = ManifestIntrospector::new(&tool).introspect().unwrap();
        assert_eq!(defaults.project_name_literal(), "\"  \"");
        assert_eq!(defaults.executable_name.as_deref(), Some("  "));
    }

    #[test]
    fn tool_failure_is_returned() {
        let mut tool = MockPackageTool::new();
        tool.expect_query_manifest().return_once(|| {
            Err(ToolError::Spawn {
                command: "swift package dump-package".into(),
                reason: "not found".into(),
            })
        });
        assert!(matches!(
            ManifestIntrospector::new(&tool).introspect(),
            Err(IntrospectionError::Query(ToolError::Spawn { .. }))
        ));
    }
}
