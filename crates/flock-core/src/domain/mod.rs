//! Domain layer: what the scaffold is made of.
//!
//! Pure data and pure functions. Nothing in here touches the filesystem or
//! spawns processes; the application layer does that through ports.

pub mod content;
pub mod defaults;
pub mod dependencies;
pub mod layout;
pub mod manifest;

pub use defaults::{FrameworkType, ProjectDefaults};
pub use dependencies::{DependencyList, DependencySpec};
pub use layout::{Environment, FlockPaths};
pub use manifest::{ManifestDependency, ManifestTarget, PackageManifest};
