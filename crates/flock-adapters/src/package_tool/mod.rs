//! Package tool adapters.

mod scripted;
mod swift;

pub use scripted::ScriptedPackageTool;
pub use swift::SwiftPackageManager;
