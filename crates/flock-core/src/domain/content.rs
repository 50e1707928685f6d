//! Default file contents.
//!
//! Everything here is a fixed block of text; only the base environment takes
//! parameters ([`ProjectDefaults`]) and only the generated `Package.swift`
//! takes the dependency list.

use std::path::Path;

use crate::domain::{
    defaults::ProjectDefaults, dependencies::DependencyList, layout::Environment,
};

/// Marker that guards the `.gitignore` block against duplicate appends.
pub const GITIGNORE_MARKER: &str = "# Flock";

/// Contents of the root `Flockfile`.
pub fn flockfile() -> String {
    [
        "import Flock",
        "",
        "Flock.configure(base: Base(), environments: [Production(), Staging()])",
        "",
        "Flock.use(.deploy)",
        "Flock.use(.swiftenv)",
        "Flock.use(.server)",
        "",
        "Flock.run()",
        "",
    ]
    .join("\n")
}

/// Contents of `FlockDependencies.json`.
pub fn dependencies_file() -> String {
    [
        "{",
        "   \"dependencies\" : [",
        "       {",
        format!("           \"url\" : \"{}\",", DependencyList::FLOCK_REPOSITORY).as_str(),
        "           \"major\": 0",
        "       }",
        "   ]",
        "}",
        "",
    ]
    .join("\n")
}

/// Commented examples for the production and staging environments.
pub fn environment_example_lines() -> Vec<String> {
    [
        "// Config.SSHAuthMethod = SSH.Key(",
        "//     privateKey: \"~/.ssh/key\",",
        "//     passphrase: \"passphrase\"",
        "// )",
        "// Servers.add(ip: \"9.9.9.9\", user: \"user\", roles: [.app, .db, .web])",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Configuration lines for the base environment.
pub fn base_environment_lines(defaults: &ProjectDefaults) -> Vec<String> {
    vec![
        format!("Config.projectName = {}", defaults.project_name_literal()),
        format!("Config.executableName = {}", defaults.executable_name_literal()),
        "Config.repoURL = nil // Fill this in!".into(),
        String::new(),
        format!("Config.serverFramework = {}()", defaults.framework),
        "Config.processController = Nohup() // Other option: Supervisord()".into(),
        String::new(),
        "// IF YOU PLAN TO RUN `flock tools` AS THE ROOT USER BUT `flock deploy` AS A DEDICATED DEPLOY USER,".into(),
        "// (as you should, see https://github.com/jakeheis/Flock/blob/master/README.md#permissions)".into(),
        "// SET THIS VARIABLE TO THE NAME OF YOUR (ALREADY CREATED) DEPLOY USER BEFORE RUNNING `flock tools`:".into(),
        "// Config.supervisordUser = \"deploy:deploy\"".into(),
        String::new(),
        "// Optional config:".into(),
        "// Config.deployDirectory = \"/var/www\"".into(),
        "// Config.swiftVersion = \"3.0.2\" // If you have a `.swift-version` file, this line is not necessary".into(),
    ]
}

/// Wrap configuration lines in the environment's class declaration.
pub fn environment_file(env: Environment, lines: &[String]) -> String {
    let mut out = String::from("import Flock\n\n");
    out.push_str(&format!("class {}: Environment {{\n", env.class_name()));
    out.push_str("    func configure() {\n");
    for line in lines {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("        {line}\n"));
        }
    }
    out.push_str("    }\n}\n");
    out
}

/// Block appended to `.gitignore`.
pub fn gitignore_block(build_directory: &Path, packages_directory: &Path) -> String {
    [
        "",
        GITIGNORE_MARKER,
        build_directory.display().to_string().as_str(),
        packages_directory.display().to_string().as_str(),
        "",
    ]
    .join("\n")
}

/// `Package.swift` for the hidden flock directory.
pub fn package_manifest(dependencies: &DependencyList) -> String {
    let mut out = String::from("import PackageDescription\n\n");
    out.push_str("let package = Package(\n");
    out.push_str("    name: \"Flockfile\",\n");
    out.push_str("    dependencies: [\n");
    for dep in &dependencies.dependencies {
        out.push_str(&format!(
            "        .Package(url: \"{}\", majorVersion: {}),\n",
            dep.url, dep.major
        ));
    }
    out.push_str("    ]\n)\n");
    out
}
