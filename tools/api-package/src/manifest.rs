//! The `package.json` manifest for the Flow API app
//!
//! Field order is part of the output format, so every table is an
//! insertion-ordered map and the struct fields are declared in the order
//! they must appear in the file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Package name -> semver range, in declaration order
pub type DependencyTable = IndexMap<String, String>;

const DEPENDENCIES: &[(&str, &str)] = &[
    ("@nestjs/common", "^10.0.0"),
    ("@nestjs/core", "^10.0.0"),
    ("@nestjs/platform-express", "^10.0.0"),
    ("reflect-metadata", "^0.2.0"),
    ("rxjs", "^7.8.1"),
];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@nestjs/cli", "^10.4.5"),
    ("@nestjs/schematics", "^10.1.2"),
    ("@nestjs/testing", "^10.0.0"),
    ("typescript", "^5.4.0"),
    ("ts-node", "^10.9.1"),
    ("tsconfig-paths", "^4.2.0"),
    ("eslint", "^8.57.0"),
    ("@typescript-eslint/eslint-plugin", "^7.0.0"),
    ("@typescript-eslint/parser", "^7.0.0"),
];

/// Node.js package manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub private: bool,
    /// Module system (`"module"` for ESM)
    #[serde(rename = "type")]
    pub module_type: String,
    pub scripts: Scripts,
    pub dependencies: DependencyTable,
    pub dev_dependencies: DependencyTable,
}

/// npm run scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripts {
    #[serde(rename = "start:dev")]
    pub start_dev: String,
    pub build: String,
    pub lint: String,
}

impl PackageManifest {
    /// The manifest for the NestJS API app
    pub fn api() -> Self {
        Self {
            name: "api".to_string(),
            private: true,
            module_type: "module".to_string(),
            scripts: Scripts {
                start_dev: "nest start --watch".to_string(),
                build: "nest build".to_string(),
                lint: r#"eslint "src/**/*.ts""#.to_string(),
            },
            dependencies: dependency_table(DEPENDENCIES),
            dev_dependencies: dependency_table(DEV_DEPENDENCIES),
        }
    }
}

fn dependency_table(entries: &[(&str, &str)]) -> DependencyTable {
    entries
        .iter()
        .map(|(name, range)| (name.to_string(), range.to_string()))
        .collect()
}
