use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// File name of the project description, kept hidden at the project root
pub const CONFIG_FILE_NAME: &str = ".dotty-ide.json";

/// One compilable unit in a multi-module project description
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    pub id: String,
    pub compiler_version: String,
    #[serde(default)]
    pub compiler_arguments: Vec<String>,
    #[serde(default)]
    pub source_directories: Vec<String>,
    #[serde(default)]
    pub dependency_classpath: Vec<String>,
    pub class_directory: String,
}

impl ModuleRecord {
    /// Module join key: the record id with a single leading `root/` scope removed
    pub fn module(&self) -> &str {
        self.id.strip_prefix("root/").unwrap_or(&self.id)
    }
}

/// A decoded project description: the ordered module record sequence
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ProjectConfig {
    records: Vec<ModuleRecord>,
}

impl ProjectConfig {
    /// Load the project description stored at `<project_root>/.dotty-ide.json`
    pub fn load_from_root(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE_NAME);
        let contents = std::fs::read_to_string(&path)?;
        Self::from_json(&contents)
    }

    /// Decode an already-read project description document
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse project description: {e}")))?;
        if config.records.is_empty() {
            return Err(Error::ConfigError(
                "Project description contains no modules".to_string(),
            ));
        }
        Ok(config)
    }

    /// Module records in file order
    pub fn records(&self) -> &[ModuleRecord] {
        &self.records
    }
}
