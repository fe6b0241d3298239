//! Active-module detection and project-model resolution
//!
//! Resolution never fails when at least one record exists: an unknown or
//! empty target module falls back to the first record so that project
//! activation always lands on some module.

use crate::config::ModuleRecord;
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Module id of the conventional test sibling
const TEST_MODULE: &str = "test";

/// Reference to a sibling module under the same project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRef {
    pub project_root: PathBuf,
    pub module: String,
}

/// Normalized build/source model for one resolved module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProjectView {
    pub source_roots: BTreeSet<PathBuf>,
    pub output_directory: PathBuf,
    pub build_classpath: Vec<PathBuf>,
    pub exec_classpath: Vec<PathBuf>,
    pub display_name: String,
    pub test_root: Option<ModuleRef>,
}

/// Candidate roots for [`pick_active_module`]: the ancestor directories of
/// `file_path` relative to `project_root`, from the file's parent up to (but
/// not including) the root itself. Empty when the file is not under the root.
pub fn candidate_roots(project_root: &Path, file_path: &Path) -> BTreeSet<PathBuf> {
    let Ok(relative) = file_path.strip_prefix(project_root) else {
        return BTreeSet::new();
    };
    relative
        .ancestors()
        .skip(1) // the file itself is not a root
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .collect()
}

/// Determine which module is active for the given candidate roots.
///
/// Returns the derived module of the first record (in file order) whose
/// source directories intersect `candidate_roots`, or an empty string when
/// no record matches. First match in record order wins.
pub fn pick_active_module(records: &[ModuleRecord], candidate_roots: &BTreeSet<PathBuf>) -> String {
    for record in records {
        let matched = record
            .source_directories
            .iter()
            .any(|dir| candidate_roots.contains(Path::new(dir)));
        if matched {
            tracing::debug!(module = record.module(), "detected active module");
            return record.module().to_string();
        }
    }
    tracing::debug!("no active module detected");
    String::new()
}

/// Resolve `target_module_id` into a normalized project view.
///
/// Selects the first record whose derived module equals the target; when no
/// record matches (including an empty target), falls back to the first
/// record. Fails only when `records` is empty.
pub fn resolve_module(
    records: &[ModuleRecord],
    target_module_id: &str,
    project_root: &Path,
) -> Result<ResolvedProjectView> {
    let first = records
        .first()
        .ok_or_else(|| Error::ConfigError("Project description contains no modules".to_string()))?;

    let selected = match records.iter().find(|r| r.module() == target_module_id) {
        Some(record) => record,
        None => {
            tracing::debug!(
                target = target_module_id,
                fallback = first.module(),
                "no matching module, falling back to first record"
            );
            first
        }
    };

    let source_roots = selected
        .source_directories
        .iter()
        .map(|dir| project_root.join(dir))
        .collect();
    let output_directory = project_root.join(&selected.class_directory);

    // Classpath entries pass through unresolved
    let build_classpath: Vec<PathBuf> = selected
        .dependency_classpath
        .iter()
        .map(PathBuf::from)
        .collect();
    let exec_classpath = build_classpath.clone();

    let root_name = project_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let display_name = format!("{root_name}#{}", selected.module());

    let is_primary = selected.module() != TEST_MODULE;
    let has_test_sibling = records.iter().any(|r| r.module() == TEST_MODULE);
    let test_root = (is_primary && has_test_sibling).then(|| ModuleRef {
        project_root: project_root.to_path_buf(),
        module: TEST_MODULE.to_string(),
    });

    Ok(ResolvedProjectView {
        source_roots,
        output_directory,
        build_classpath,
        exec_classpath,
        display_name,
        test_root,
    })
}
