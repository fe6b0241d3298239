//! dotty-ide-core - project-model resolution for Dotty IDE clients
//!
//! This crate provides functionality to:
//! - Decode a `.dotty-ide.json` project description into typed module records
//! - Detect the active module for a file and resolve it into a build/source model
//! - Simplify compiler-emitted type signatures into terse display strings
pub mod config;
pub mod error;
pub mod resolver;
pub mod signature;

// Re-export commonly used types
pub use config::{CONFIG_FILE_NAME, ModuleRecord, ProjectConfig};
pub use error::{Error, Result};

// Re-export main API components
pub use resolver::{
    ModuleRef, ResolvedProjectView, candidate_roots, pick_active_module, resolve_module,
};
pub use signature::simplify;
