//! Project description decoding for dotty-ide-core

mod records;

// Re-export main types
pub use records::{CONFIG_FILE_NAME, ModuleRecord, ProjectConfig};
