//! Workspace facade re-exporting the dotty-ide-core API

pub use dotty_ide_core::*;
