//! Content loaders for reading match data from files.
//!
//! Every loader offers `load(path)` for files and `parse(text)` for in-memory
//! data; the attack loader also ships an embedded default library.

pub mod attacks;
pub mod config;
pub mod fighters;

pub use attacks::AttackLoader;
pub use config::ConfigLoader;
pub use fighters::{FighterLoader, FighterSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
