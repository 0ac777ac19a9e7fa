//! File system adapters

mod artifacts;

pub use artifacts::FsArtifactLocator;
