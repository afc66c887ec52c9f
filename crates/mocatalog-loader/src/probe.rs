//! Filesystem existence checks

use std::path::Path;

/// Answers whether a catalog file exists at a path.
pub trait FileProbe: Send + Sync {
    /// True when `path` names an existing regular file.
    fn exists(&self, path: &str) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }
}

impl<F> FileProbe for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}
