use std::path::{Path, PathBuf};

/// Handle to the on-disk document store. Cheap to clone; every operation is
/// scoped under the root directory.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn resolve(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}
