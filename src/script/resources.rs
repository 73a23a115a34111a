//! Where `file` script entries come from.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Resolves a resource name to its bytes.
///
/// Returning `None` means "not found"; the assembler skips the entry.
pub trait ResourceLoader: Send + Sync {
    fn load(&self, name: &str) -> Option<Vec<u8>>;
}

/// In-memory resources, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MapResourceLoader {
    resources: HashMap<String, Vec<u8>>,
}

impl MapResourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a resource.
    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.resources.insert(name.into(), bytes.into());
    }
}

impl ResourceLoader for MapResourceLoader {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        self.resources.get(name).cloned()
    }
}

/// Resources read from a directory: `name` maps to `<root>/<name>` or `<root>/<name>.js`.
///
/// Names are flat identifiers; anything that would leave `root` is treated as not found.
#[derive(Debug, Clone)]
pub struct DirResourceLoader {
    root: PathBuf,
}

impl DirResourceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_flat_name(name: &str) -> bool {
        let mut components = Path::new(name).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) && !name.contains(['/', '\\'])
    }
}

impl ResourceLoader for DirResourceLoader {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        if !Self::is_flat_name(name) {
            return None;
        }
        let exact = self.root.join(name);
        let path = if exact.is_file() {
            exact
        } else {
            self.root.join(format!("{name}.js"))
        };

        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(path = %path.display(), error = %e, "failed to read script resource");
                if crate::core::debug_enabled() {
                    eprintln!("JSINJECT_DEBUG: failed to read {}: {e}", path.display());
                }
                None
            }
        }
    }
}
