//! Injection config + script assembly.
//!
//! Internals are split into:
//! - `resources`: the `ResourceLoader` seam and its shipped implementations
//! - this module: `ScriptSource` / `InjectionConfig` and the memoized `ScriptAssembler`

mod resources;

pub use resources::{DirResourceLoader, MapResourceLoader, ResourceLoader};

use crate::core::InjectError;
use crate::core::client::constants::{SCRIPT_TAG_CLOSE, SCRIPT_TAG_OPEN};
use std::sync::{Arc, OnceLock};

/// One fragment of the injected script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// A named resource, resolved through a [`ResourceLoader`].
    File(String),
    /// Literal script text. Its kind name is `string`.
    Inline(String),
}

impl ScriptSource {
    /// Maps a `(kind, value)` pair. Unknown kinds yield `None`.
    pub fn from_pair(kind: &str, value: impl Into<String>) -> Option<Self> {
        match kind {
            "file" => Some(Self::File(value.into())),
            "string" => Some(Self::Inline(value.into())),
            _ => None,
        }
    }
}

/// Ordered list of script fragments. Fixed once handed to a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectionConfig {
    entries: Vec<ScriptSource>,
}

impl InjectionConfig {
    pub fn new(entries: Vec<ScriptSource>) -> Self {
        Self { entries }
    }

    /// Builds a config from `(kind, value)` pairs, skipping pairs with an unknown kind.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .filter_map(|(kind, value)| ScriptSource::from_pair(kind.as_ref(), value))
            .collect();
        Self { entries }
    }

    /// Decodes the array-of-pairs form: `[["file","web3"],["string","console.log(1)"]]`.
    ///
    /// `null` rows, `null` kinds or values, and unknown kinds are skipped.
    ///
    /// # Errors
    ///
    /// Returns `InjectError::Config` if the input is not an array of string arrays.
    pub fn from_json(json: &str) -> Result<Self, InjectError> {
        let rows: Vec<Option<Vec<Option<String>>>> = serde_json::from_str(json)?;
        let pairs = rows.into_iter().flatten().filter_map(|row| {
            let mut it = row.into_iter();
            let kind = it.next().flatten()?;
            let value = it.next().flatten()?;
            Some((kind, value))
        });
        Ok(Self::from_pairs(pairs))
    }

    pub fn entries(&self) -> &[ScriptSource] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Concatenates the configured fragments once and hands out the result.
pub struct ScriptAssembler {
    config: Option<InjectionConfig>,
    loader: Arc<dyn ResourceLoader>,
    blob: OnceLock<String>,
}

impl std::fmt::Debug for ScriptAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptAssembler")
            .field("config", &self.config)
            .field("assembled", &self.blob.get().is_some())
            .finish_non_exhaustive()
    }
}

impl ScriptAssembler {
    pub fn new(config: Option<InjectionConfig>, loader: Arc<dyn ResourceLoader>) -> Self {
        Self {
            config,
            loader,
            blob: OnceLock::new(),
        }
    }

    /// The concatenated script text. Built on first call, then reused.
    ///
    /// `file` entries the loader cannot resolve contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns `InjectError::MissingConfig` if no config was supplied.
    pub fn assemble(&self) -> Result<&str, InjectError> {
        let config = self.config.as_ref().ok_or(InjectError::MissingConfig)?;
        let blob = self.blob.get_or_init(|| self.build(config));
        Ok(blob.as_str())
    }

    /// The blob wrapped in `<script type="text/javascript">…</script>`.
    ///
    /// # Errors
    ///
    /// Returns `InjectError::MissingConfig` if no config was supplied.
    pub fn script_tag(&self) -> Result<String, InjectError> {
        let blob = self.assemble()?;
        Ok(format!("{SCRIPT_TAG_OPEN}{blob}{SCRIPT_TAG_CLOSE}"))
    }

    fn build(&self, config: &InjectionConfig) -> String {
        let mut out = String::new();
        for entry in config.entries() {
            match entry {
                ScriptSource::File(name) => match self.loader.load(name) {
                    Some(bytes) => out.push_str(&String::from_utf8_lossy(&bytes)),
                    None => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(resource = %name, "script resource not found, skipping");
                        if crate::core::debug_enabled() {
                            eprintln!("JSINJECT_DEBUG: script resource `{name}` not found, skipping");
                        }
                    }
                },
                ScriptSource::Inline(text) => out.push_str(text),
            }
        }
        out
    }
}
