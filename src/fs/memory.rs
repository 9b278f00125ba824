use crate::error::{Error, Result};
use crate::fs::{interface::TemplateFs, validate_name};
use indexmap::IndexMap;

/// Templates held in memory, keyed by template name.
///
/// Useful for tests and for binaries that embed their templates.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: IndexMap<String, String>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, replacing any previous file with the same name.
    pub fn with_file(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(name, source);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.files.insert(name.into(), source.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<N: Into<String>, S: Into<String>> FromIterator<(N, S)> for MemoryFs {
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        let mut fs = MemoryFs::new();
        for (name, source) in iter {
            fs.insert(name, source);
        }
        fs
    }
}

impl TemplateFs for MemoryFs {
    fn read_to_string(&self, name: &str) -> Result<String> {
        validate_name(name)?;
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| Error::TemplateNotFound { name: name.to_string() })
    }

    fn file_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.files.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
