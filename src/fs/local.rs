use crate::constants::NAME_SEPARATOR;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::fs::{interface::TemplateFs, validate_name};
use log::trace;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Templates stored in a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    /// Creates a filesystem rooted at `root`.
    ///
    /// The directory is read lazily, so files added or edited later are
    /// visible to subsequent reads.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(Error::TemplateDirNotFound {
                dir: self.root.display().to_string(),
            });
        }
        Ok(())
    }
}

impl TemplateFs for LocalFs {
    fn read_to_string(&self, name: &str) -> Result<String> {
        validate_name(name)?;
        self.ensure_root()?;
        let path = name
            .split(NAME_SEPARATOR)
            .fold(self.root.clone(), |path, segment| path.join(segment));
        trace!("Reading template '{}' from '{}'.", name, path.display());

        match std::fs::read_to_string(&path) {
            Ok(source) => Ok(source),
            Err(e) if e.kind() == ErrorKind::NotFound || path.is_dir() => {
                Err(Error::TemplateNotFound { name: name.to_string() })
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                Err(Error::InvalidTemplateEncoding { name: name.to_string() })
            }
            Err(source) => Err(Error::TemplateRead { name: name.to_string(), source }),
        }
    }

    fn file_names(&self) -> Result<Vec<String>> {
        self.ensure_root()?;
        let mut names = Vec::new();
        // Follow symlinks so templates reachable via symlinked folders are listed.
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(&self.root).map_err(|_| {
                Error::InvalidTemplatePath { name: entry.path().display().to_string() }
            })?;
            names.push(relative.to_template_name()?);
        }
        names.sort();
        Ok(names)
    }
}
