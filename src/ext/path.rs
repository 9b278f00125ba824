use std::path::{Component, Path};

use crate::constants::NAME_SEPARATOR;
use crate::error::{Error, Result};

/// Extension trait for Path to convert filesystem paths into template names
pub trait PathExt {
    /// Converts a relative path to a `/`-separated template name.
    ///
    /// Only normal components are accepted, so the result never escapes the
    /// template root and is the same on every platform.
    ///
    /// # Examples
    /// ```
    /// use page_renderer::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("shared").join("nav.tmpl");
    /// assert_eq!(path.to_template_name().unwrap(), "shared/nav.tmpl");
    /// ```
    fn to_template_name(&self) -> Result<String>;
}

impl PathExt for Path {
    fn to_template_name(&self) -> Result<String> {
        let mut segments = Vec::new();
        for component in self.components() {
            match component {
                Component::Normal(segment) => {
                    let segment = segment.to_str().ok_or_else(|| {
                        Error::InvalidTemplatePath { name: self.display().to_string() }
                    })?;
                    segments.push(segment);
                }
                _ => {
                    return Err(Error::InvalidTemplatePath {
                        name: self.display().to_string(),
                    })
                }
            }
        }
        if segments.is_empty() {
            return Err(Error::InvalidTemplatePath { name: self.display().to_string() });
        }
        Ok(segments.join(&NAME_SEPARATOR.to_string()))
    }
}
