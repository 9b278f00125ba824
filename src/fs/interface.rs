use crate::error::Result;

/// A read-only source of template files.
///
/// Implementations are shared by every render call, so reads must be safe
/// from many threads at once.
pub trait TemplateFs: Send + Sync {
    /// Reads the source of the template called `name`.
    ///
    /// # Returns
    /// * `Result<String>` - Template source
    ///
    /// # Errors
    /// * `Error::InvalidTemplatePath` if `name` is not a valid template name
    /// * `Error::TemplateNotFound` if no such file exists
    /// * `Error::InvalidTemplateEncoding` if the file is not valid UTF-8
    fn read_to_string(&self, name: &str) -> Result<String>;

    /// Lists the names of every file, sorted lexically.
    fn file_names(&self) -> Result<Vec<String>>;
}
