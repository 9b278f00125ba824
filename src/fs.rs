//! Virtual filesystems that supply template sources.
//!
//! Template names are always relative, `/`-separated paths such as
//! `shared/nav.tmpl`, independent of the host platform.

use crate::constants::NAME_SEPARATOR;
use crate::error::{Error, Result};

pub mod interface;
pub mod local;
pub mod memory;

pub use interface::TemplateFs;
pub use local::LocalFs;
pub use memory::MemoryFs;

/// Checks that `name` is a valid template name.
///
/// Valid names are non-empty, relative and made of non-empty segments other
/// than `.` and `..`. Backslashes are rejected so a name means the same thing
/// on every platform.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.contains('\\')
        || name.split(NAME_SEPARATOR).any(|segment| {
            segment.is_empty() || segment == "." || segment == ".."
        });
    if invalid {
        return Err(Error::InvalidTemplatePath { name: name.to_string() });
    }
    Ok(())
}
