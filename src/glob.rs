use crate::error::{Error, Result};
use crate::fs::TemplateFs;
use globset::{GlobBuilder, GlobMatcher};
use log::debug;

/// Compiles a shell-style include pattern.
///
/// `*` and `?` never match `/`, so `*.tmpl` only selects files at the root and
/// `shared/*.tmpl` only files directly inside `shared`.
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(pattern).literal_separator(true).build()?;
    Ok(glob.compile_matcher())
}

/// Resolves an include pattern against a template filesystem.
///
/// # Arguments
/// * `fs` - Filesystem to search
/// * `pattern` - Shell-style glob relative to the filesystem root
///
/// # Returns
/// * `Result<Vec<String>>` - Matching template names, sorted lexically
///
/// # Errors
/// * `Error::InvalidPattern` if the pattern does not compile
/// * `Error::PatternMatchedNothing` if no file matches
pub fn match_files(fs: &dyn TemplateFs, pattern: &str) -> Result<Vec<String>> {
    let matcher = compile_pattern(pattern)?;
    let matches: Vec<String> =
        fs.file_names()?.into_iter().filter(|name| matcher.is_match(name)).collect();

    if matches.is_empty() {
        return Err(Error::PatternMatchedNothing { pattern: pattern.to_string() });
    }
    debug!("Include pattern '{}' matched {:?}", pattern, matches);
    Ok(matches)
}
