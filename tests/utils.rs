use page_renderer::fs::MemoryFs;
use std::fs;
use std::path::Path;

/// Writes `files` (name, source) under `root`, creating parent directories.
#[allow(dead_code)]
pub fn write_templates(root: &Path, files: &[(&str, &str)]) {
    for (name, source) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, source).unwrap();
    }
}

/// Builds an in-memory filesystem from (name, source) pairs.
#[allow(dead_code)]
pub fn memory_fs(files: &[(&str, &str)]) -> MemoryFs {
    files.iter().map(|(name, source)| (*name, *source)).collect()
}
