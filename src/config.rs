//! File-based renderer configuration.

use crate::constants::{CONFIG_FILENAMES, DEFAULT_TEMPLATES_DIR};
use crate::error::{Error, Result};
use crate::fs::LocalFs;
use crate::renderer::Options;
use minijinja::{AutoEscape, UndefinedBehavior};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Escaping mode applied to every template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    #[default]
    Html,
    None,
}

impl From<EscapeMode> for AutoEscape {
    fn from(mode: EscapeMode) -> Self {
        match mode {
            EscapeMode::Html => AutoEscape::Html,
            EscapeMode::None => AutoEscape::None,
        }
    }
}

/// Renderer settings read from `renderer.json`, `renderer.yaml` or `renderer.yml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    /// Template directory, relative to the directory holding the config file
    #[serde(default = "get_default_templates_dir")]
    pub templates_dir: PathBuf,
    /// Include patterns, parsed in order
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub auto_escape: EscapeMode,
    /// Fail on references to missing values
    #[serde(default = "get_default_strict")]
    pub strict: bool,
}

impl RendererConfig {
    /// Loads the first configuration file found in `dir`.
    pub fn load_config<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = dir.join(config_file_name);
            if config_file_path.exists() {
                return Self::from_file(config_file_path);
            }
        }

        Err(Error::ConfigNotFound {
            dir: dir.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }

    /// Reads a configuration file, choosing the format from its extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: RendererConfig =
            match path.extension().and_then(|extension| extension.to_str()) {
                Some("json") => serde_json::from_str(&content)?,
                Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
                _ => {
                    return Err(Error::ConfigParseError(format!(
                        "unsupported config file '{}'",
                        path.display()
                    )))
                }
            };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.include.is_empty() {
            return Err(Error::NoIncludePatterns);
        }
        if self.include.iter().any(|pattern| pattern.trim().is_empty()) {
            return Err(Error::ConfigParseError(
                "include patterns must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Builds renderer options backed by `base_dir/templates_dir`.
    pub fn into_options<C, P: AsRef<Path>>(self, base_dir: P) -> Options<C> {
        let undefined =
            if self.strict { UndefinedBehavior::Strict } else { UndefinedBehavior::Lenient };
        let mut options = Options::new(LocalFs::new(base_dir.as_ref().join(&self.templates_dir)))
            .with_auto_escape(self.auto_escape.into())
            .with_undefined(undefined);
        options.include = self.include;
        options
    }
}

fn get_default_templates_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATES_DIR)
}

fn get_default_strict() -> bool {
    true
}
