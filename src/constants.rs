//! Constants used throughout the renderer

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["renderer.json", "renderer.yaml", "renderer.yml"];

/// Default directory holding templates, relative to the configuration file
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Path separator used for template names regardless of platform
pub const NAME_SEPARATOR: char = '/';

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
