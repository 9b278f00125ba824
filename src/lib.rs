//! Filesystem-backed HTML template rendering for web frameworks.
//!
//! Build a [`Renderer`] once at startup from [`Options`], then hand it to the
//! framework, which calls [`ResponseRenderer::render`] for every templated
//! response.
//!
//! ```
//! use page_renderer::{fs::MemoryFs, Options, Renderer, ResponseRenderer};
//! use serde_json::json;
//!
//! let fs = MemoryFs::new().with_file("home.tmpl", "Hello, {{ Name }}!");
//! let renderer: Renderer = Renderer::new(Options::new(fs).with_include("*.tmpl")).unwrap();
//!
//! let mut body = Vec::new();
//! renderer.render(&mut body, "home.tmpl", json!({ "Name": "World" }), &()).unwrap();
//! assert_eq!(body, b"Hello, World!");
//! ```

/// Handles argument parsing for the preview binary.
pub mod cli;

/// File-based renderer configuration.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Virtual filesystems supplying template sources.
pub mod fs;

/// Include pattern resolution.
pub mod glob;

/// Template parsing and rendering.
pub mod renderer;

pub use error::{Error, Result};
pub use renderer::{FuncMap, FuncMapper, Options, Renderer, ResponseRenderer};
