//! Filesystem-backed template rendering for web responses.
//!
//! A [`Renderer`] parses every template matched by its include patterns once,
//! then serves render calls from an isolated copy of that base set.

pub mod engine;
pub mod interface;
pub mod options;

pub use engine::Renderer;
pub use interface::ResponseRenderer;
pub use options::{FuncMap, FuncMapper, Options};
