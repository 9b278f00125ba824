use crate::fs::TemplateFs;
use indexmap::IndexMap;
use minijinja::{AutoEscape, UndefinedBehavior, Value};
use std::fmt;
use std::sync::Arc;

/// Functions made available to templates, keyed by the name templates call them by.
///
/// Values are expected to be callables built with [`Value::from_function`].
pub type FuncMap = IndexMap<String, Value>;

/// Builds a [`FuncMap`] for one render call.
///
/// Called once with `None` while the renderer is built, then with the request
/// context of every render call.
pub type FuncMapper<C> = Arc<dyn Fn(Option<&C>) -> FuncMap + Send + Sync>;

/// Configuration for [`Renderer`](super::Renderer).
///
/// `C` is the request context type handed to the [`FuncMapper`].
pub struct Options<C = ()> {
    /// Filesystem holding the templates. Required.
    pub fs: Option<Arc<dyn TemplateFs>>,
    /// Glob patterns parsed in order when the renderer is built. At least one is required.
    pub include: Vec<String>,
    /// Optional per-request function map factory.
    pub funcs: Option<FuncMapper<C>>,
    /// Escaping applied to every template.
    pub auto_escape: AutoEscape,
    /// How references to missing values behave during execution.
    pub undefined: UndefinedBehavior,
}

impl<C> Options<C> {
    /// Creates options for templates stored in `fs`.
    pub fn new<F: TemplateFs + 'static>(fs: F) -> Self {
        Self { fs: Some(Arc::new(fs)), ..Self::default() }
    }

    /// Appends an include pattern.
    pub fn with_include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    /// Sets the per-request function map factory.
    pub fn with_funcs<F>(mut self, funcs: F) -> Self
    where
        F: Fn(Option<&C>) -> FuncMap + Send + Sync + 'static,
    {
        self.funcs = Some(Arc::new(funcs));
        self
    }

    pub fn with_auto_escape(mut self, auto_escape: AutoEscape) -> Self {
        self.auto_escape = auto_escape;
        self
    }

    pub fn with_undefined(mut self, undefined: UndefinedBehavior) -> Self {
        self.undefined = undefined;
        self
    }
}

impl<C> Default for Options<C> {
    fn default() -> Self {
        Self {
            fs: None,
            include: Vec::new(),
            funcs: None,
            auto_escape: AutoEscape::Html,
            undefined: UndefinedBehavior::Strict,
        }
    }
}

impl<C> Clone for Options<C> {
    fn clone(&self) -> Self {
        Self {
            fs: self.fs.clone(),
            include: self.include.clone(),
            funcs: self.funcs.clone(),
            auto_escape: self.auto_escape,
            undefined: self.undefined,
        }
    }
}

impl<C> fmt::Debug for Options<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("fs", &self.fs.is_some())
            .field("include", &self.include)
            .field("funcs", &self.funcs.is_some())
            .field("auto_escape", &self.auto_escape)
            .field("undefined", &self.undefined)
            .finish()
    }
}
