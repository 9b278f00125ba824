use crate::{
    error::{Error, Result},
    fs::TemplateFs,
    glob::match_files,
    renderer::{
        interface::ResponseRenderer,
        options::{FuncMap, FuncMapper, Options},
    },
};
use log::{debug, info, trace};
use minijinja::Environment;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

/// MiniJinja-based renderer over a template filesystem.
///
/// The base environment is built once and never mutated afterwards; every
/// render call works on its own clone, so a `Renderer` can be shared across
/// request handlers without locking.
pub struct Renderer<C = ()> {
    /// Base template set parsed from the include patterns
    env: Environment<'static>,
    /// Names parsed into the base set, sorted
    names: Vec<String>,
    fs: Arc<dyn TemplateFs>,
    funcs: Option<FuncMapper<C>>,
}

impl<C> Renderer<C> {
    /// Validates `options` and parses every template matched by the include patterns.
    ///
    /// # Errors
    /// * `Error::MissingFilesystem` if no filesystem was given
    /// * `Error::NoIncludePatterns` if the include list is empty
    /// * `Error::InvalidPattern` / `Error::PatternMatchedNothing` for a bad pattern
    /// * `Error::Parse` if a matched file is not a valid template
    pub fn new(options: Options<C>) -> Result<Self> {
        let Options { fs, include, funcs, auto_escape, undefined } = options;
        let fs = fs.ok_or(Error::MissingFilesystem)?;
        if include.is_empty() {
            return Err(Error::NoIncludePatterns);
        }

        let mut env = Environment::new();
        env.set_auto_escape_callback(move |_| auto_escape);
        env.set_undefined_behavior(undefined);
        if let Some(funcs) = &funcs {
            register_funcs(&mut env, funcs(None));
        }

        let mut names = Vec::new();
        for pattern in &include {
            debug!("Parsing templates matching '{}'", pattern);
            for name in match_files(fs.as_ref(), pattern)? {
                let source = fs.read_to_string(&name)?;
                add_template(&mut env, &name, source)?;
                names.push(name);
            }
        }
        names.sort();
        names.dedup();
        info!("Parsed {} template(s) from {} include pattern(s)", names.len(), include.len());

        Ok(Self { env, names, fs, funcs })
    }

    /// Names of the templates in the base set, sorted.
    pub fn template_names(&self) -> &[String] {
        &self.names
    }

    /// Read-only access to the base template set.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Same as [`ResponseRenderer::render`] but returns the output as a `String`.
    pub fn render_to_string<S: Serialize>(&self, name: &str, data: S, ctx: &C) -> Result<String> {
        let env = self.prepare(name, Some(ctx))?;
        let tmpl = env.get_template(name).map_err(|source| parse_error(name, source))?;
        tmpl.render(data).map_err(|source| Error::Execute { name: name.to_string(), source })
    }

    /// Builds the per-call environment: clone of the base set, request
    /// functions registered on top, and `name` re-read from the filesystem.
    fn prepare(&self, name: &str, ctx: Option<&C>) -> Result<Environment<'static>> {
        let mut env = self.env.clone();
        if let Some(funcs) = &self.funcs {
            register_funcs(&mut env, funcs(ctx));
        }
        let source = self.fs.read_to_string(name)?;
        add_template(&mut env, name, source)?;
        Ok(env)
    }
}

impl<C> ResponseRenderer<C> for Renderer<C> {
    fn render<W: Write, S: Serialize>(
        &self,
        w: W,
        name: &str,
        data: S,
        ctx: &C,
    ) -> Result<()> {
        debug!("Rendering template '{}'", name);
        let env = self.prepare(name, Some(ctx))?;
        let tmpl = env.get_template(name).map_err(|source| parse_error(name, source))?;
        tmpl.render_captured_to(data, w)
            .map_err(|source| Error::Execute { name: name.to_string(), source })?;
        Ok(())
    }
}

/// Registers functions as globals; a later registration replaces an earlier one.
fn register_funcs(env: &mut Environment<'static>, funcs: FuncMap) {
    for (name, func) in funcs {
        trace!("Registering template function '{}'", name);
        env.add_global(name, func);
    }
}

fn add_template(env: &mut Environment<'static>, name: &str, source: String) -> Result<()> {
    trace!("Parsing template '{}'", name);
    env.add_template_owned(name.to_string(), source)
        .map_err(|source| parse_error(name, source))
}

fn parse_error(name: &str, source: minijinja::Error) -> Error {
    Error::Parse { name: name.to_string(), source }
}
