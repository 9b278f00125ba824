use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

/// The rendering capability a web framework delegates HTML responses to.
///
/// The framework sets the status code and content type itself, then calls
/// `render` once per response.
pub trait ResponseRenderer<C> {
    /// Renders the template called `name` against `data` into `w`.
    ///
    /// # Arguments
    /// * `w` - Sink receiving the rendered output
    /// * `name` - Template name, a path relative to the template filesystem root
    /// * `data` - Value the template is executed against
    /// * `ctx` - Request context, forwarded to the function map factory only
    ///
    /// # Returns
    /// * `Result<()>` - Success once the whole output was written
    ///
    /// Output written before an execution error stays in `w`.
    fn render<W: Write, S: Serialize>(
        &self,
        w: W,
        name: &str,
        data: S,
        ctx: &C,
    ) -> Result<()>;
}

impl<C, R: ResponseRenderer<C>> ResponseRenderer<C> for Arc<R> {
    fn render<W: Write, S: Serialize>(
        &self,
        w: W,
        name: &str,
        data: S,
        ctx: &C,
    ) -> Result<()> {
        (**self).render(w, name, data, ctx)
    }
}
