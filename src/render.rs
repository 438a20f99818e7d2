//! Rendering seam for the HTML response mode.
//!
//! The handler hands a template identifier and a JSON context to a
//! [`RenderPages`] implementation and gets back a rendered page. The
//! production implementation resolves templates from a directory on
//! disk; how a template uses the context is entirely its business.

use std::path::Path;

use minijinja::{path_loader, Environment};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("failed to render page: {0}")]
    Render(#[from] minijinja::Error),
}

pub(crate) trait RenderPages: Send + Sync {
    /// Renders the template identified by `template` against `context`.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, Error>;
}

pub(crate) struct TemplateDir {
    env: Environment<'static>,
}

impl TemplateDir {
    pub(crate) fn new<P: AsRef<Path>>(dir: P) -> TemplateDir {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));

        TemplateDir { env }
    }
}

impl RenderPages for TemplateDir {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, Error> {
        let template = self.env.get_template(&format!("{}.html", template))?;

        Ok(template.render(context)?)
    }
}
