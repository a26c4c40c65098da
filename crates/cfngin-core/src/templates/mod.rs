//! Template rendering for config generation
//!
//! Uses Tera templates to generate starter cfngin.yaml files.

mod context;

pub use context::{ConfigInitContext, DEFAULT_STACK_NAME};

use anyhow::Result;
use tera::Tera;
use tracing::debug;

/// Template registry for config file generation
pub struct ConfigTemplateRegistry {
    tera: Tera,
}

impl ConfigTemplateRegistry {
    /// Create a new template registry with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template("cfngin.yaml", include_str!("cfngin.yaml.tera"))?;

        Ok(Self { tera })
    }

    /// Render the cfngin.yaml template with the given context
    pub fn render_config(&self, context: &ConfigInitContext) -> Result<String> {
        debug!(
            "Rendering cfngin.yaml template for namespace: {}",
            context.namespace
        );
        let tera_context = context.to_tera_context()?;
        let rendered = self.tera.render("cfngin.yaml", &tera_context)?;
        Ok(rendered)
    }
}
