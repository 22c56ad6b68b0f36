//! Handlebars renderer with the template helpers registered.
//!
//! Strict mode is enabled by default: any `{{variable}}` referenced in a
//! template must be present in the data context, otherwise rendering returns
//! an error. It can be turned off through [`HelpersConfig::strict_mode`].
//!
//! ## Usage
//!
//! ```ignore
//! use template_helpers_core::templates::renderer::TemplateRenderer;
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "fiddle": { "id": "0dfk10ks" } });
//! let output = renderer.render("{{jsfiddle fiddle}}", &data)?;
//! ```

use std::path::Path;

use handlebars::Handlebars;
use serde_json::Value;

use crate::config::HelpersConfig;
use crate::error::{HelperError, Result};
use crate::templates::helpers;

/// Template renderer with `embed`, `jsfiddle` and `read` available.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
    helper_names: Vec<&'static str>,
}

impl TemplateRenderer {
    /// Create a renderer with strict mode and every helper group.
    pub fn new() -> Self {
        Self::with_config(&HelpersConfig::default())
    }

    /// Create a renderer from `config`.
    pub fn with_config(config: &HelpersConfig) -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(config.strict_mode);
        helpers::register_helpers(&mut hbs, config);
        let helper_names = config
            .groups
            .iter()
            .flat_map(|group| group.helper_names().iter().copied())
            .collect();
        Self { hbs, helper_names }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| HelperError::TemplateRender(e.to_string()))
    }

    /// Render the template stored at `path`.
    pub fn render_file(&self, path: &Path, data: &Value) -> Result<String> {
        let template = std::fs::read_to_string(path).map_err(|e| HelperError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::info!("rendering {}", path.display());
        self.render(&template, data)
    }

    /// Whether the helper `name` was registered by one of the configured groups.
    pub fn has_helper(&self, name: &str) -> bool {
        self.helper_names.iter().any(|n| *n == name)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
