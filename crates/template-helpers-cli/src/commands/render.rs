use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use template_helpers_core::config::HelpersConfig;
use template_helpers_core::group::HelperGroup;
use template_helpers_core::templates::renderer::TemplateRenderer;

use crate::output;

/// Render `template` and print or write the result.
///
/// `helpers` and `base_dir` override the matching config fields. Without a
/// `base_dir` anywhere, helper paths resolve against the template's directory.
pub fn run(
    mut config: HelpersConfig,
    template: &Path,
    data: Option<&Path>,
    helpers: Option<&str>,
    base_dir: Option<PathBuf>,
    output_path: Option<&Path>,
) -> Result<()> {
    if let Some(list) = helpers {
        config.groups = HelperGroup::parse_list(list)?;
    }
    if base_dir.is_some() {
        config.base_dir = base_dir;
    }
    if config.base_dir.is_none() {
        config.base_dir = template.parent().map(Path::to_path_buf);
    }

    let data = load_data(data)?;
    let rendered = TemplateRenderer::with_config(&config).render_file(template, &data)?;

    match output_path {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            output::print_success(&format!("wrote {}", path.display()));
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Read the JSON data context, or an empty object.
fn load_data(path: Option<&Path>) -> Result<Value> {
    let Some(path) = path else {
        return Ok(Value::Object(Default::default()));
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read data file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse data file {}", path.display()))
}
