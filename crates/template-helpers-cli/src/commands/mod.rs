//! CLI command implementations for template-helpers.
//!
//! Each module corresponds to a subcommand (`template-helpers <command>`).

pub mod embed;
pub mod jsfiddle;
pub mod read;
pub mod render;

use std::path::Path;

use anyhow::Result;
use template_helpers_core::config::HelpersConfig;

/// Load the helpers config from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<HelpersConfig> {
    match path {
        Some(path) => {
            tracing::info!("loading config from {}", path.display());
            Ok(HelpersConfig::load(path)?)
        }
        None => Ok(HelpersConfig::default()),
    }
}
