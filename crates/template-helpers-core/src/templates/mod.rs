//! Handlebars integration for the template helpers.
//!
//! [`helpers`] wraps each helper function in a [`handlebars::HelperDef`] and
//! registers them by [`HelperGroup`](crate::group::HelperGroup);
//! [`renderer::TemplateRenderer`] owns a configured Handlebars registry.
//!
//! ## Helpers
//!
//! - `{{embed "path/to/file.js"}}`: the file as a fenced code block. A second
//!   string parameter overrides the language tag.
//! - `{{jsfiddle id="0dfk10ks"}}` or `{{jsfiddle fiddle}}`: an embedded
//!   jsFiddle `<iframe>`.
//! - `{{read "path/to/file"}}`: the file contents, or nothing if it cannot be read.
//!
//! Relative paths resolve against [`HelpersConfig::base_dir`](crate::config::HelpersConfig::base_dir).

pub mod helpers;
pub mod renderer;
