//! Core library for template-helpers.
//!
//! Helpers for template-rendering pipelines:
//! - [`code::embed`]: embed a file as a language-tagged code block
//! - [`code::jsfiddle`]: build an embedded jsFiddle `<iframe>` from loose template data
//! - [`fs::read`]: read a file, falling back to an empty string
//!
//! The [`templates`] module registers them as Handlebars helpers, grouped by
//! [`group::HelperGroup`] and configured through [`config::HelpersConfig`].

pub mod code;
pub mod config;
pub mod error;
pub mod fs;
pub mod group;
pub mod render;
pub mod templates;
