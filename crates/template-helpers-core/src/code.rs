//! Code helpers: embed a file as a code block, and build jsFiddle iframes.
//!
//! ```ignore
//! use template_helpers_core::code;
//!
//! // language derived from the extension
//! let block = code::embed("path/to/file.js", None)?;
//! // explicit language
//! let block = code::embed("path/to/file.hbs", Some("html"))?;
//!
//! let iframe = code::jsfiddle(&serde_json::json!({ "id": "0dfk10ks" }));
//! ```

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::config::JsFiddleDefaults;
use crate::error::{HelperError, Result};
use crate::render::{to_attributes, AttributeSet, CodeBlock};

/// Keys used to derive `src` that are never emitted as attributes.
const INTERNAL_KEYS: [&str; 3] = ["id", "tabs", "skin"];

/// Markdown replacement for a backtick. No trailing `;`.
const BACKTICK_ENTITY: &str = "&#x60";

/// Embed the contents of `path` as a fenced code block followed by a newline.
///
/// Without a `language`, the file extension (minus the dot) is used, or an
/// empty tag when there is none. Markdown content (`md`, `markdown`) has its
/// backticks replaced so the block cannot be closed from inside.
///
/// Read failures propagate as [`HelperError::ReadFile`].
pub fn embed(path: impl AsRef<Path>, language: Option<&str>) -> Result<String> {
    let path = path.as_ref();
    let language = match language {
        Some(lang) => lang.to_string(),
        None => language_for(path),
    };

    tracing::debug!("embedding {} as '{language}'", path.display());

    let mut code = std::fs::read_to_string(path).map_err(|e| HelperError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    if is_markdown(&language) {
        code = code.replace('`', BACKTICK_ENTITY);
    }

    Ok(format!("{}\n", CodeBlock::new(code, language)))
}

/// Language tag implied by the extension of `path`.
pub fn language_for(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_markdown(language: &str) -> bool {
    language == "md" || language == "markdown"
}

/// Generate the HTML for an embedded jsFiddle from `config`.
///
/// Returns an empty string unless `config` is a JSON object. The input is
/// never modified.
pub fn jsfiddle(config: &Value) -> String {
    jsfiddle_with(config, &JsFiddleDefaults::default())
}

/// [`jsfiddle`] with caller-provided defaults.
pub fn jsfiddle_with(config: &Value, defaults: &JsFiddleDefaults) -> String {
    JsFiddle::from_value(config, defaults)
        .map(|fiddle| fiddle.to_iframe())
        .unwrap_or_default()
}

/// A validated jsFiddle embed.
///
/// Holds the attributes that will be emitted: caller attributes in their
/// original order, then any filled-in defaults, with `src` derived and the
/// internal `id`/`tabs`/`skin` keys removed.
#[derive(Debug, Clone, PartialEq)]
pub struct JsFiddle {
    attributes: AttributeSet,
}

impl JsFiddle {
    /// Build from loosely-typed template data. Anything but a JSON object yields `None`.
    pub fn from_value(config: &Value, defaults: &JsFiddleDefaults) -> Option<Self> {
        match config {
            Value::Object(map) => Some(Self::from_attributes(AttributeSet::from_object(map), defaults)),
            other => {
                tracing::debug!("jsfiddle expects an object, got {other}");
                None
            }
        }
    }

    /// Apply defaults to `attrs` and derive `src`.
    pub fn from_attributes(mut attrs: AttributeSet, defaults: &JsFiddleDefaults) -> Self {
        let id = format!(
            "{}{}",
            defaults.base_url,
            attrs.truthy("id").map(|v| v.to_string()).unwrap_or_default()
        );
        attrs.set("id", id.clone());
        attrs.fill("width", &defaults.width);
        attrs.fill("height", &defaults.height);
        attrs.fill("skin", &defaults.skin);

        let skin = attrs.get("skin").map(|v| v.to_string()).unwrap_or_default();
        let tabs = match attrs.truthy("tabs") {
            Some(tabs) => format!("{tabs}{skin}"),
            None => format!("{}{skin}", defaults.tabs),
        };
        attrs.set("tabs", tabs.clone());
        attrs.set("src", format!("{id}/embedded/{tabs}"));
        attrs.fill("allowfullscreen", &defaults.allowfullscreen);
        attrs.fill("frameborder", &defaults.frameborder);

        Self {
            attributes: attrs.without(&INTERNAL_KEYS),
        }
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// The derived embed URL.
    pub fn src(&self) -> String {
        self.attributes
            .get("src")
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    pub fn to_iframe(&self) -> String {
        format!("<iframe {}></iframe>", to_attributes(&self.attributes))
    }
}

impl fmt::Display for JsFiddle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iframe())
    }
}
