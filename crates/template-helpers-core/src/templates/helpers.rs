//! Handlebars bindings for the [`code`](crate::code) and [`fs`](crate::fs) helpers.
//!
//! All helpers write raw HTML to the output, so `{{embed ...}}` and
//! `{{jsfiddle ...}}` are never entity-escaped by the template engine.
//!
//! Handlebars hands hash arguments over sorted by name, so
//! `{{jsfiddle id="abc" width="500" height="400"}}` emits `height` before
//! `width`. Pass an object from the data context to control attribute order.

use std::sync::Arc;

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderErrorReason,
};
use serde_json::{Map, Value};

use crate::code;
use crate::config::HelpersConfig;
use crate::fs;
use crate::group::HelperGroup;

/// Register the helpers of every group in `config.groups` on `hbs`.
pub fn register_helpers(hbs: &mut Handlebars<'_>, config: &HelpersConfig) {
    let config = Arc::new(config.clone());
    for group in &config.groups {
        tracing::debug!("registering {group} helpers: {:?}", group.helper_names());
        match group {
            HelperGroup::Code => {
                hbs.register_helper("embed", Box::new(EmbedHelper::new(config.clone())));
                hbs.register_helper("jsfiddle", Box::new(JsFiddleHelper::new(config.clone())));
            }
            HelperGroup::Fs => {
                hbs.register_helper("read", Box::new(ReadHelper::new(config.clone())));
            }
        }
    }
}

/// `{{embed "path/to/file.js"}}` or `{{embed "path/to/file.hbs" "html"}}`.
pub struct EmbedHelper {
    config: Arc<HelpersConfig>,
}

impl EmbedHelper {
    pub fn new(config: Arc<HelpersConfig>) -> Self {
        Self { config }
    }
}

impl HelperDef for EmbedHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let param = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex("embed", 0))?;
        let path = param.value().as_str().ok_or_else(|| {
            RenderErrorReason::ParamTypeMismatchForName("embed", "0".into(), "string".into())
        })?;
        // Non-string languages fall back to the file extension.
        let language = h.param(1).and_then(|p| p.value().as_str());

        let block = code::embed(self.config.resolve(path), language).map_err(|e| {
            let message = match std::error::Error::source(&e) {
                Some(source) => format!("{e}: {source}"),
                None => e.to_string(),
            };
            RenderErrorReason::Other(message)
        })?;
        out.write(&block)?;
        Ok(())
    }
}

/// `{{jsfiddle fiddle}}` or `{{jsfiddle id="0dfk10ks" height="400"}}`.
///
/// Hash arguments arrive in name order; a positional object keeps its own order.
pub struct JsFiddleHelper {
    config: Arc<HelpersConfig>,
}

impl JsFiddleHelper {
    pub fn new(config: Arc<HelpersConfig>) -> Self {
        Self { config }
    }
}

impl HelperDef for JsFiddleHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let attrs = match h.param(0) {
            Some(param) => param.value().clone(),
            None if !h.hash().is_empty() => Value::Object(
                h.hash()
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.value().clone()))
                    .collect::<Map<String, Value>>(),
            ),
            None => Value::Null,
        };
        out.write(&code::jsfiddle_with(&attrs, &self.config.jsfiddle))?;
        Ok(())
    }
}

/// `{{read "path/to/file"}}`. Missing files render as nothing.
pub struct ReadHelper {
    config: Arc<HelpersConfig>,
}

impl ReadHelper {
    pub fn new(config: Arc<HelpersConfig>) -> Self {
        Self { config }
    }
}

impl HelperDef for ReadHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        if let Some(path) = h.param(0).and_then(|p| p.value().as_str()) {
            out.write(&fs::read(self.config.resolve(path)))?;
        }
        Ok(())
    }
}
