//! Helper configuration, stored as JSON.
//!
//! ```json
//! {
//!   "base_dir": "docs",
//!   "strict_mode": true,
//!   "groups": ["code", "fs"],
//!   "jsfiddle": { "base_url": "http://jsfiddle.net/", "height": "300" }
//! }
//! ```
//!
//! Every field is optional; missing fields take their [`Default`] values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HelperError, Result};
use crate::group::HelperGroup;

/// Settings shared by all helpers registered on a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
    /// Directory that relative paths passed to `embed` and `read` resolve against.
    /// `None` resolves against the process working directory.
    pub base_dir: Option<PathBuf>,
    /// Fail rendering on variables missing from the data context.
    pub strict_mode: bool,
    /// Helper groups to register.
    pub groups: Vec<HelperGroup>,
    /// Defaults for the `jsfiddle` helper.
    pub jsfiddle: JsFiddleDefaults,
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            strict_mode: true,
            groups: HelperGroup::all(),
            jsfiddle: JsFiddleDefaults::default(),
        }
    }
}

impl HelpersConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HelperError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| HelperError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write this configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| HelperError::ConfigSerialize {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Resolve a helper path argument against [`Self::base_dir`].
    pub fn resolve(&self, path: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(path),
            None => PathBuf::from(path),
        }
    }
}

/// Values the `jsfiddle` helper fills in when the caller leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsFiddleDefaults {
    /// Prefix for the fiddle id.
    pub base_url: String,
    pub width: String,
    pub height: String,
    /// Appended to `tabs`, whether or not `tabs` was supplied.
    pub skin: String,
    pub tabs: String,
    pub allowfullscreen: String,
    pub frameborder: String,
}

impl Default for JsFiddleDefaults {
    fn default() -> Self {
        Self {
            base_url: "http://jsfiddle.net/".into(),
            width: "100%".into(),
            height: "300".into(),
            skin: "/presentation/".into(),
            tabs: "result,js,html,css".into(),
            allowfullscreen: "allowfullscreen".into(),
            frameborder: "0".into(),
        }
    }
}
