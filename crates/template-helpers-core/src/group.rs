use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HelperError;

/// A named set of helpers that are registered together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelperGroup {
    /// `embed` and `jsfiddle`.
    Code,
    /// `read`.
    Fs,
}

impl HelperGroup {
    /// Every group, in registration order.
    pub fn all() -> Vec<Self> {
        vec![Self::Code, Self::Fs]
    }

    /// Resolve a group by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "code" => Some(Self::Code),
            "fs" => Some(Self::Fs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Fs => "fs",
        }
    }

    /// Names of the helpers this group registers.
    pub fn helper_names(&self) -> &'static [&'static str] {
        match self {
            Self::Code => &["embed", "jsfiddle"],
            Self::Fs => &["read"],
        }
    }

    /// Parse a comma-separated list such as `"code,fs"`.
    pub fn parse_list(list: &str) -> Result<Vec<Self>, HelperError> {
        let mut groups = Vec::new();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let group: HelperGroup = name.parse()?;
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        Ok(groups)
    }
}

impl FromStr for HelperGroup {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| HelperError::UnknownGroup(s.to_string()))
    }
}

impl fmt::Display for HelperGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
