//! Rendering utilities shared by the helpers.
//!
//! - [`to_code_block`] wraps text in a fenced, language-tagged code block.
//! - [`AttributeSet`] is an insertion-ordered attribute map built from a JSON object.
//! - [`to_attributes`] serializes an [`AttributeSet`] into `key="value"` pairs
//!   suitable for an HTML start tag.

use std::fmt;

use serde_json::{Map, Number, Value};

/// Minimum fence length for a code block.
const MIN_FENCE: usize = 3;

/// Text paired with the language tag used for syntax highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub code: String,
    pub language: String,
}

impl CodeBlock {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
        }
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_code_block(&self.code, &self.language))
    }
}

/// Wrap `code` in a fenced code block tagged with `language`.
///
/// The fence is three backticks, or one longer than the longest run of
/// backticks inside `code`. A newline is inserted before the closing fence
/// unless `code` is empty or already ends with one.
pub fn to_code_block(code: &str, language: &str) -> String {
    let fence = "`".repeat(longest_backtick_run(code).max(MIN_FENCE - 1) + 1);

    let mut block = String::with_capacity(code.len() + language.len() + fence.len() * 2 + 2);
    block.push_str(&fence);
    block.push_str(language);
    block.push('\n');
    block.push_str(code);
    if !code.is_empty() && !code.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(&fence);
    block
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// A single attribute value.
///
/// Truthiness mirrors loosely-typed template data: empty text, zero, `false`
/// and `null` are falsy.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(Number),
    Flag(bool),
    Null,
}

impl AttrValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Text(s) => !s.is_empty(),
            AttrValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            AttrValue::Flag(b) => *b,
            AttrValue::Null => false,
        }
    }

    /// Convert a JSON value. Objects have no attribute representation and yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(AttrValue::Text(s.clone())),
            Value::Number(n) => Some(AttrValue::Number(n.clone())),
            Value::Bool(b) => Some(AttrValue::Flag(*b)),
            Value::Null => Some(AttrValue::Null),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .filter_map(AttrValue::from_json)
                    .map(|v| match v {
                        AttrValue::Null => String::new(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                Some(AttrValue::Text(joined))
            }
            Value::Object(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Number(n) => write_number(f, n),
            AttrValue::Flag(b) => write!(f, "{b}"),
            AttrValue::Null => f.write_str("null"),
        }
    }
}

/// Integral floats print without a fraction (`1e2` is `100`).
fn write_number(f: &mut fmt::Formatter<'_>, n: &Number) -> fmt::Result {
    match n.as_f64() {
        Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < MAX_SAFE_INTEGER => {
            write!(f, "{}", x as i64)
        }
        _ => write!(f, "{n}"),
    }
}

/// Largest float that converts to an integer without rounding.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

/// Insertion-ordered attribute map.
///
/// Overwriting an existing key keeps its original position, so attributes
/// supplied by the caller stay ahead of attributes filled in afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    entries: Vec<(String, AttrValue)>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a JSON object. Nested objects are skipped.
    pub fn from_object(map: &Map<String, Value>) -> Self {
        let mut set = Self::new();
        for (key, value) in map {
            match AttrValue::from_json(value) {
                Some(v) => set.set(key.as_str(), v),
                None => tracing::warn!("skipping attribute '{key}': nested objects are not supported"),
            }
        }
        set
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// The value for `key` if present and truthy.
    pub fn truthy(&self, key: &str) -> Option<&AttrValue> {
        self.get(key).filter(|v| v.is_truthy())
    }

    /// Insert or overwrite `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set `key` to `default` unless it already holds a truthy value.
    pub fn fill(&mut self, key: &str, default: &str) {
        if self.truthy(key).is_none() {
            self.set(key, default);
        }
    }

    /// A copy of this set with `keys` left out.
    pub fn without(&self, keys: &[&str]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| !keys.contains(&k.as_str()))
                .cloned()
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Serialize attributes as space-separated `key="value"` pairs.
///
/// Values are escaped for a double-quoted attribute. Keys that are not valid
/// HTML attribute names are dropped.
pub fn to_attributes(attrs: &AttributeSet) -> String {
    attrs
        .iter()
        .filter(|(key, _)| {
            let valid = is_attribute_name(key);
            if !valid {
                tracing::warn!("dropping invalid attribute name {key:?}");
            }
            valid
        })
        .map(|(key, value)| {
            let value = value.to_string();
            format!(
                "{key}=\"{}\"",
                html_escape::encode_double_quoted_attribute(&value)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_block_plain() {
        assert_eq!(to_code_block("let x = 1;", "rs"), "```rs\nlet x = 1;\n```");
    }

    #[test]
    fn test_code_block_keeps_single_trailing_newline() {
        assert_eq!(to_code_block("a\nb\n", "txt"), "```txt\na\nb\n```");
    }

    #[test]
    fn test_code_block_empty_content() {
        assert_eq!(to_code_block("", "js"), "```js\n```");
    }

    #[test]
    fn test_code_block_lengthens_fence() {
        let block = to_code_block("```js\nx\n```", "md");
        assert!(block.starts_with("````md\n"));
        assert!(block.ends_with("\n````"));
    }

    #[test]
    fn test_code_block_display() {
        let block = CodeBlock::new("x", "py");
        assert_eq!(block.to_string(), "```py\nx\n```");
    }

    #[test]
    fn test_truthiness() {
        assert!(!AttrValue::from("").is_truthy());
        assert!(AttrValue::from("0").is_truthy());
        assert!(!AttrValue::Number(0.into()).is_truthy());
        assert!(AttrValue::Number(200.into()).is_truthy());
        assert!(!AttrValue::Flag(false).is_truthy());
        assert!(!AttrValue::Null.is_truthy());
    }

    #[test]
    fn test_from_object_preserves_order() {
        let value = json!({"zeta": "1", "alpha": 2, "mid": true});
        let set = AttributeSet::from_object(value.as_object().unwrap());
        let keys: Vec<_> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_object_skips_nested_objects() {
        let value = json!({"a": {"b": 1}, "c": [1, "x"]});
        let set = AttributeSet::from_object(value.as_object().unwrap());
        assert_eq!(set.iter().count(), 1);
        assert_eq!(set.get("c"), Some(&AttrValue::from("1,x")));
    }

    #[test]
    fn test_array_null_items_join_as_empty() {
        let value = json!({"class": [null, "a"]});
        let set = AttributeSet::from_object(value.as_object().unwrap());
        assert_eq!(to_attributes(&set), r#"class=",a""#);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(AttrValue::Number(serde_json::from_str("1e2").unwrap()).to_string(), "100");
        assert_eq!(AttrValue::Number(serde_json::from_str("-3.0").unwrap()).to_string(), "-3");
        assert_eq!(AttrValue::Number(serde_json::from_str("2.5").unwrap()).to_string(), "2.5");
        assert_eq!(AttrValue::Number(300.into()).to_string(), "300");
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut set = AttributeSet::new();
        set.set("a", "1");
        set.set("b", "2");
        set.set("a", "3");
        let pairs: Vec<_> = set.iter().map(|(k, v)| format!("{k}={v}")).collect();
        assert_eq!(pairs, vec!["a=3", "b=2"]);
    }

    #[test]
    fn test_fill_only_replaces_falsy() {
        let mut set = AttributeSet::new();
        set.set("width", "");
        set.set("height", "200");
        set.fill("width", "100%");
        set.fill("height", "300");
        set.fill("border", "0");
        assert_eq!(set.get("width"), Some(&AttrValue::from("100%")));
        assert_eq!(set.get("height"), Some(&AttrValue::from("200")));
        assert_eq!(set.get("border"), Some(&AttrValue::from("0")));
    }

    #[test]
    fn test_without_leaves_original_untouched() {
        let mut set = AttributeSet::new();
        set.set("id", "x");
        set.set("src", "y");
        set.set("tabs", "z");
        let trimmed = set.without(&["id", "tabs"]);
        let keys: Vec<_> = trimmed.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["src"]);
        assert_eq!(set.iter().count(), 3);
    }

    #[test]
    fn test_to_attributes() {
        let mut set = AttributeSet::new();
        set.set("width", "100%");
        set.set("height", AttrValue::Number(300.into()));
        set.set("hidden", true);
        assert_eq!(
            to_attributes(&set),
            r#"width="100%" height="300" hidden="true""#
        );
    }

    #[test]
    fn test_to_attributes_escapes_values() {
        let mut set = AttributeSet::new();
        set.set("title", r#"say "hi" & go"#);
        assert_eq!(
            to_attributes(&set),
            r#"title="say &quot;hi&quot; &amp; go""#
        );
    }

    #[test]
    fn test_to_attributes_drops_invalid_names() {
        let mut set = AttributeSet::new();
        set.set("ok", "1");
        set.set("bad name", "2");
        set.set("x\"y", "3");
        assert_eq!(to_attributes(&set), r#"ok="1""#);
    }

    #[test]
    fn test_to_attributes_empty() {
        assert_eq!(to_attributes(&AttributeSet::new()), "");
    }
}
