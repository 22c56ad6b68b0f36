use serde_json::{Map, Value};

use template_helpers_core::code;
use template_helpers_core::config::HelpersConfig;

/// Attributes accepted on the command line.
#[derive(Debug, Default)]
pub struct FiddleArgs {
    pub id: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub tabs: Option<String>,
    pub skin: Option<String>,
}

impl FiddleArgs {
    /// The attributes that were given, as a JSON object.
    pub fn to_value(&self) -> Value {
        let fields = [
            ("id", &self.id),
            ("width", &self.width),
            ("height", &self.height),
            ("tabs", &self.tabs),
            ("skin", &self.skin),
        ];
        let map: Map<String, Value> = fields
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_ref()
                    .map(|v| (key.to_string(), Value::String(v.clone())))
            })
            .collect();
        Value::Object(map)
    }
}

/// Print the iframe for the given fiddle.
pub fn run(config: &HelpersConfig, args: &FiddleArgs) {
    println!("{}", code::jsfiddle_with(&args.to_value(), &config.jsfiddle));
}
