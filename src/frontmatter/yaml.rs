//! YAML header parsing via serde_yaml

use super::{FieldValue, Fields, FrontmatterError, FrontmatterParser};
use serde_yaml::Value;

/// Full YAML frontmatter parser
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFrontmatter;

impl FrontmatterParser for YamlFrontmatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn parse_header(&self, header: &str) -> Result<Fields, FrontmatterError> {
        match serde_yaml::from_str::<Value>(header)? {
            // An empty header is valid YAML and simply has no fields
            Value::Null => Ok(Fields::new()),
            Value::Mapping(map) => Ok(convert_mapping(&map)),
            _ => Err(FrontmatterError::NotAMapping),
        }
    }
}

fn convert_mapping(map: &serde_yaml::Mapping) -> Fields {
    map.iter()
        .filter_map(|(k, v)| Some((scalar_text(k)?, convert_value(v)?)))
        .collect()
}

fn convert_value(value: &Value) -> Option<FieldValue> {
    match value {
        Value::Null => None,
        Value::Sequence(items) => Some(FieldValue::List(
            items.iter().filter_map(scalar_text).collect(),
        )),
        Value::Mapping(map) => Some(FieldValue::Map(convert_mapping(map))),
        Value::Tagged(tagged) => convert_value(&tagged.value),
        other => scalar_text(other).map(FieldValue::Scalar),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None,
    }
}
