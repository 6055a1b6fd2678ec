//! Normalization of YAML or JSON input to a JSON value

use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;

use crate::error::{Error, Result};

/// Parse YAML (or JSON, which is valid YAML) into its canonical JSON form.
///
/// Mapping order is kept. Non-string mapping keys are converted to their
/// textual form, and YAML tags are dropped.
pub fn normalize(input: &str) -> Result<JsonValue> {
    let yaml: YamlValue = serde_yaml::from_str(input).map_err(|e| Error::Normalize {
        message: e.to_string(),
    })?;
    yaml_to_json(yaml)
}

fn yaml_to_json(value: YamlValue) -> Result<JsonValue> {
    Ok(match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                JsonValue::Number(u.into())
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                Number::from_f64(f)
                    .map(JsonValue::Number)
                    .ok_or_else(|| Error::Normalize {
                        message: format!("number {} cannot be represented in JSON", n),
                    })?
            }
        }
        YamlValue::String(s) => JsonValue::String(s),
        YamlValue::Sequence(items) => JsonValue::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(key_to_string(key)?, yaml_to_json(value)?);
            }
            JsonValue::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn key_to_string(key: YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        other => Err(Error::Normalize {
            message: format!("unsupported mapping key {:?}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_and_json_normalize_identically() {
        let from_yaml = normalize("name: test\npublished:\n  - \"*\": true\n").unwrap();
        let from_json = normalize(r#"{"name": "test", "published": [{"*": true}]}"#).unwrap();
        assert_eq!(from_yaml, from_json);
        assert_eq!(from_yaml, json!({"name": "test", "published": [{"*": true}]}));
    }

    #[test]
    fn test_key_order_is_kept() {
        let value = normalize("b: 1\na: 2\n").unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_non_string_keys() {
        assert_eq!(normalize("1: one\ntrue: yes\n").unwrap(), json!({"1": "one", "true": "yes"}));
    }

    #[test]
    fn test_tags_are_dropped() {
        assert_eq!(normalize("value: !custom 5\n").unwrap(), json!({"value": 5}));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            normalize("invalid: yaml: content: [unclosed"),
            Err(Error::Normalize { .. })
        ));
    }
}
