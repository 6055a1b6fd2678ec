//! Schema compilation, validation and unmarshalling

use campaign_override::Errors;
use jsonschema::Validator;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result, Violation};
use crate::normalize::normalize;

/// A compiled JSON Schema.
pub struct Schema {
    validator: Validator,
}

impl Schema {
    pub fn compile(schema: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(schema).map_err(Error::SchemaParse)?;
        let validator = jsonschema::options()
            .build(&document)
            .map_err(|e| Error::SchemaCompile {
                message: e.to_string(),
            })?;
        Ok(Self { validator })
    }

    /// Every schema violation in `instance`.
    ///
    /// Messages are qualified with the location of the offending value,
    /// except for the document root, which is left unqualified.
    pub fn violations(&self, instance: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(instance)
            .map(|err| {
                let location = err.instance_path.to_string();
                if location.is_empty() {
                    Violation::Schema(err.to_string())
                } else {
                    Violation::Schema(format!("{}: {}", location, err))
                }
            })
            .collect()
    }

    /// Validate a normalized document and unmarshal it into `T`.
    ///
    /// Unmarshalling is attempted even when the schema reports violations so
    /// that both kinds of problem are reported together.
    pub fn unmarshal<T: DeserializeOwned>(&self, normalized: Value) -> Result<T> {
        let mut errors: Errors<Violation> = self.violations(&normalized).into_iter().collect();
        tracing::debug!(violations = errors.len(), "Validated document against schema");

        match serde_json::from_value::<T>(normalized) {
            Ok(target) => {
                errors.into_result()?;
                Ok(target)
            }
            Err(err) => {
                errors.push(Violation::Unmarshal(err));
                Err(Error::Invalid(errors))
            }
        }
    }
}

/// Validate YAML or JSON `input` against `schema` and unmarshal it into `T`.
pub fn unmarshal_validate<T: DeserializeOwned>(schema: &str, input: &str) -> Result<T> {
    let schema = Schema::compile(schema)?;
    let normalized = normalize(input)?;
    schema.unmarshal(normalized)
}
