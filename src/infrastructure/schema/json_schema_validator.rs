use serde_json::Value;

use crate::application::ports::{SchemaError, SchemaValidator};

/// Structural check only: the schema must be a non-empty object that the
/// `jsonschema` crate can compile against its draft meta-schema.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSchemaValidator;

impl JsonSchemaValidator {
    pub fn new() -> Self {
        Self
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn validate(&self, schema: &Value) -> Result<(), SchemaError> {
        let object = match schema {
            Value::Null => return Err(SchemaError::Missing),
            Value::Object(object) => object,
            other => return Err(SchemaError::NotAnObject(json_type_name(other))),
        };

        if object.is_empty() {
            return Err(SchemaError::Empty);
        }

        jsonschema::validator_for(schema)
            .map(|_| ())
            .map_err(|e| SchemaError::Malformed(e.to_string()))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
