use avrogen_core::{DefaultValue, FieldSchema, ParsedSchema, RecordSchema, SchemaType};
use serde_json::Value;

/// Parses the text of an Avro `.avsc` document into the core schema model.
///
/// Only the structure the translator cares about is modeled: record
/// schemas keep their name, namespace, and fields; every other top-level
/// schema kind comes back as [`ParsedSchema::Other`] so callers can gate
/// on it without treating it as an error.
pub fn from_json(avsc_json: &str) -> serde_json::Result<ParsedSchema> {
    let value: Value = serde_json::from_str(avsc_json)?;

    Ok(from_value(&value))
}

fn from_value(value: &Value) -> ParsedSchema {
    let object = match value.as_object() {
        Some(object) => object,
        None => {
            return ParsedSchema::Other {
                kind: kind_of(value),
            }
        }
    };

    if object.get("type").and_then(Value::as_str) != Some("record") {
        return ParsedSchema::Other {
            kind: kind_of(value),
        };
    }

    let name = match object.get("name").and_then(Value::as_str) {
        Some(name) => name.to_owned(),
        None => return ParsedSchema::Other { kind: "record".into() },
    };

    let fields = match object.get("fields").and_then(Value::as_array) {
        Some(fields) => fields,
        None => return ParsedSchema::Other { kind: "record".into() },
    };

    let fields = match fields.iter().map(field_from_value).collect::<Option<Vec<_>>>() {
        Some(fields) => fields,
        None => return ParsedSchema::Other { kind: "record".into() },
    };

    ParsedSchema::Record(RecordSchema {
        name,
        namespace: object
            .get("namespace")
            .and_then(Value::as_str)
            .map(str::to_owned),
        fields,
    })
}

fn field_from_value(value: &Value) -> Option<FieldSchema> {
    let object = value.as_object()?;

    let name = object.get("name").and_then(Value::as_str)?.to_owned();
    let ty = type_from_value(object.get("type")?);
    let default = object.get("default").map(default_from_value);

    Some(FieldSchema { name, ty, default })
}

fn type_from_value(value: &Value) -> SchemaType {
    match value {
        Value::String(name) => match name.as_str() {
            "null" => SchemaType::Null,
            "string" => SchemaType::String,
            "boolean" => SchemaType::Boolean,
            other => SchemaType::Other(other.to_owned()),
        },
        Value::Array(members) => SchemaType::Union(members.iter().map(type_from_value).collect()),
        // Object form, e.g. `{"type": "record", ...}` for an inline
        // nested record; classify it by its `type` attribute.
        Value::Object(object) => match object.get("type") {
            Some(Value::String(name)) => SchemaType::Other(name.clone()),
            _ => SchemaType::Other("object".into()),
        },
        _ => SchemaType::Other(kind_of(value)),
    }
}

fn default_from_value(value: &Value) -> DefaultValue {
    match value {
        Value::Null => DefaultValue::Null,
        Value::Bool(value) => DefaultValue::Boolean(*value),
        Value::String(value) => DefaultValue::String(value.clone()),
        other => DefaultValue::Other(other.to_string()),
    }
}

/// A short description of a schema value's kind, for gating and reporting.
fn kind_of(value: &Value) -> String {
    match value {
        Value::String(name) => name.clone(),
        Value::Array(_) => "union".into(),
        Value::Object(object) => match object.get("type") {
            Some(Value::String(name)) => name.clone(),
            _ => "object".into(),
        },
        Value::Null => "null".into(),
        Value::Bool(_) => "boolean".into(),
        Value::Number(_) => "number".into(),
    }
}
