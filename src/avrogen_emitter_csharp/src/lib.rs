mod casing_rules;
mod document;

use std::convert::TryFrom;

use avrogen_core::{
    CasingRules, DefaultValue, FieldSchema, GeneratedDocument, NonEmptyString, ParsedSchema,
    RecordSchema, SchemaDocument, SchemaType, TranslateRecord,
};

pub use crate::casing_rules::{normalize_namespace, CsharpCasingRules};
use crate::document::{CsharpDocument, MemberDecl};

/// Translates Avro record schemas into immutable C# record types.
pub struct CsharpRecordEmitter;

impl TranslateRecord for CsharpRecordEmitter {
    fn translate(&self, document: &SchemaDocument) -> Option<GeneratedDocument> {
        self.translate_with_report(document).document
    }
}

impl CsharpRecordEmitter {
    /// Like [`TranslateRecord::translate`], but also reports the fields
    /// that were dropped because their type has no C# mapping. The
    /// generated output is identical either way.
    pub fn translate_with_report(&self, document: &SchemaDocument) -> TranslationReport {
        let record = match avrogen_adapter_avro::from_json(&document.content) {
            Ok(ParsedSchema::Record(record)) => record,
            Ok(ParsedSchema::Other { .. }) | Err(_) => return TranslationReport::skipped(),
        };

        translate_record(&record)
    }
}

/// The outcome of translating one schema document: the generated source,
/// if the document was generation-worthy, plus the fields it dropped.
#[derive(Debug, Clone)]
pub struct TranslationReport {
    pub document: Option<GeneratedDocument>,
    pub skipped_fields: Vec<SkippedField>,
}

impl TranslationReport {
    fn skipped() -> Self {
        Self {
            document: None,
            skipped_fields: Vec::new(),
        }
    }
}

/// A field dropped from the generated type, with the schema-level name
/// of the type kind that had no mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedField {
    pub field: String,
    pub declared_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Scalar {
    String,
    Boolean,
}

fn scalar_keyword(scalar: Scalar) -> &'static str {
    match scalar {
        Scalar::String => "string",
        Scalar::Boolean => "bool",
    }
}

enum FieldKind {
    Scalar { scalar: Scalar, nullable: bool },
    Unsupported { declared: String },
}

fn classify(ty: &SchemaType) -> FieldKind {
    match ty {
        SchemaType::String => FieldKind::Scalar {
            scalar: Scalar::String,
            nullable: false,
        },
        SchemaType::Boolean => FieldKind::Scalar {
            scalar: Scalar::Boolean,
            nullable: false,
        },
        SchemaType::Union(_) => match ty.as_nullable_union() {
            Some(SchemaType::String) => FieldKind::Scalar {
                scalar: Scalar::String,
                nullable: true,
            },
            Some(SchemaType::Boolean) => FieldKind::Scalar {
                scalar: Scalar::Boolean,
                nullable: true,
            },
            Some(other) => FieldKind::Unsupported {
                declared: other.type_name(),
            },
            None => FieldKind::Unsupported {
                declared: ty.type_name(),
            },
        },
        SchemaType::Null | SchemaType::Other(_) => FieldKind::Unsupported {
            declared: ty.type_name(),
        },
    }
}

fn translate_record(record: &RecordSchema) -> TranslationReport {
    let rules = CsharpCasingRules;

    let raw_namespace = record.namespace.clone().unwrap_or_default();
    let namespace = match NonEmptyString::try_from(normalize_namespace(&raw_namespace, &rules)) {
        Ok(namespace) => String::from(namespace),
        Err(_) => return TranslationReport::skipped(),
    };

    if record.fields.is_empty() {
        return TranslationReport::skipped();
    }

    let mut document = CsharpDocument::new(
        namespace,
        rules.to_type_name_case(record.name.clone()),
        record.name.clone(),
        raw_namespace,
    );
    let mut skipped_fields = Vec::new();

    for field in &record.fields {
        match classify(&field.ty) {
            FieldKind::Unsupported { declared } => skipped_fields.push(SkippedField {
                field: field.name.clone(),
                declared_type: declared,
            }),
            FieldKind::Scalar { scalar, nullable } => {
                match render_member(field, scalar, nullable, &rules) {
                    Some(member) => document.push_member(member),
                    // A default that does not project onto the field's
                    // scalar fails this document, not the whole batch.
                    None => {
                        return TranslationReport {
                            document: None,
                            skipped_fields,
                        }
                    }
                }
            }
        }
    }

    TranslationReport {
        document: Some(GeneratedDocument {
            artifact_name: document.artifact_name(),
            source_text: document.render(),
        }),
        skipped_fields,
    }
}

fn render_member(
    field: &FieldSchema,
    scalar: Scalar,
    nullable: bool,
    rules: &CsharpCasingRules,
) -> Option<MemberDecl> {
    let initializer = match &field.default {
        Some(default) => Some(render_initializer(scalar, nullable, default)?),
        None => None,
    };

    let mut type_name = scalar_keyword(scalar).to_owned();
    if nullable {
        type_name.push('?');
    }

    Some(MemberDecl {
        wire_name: field.name.clone(),
        type_name,
        member_name: rules.to_record_member_case(field.name.clone()),
        initializer,
    })
}

fn render_initializer(scalar: Scalar, nullable: bool, default: &DefaultValue) -> Option<String> {
    match (scalar, default) {
        (Scalar::String, DefaultValue::String(value)) => Some(quote_string_literal(value)),
        (Scalar::Boolean, DefaultValue::Boolean(value)) => {
            Some(if *value { "true" } else { "false" }.to_owned())
        }
        (_, DefaultValue::Null) if nullable => Some("null".to_owned()),
        _ => None,
    }
}

fn quote_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');

    for ch in value.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            other => literal.push(other),
        }
    }

    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> SchemaDocument {
        SchemaDocument::new("test.avsc", value.to_string())
    }

    fn user_schema() -> SchemaDocument {
        document(json!({
            "type": "record",
            "name": "User",
            "namespace": "my.app",
            "fields": [{"name": "full_name", "type": "string"}]
        }))
    }

    #[test]
    fn translates_a_record_with_one_mandatory_string_member() {
        let generated = CsharpRecordEmitter.translate(&user_schema()).unwrap();

        let expected = r#"// <auto-generated/>
using System.Runtime.Serialization;

namespace My.App
{
    [DataContract(Name = "User", Namespace = "my.app")]
    public sealed class User
    {
        [DataMember(Name = "full_name")]
        public required string FullName { get; init; }
    }
}
"#;

        assert_eq!(generated.artifact_name, "My.App.User.g.cs");
        assert_eq!(generated.source_text, expected);
    }

    #[test]
    fn translation_is_deterministic() {
        let first = CsharpRecordEmitter.translate(&user_schema()).unwrap();
        let second = CsharpRecordEmitter.translate(&user_schema()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn nullable_boolean_with_default_is_optional_at_construction() {
        let generated = CsharpRecordEmitter
            .translate(&document(json!({
                "type": "record",
                "name": "User",
                "namespace": "my.app",
                "fields": [
                    {"name": "active", "type": ["null", "boolean"], "default": true}
                ]
            })))
            .unwrap();

        assert!(generated
            .source_text
            .contains("public bool? Active { get; init; } = true;"));
        assert!(!generated.source_text.contains("required"));
    }

    #[test]
    fn string_default_is_rendered_as_a_quoted_literal() {
        let generated = CsharpRecordEmitter
            .translate(&document(json!({
                "type": "record",
                "name": "User",
                "namespace": "my.app",
                "fields": [
                    {"name": "greeting", "type": "string", "default": "say \"hi\"\n"}
                ]
            })))
            .unwrap();

        assert!(generated
            .source_text
            .contains(r#"public string Greeting { get; init; } = "say \"hi\"\n";"#));
    }

    #[test]
    fn null_default_on_a_nullable_member_renders_null() {
        let generated = CsharpRecordEmitter
            .translate(&document(json!({
                "type": "record",
                "name": "User",
                "namespace": "my.app",
                "fields": [
                    {"name": "nickname", "type": ["null", "string"], "default": null}
                ]
            })))
            .unwrap();

        assert!(generated
            .source_text
            .contains("public string? Nickname { get; init; } = null;"));
    }

    #[test]
    fn schema_without_namespace_yields_no_output() {
        let report = CsharpRecordEmitter.translate_with_report(&document(json!({
            "type": "record",
            "name": "User",
            "fields": [{"name": "id", "type": "string"}]
        })));

        assert!(report.document.is_none());
    }

    #[test]
    fn record_with_zero_fields_yields_no_output() {
        let report = CsharpRecordEmitter.translate_with_report(&document(json!({
            "type": "record",
            "name": "User",
            "namespace": "my.app",
            "fields": []
        })));

        assert!(report.document.is_none());
    }

    #[test]
    fn top_level_enum_yields_no_output() {
        let report = CsharpRecordEmitter.translate_with_report(&document(json!({
            "type": "enum",
            "name": "Suit",
            "symbols": ["SPADES", "HEARTS"]
        })));

        assert!(report.document.is_none());
    }

    #[test]
    fn unparseable_text_yields_no_output() {
        let report = CsharpRecordEmitter
            .translate_with_report(&SchemaDocument::new("junk.avsc", "{not json"));

        assert!(report.document.is_none());
    }

    #[test]
    fn unsupported_fields_are_dropped_without_aborting_the_record() {
        let report = CsharpRecordEmitter.translate_with_report(&document(json!({
            "type": "record",
            "name": "Event",
            "namespace": "my.app",
            "fields": [
                {"name": "timestamp", "type": "long"},
                {"name": "source", "type": "string"},
                {"name": "payload", "type": ["null", "bytes"]}
            ]
        })));

        let generated = report.document.unwrap();

        assert!(generated.source_text.contains("Source"));
        assert!(!generated.source_text.contains("Timestamp"));
        assert!(!generated.source_text.contains("Payload"));
        assert_eq!(
            report.skipped_fields,
            vec![
                SkippedField {
                    field: "timestamp".into(),
                    declared_type: "long".into(),
                },
                SkippedField {
                    field: "payload".into(),
                    declared_type: "bytes".into(),
                },
            ]
        );
    }

    #[test]
    fn record_whose_fields_are_all_unsupported_still_generates() {
        let report = CsharpRecordEmitter.translate_with_report(&document(json!({
            "type": "record",
            "name": "Metrics",
            "namespace": "my.app",
            "fields": [{"name": "count", "type": "long"}]
        })));

        let generated = report.document.unwrap();

        assert!(generated.source_text.contains("public sealed class Metrics"));
        assert!(!generated.source_text.contains("Count"));
        assert_eq!(report.skipped_fields.len(), 1);
    }

    #[test]
    fn malformed_default_fails_the_document() {
        let report = CsharpRecordEmitter.translate_with_report(&document(json!({
            "type": "record",
            "name": "User",
            "namespace": "my.app",
            "fields": [
                {"name": "active", "type": "boolean", "default": "yes"}
            ]
        })));

        assert!(report.document.is_none());
    }

    #[test]
    fn serialization_metadata_keeps_the_original_names() {
        let generated = CsharpRecordEmitter
            .translate(&document(json!({
                "type": "record",
                "name": "user_profile",
                "namespace": "my.app.billing",
                "fields": [{"name": "full_name", "type": "string"}]
            })))
            .unwrap();

        assert!(generated
            .source_text
            .contains(r#"[DataContract(Name = "user_profile", Namespace = "my.app.billing")]"#));
        assert!(generated
            .source_text
            .contains(r#"[DataMember(Name = "full_name")]"#));
        assert!(generated
            .source_text
            .contains("public sealed class UserProfile"));
        assert_eq!(generated.artifact_name, "My.App.Billing.UserProfile.g.cs");
    }
}
