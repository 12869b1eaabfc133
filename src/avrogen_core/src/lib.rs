mod non_empty_string;

use indexmap::map::IntoIter;
use indexmap::IndexMap;

pub use crate::non_empty_string::NonEmptyString;

pub trait CasingRules<T: ToOwned> {
    fn to_namespace_segment_case(&self, identifier: T) -> T::Owned;
    fn to_type_name_case(&self, identifier: T) -> T::Owned;
    fn to_record_member_case(&self, identifier: T) -> T::Owned;
}

pub trait TranslateRecord {
    fn translate(&self, document: &SchemaDocument) -> Option<GeneratedDocument>;
}

/// A schema file handed over by the build host: its text plus a short
/// identifying name derived from the source filename.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    pub name: String,
    pub content: String,
}

impl SchemaDocument {
    pub fn new<N: Into<String>, C: Into<String>>(name: N, content: C) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaType {
    Null,
    String,
    Boolean,
    Union(Vec<SchemaType>),
    Other(String),
}

impl SchemaType {
    /// The name of this type kind as the schema document spells it.
    pub fn type_name(&self) -> String {
        match self {
            SchemaType::Null => "null".into(),
            SchemaType::String => "string".into(),
            SchemaType::Boolean => "boolean".into(),
            SchemaType::Union(_) => "union".into(),
            SchemaType::Other(name) => name.clone(),
        }
    }

    /// Returns the single concrete member of a nullable union: a union of
    /// exactly one `null` variant and exactly one non-`null` variant. Any
    /// other union shape returns `None`.
    pub fn as_nullable_union(&self) -> Option<&SchemaType> {
        match self {
            SchemaType::Union(members) if members.len() == 2 => {
                let nulls = members
                    .iter()
                    .filter(|member| matches!(member, SchemaType::Null))
                    .count();

                if nulls == 1 {
                    members
                        .iter()
                        .find(|member| !matches!(member, SchemaType::Null))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// A field's declared default, kept in the schema's own value space so the
/// emitter can decide whether it projects onto the field's scalar type.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Null,
    Boolean(bool),
    String(String),
    Other(String),
}

#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: String,
    pub ty: SchemaType,
    pub default: Option<DefaultValue>,
}

#[derive(Debug, Clone)]
pub struct RecordSchema {
    pub name: String,
    pub namespace: Option<String>,
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone)]
pub enum ParsedSchema {
    Record(RecordSchema),
    Other { kind: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub artifact_name: String,
    pub source_text: String,
}

#[derive(Debug, Clone)]
pub struct GeneratedDocuments {
    documents: IndexMap<String, GeneratedDocument>,
}

impl GeneratedDocuments {
    pub fn new() -> Self {
        Self {
            documents: IndexMap::new(),
        }
    }

    /// Registers a generated document under its artifact name.
    pub fn register(&mut self, document: GeneratedDocument) {
        self.documents
            .insert(document.artifact_name.clone(), document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for GeneratedDocuments {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for GeneratedDocuments {
    type Item = (String, GeneratedDocument);
    type IntoIter = IntoIter<String, GeneratedDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}
