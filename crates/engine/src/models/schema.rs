//! Caller-supplied schema templates.
//!
//! A template arrives as JSON: string leaves carry type hints, objects nest,
//! and a one-element array declares a per-element template. Parsing validates
//! the tree up front so projection itself is total and never branches on an
//! unexpected shape.

use serde_json::Value;

use crate::errors::EngineError;

/// Closed vocabulary of leaf type hints. Hint strings outside the vocabulary
/// are normalized to `String` at parse time, so they project to the empty
/// default instead of leaking schema text into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    Name,
    Email,
    Phone,
    Location,
    Linkedin,
    Summary,
    Skills,
    Languages,
    Certifications,
    Experience,
    Position,
    Company,
    Period,
    Education,
    Degree,
    String,
    Number,
    Boolean,
    Array,
}

impl TypeHint {
    pub fn parse(raw: &str) -> TypeHint {
        match raw.trim().to_lowercase().as_str() {
            "name" => TypeHint::Name,
            "email" => TypeHint::Email,
            "phone" => TypeHint::Phone,
            "location" => TypeHint::Location,
            "linkedin" => TypeHint::Linkedin,
            "summary" => TypeHint::Summary,
            "skills" => TypeHint::Skills,
            "languages" => TypeHint::Languages,
            "certifications" => TypeHint::Certifications,
            "experience" => TypeHint::Experience,
            "position" => TypeHint::Position,
            "company" => TypeHint::Company,
            "period" => TypeHint::Period,
            "education" => TypeHint::Education,
            "degree" => TypeHint::Degree,
            "string" => TypeHint::String,
            "number" => TypeHint::Number,
            "boolean" => TypeHint::Boolean,
            "array" => TypeHint::Array,
            _ => TypeHint::String,
        }
    }

    /// Hints that reference a list-typed canonical field. An array node whose
    /// child mentions one of these iterates the corresponding list.
    pub fn list_field(self) -> bool {
        matches!(
            self,
            TypeHint::Experience
                | TypeHint::Education
                | TypeHint::Languages
                | TypeHint::Skills
                | TypeHint::Certifications
        )
    }
}

/// Template tree: a type-hint leaf, an ordered object, or an array node with
/// at most one element template. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaTemplate {
    Leaf(TypeHint),
    Object(Vec<(String, SchemaTemplate)>),
    Array(Option<Box<SchemaTemplate>>),
}

impl SchemaTemplate {
    /// Parses a template from JSON text. The only failure paths of the whole
    /// engine live here: unparseable JSON and malformed template shapes are
    /// rejected before any mapping attempt.
    pub fn from_json_str(raw: &str) -> Result<SchemaTemplate, EngineError> {
        let value: Value = serde_json::from_str(raw)?;
        SchemaTemplate::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<SchemaTemplate, EngineError> {
        match value {
            Value::String(hint) => Ok(SchemaTemplate::Leaf(TypeHint::parse(hint))),
            Value::Object(map) => {
                let mut fields = Vec::with_capacity(map.len());
                for (key, child) in map {
                    fields.push((key.clone(), SchemaTemplate::from_value(child)?));
                }
                Ok(SchemaTemplate::Object(fields))
            }
            Value::Array(items) => match items.len() {
                0 => Ok(SchemaTemplate::Array(None)),
                1 => Ok(SchemaTemplate::Array(Some(Box::new(
                    SchemaTemplate::from_value(&items[0])?,
                )))),
                n => Err(EngineError::SchemaValidation(format!(
                    "array node must declare at most one element template, found {n}"
                ))),
            },
            other => Err(EngineError::SchemaValidation(format!(
                "leaf hints must be strings, found {other}"
            ))),
        }
    }

    /// Collects every leaf hint in the subtree, in declaration order.
    pub fn leaf_hints(&self) -> Vec<TypeHint> {
        let mut hints = Vec::new();
        self.collect_hints(&mut hints);
        hints
    }

    fn collect_hints(&self, out: &mut Vec<TypeHint>) {
        match self {
            SchemaTemplate::Leaf(hint) => out.push(*hint),
            SchemaTemplate::Object(fields) => {
                for (_, child) in fields {
                    child.collect_hints(out);
                }
            }
            SchemaTemplate::Array(child) => {
                if let Some(child) = child {
                    child.collect_hints(out);
                }
            }
        }
    }
}
