//! Projection of a `CanonicalRecord` through a caller-supplied template.
//!
//! Projection is total: every well-formed template produces a value, whatever
//! the record holds. Leaf hints resolve against the record, or against the
//! current list element inside an array context. Generic hints (`string`,
//! `number`, `boolean`, `array`) emit their empty defaults regardless of data,
//! so the output shape is decided entirely by the template.

use serde_json::{json, Map, Value};

use crate::models::record::{CanonicalRecord, EducationEntry, ExperienceEntry, LanguageEntry};
use crate::models::schema::{SchemaTemplate, TypeHint};

/// Projects `record` through `template`. Object keys come out in the order
/// the caller declared them; running the same projection twice yields the
/// same value.
pub fn project(record: &CanonicalRecord, template: &SchemaTemplate) -> Value {
    project_node(record, template, Scope::Record)
}

/// What a leaf hint resolves against. `Record` outside any array context,
/// one element variant per canonical list inside one.
#[derive(Clone, Copy)]
enum Scope<'a> {
    Record,
    Experience(&'a ExperienceEntry),
    Education(&'a EducationEntry),
    Language(&'a LanguageEntry),
    Skill(&'a str),
    Certification(&'a str),
}

fn project_node(record: &CanonicalRecord, template: &SchemaTemplate, scope: Scope) -> Value {
    match template {
        SchemaTemplate::Leaf(hint) => resolve_hint(record, *hint, scope),
        SchemaTemplate::Object(fields) => {
            let mut out = Map::with_capacity(fields.len());
            for (key, child) in fields {
                out.insert(key.clone(), project_node(record, child, scope));
            }
            Value::Object(out)
        }
        SchemaTemplate::Array(None) => json!([]),
        SchemaTemplate::Array(Some(element)) => project_array(record, element),
    }
}

/// Array nodes iterate the canonical list their element template references.
/// Explicit list hints win; otherwise element-level hints pick the list
/// (`company`/`position`/`period` belong to experience, `degree` to
/// education). A template referencing no list wraps one record-scope
/// projection.
fn project_array(record: &CanonicalRecord, element: &SchemaTemplate) -> Value {
    let hints = element.leaf_hints();
    let has = |h: TypeHint| hints.contains(&h);

    if has(TypeHint::Experience)
        || (!has(TypeHint::Education)
            && !has(TypeHint::Languages)
            && !has(TypeHint::Skills)
            && !has(TypeHint::Certifications)
            && (has(TypeHint::Company) || has(TypeHint::Position) || has(TypeHint::Period)))
    {
        return Value::Array(
            record
                .experience
                .iter()
                .map(|e| project_node(record, element, Scope::Experience(e)))
                .collect(),
        );
    }
    if has(TypeHint::Education) || has(TypeHint::Degree) {
        return Value::Array(
            record
                .education
                .iter()
                .map(|e| project_node(record, element, Scope::Education(e)))
                .collect(),
        );
    }
    if has(TypeHint::Languages) {
        return Value::Array(
            record
                .languages
                .iter()
                .map(|l| project_node(record, element, Scope::Language(l)))
                .collect(),
        );
    }
    if has(TypeHint::Skills) {
        return Value::Array(
            record
                .skills
                .iter()
                .map(|s| project_node(record, element, Scope::Skill(s)))
                .collect(),
        );
    }
    if has(TypeHint::Certifications) {
        return Value::Array(
            record
                .certifications
                .iter()
                .map(|c| project_node(record, element, Scope::Certification(c)))
                .collect(),
        );
    }
    Value::Array(vec![project_node(record, element, Scope::Record)])
}

fn resolve_hint(record: &CanonicalRecord, hint: TypeHint, scope: Scope) -> Value {
    // Element-scoped resolutions first; anything unhandled falls through to
    // the record-scope table below.
    match scope {
        Scope::Experience(e) => match hint {
            TypeHint::Experience => return structured(e),
            TypeHint::Company => return Value::String(e.company.clone()),
            TypeHint::Position => return Value::String(e.position.clone()),
            TypeHint::Period => return Value::String(e.period.clone()),
            TypeHint::Location => return Value::String(e.location.clone()),
            TypeHint::Array => return structured(&e.responsibilities),
            _ => {}
        },
        Scope::Education(e) => match hint {
            TypeHint::Education => return Value::String(e.institution.clone()),
            TypeHint::Degree => return Value::String(e.degree.clone()),
            TypeHint::Period => return Value::String(e.period.clone()),
            _ => {}
        },
        Scope::Language(l) => {
            if matches!(hint, TypeHint::Languages | TypeHint::Name) {
                return Value::String(l.name.clone());
            }
        }
        Scope::Skill(s) => {
            if hint == TypeHint::Skills {
                return Value::String(s.to_string());
            }
        }
        Scope::Certification(c) => {
            if hint == TypeHint::Certifications {
                return Value::String(c.to_string());
            }
        }
        Scope::Record => {}
    }

    match hint {
        TypeHint::Name => Value::String(record.personal_info.name.clone()),
        TypeHint::Email => Value::String(record.personal_info.email.clone()),
        TypeHint::Phone => Value::String(record.personal_info.phone.clone()),
        TypeHint::Location => Value::String(record.personal_info.location.clone()),
        TypeHint::Linkedin => Value::String(record.personal_info.linkedin.clone()),
        TypeHint::Summary => Value::String(record.summary.clone()),
        TypeHint::Skills => structured(&record.skills),
        TypeHint::Languages => structured(&record.languages),
        TypeHint::Certifications => structured(&record.certifications),
        TypeHint::Education => structured(&record.education),
        TypeHint::Experience => structured(&record.experience),
        TypeHint::Company => first_experience(record, |e| &e.company),
        TypeHint::Position => first_experience(record, |e| &e.position),
        TypeHint::Period => first_experience(record, |e| &e.period),
        TypeHint::Degree => Value::String(
            record
                .education
                .first()
                .map(|e| e.degree.clone())
                .unwrap_or_default(),
        ),
        TypeHint::String => Value::String(String::new()),
        TypeHint::Number => json!(0),
        TypeHint::Boolean => Value::Bool(false),
        TypeHint::Array => json!([]),
    }
}

fn first_experience(record: &CanonicalRecord, field: fn(&ExperienceEntry) -> &String) -> Value {
    Value::String(
        record
            .experience
            .first()
            .map(|e| field(e).clone())
            .unwrap_or_default(),
    )
}

fn structured<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::PersonalInfo;

    fn sample_record() -> CanonicalRecord {
        CanonicalRecord {
            personal_info: PersonalInfo {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+1 555 0100".to_string(),
                location: "Austin, Texas".to_string(),
                linkedin: "linkedin.com/in/janedoe".to_string(),
            },
            summary: "Systems engineer.".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            languages: vec![LanguageEntry {
                name: "English".to_string(),
                proficiency: "Native".to_string(),
            }],
            certifications: vec!["PMP".to_string()],
            education: vec![EducationEntry {
                degree: "BSc Computer Science".to_string(),
                institution: "UT Austin".to_string(),
                period: "2010-2014".to_string(),
            }],
            experience: vec![
                ExperienceEntry {
                    company: "Initech".to_string(),
                    position: "Engineer".to_string(),
                    period: "2014 - 2018".to_string(),
                    location: "Austin".to_string(),
                    responsibilities: vec!["Built reports".to_string()],
                },
                ExperienceEntry {
                    company: "Hooli".to_string(),
                    position: "Lead Engineer".to_string(),
                    period: "2018 - Present".to_string(),
                    location: String::new(),
                    responsibilities: vec![],
                },
            ],
            metadata: Default::default(),
        }
    }

    fn template(json: &str) -> SchemaTemplate {
        SchemaTemplate::from_json_str(json).unwrap()
    }

    #[test]
    fn test_round_trip_equality() {
        let record = sample_record();
        let t = template(
            r#"{"full_name": "name", "skills": "skills", "jobs": "experience", "degrees": "education"}"#,
        );
        let out = project(&record, &t);
        assert_eq!(out["full_name"], json!("Jane Doe"));
        assert_eq!(out["skills"], serde_json::to_value(&record.skills).unwrap());
        assert_eq!(out["jobs"], serde_json::to_value(&record.experience).unwrap());
        assert_eq!(out["degrees"], serde_json::to_value(&record.education).unwrap());
    }

    #[test]
    fn test_array_context_iterates_experience() {
        let record = sample_record();
        let t = template(r#"{"jobs": [{"employer": "company", "title": "position", "when": "period"}]}"#);
        let out = project(&record, &t);
        assert_eq!(
            out["jobs"],
            json!([
                {"employer": "Initech", "title": "Engineer", "when": "2014 - 2018"},
                {"employer": "Hooli", "title": "Lead Engineer", "when": "2018 - Present"}
            ])
        );
    }

    #[test]
    fn test_array_context_degree_selects_education() {
        let record = sample_record();
        let t = template(r#"[{"school": "education", "qualification": "degree"}]"#);
        let out = project(&record, &t);
        assert_eq!(
            out,
            json!([{"school": "UT Austin", "qualification": "BSc Computer Science"}])
        );
    }

    #[test]
    fn test_array_without_list_reference_wraps_single_projection() {
        let record = sample_record();
        let t = template(r#"[{"who": "name"}]"#);
        assert_eq!(project(&record, &t), json!([{"who": "Jane Doe"}]));
    }

    #[test]
    fn test_generic_hints_ignore_record_contents() {
        let record = sample_record();
        let t = template(r#"{"a": "string", "b": "number", "c": "boolean", "d": "array"}"#);
        assert_eq!(
            project(&record, &t),
            json!({"a": "", "b": 0, "c": false, "d": []})
        );
    }

    #[test]
    fn test_record_scope_singular_hints_use_first_entries() {
        let record = sample_record();
        let t = template(r#"{"employer": "company", "qualification": "degree"}"#);
        assert_eq!(
            project(&record, &t),
            json!({"employer": "Initech", "qualification": "BSc Computer Science"})
        );
    }

    #[test]
    fn test_empty_record_projects_defaults() {
        let record = CanonicalRecord::default();
        let t = template(r#"{"employer": "company", "skills": "skills", "jobs": ["experience"]}"#);
        assert_eq!(
            project(&record, &t),
            json!({"employer": "", "skills": [], "jobs": []})
        );
    }

    #[test]
    fn test_empty_array_node_projects_empty_list() {
        let record = sample_record();
        assert_eq!(project(&record, &template("[]")), json!([]));
    }

    #[test]
    fn test_unknown_hint_defaults_to_empty_string() {
        let record = sample_record();
        assert_eq!(
            project(&record, &template(r#"{"x": "no-such-hint"}"#)),
            json!({"x": ""})
        );
    }

    #[test]
    fn test_key_order_is_preserved() {
        let record = sample_record();
        let t = template(r#"{"zulu": "name", "alpha": "email", "mike": "phone"}"#);
        let out = serde_json::to_string(&project(&record, &t)).unwrap();
        assert!(out.find("zulu").unwrap() < out.find("alpha").unwrap());
        assert!(out.find("alpha").unwrap() < out.find("mike").unwrap());
    }

    #[test]
    fn test_projection_is_idempotent() {
        let record = sample_record();
        let t = template(r#"{"jobs": [{"employer": "company"}], "n": "number"}"#);
        assert_eq!(project(&record, &t), project(&record, &t));
    }

    #[test]
    fn test_language_elements_resolve_name() {
        let record = sample_record();
        let t = template(r#"[{"language": "languages", "level": "string"}]"#);
        assert_eq!(
            project(&record, &t),
            json!([{"language": "English", "level": ""}])
        );
    }
}
