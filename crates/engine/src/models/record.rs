//! Document input types and the canonical record produced by extraction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input boundary: normalized text handed over by the external PDF-text
/// extractor, plus the page count it observed. A missing page count is a
/// valid zero-content signal, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentText {
    pub text: String,
    pub page_count: Option<u32>,
}

impl DocumentText {
    pub fn new(text: impl Into<String>, page_count: Option<u32>) -> Self {
        DocumentText {
            text: text.into(),
            page_count,
        }
    }

    /// Splits the raw text into ordinal-tagged lines. Blank lines are kept
    /// as separators; ordinals are the original line positions.
    pub fn lines(&self) -> Vec<Line> {
        self.text
            .lines()
            .enumerate()
            .map(|(ordinal, text)| Line {
                ordinal,
                text: text.trim_end().to_string(),
            })
            .collect()
    }
}

/// A single logical text line with its original position.
/// Never mutated after segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub ordinal: usize,
    pub text: String,
}

impl Line {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Label of a segmented section block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLabel {
    Preamble,
    Summary,
    Skills,
    Languages,
    Certifications,
    Education,
    Experience,
    Unknown,
}

/// A labeled run of lines. The heading line (when one exists) is kept
/// separate from the body so section parsers never re-ingest it; together
/// they account for every input line exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionBlock {
    pub label: SectionLabel,
    pub heading: Option<Line>,
    pub lines: Vec<Line>,
}

impl SectionBlock {
    pub fn line_count(&self) -> usize {
        self.lines.len() + usize::from(self.heading.is_some())
    }
}

/// Contact fields pulled from the top of the document. Absent fields are
/// empty strings; each field is set at most once (first-match-wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

impl EducationEntry {
    pub fn is_empty(&self) -> bool {
        self.degree.is_empty() && self.institution.is_empty() && self.period.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub period: String,
    pub location: String,
    pub responsibilities: Vec<String>,
}

impl ExperienceEntry {
    pub fn is_empty(&self) -> bool {
        self.company.is_empty()
            && self.position.is_empty()
            && self.period.is_empty()
            && self.location.is_empty()
            && self.responsibilities.is_empty()
    }

    /// Duplicate identity: (company, position, period), case-insensitive
    /// after trimming.
    pub fn dedup_key(&self) -> (String, String, String) {
        (
            self.company.trim().to_lowercase(),
            self.position.trim().to_lowercase(),
            self.period.trim().to_lowercase(),
        )
    }
}

/// Extraction bookkeeping attached to every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub record_id: Uuid,
    pub parser_id: String,
    pub page_count: u32,
    pub segment_count: usize,
    /// Wall-clock extraction duration in seconds.
    pub extraction_time: f64,
    pub extracted_at: DateTime<Utc>,
}

impl Default for RecordMetadata {
    fn default() -> Self {
        RecordMetadata {
            record_id: Uuid::new_v4(),
            parser_id: String::new(),
            page_count: 0,
            segment_count: 0,
            extraction_time: 0.0,
            extracted_at: Utc::now(),
        }
    }
}

/// The single normalized representation of one document, independent of any
/// requested output shape. Constructed once by the assembler, immutable
/// afterward, consumed read-only by the schema mapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub skills: Vec<String>,
    pub languages: Vec<LanguageEntry>,
    pub certifications: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub metadata: RecordMetadata,
}
