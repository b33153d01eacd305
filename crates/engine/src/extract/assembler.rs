//! Final assembly of extractor outputs into one validated record.
//!
//! Absence is never an error here: a missing section becomes an empty
//! collection, malformed input becomes an all-defaults record. A partially
//! wrong structured result is preferred over a failed request.

use std::time::Instant;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::ScoringWeights;
use crate::models::record::{
    CanonicalRecord, EducationEntry, ExperienceEntry, LanguageEntry, Line, PersonalInfo,
    RecordMetadata,
};

/// Extractor outputs waiting to be merged into a record.
#[derive(Debug, Default)]
pub struct RecordParts {
    pub personal_info: PersonalInfo,
    pub summary_lines: Vec<Line>,
    pub skills: Vec<String>,
    pub languages: Vec<LanguageEntry>,
    pub certifications: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
}

pub struct RecordAssembler<'a> {
    weights: &'a ScoringWeights,
}

impl<'a> RecordAssembler<'a> {
    pub fn new(weights: &'a ScoringWeights) -> Self {
        RecordAssembler { weights }
    }

    pub fn assemble(
        &self,
        mut parts: RecordParts,
        parser_id: &str,
        page_count: u32,
        segment_count: usize,
        started: Instant,
    ) -> CanonicalRecord {
        parts.education.retain(|e| !e.is_empty());
        parts.experience.retain(|e| !e.is_empty());

        let summary = self.build_summary(&parts.summary_lines);
        let metadata = RecordMetadata {
            record_id: Uuid::new_v4(),
            parser_id: parser_id.to_string(),
            page_count,
            segment_count,
            extraction_time: started.elapsed().as_secs_f64(),
            extracted_at: Utc::now(),
        };
        info!(
            record_id = %metadata.record_id,
            segment_count,
            skills = parts.skills.len(),
            experience = parts.experience.len(),
            "record assembled"
        );

        CanonicalRecord {
            personal_info: parts.personal_info,
            summary,
            skills: parts.skills,
            languages: parts.languages,
            certifications: parts.certifications,
            education: parts.education,
            experience: parts.experience,
            metadata,
        }
    }

    /// Joins the summary block into one whitespace-collapsed paragraph,
    /// capped at the configured word count.
    fn build_summary(&self, lines: &[Line]) -> String {
        let words: Vec<&str> = lines
            .iter()
            .flat_map(|l| l.text.split_whitespace())
            .take(self.weights.summary_word_cap)
            .collect();
        words.join(" ")
    }
}
