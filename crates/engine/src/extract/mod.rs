//! The extraction pipeline: segmentation, per-field extraction, assembly.
//!
//! Everything sits behind the `ExtractionBackend` trait so an LLM- or
//! OCR-based extractor can be swapped in by configuration without touching
//! downstream consumers — they only ever see a `CanonicalRecord`.

pub mod assembler;
pub mod certifications;
mod dates;
pub mod education;
pub mod experience;
pub mod languages;
pub mod personal;
pub mod segmenter;
pub mod skills;

use std::time::Instant;

use tracing::debug;

use crate::config::EngineConfig;
use crate::extract::assembler::{RecordAssembler, RecordParts};
use crate::extract::certifications::CertificationParser;
use crate::extract::education::EducationParser;
use crate::extract::experience::ExperienceParser;
use crate::extract::languages::LanguageParser;
use crate::extract::personal::PersonalInfoExtractor;
use crate::extract::segmenter::TextSegmenter;
use crate::extract::skills::SkillsParser;
use crate::models::record::{CanonicalRecord, DocumentText, Line, SectionLabel};

/// One extraction backend: a document in, a canonical record out. Total by
/// contract — malformed input degrades to a default-valued record, never an
/// error. Implementations must be shareable across threads; the record is
/// read-only after assembly, so projections may run concurrently.
pub trait ExtractionBackend: Send + Sync {
    /// Stable identifier recorded in `RecordMetadata.parser_id`.
    fn parser_id(&self) -> &'static str;

    fn extract(&self, doc: &DocumentText) -> CanonicalRecord;
}

/// The default backend: pure pattern-matching heuristics, no I/O, no model
/// calls, deterministic for a given configuration.
pub struct RuleBasedExtractor {
    config: EngineConfig,
}

impl RuleBasedExtractor {
    pub fn new(config: EngineConfig) -> Self {
        RuleBasedExtractor { config }
    }
}

impl ExtractionBackend for RuleBasedExtractor {
    fn parser_id(&self) -> &'static str {
        "rule-based"
    }

    fn extract(&self, doc: &DocumentText) -> CanonicalRecord {
        let started = Instant::now();
        let lexicons = &self.config.lexicons;
        let weights = &self.config.weights;

        let lines = doc.lines();
        let blocks = TextSegmenter::new(lexicons, weights).segment(&lines);
        debug!(lines = lines.len(), blocks = blocks.len(), "segmented");

        let mut parts = RecordParts::default();

        // Contact fields come from the preamble; any field still unset after
        // that gets a second pass over the first lines of the document (the
        // preamble can legitimately be empty or clipped by an early heading).
        let extractor = PersonalInfoExtractor::new(lexicons, weights);
        let preamble: Vec<Line> = blocks
            .iter()
            .filter(|b| b.label == SectionLabel::Preamble)
            .flat_map(|b| b.lines.iter().cloned())
            .collect();
        extractor.extract_into(&mut parts.personal_info, &preamble);
        let fallback: Vec<Line> = lines
            .iter()
            .take(weights.preamble_fallback_lines)
            .cloned()
            .collect();
        extractor.extract_into(&mut parts.personal_info, &fallback);

        let section_lines = |label: SectionLabel| -> Vec<Line> {
            blocks
                .iter()
                .filter(|b| b.label == label)
                .flat_map(|b| b.lines.iter().cloned())
                .collect()
        };
        parts.summary_lines = section_lines(SectionLabel::Summary);
        parts.skills = SkillsParser.parse(&section_lines(SectionLabel::Skills));
        parts.languages = LanguageParser::new(lexicons).parse(&section_lines(SectionLabel::Languages));
        parts.certifications =
            CertificationParser::new(lexicons).parse(&section_lines(SectionLabel::Certifications));
        parts.education =
            EducationParser::new(lexicons).parse(&section_lines(SectionLabel::Education));
        parts.experience =
            ExperienceParser::new(lexicons).parse(&section_lines(SectionLabel::Experience));

        RecordAssembler::new(weights).assemble(
            parts,
            self.parser_id(),
            doc.page_count.unwrap_or(0),
            blocks.len(),
            started,
        )
    }
}
