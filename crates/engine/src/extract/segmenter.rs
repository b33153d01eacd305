//! Splits normalized text into a preamble plus labeled section blocks.
//!
//! Known limitation: interleaved multi-column text may assign unrelated
//! lines to the same block. That is an accepted approximation of the
//! single-pass heading scan, not something this module tries to mask.

use tracing::debug;

use crate::config::ScoringWeights;
use crate::extract::dates;
use crate::lexicon::Lexicons;
use crate::models::record::{Line, SectionBlock, SectionLabel};

const BULLET_PREFIXES: &[char] = &['-', '•', '*', '·', '▪'];

pub struct TextSegmenter<'a> {
    lexicons: &'a Lexicons,
    weights: &'a ScoringWeights,
}

impl<'a> TextSegmenter<'a> {
    pub fn new(lexicons: &'a Lexicons, weights: &'a ScoringWeights) -> Self {
        TextSegmenter { lexicons, weights }
    }

    /// Segments the lines into blocks covering every input line exactly
    /// once. Lines before the first heading form the preamble; each heading
    /// opens a new block that runs until the next heading.
    pub fn segment(&self, lines: &[Line]) -> Vec<SectionBlock> {
        let mut blocks: Vec<SectionBlock> = Vec::new();
        let mut current = SectionBlock {
            label: SectionLabel::Preamble,
            heading: None,
            lines: Vec::new(),
        };

        for (idx, line) in lines.iter().enumerate() {
            if let Some(label) = self.classify_heading(idx, lines) {
                debug!(ordinal = line.ordinal, ?label, "section heading");
                blocks.push(current);
                current = SectionBlock {
                    label,
                    heading: Some(line.clone()),
                    lines: Vec::new(),
                };
            } else {
                current.lines.push(line.clone());
            }
        }
        blocks.push(current);

        // A document that opens directly with a heading has no preamble.
        if blocks
            .first()
            .map(|b| b.label == SectionLabel::Preamble && b.lines.is_empty())
            .unwrap_or(false)
        {
            blocks.remove(0);
        }
        blocks
    }

    /// A line is a heading candidate when the lexicon recognizes it, or when
    /// it passes the structural heuristic and is followed within
    /// `heading_lookahead` lines by non-empty content.
    fn classify_heading(&self, idx: usize, lines: &[Line]) -> Option<SectionLabel> {
        let text = lines[idx].text.trim();
        if text.is_empty() {
            return None;
        }
        if let Some(label) = self.lexicons.section_for(text) {
            return Some(label);
        }
        if idx >= self.weights.structural_min_line
            && self.is_structural_heading(text)
            && has_content_within(lines, idx, self.weights.heading_lookahead)
        {
            return Some(SectionLabel::Unknown);
        }
        None
    }

    /// Structural heuristic: short, unpunctuated, mostly capitalized, and
    /// not shaped like document content (bullets, comma lists, date-bearing
    /// entry lines, job titles).
    fn is_structural_heading(&self, text: &str) -> bool {
        if text.starts_with(BULLET_PREFIXES) {
            return false;
        }
        let normalized = text.trim_end_matches(':');
        if normalized.ends_with(|c: char| matches!(c, '.' | ',' | ';' | '!' | '?')) {
            return false;
        }
        if normalized.contains(',')
            || normalized.contains('|')
            || normalized.contains('(')
            || normalized.contains(" - ")
        {
            return false;
        }
        if dates::find_date_range(normalized).is_some() {
            return false;
        }
        // Known content shapes never head sections: job titles, schools,
        // degrees, certifications and language names all look like headings
        // (short, Title Case) but belong to the block they sit in.
        if self.lexicons.has_job_title_keyword(normalized)
            || self.lexicons.has_institution_keyword(normalized)
            || self.lexicons.has_degree_keyword(normalized)
            || self.lexicons.has_certification_keyword(normalized)
            || self.lexicons.is_known_language(normalized)
        {
            return false;
        }
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        if tokens.is_empty() || tokens.len() > self.weights.heading_max_tokens {
            return false;
        }
        let alphabetic: Vec<&&str> = tokens
            .iter()
            .filter(|t| t.chars().any(|c| c.is_alphabetic()))
            .collect();
        if alphabetic.is_empty() {
            return false;
        }
        let capitalized = alphabetic
            .iter()
            .filter(|t| t.chars().next().map(|c| c.is_uppercase()).unwrap_or(false))
            .count();
        capitalized * 2 > alphabetic.len()
    }
}

fn has_content_within(lines: &[Line], idx: usize, lookahead: usize) -> bool {
    lines
        .iter()
        .skip(idx + 1)
        .take(lookahead)
        .any(|l| !l.is_blank())
}
