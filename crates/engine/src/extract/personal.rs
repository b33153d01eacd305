//! Contact-field extraction from the top of the document.
//!
//! Email, phone and linkedin are near-unambiguous pattern cascades with
//! first-match-wins semantics. The name is the hard field: every line not
//! consumed by another field is scored, and anything hitting the exclusion
//! lexicon is dropped outright — a certification title ("ITIL V3
//! Foundations") must never be promoted to a person's name.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use crate::config::ScoringWeights;
use crate::lexicon::Lexicons;
use crate::models::record::{Line, PersonalInfo};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Ordered phone cascade: international with separators, bare international,
/// then local. First pattern that matches anywhere wins.
static PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\+?\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap(),
        Regex::new(r"\+?\d{10,13}").unwrap(),
        Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap(),
    ]
});

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:www\.)?linkedin\.com/in/[\w-]+").unwrap());

/// "ISTANBUL-TURKEY" shape. A comma or dash separator is required so an
/// ALL-CAPS name line never reads as a location.
static LOCATION_CAPS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]{2,}\s*[-,]\s*[A-Z]{2,}").unwrap());
static LOCATION_CAPS_EXTRACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][A-Za-z]+(?:[-,\s]+[A-Z][A-Za-z]+)+)").unwrap());

/// "Istanbul, Turkey" / "New York - USA" shape, same separator rule.
static LOCATION_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]+\s*[-,]\s*[A-Z][a-z]+").unwrap());
static LOCATION_TITLE_EXTRACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][A-Za-z]+(?:[-,\s]+[A-Z][A-Za-z]+)+)").unwrap());

pub struct PersonalInfoExtractor<'a> {
    lexicons: &'a Lexicons,
    weights: &'a ScoringWeights,
}

impl<'a> PersonalInfoExtractor<'a> {
    pub fn new(lexicons: &'a Lexicons, weights: &'a ScoringWeights) -> Self {
        PersonalInfoExtractor { lexicons, weights }
    }

    /// Extracts contact fields from the given lines (the preamble, or the
    /// first lines of the document as a fallback). Fields already set on
    /// `info` are left untouched, so a second fallback pass never overwrites
    /// an earlier match.
    pub fn extract_into(&self, info: &mut PersonalInfo, lines: &[Line]) {
        let mut consumed: HashSet<usize> = HashSet::new();

        for line in lines {
            if info.email.is_empty() {
                if let Some(m) = EMAIL_RE.find(&line.text) {
                    info.email = m.as_str().to_string();
                    consumed.insert(line.ordinal);
                }
            }
            if info.linkedin.is_empty() {
                if let Some(m) = LINKEDIN_RE.find(&line.text) {
                    info.linkedin = m.as_str().to_string();
                    consumed.insert(line.ordinal);
                }
            }
            if info.phone.is_empty() {
                for pattern in PHONE_RES.iter() {
                    if let Some(m) = pattern.find(&line.text) {
                        info.phone = m.as_str().trim().to_string();
                        consumed.insert(line.ordinal);
                        break;
                    }
                }
            }
            if info.location.is_empty() {
                if let Some(location) = extract_location(&line.text) {
                    info.location = location;
                    consumed.insert(line.ordinal);
                }
            }
        }

        if info.name.is_empty() {
            info.name = self.select_name(lines, &consumed);
        }
    }

    /// Scores every surviving candidate line and returns the best one, ties
    /// broken by earliest position. Returns an empty string when nothing
    /// survives — never an excluded token.
    fn select_name(&self, lines: &[Line], consumed: &HashSet<usize>) -> String {
        // LinkedIn-export shape: "Contact Merve YILDIZ KÖSE".
        for line in lines {
            if let Some(rest) = line.text.trim().strip_prefix("Contact ") {
                let rest = rest.trim();
                if rest.split_whitespace().count() >= 2 && !self.lexicons.name_excluded(rest) {
                    return rest.to_string();
                }
            }
        }

        let mut best: Option<(f32, &str)> = None;
        for (position, line) in lines.iter().enumerate() {
            if consumed.contains(&line.ordinal) {
                continue;
            }
            let Some(score) = self.score_candidate(position, line.text.trim()) else {
                continue;
            };
            debug!(ordinal = line.ordinal, score, text = %line.text, "name candidate");
            if best.map(|(s, _)| score > s).unwrap_or(true) {
                best = Some((score, line.text.trim()));
            }
        }
        best.map(|(_, text)| text.to_string()).unwrap_or_default()
    }

    /// Returns `None` when the line cannot be a name at all; otherwise its
    /// score. Weights are configuration, the shape of the formula is not.
    fn score_candidate(&self, position: usize, text: &str) -> Option<f32> {
        if text.len() < 3 {
            return None;
        }
        let lower = text.to_lowercase();
        if lower.starts_with("resume") || lower.starts_with("cv") || lower.starts_with("curriculum")
        {
            return None;
        }
        // Exclusion lexicon is a hard drop, not a penalty floor.
        if self.lexicons.name_excluded(text) {
            return None;
        }
        if text.contains(['@', '+', '/', ':', '•']) || lower.contains("www") {
            return None;
        }
        if text.matches(',').count() > 1 {
            return None;
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < 2 || tokens.len() > 5 {
            return None;
        }
        let name_like = tokens
            .iter()
            .filter(|t| {
                t.len() > 1
                    && (t.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
                        || t.chars().all(|c| !c.is_alphabetic() || c.is_uppercase()))
            })
            .count();
        if name_like < 2 {
            return None;
        }

        let mut score = self.weights.name_position / (1.0 + position as f32);
        if name_like == tokens.len() {
            score += self.weights.name_capitalization;
        }
        if (2..=4).contains(&tokens.len()) {
            score += self.weights.name_length;
        }
        Some(score)
    }
}

fn extract_location(text: &str) -> Option<String> {
    let text = text.trim();
    if LOCATION_CAPS_RE.is_match(text) {
        if let Some(c) = LOCATION_CAPS_EXTRACT_RE.captures(text) {
            return Some(c[1].to_string());
        }
    }
    if LOCATION_TITLE_RE.is_match(text)
        && !text.contains("Contact")
        && !text.contains('@')
        && !text.contains('+')
    {
        if let Some(c) = LOCATION_TITLE_EXTRACT_RE.captures(text) {
            return Some(c[1].to_string());
        }
    }
    None
}
