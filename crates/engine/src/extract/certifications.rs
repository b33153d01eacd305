//! Certifications block parsing: a line/bullet list, filtered against the
//! language and education lexicons so a line already classified elsewhere is
//! not double-counted.

use std::collections::HashSet;

use crate::lexicon::Lexicons;
use crate::models::record::Line;

pub struct CertificationParser<'a> {
    lexicons: &'a Lexicons,
}

impl<'a> CertificationParser<'a> {
    pub fn new(lexicons: &'a Lexicons) -> Self {
        CertificationParser { lexicons }
    }

    /// One certification per non-empty line, bullet prefixes stripped,
    /// deduplicated case-insensitively in first-seen order.
    pub fn parse(&self, lines: &[Line]) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut certifications = Vec::new();

        for line in lines {
            let text = line
                .text
                .trim()
                .trim_start_matches(['-', '*', '•', '·', '▪'])
                .trim();
            if text.is_empty() {
                continue;
            }
            let lower = text.to_lowercase();
            if lower.starts_with("page ") || lower.starts_with("www.") || lower.starts_with("http")
            {
                continue;
            }
            // Bare language names belong to the languages section.
            if self.lexicons.is_known_language(text) {
                continue;
            }
            // Degree/institution lines belong to education.
            if self.lexicons.has_degree_keyword(text)
                || self.lexicons.has_institution_keyword(text)
            {
                continue;
            }
            if seen.insert(lower) {
                certifications.push(text.to_string());
            }
        }
        certifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(texts: &[&str]) -> Vec<String> {
        let lexicons = Lexicons::default();
        let lines: Vec<Line> = texts
            .iter()
            .enumerate()
            .map(|(ordinal, text)| Line {
                ordinal,
                text: text.to_string(),
            })
            .collect();
        CertificationParser::new(&lexicons).parse(&lines)
    }

    #[test]
    fn test_bullet_list() {
        let certs = parse(&["- ITIL V3 Foundations", "• PMP"]);
        assert_eq!(certs, vec!["ITIL V3 Foundations", "PMP"]);
    }

    #[test]
    fn test_language_names_are_filtered_out() {
        let certs = parse(&["DELF B2", "French", "ITIL V3 Foundations"]);
        assert_eq!(certs, vec!["DELF B2", "ITIL V3 Foundations"]);
    }

    #[test]
    fn test_education_lines_are_filtered_out() {
        let certs = parse(&["Bachelor of Science", "Istanbul University", "PMP"]);
        assert_eq!(certs, vec!["PMP"]);
    }

    #[test]
    fn test_noise_and_duplicates_dropped() {
        let certs = parse(&["Page 3 of 4", "www.example.com", "PMP", "pmp"]);
        assert_eq!(certs, vec!["PMP"]);
    }
}
