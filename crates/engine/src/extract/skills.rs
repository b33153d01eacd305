//! Skills block parsing: delimiter split, trim, case-insensitive dedup.

use std::collections::HashSet;

use crate::models::record::Line;

const SKILL_DELIMITERS: &[char] = &[',', ';', '|', '•', '·', '▪'];
const MAX_SKILLS: usize = 25;

pub struct SkillsParser;

impl SkillsParser {
    /// Splits block lines into individual skills. Duplicates are dropped
    /// case-insensitively; the first-seen casing and order are kept.
    pub fn parse(&self, lines: &[Line]) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut skills = Vec::new();

        for line in lines {
            let body = line
                .text
                .trim()
                .trim_start_matches(['-', '*', '•', '·', '▪'])
                .trim();
            for token in body.split(SKILL_DELIMITERS) {
                let skill = clean_skill(token);
                if skill.len() <= 2 {
                    continue;
                }
                let lower = skill.to_lowercase();
                if lower.starts_with("page ") || lower.starts_with("www.") {
                    continue;
                }
                if seen.insert(lower) {
                    skills.push(skill);
                }
                if skills.len() >= MAX_SKILLS {
                    return skills;
                }
            }
        }
        skills
    }
}

/// Trims whitespace and the "in " prefix LinkedIn exports put before each
/// skill ("in Project Management").
fn clean_skill(token: &str) -> String {
    let token = token.trim();
    let token = token
        .strip_prefix("in ")
        .or_else(|| token.strip_prefix("In "))
        .unwrap_or(token);
    token.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<Line> {
        texts
            .iter()
            .enumerate()
            .map(|(ordinal, text)| Line {
                ordinal,
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_comma_split_and_trim() {
        let skills = SkillsParser.parse(&lines(&["IT Governance,  ITIL , Project Management"]));
        assert_eq!(skills, vec!["IT Governance", "ITIL", "Project Management"]);
    }

    #[test]
    fn test_bullet_and_pipe_delimiters() {
        let skills = SkillsParser.parse(&lines(&["- Python | Rust", "• SQL; Docker"]));
        assert_eq!(skills, vec!["Python", "Rust", "SQL", "Docker"]);
    }

    #[test]
    fn test_case_insensitive_dedup_keeps_first_casing() {
        let skills = SkillsParser.parse(&lines(&["ITIL, itil, Itil", "SQL"]));
        assert_eq!(skills, vec!["ITIL", "SQL"]);
    }

    #[test]
    fn test_in_prefix_is_stripped() {
        let skills = SkillsParser.parse(&lines(&["in Project Management, in Data Analysis"]));
        assert_eq!(skills, vec!["Project Management", "Data Analysis"]);
    }

    #[test]
    fn test_noise_tokens_dropped() {
        let skills = SkillsParser.parse(&lines(&["Page 2, www.example.com, ok, SQL"]));
        assert_eq!(skills, vec!["SQL"]);
    }

    #[test]
    fn test_empty_block_yields_empty_list() {
        assert!(SkillsParser.parse(&[]).is_empty());
        assert!(SkillsParser.parse(&lines(&["", "  "])).is_empty());
    }
}
