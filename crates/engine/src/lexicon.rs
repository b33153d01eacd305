//! Keyword tables used by the segmenter and extractors.
//!
//! All tables are immutable, built once at startup, and passed by reference
//! into each component — there is no hidden global mutable state. Entries
//! were seeded from the labeled corpus the heuristics were tuned on.

use crate::models::record::SectionLabel;

/// Section heading synonyms, matched case-insensitively against a heading
/// line with any trailing colon removed.
const SECTION_SYNONYMS: &[(&str, SectionLabel)] = &[
    ("summary", SectionLabel::Summary),
    ("professional summary", SectionLabel::Summary),
    ("objective", SectionLabel::Summary),
    ("profile", SectionLabel::Summary),
    ("about me", SectionLabel::Summary),
    ("skills", SectionLabel::Skills),
    ("top skills", SectionLabel::Skills),
    ("technical skills", SectionLabel::Skills),
    ("core competencies", SectionLabel::Skills),
    ("languages", SectionLabel::Languages),
    ("certifications", SectionLabel::Certifications),
    ("certificates", SectionLabel::Certifications),
    ("licenses & certifications", SectionLabel::Certifications),
    ("licenses and certifications", SectionLabel::Certifications),
    ("education", SectionLabel::Education),
    ("academic background", SectionLabel::Education),
    ("experience", SectionLabel::Experience),
    ("work experience", SectionLabel::Experience),
    ("professional experience", SectionLabel::Experience),
    ("employment history", SectionLabel::Experience),
    ("work history", SectionLabel::Experience),
];

const KNOWN_LANGUAGES: &[&str] = &[
    "english",
    "french",
    "turkish",
    "spanish",
    "german",
    "italian",
    "portuguese",
    "russian",
    "chinese",
    "mandarin",
    "japanese",
    "arabic",
    "hindi",
    "korean",
    "dutch",
    "polish",
    "greek",
    "swedish",
];

/// Certification vocabulary. Used both to classify certification lines and
/// to disqualify them as name candidates ("ITIL V3 Foundations" is not a
/// person).
const CERTIFICATION_KEYWORDS: &[&str] = &[
    "itil",
    "pmp",
    "prince2",
    "aws certified",
    "azure",
    "cissp",
    "ccna",
    "toeic",
    "toefl",
    "ielts",
    "delf",
    "dalf",
    "iso 27001",
    "iso 22001",
    "six sigma",
    "scrum master",
    "certified",
    "certification",
    "foundations",
];

const JOB_TITLE_KEYWORDS: &[&str] = &[
    "manager",
    "analyst",
    "lead",
    "specialist",
    "director",
    "intern",
    "coordinator",
    "engineer",
    "developer",
    "consultant",
    "owner",
    "officer",
    "tester",
    "architect",
    "administrator",
    "scientist",
    "solutions",
    "head of",
];

const INSTITUTION_KEYWORDS: &[&str] = &[
    "university",
    "institute",
    "college",
    "school",
    "academy",
    "faculty",
    "lycée",
    "lycee",
];

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "mba", "bsc", "msc", "degree", "diploma", "doctorate",
];

/// Extra tokens that disqualify a preamble line as a name candidate beyond
/// the certification and job-title tables: section-header words and common
/// document boilerplate.
const NAME_EXCLUSIONS: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "summary",
    "skills",
    "education",
    "experience",
    "objective",
    "qualification",
    "languages",
    "contact",
    "page",
];

/// Immutable keyword tables handed to each component at construction.
#[derive(Debug, Clone)]
pub struct Lexicons {
    pub section_synonyms: Vec<(String, SectionLabel)>,
    pub known_languages: Vec<String>,
    pub certification_keywords: Vec<String>,
    pub job_title_keywords: Vec<String>,
    pub institution_keywords: Vec<String>,
    pub degree_keywords: Vec<String>,
    pub name_exclusions: Vec<String>,
}

impl Default for Lexicons {
    fn default() -> Self {
        let owned = |table: &[&str]| table.iter().map(|s| s.to_string()).collect();
        Lexicons {
            section_synonyms: SECTION_SYNONYMS
                .iter()
                .map(|(s, label)| (s.to_string(), *label))
                .collect(),
            known_languages: owned(KNOWN_LANGUAGES),
            certification_keywords: owned(CERTIFICATION_KEYWORDS),
            job_title_keywords: owned(JOB_TITLE_KEYWORDS),
            institution_keywords: owned(INSTITUTION_KEYWORDS),
            degree_keywords: owned(DEGREE_KEYWORDS),
            name_exclusions: owned(NAME_EXCLUSIONS),
        }
    }
}

impl Lexicons {
    /// Resolves a heading line to a section label. The line is lowercased
    /// and stripped of a trailing colon before lookup.
    pub fn section_for(&self, heading: &str) -> Option<SectionLabel> {
        let normalized = heading.trim().trim_end_matches(':').trim().to_lowercase();
        self.section_synonyms
            .iter()
            .find(|(synonym, _)| *synonym == normalized)
            .map(|(_, label)| *label)
    }

    pub fn is_known_language(&self, token: &str) -> bool {
        let token = token.trim().to_lowercase();
        self.known_languages.iter().any(|l| *l == token)
    }

    pub fn has_certification_keyword(&self, line: &str) -> bool {
        contains_any(line, &self.certification_keywords)
    }

    pub fn has_job_title_keyword(&self, line: &str) -> bool {
        contains_any(line, &self.job_title_keywords)
    }

    pub fn has_institution_keyword(&self, line: &str) -> bool {
        contains_any(line, &self.institution_keywords)
    }

    pub fn has_degree_keyword(&self, line: &str) -> bool {
        contains_any(line, &self.degree_keywords)
    }

    /// True when a line must never be selected as the candidate name.
    pub fn name_excluded(&self, line: &str) -> bool {
        contains_any(line, &self.name_exclusions)
            || self.has_certification_keyword(line)
            || self.has_job_title_keyword(line)
    }
}

fn contains_any(line: &str, keywords: &[String]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|k| lower.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_synonyms_resolve_case_insensitively() {
        let lex = Lexicons::default();
        assert_eq!(
            lex.section_for("WORK EXPERIENCE"),
            Some(SectionLabel::Experience)
        );
        assert_eq!(
            lex.section_for("Professional Experience:"),
            Some(SectionLabel::Experience)
        );
        assert_eq!(lex.section_for("Top Skills"), Some(SectionLabel::Skills));
        assert_eq!(lex.section_for("Random Heading"), None);
    }

    #[test]
    fn test_certification_lines_are_name_excluded() {
        let lex = Lexicons::default();
        assert!(lex.name_excluded("ITIL V3 Foundations"));
        assert!(lex.name_excluded("AWS Certified Solutions Architect"));
        assert!(lex.name_excluded("Senior IT Service Manager"));
        assert!(!lex.name_excluded("Merve YILDIZ KÖSE"));
    }

    #[test]
    fn test_known_language_lookup_trims_and_lowercases() {
        let lex = Lexicons::default();
        assert!(lex.is_known_language(" English "));
        assert!(lex.is_known_language("turkish"));
        assert!(!lex.is_known_language("ITIL"));
    }

    #[test]
    fn test_institution_and_degree_keywords() {
        let lex = Lexicons::default();
        assert!(lex.has_institution_keyword("Istanbul Technical University"));
        assert!(lex.has_degree_keyword("Bachelor of Science"));
        assert!(!lex.has_institution_keyword("Coca-Cola Icecek"));
    }
}
