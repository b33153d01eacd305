//! Education block parsing.
//!
//! Entry boundaries are date-range lines and institution-keyword lines; a
//! boundary line that would only complete the open entry (its first date,
//! its first institution) continues it instead of opening a new one, so a
//! "University / degree / years" triple stays one entry whichever line
//! comes first.

use crate::extract::dates;
use crate::lexicon::Lexicons;
use crate::models::record::{EducationEntry, Line};

pub struct EducationParser<'a> {
    lexicons: &'a Lexicons,
}

impl<'a> EducationParser<'a> {
    pub fn new(lexicons: &'a Lexicons) -> Self {
        EducationParser { lexicons }
    }

    pub fn parse(&self, lines: &[Line]) -> Vec<EducationEntry> {
        let mut entries: Vec<EducationEntry> = Vec::new();
        let mut current: Option<EducationEntry> = None;
        // Positional fallback window: unlabeled text counts as a degree only
        // on the boundary line or the one after it.
        let mut lines_into_current = 0usize;

        for line in lines {
            let text = line.text.trim();
            if text.is_empty() || text.to_lowercase().starts_with("page ") {
                continue;
            }

            let period = dates::find_date_range(text);
            let is_institution = self.lexicons.has_institution_keyword(text);
            let starts_new = match &current {
                None => true,
                Some(entry) => {
                    (is_institution && !entry.institution.is_empty())
                        || (period.is_some() && !entry.period.is_empty())
                }
            };
            if starts_new {
                if let Some(entry) = current.take() {
                    entries.push(entry);
                }
                current = Some(EducationEntry::default());
                lines_into_current = 0;
            }
            let Some(entry) = current.as_mut() else {
                continue;
            };

            if let Some(period) = period {
                if entry.period.is_empty() {
                    let leftover = dates::without_period(text, &period);
                    entry.period = period.text;
                    if !leftover.is_empty() {
                        if is_institution && entry.institution.is_empty() {
                            entry.institution = leftover;
                        } else if entry.degree.is_empty() {
                            entry.degree = leftover;
                        }
                    }
                    lines_into_current += 1;
                    continue;
                }
            }
            if is_institution && entry.institution.is_empty() {
                entry.institution = text.to_string();
            } else if entry.degree.is_empty()
                && (self.lexicons.has_degree_keyword(text) || lines_into_current <= 1)
            {
                entry.degree = text.to_string();
            }
            lines_into_current += 1;
        }

        if let Some(entry) = current {
            entries.push(entry);
        }
        entries.retain(|e| !e.is_empty());
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(texts: &[&str]) -> Vec<EducationEntry> {
        let lexicons = Lexicons::default();
        let lines: Vec<Line> = texts
            .iter()
            .enumerate()
            .map(|(ordinal, text)| Line {
                ordinal,
                text: text.to_string(),
            })
            .collect();
        EducationParser::new(&lexicons).parse(&lines)
    }

    #[test]
    fn test_institution_first_layout() {
        let entries = parse(&[
            "Istanbul Technical University",
            "Bachelor of Science, Computer Engineering",
            "2004-2008",
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, "Istanbul Technical University");
        assert_eq!(entries[0].degree, "Bachelor of Science, Computer Engineering");
        assert_eq!(entries[0].period, "2004-2008");
    }

    #[test]
    fn test_degree_first_layout() {
        let entries = parse(&[
            "Master of Business Administration",
            "Koc University",
            "2010 - 2012",
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "Master of Business Administration");
        assert_eq!(entries[0].institution, "Koc University");
        assert_eq!(entries[0].period, "2010 - 2012");
    }

    #[test]
    fn test_two_entries_split_on_second_institution() {
        let entries = parse(&[
            "Istanbul Technical University",
            "BSc Computer Engineering",
            "2004-2008",
            "Koc University",
            "MBA",
            "2010-2012",
        ]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].institution, "Istanbul Technical University");
        assert_eq!(entries[1].institution, "Koc University");
        assert_eq!(entries[1].degree, "MBA");
    }

    #[test]
    fn test_date_boundary_with_inline_institution() {
        let entries = parse(&["2010-2012 Koc University", "Master of Arts"]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].period, "2010-2012");
        assert_eq!(entries[0].institution, "Koc University");
        assert_eq!(entries[0].degree, "Master of Arts");
    }

    #[test]
    fn test_present_range() {
        let entries = parse(&["Open University", "2019 - Present"]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].period, "2019 - Present");
    }

    #[test]
    fn test_empty_block() {
        assert!(parse(&[]).is_empty());
        assert!(parse(&["", "Page 2 of 3"]).is_empty());
    }
}
