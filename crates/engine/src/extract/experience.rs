//! Experience block parsing.
//!
//! An entry boundary is a line carrying both employer text and a date range.
//! The default reading is company-on-the-boundary-line, position on the next
//! line; when the supposed company matches the position-keyword lexicon the
//! two are swapped. Bullet lines accumulate as responsibilities until the
//! next boundary. Duplicate entries — same (company, position, period) after
//! case-insensitive trimming — are merged, keeping the union of
//! responsibilities in first-seen order.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::extract::dates;
use crate::lexicon::Lexicons;
use crate::models::record::{ExperienceEntry, Line};

/// "Istanbul, Turkey" / "İstanbul - Turkey" on a line of its own.
static LOCATION_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-ZİÖÜÇŞĞ][A-Za-züğışçö]*\s*[-,]\s*[A-ZİÖÜÇŞĞ][A-Za-züğışçö]+$").unwrap()
});

const BULLET_PREFIXES: &[char] = &['-', '•', '*', '·', '▪'];

pub struct ExperienceParser<'a> {
    lexicons: &'a Lexicons,
}

impl<'a> ExperienceParser<'a> {
    pub fn new(lexicons: &'a Lexicons) -> Self {
        ExperienceParser { lexicons }
    }

    pub fn parse(&self, lines: &[Line]) -> Vec<ExperienceEntry> {
        let mut entries: Vec<ExperienceEntry> = Vec::new();
        let mut current: Option<ExperienceEntry> = None;

        for line in lines {
            let text = line.text.trim();
            if text.is_empty() || text.to_lowercase().starts_with("page ") {
                continue;
            }

            let is_bullet = text.starts_with(BULLET_PREFIXES);
            if !is_bullet {
                if let Some(period) = dates::find_date_range(text) {
                    let employer = dates::without_period(text, &period);
                    if !employer.is_empty() {
                        if let Some(entry) = current.take() {
                            entries.push(entry);
                        }
                        current = Some(ExperienceEntry {
                            company: employer,
                            period: period.text,
                            ..Default::default()
                        });
                        continue;
                    }
                    // A bare date line completes the open entry's period
                    // (period on its own line under the company).
                    if let Some(entry) = current.as_mut() {
                        if entry.period.is_empty() {
                            entry.period = period.text;
                        }
                        continue;
                    }
                }
            }

            let Some(entry) = current.as_mut() else {
                continue;
            };
            if is_bullet {
                let responsibility = text.trim_start_matches(BULLET_PREFIXES).trim();
                if !responsibility.is_empty() {
                    entry.responsibilities.push(responsibility.to_string());
                }
            } else if entry.position.is_empty() && entry.responsibilities.is_empty() {
                entry.position = text.to_string();
            } else if entry.location.is_empty() && LOCATION_LINE_RE.is_match(text) {
                entry.location = text.to_string();
            }
        }
        if let Some(entry) = current {
            entries.push(entry);
        }

        for entry in &mut entries {
            self.swap_if_reversed(entry);
        }
        entries.retain(|e| !e.is_empty());
        merge_duplicates(entries)
    }

    /// The boundary line is normally the company; when it reads like a job
    /// title instead ("IT Service Manager  2010-2013"), the company sits on
    /// the following line and the two are swapped.
    fn swap_if_reversed(&self, entry: &mut ExperienceEntry) {
        if self.lexicons.has_job_title_keyword(&entry.company)
            && !self.lexicons.has_job_title_keyword(&entry.position)
        {
            std::mem::swap(&mut entry.company, &mut entry.position);
        }
    }
}

fn merge_duplicates(entries: Vec<ExperienceEntry>) -> Vec<ExperienceEntry> {
    let mut merged: Vec<ExperienceEntry> = Vec::new();
    let mut index: HashMap<(String, String, String), usize> = HashMap::new();

    for entry in entries {
        match index.get(&entry.dedup_key()) {
            Some(&at) => {
                let kept = &mut merged[at];
                let existing: HashSet<String> =
                    kept.responsibilities.iter().cloned().collect();
                for responsibility in entry.responsibilities {
                    if !existing.contains(&responsibility) {
                        kept.responsibilities.push(responsibility);
                    }
                }
                if kept.location.is_empty() {
                    kept.location = entry.location;
                }
            }
            None => {
                index.insert(entry.dedup_key(), merged.len());
                merged.push(entry);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(texts: &[&str]) -> Vec<ExperienceEntry> {
        let lexicons = Lexicons::default();
        let lines: Vec<Line> = texts
            .iter()
            .enumerate()
            .map(|(ordinal, text)| Line {
                ordinal,
                text: text.to_string(),
            })
            .collect();
        ExperienceParser::new(&lexicons).parse(&lines)
    }

    #[test]
    fn test_three_distinct_companies() {
        let entries = parse(&[
            "BAT January 2008 - December 2009",
            "Service Desk Analyst",
            "- Handled incident tickets",
            "Avon January 2010 - June 2013",
            "IT Service Manager",
            "- Led the service desk team",
            "- Ran the ITIL transition",
            "Coca-Cola July 2013 - Present",
            "IT Governance Lead",
            "- Owned the governance framework",
        ]);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].company, "BAT");
        assert_eq!(entries[1].company, "Avon");
        assert_eq!(entries[2].company, "Coca-Cola");
        assert_eq!(entries[1].responsibilities.len(), 2);
        assert_eq!(
            entries[2].responsibilities,
            vec!["Owned the governance framework"]
        );
    }

    #[test]
    fn test_position_and_period_assignment() {
        let entries = parse(&[
            "Coca-Cola Icecek | January 2010 - June 2013",
            "IT Service Manager",
            "Istanbul, Turkey",
            "- Led the service desk team",
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Coca-Cola Icecek");
        assert_eq!(entries[0].position, "IT Service Manager");
        assert_eq!(entries[0].period, "January 2010 - June 2013");
        assert_eq!(entries[0].location, "Istanbul, Turkey");
    }

    #[test]
    fn test_reversed_layout_triggers_swap() {
        let entries = parse(&["IT Service Manager 2010-2013", "Coca-Cola Icecek"]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Coca-Cola Icecek");
        assert_eq!(entries[0].position, "IT Service Manager");
    }

    #[test]
    fn test_duplicates_merge_responsibility_union() {
        let entries = parse(&[
            "Avon January 2010 - June 2013",
            "IT Service Manager",
            "- Led the service desk team",
            "Avon January 2010 - June 2013",
            "IT Service Manager",
            "- Led the service desk team",
            "- Ran the ITIL transition",
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].responsibilities,
            vec!["Led the service desk team", "Ran the ITIL transition"]
        );
    }

    #[test]
    fn test_duration_annotation_kept_in_period() {
        let entries = parse(&["Avon March 2015 - Present (3 years 2 months)", "Analyst"]);
        assert_eq!(entries[0].period, "March 2015 - Present (3 years 2 months)");
        assert_eq!(entries[0].company, "Avon");
    }

    #[test]
    fn test_bare_date_line_completes_open_entry() {
        let entries = parse(&["Avon Cosmetics", "2010-2013", "- Shipped things"]);
        // No boundary line (no employer+date on one line) means no entry is
        // opened by "Avon Cosmetics" alone; the date line has no employer
        // text and there is no open entry, so nothing is produced.
        assert!(entries.is_empty());
    }

    #[test]
    fn test_responsibilities_keep_document_order() {
        let entries = parse(&[
            "Avon 2010-2013",
            "Analyst",
            "- first",
            "- second",
            "- third",
        ]);
        assert_eq!(
            entries[0].responsibilities,
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_empty_block() {
        assert!(parse(&[]).is_empty());
    }
}
