//! Date-range detection shared by the education and experience parsers.

use once_cell::sync::Lazy;
use regex::Regex;

/// "January 2010 - June 2013" / "March 2015 - Present"
static MONTH_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z][a-z]+\s+\d{4}\s*[-–]\s*(?:Present|present|[A-Z][a-z]+\s+\d{4})").unwrap()
});

/// "2004-2008" / "2019 - Present"
static YEAR_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\s*[-–]\s*(?:(?:19|20)\d{2}|Present|present)\b").unwrap());

/// Duration annotation following a range: "(3 years 2 months)"
static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([0-9]+\s*(?:year|month)s?[^)]*)\)").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PeriodMatch {
    /// The period text, including a trailing duration annotation when one
    /// follows the range on the same line.
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Finds the first date range on a line. Month-granular ranges win over bare
/// year ranges so "January 2010 - June 2013" is not truncated.
pub(crate) fn find_date_range(line: &str) -> Option<PeriodMatch> {
    let found = MONTH_RANGE_RE
        .find(line)
        .or_else(|| YEAR_RANGE_RE.find(line))?;
    let mut text = found.as_str().to_string();
    if let Some(duration) = DURATION_RE.captures(&line[found.end()..]) {
        text = format!("{} ({})", text, &duration[1]);
    }
    Some(PeriodMatch {
        text,
        start: found.start(),
        end: found.end(),
    })
}

/// Returns the line with the matched range (and any duration annotation)
/// removed, trimmed of leftover separator punctuation.
pub(crate) fn without_period(line: &str, period: &PeriodMatch) -> String {
    let mut rest = format!("{}{}", &line[..period.start], &line[period.end..]);
    rest = DURATION_RE.replace(&rest, "").into_owned();
    rest.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '–' | ',' | '|' | '•' | '·'))
        .to_string()
}
