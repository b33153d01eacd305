//! Languages block parsing.
//!
//! Each delimiter-separated token is tried against "<Language> -
//! <Proficiency>" and "<Language> (<Proficiency>)". Tokens matching neither
//! are only accepted as bare language names when the language lexicon knows
//! them — that gate is what keeps certification lines ("DELF B2" aside)
//! from leaking into the languages list.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Lexicons;
use crate::models::record::{LanguageEntry, Line};

static DASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\s+[-–]\s+(.+)$").unwrap());
static PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\s*\((.+?)\)$").unwrap());

pub struct LanguageParser<'a> {
    lexicons: &'a Lexicons,
}

impl<'a> LanguageParser<'a> {
    pub fn new(lexicons: &'a Lexicons) -> Self {
        LanguageParser { lexicons }
    }

    pub fn parse(&self, lines: &[Line]) -> Vec<LanguageEntry> {
        let mut entries = Vec::new();
        for line in lines {
            let body = line
                .text
                .trim()
                .trim_start_matches(['-', '*', '•', '·', '▪'])
                .trim();
            for token in body.split([',', ';', '•', '·']) {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                if let Some(entry) = self.parse_token(token) {
                    entries.push(entry);
                }
            }
        }
        entries
    }

    fn parse_token(&self, token: &str) -> Option<LanguageEntry> {
        if let Some(c) = DASH_RE.captures(token).or_else(|| PAREN_RE.captures(token)) {
            return Some(LanguageEntry {
                name: c[1].trim().to_string(),
                proficiency: c[2].trim().to_string(),
            });
        }
        if self.lexicons.is_known_language(token) {
            return Some(LanguageEntry {
                name: token.to_string(),
                proficiency: String::new(),
            });
        }
        None
    }
}
