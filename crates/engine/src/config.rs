use anyhow::{Context, Result};

use crate::lexicon::Lexicons;

/// Tunable heuristic constants. The defaults were tuned against the labeled
/// fixture corpus; every weight can be overridden through the environment so
/// retuning does not require a rebuild.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    /// Name scoring: position bonus numerator (earlier lines score higher).
    pub name_position: f32,
    /// Name scoring: bonus when every token is Title Case or ALL CAPS.
    pub name_capitalization: f32,
    /// Name scoring: bonus for the ideal 2–4 token length.
    pub name_length: f32,
    /// Structural heading heuristic: maximum token count.
    pub heading_max_tokens: usize,
    /// Structural heading heuristic: how many lines ahead to look for
    /// non-empty content.
    pub heading_lookahead: usize,
    /// Structural candidates are only considered from this line on; the top
    /// of the document is contact territory (name lines look exactly like
    /// headings). Lexicon headings match anywhere.
    pub structural_min_line: usize,
    /// How many leading document lines to scan when the preamble is empty.
    pub preamble_fallback_lines: usize,
    /// Word cap applied to the assembled summary.
    pub summary_word_cap: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            name_position: 3.0,
            name_capitalization: 2.0,
            name_length: 1.5,
            heading_max_tokens: 6,
            heading_lookahead: 2,
            structural_min_line: 5,
            preamble_fallback_lines: 10,
            summary_word_cap: 50,
        }
    }
}

/// Engine configuration: scoring weights plus the immutable keyword tables.
/// Built once at process start and shared read-only across invocations.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub weights: ScoringWeights,
    pub lexicons: Lexicons,
    pub rust_log: String,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = ScoringWeights::default();
        let weights = ScoringWeights {
            name_position: env_or("CV_NAME_POSITION_WEIGHT", defaults.name_position)?,
            name_capitalization: env_or(
                "CV_NAME_CAPITALIZATION_WEIGHT",
                defaults.name_capitalization,
            )?,
            name_length: env_or("CV_NAME_LENGTH_WEIGHT", defaults.name_length)?,
            heading_max_tokens: env_or("CV_HEADING_MAX_TOKENS", defaults.heading_max_tokens)?,
            heading_lookahead: env_or("CV_HEADING_LOOKAHEAD", defaults.heading_lookahead)?,
            structural_min_line: env_or("CV_STRUCTURAL_MIN_LINE", defaults.structural_min_line)?,
            preamble_fallback_lines: env_or(
                "CV_PREAMBLE_FALLBACK_LINES",
                defaults.preamble_fallback_lines,
            )?,
            summary_word_cap: env_or("CV_SUMMARY_WORD_CAP", defaults.summary_word_cap)?,
        };

        Ok(EngineConfig {
            weights,
            lexicons: Lexicons::default(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an optional environment variable, falling back to the default when
/// unset; a set-but-unparseable value is a configuration error.
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .ok()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_sane() {
        let w = ScoringWeights::default();
        assert!(w.name_position > 0.0);
        assert_eq!(w.heading_max_tokens, 6);
        assert_eq!(w.heading_lookahead, 2);
        assert_eq!(w.preamble_fallback_lines, 10);
    }

    #[test]
    fn test_env_or_falls_back_to_default() {
        let value: usize = env_or("CV_ENGINE_TEST_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }
}
