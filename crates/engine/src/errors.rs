use thiserror::Error;

/// Engine error type. Extraction itself never fails — malformed or empty
/// input degrades to a default-valued record — so the only variants are the
/// template-rejection paths that run before any mapping attempt.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Template parse error: {0}")]
    TemplateParse(#[from] serde_json::Error),

    #[error("Schema validation error: {0}")]
    SchemaValidation(String),
}
