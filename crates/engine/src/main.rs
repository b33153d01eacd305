use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cv_engine::{
    project, DocumentText, EngineConfig, ExtractionBackend, RuleBasedExtractor, SchemaTemplate,
};

/// Usage: cv-engine <text-file> [schema-template.json]
///
/// Reads normalized document text from `<text-file>`, extracts a canonical
/// record, and writes it to stdout as JSON. With a schema template argument
/// the record is projected through the template instead.
fn main() -> Result<()> {
    let config = EngineConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args_os().skip(1);
    let text_path: PathBuf = args
        .next()
        .context("usage: cv-engine <text-file> [schema-template.json]")?
        .into();
    let template_path: Option<PathBuf> = args.next().map(Into::into);

    let text = std::fs::read_to_string(&text_path)
        .with_context(|| format!("reading document text from {}", text_path.display()))?;

    let extractor = RuleBasedExtractor::new(config);
    let record = extractor.extract(&DocumentText::new(text, None));
    info!(
        name = %record.personal_info.name,
        skills = record.skills.len(),
        experience = record.experience.len(),
        education = record.education.len(),
        "extraction complete"
    );

    let output = match template_path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading schema template from {}", path.display()))?;
            let template = SchemaTemplate::from_json_str(&raw)
                .with_context(|| format!("parsing schema template {}", path.display()))?;
            project(&record, &template)
        }
        None => serde_json::to_value(&record)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
