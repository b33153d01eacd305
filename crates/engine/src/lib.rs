//! Rule-based CV extraction and schema projection engine.
//!
//! The pipeline turns pre-extracted document text into one `CanonicalRecord`
//! (segmentation, contact extraction, per-section parsing, assembly), then
//! projects that record through any number of caller-supplied JSON schema
//! templates. Extraction is total and never fails; the only error paths in
//! the crate are malformed templates.

pub mod config;
pub mod errors;
pub mod extract;
pub mod lexicon;
pub mod mapper;
pub mod models;

pub use config::EngineConfig;
pub use errors::EngineError;
pub use extract::{ExtractionBackend, RuleBasedExtractor};
pub use mapper::project;
pub use models::record::{CanonicalRecord, DocumentText};
pub use models::schema::SchemaTemplate;
