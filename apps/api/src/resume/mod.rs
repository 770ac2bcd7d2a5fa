// Resume parsing: section extraction, confidence scoring and form population.
// Input is plain text; document-to-text conversion happens upstream.

pub mod extractor;
pub mod form;
pub mod handlers;
pub mod heuristics;
pub mod sections;

pub use extractor::{ExtractError, SectionExtractor};
pub use heuristics::HeaderRule;
