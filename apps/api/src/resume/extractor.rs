//! Section Extractor — locates Skills / Experience / Education / Projects headers
//! in raw resume text, slices each section's content and scores completeness.
//!
//! Algorithm:
//! 1. Collect every alias occurrence that passes the configured `HeaderRule`.
//! 2. Order candidates by offset, longest alias first at equal offsets; drop
//!    any candidate overlapping an accepted one. First hit per section wins.
//! 3. Content span = `[header_end, next_header_start)` or end of text.
//! 4. confidence = Σ weight over sections whose header was found.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::resume::heuristics::{header_end, HeaderRule};
use crate::resume::sections::ResumeSection;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("resume text is empty")]
    EmptyInput,
}

/// Byte offsets of a located section. `start..end` is the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSpan {
    pub header_start: usize,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionMatch {
    pub section: ResumeSection,
    /// True whenever a header was found, however short the content.
    pub present: bool,
    /// Header spelling as it appears in the text.
    pub alias: Option<String>,
    pub span: Option<SectionSpan>,
    /// Raw content between the header and the next header (or end of text).
    pub content: String,
}

impl SectionMatch {
    fn absent(section: ResumeSection) -> Self {
        Self {
            section,
            present: false,
            alias: None,
            span: None,
            content: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionWarning {
    pub section: ResumeSection,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// One entry per canonical section, present or not.
    pub sections: BTreeMap<ResumeSection, SectionMatch>,
    /// Sum of weights of present sections (0–100).
    pub confidence: u32,
    /// One warning per absent section, canonical order.
    pub warnings: Vec<SectionWarning>,
}

impl ExtractionResult {
    pub fn is_present(&self, section: ResumeSection) -> bool {
        self.sections.get(&section).is_some_and(|m| m.present)
    }

    /// Raw content of a present section.
    pub fn content(&self, section: ResumeSection) -> Option<&str> {
        self.sections
            .get(&section)
            .filter(|m| m.present)
            .map(|m| m.content.as_str())
    }
}

/// A qualifying alias occurrence.
#[derive(Debug, Clone, Copy)]
struct HeaderHit {
    section: ResumeSection,
    start: usize,
    alias_end: usize,
    content_start: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SectionExtractor {
    rule: HeaderRule,
}

impl SectionExtractor {
    pub fn new(rule: HeaderRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> HeaderRule {
        self.rule
    }

    pub fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractError> {
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyInput);
        }

        let headers = self.locate_headers(text);

        let mut sections: BTreeMap<ResumeSection, SectionMatch> = ResumeSection::ALL
            .iter()
            .map(|&s| (s, SectionMatch::absent(s)))
            .collect();

        for (i, hit) in headers.iter().enumerate() {
            let end = headers
                .get(i + 1)
                .map(|next| next.start)
                .unwrap_or(text.len())
                .max(hit.content_start);
            sections.insert(
                hit.section,
                SectionMatch {
                    section: hit.section,
                    present: true,
                    alias: Some(text[hit.start..hit.alias_end].to_string()),
                    span: Some(SectionSpan {
                        header_start: hit.start,
                        start: hit.content_start,
                        end,
                    }),
                    content: text[hit.content_start..end].to_string(),
                },
            );
        }

        let confidence = sections
            .values()
            .filter(|m| m.present)
            .map(|m| m.section.weight())
            .sum();

        let warnings = sections
            .values()
            .filter(|m| !m.present)
            .map(|m| SectionWarning {
                section: m.section,
                message: format!("No {} section header found", m.section.name()),
            })
            .collect();

        Ok(ExtractionResult {
            sections,
            confidence,
            warnings,
        })
    }

    /// Returns the accepted header of each located section, sorted by offset.
    fn locate_headers(&self, text: &str) -> Vec<HeaderHit> {
        // ASCII lowercasing keeps byte offsets aligned with `text`.
        let haystack = text.to_ascii_lowercase();

        let mut candidates = Vec::new();
        for section in ResumeSection::ALL {
            for alias in section.aliases() {
                for (start, _) in haystack.match_indices(alias) {
                    let alias_end = start + alias.len();
                    if let Some(content_start) = header_end(text, start, alias_end, self.rule) {
                        candidates.push(HeaderHit {
                            section,
                            start,
                            alias_end,
                            content_start,
                        });
                    }
                }
            }
        }

        candidates.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| b.alias_end.cmp(&a.alias_end))
        });

        let mut accepted: Vec<HeaderHit> = Vec::new();
        let mut claimed_until = 0;
        for hit in candidates {
            if hit.start < claimed_until {
                continue;
            }
            claimed_until = hit.alias_end;
            if accepted.iter().any(|h| h.section == hit.section) {
                continue;
            }
            debug!(
                section = %hit.section,
                offset = hit.start,
                rule = %self.rule,
                "Located resume section header"
            );
            accepted.push(hit);
        }
        accepted
    }
}

/// Extracts sections using the default `own_line` header rule.
pub fn extract_sections(text: &str) -> Result<ExtractionResult, ExtractError> {
    SectionExtractor::default().extract(text)
}
