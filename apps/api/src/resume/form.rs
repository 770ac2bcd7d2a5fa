use serde::Serialize;

use crate::resume::extractor::{ExtractionResult, SectionWarning};
use crate::resume::sections::ResumeSection;

const BULLET_MARKERS: &[char] = &['-', '*', '•', '·', '>', '–'];
const SKILL_SEPARATORS: &[char] = &[',', ';', '|', '•', '·', '\n'];

/// Editable default state for the profile form, pre-filled from a parsed resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeForm {
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub projects: Vec<String>,
    pub confidence: u32,
    pub warnings: Vec<SectionWarning>,
}

impl ResumeForm {
    pub fn from_extraction(result: &ExtractionResult) -> Self {
        Self {
            skills: split_skills(section_text(result, ResumeSection::Skills)),
            experience: content_lines(section_text(result, ResumeSection::Experience)),
            education: content_lines(section_text(result, ResumeSection::Education)),
            projects: content_lines(section_text(result, ResumeSection::Projects)),
            confidence: result.confidence,
            warnings: result.warnings.clone(),
        }
    }
}

fn section_text(result: &ExtractionResult, section: ResumeSection) -> &str {
    result.content(section).unwrap_or_default()
}

/// Splits a skills block into distinct items, keeping first-seen order.
fn split_skills(content: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for raw in content.split(SKILL_SEPARATORS) {
        let item = strip_bullet(raw);
        if item.is_empty() {
            continue;
        }
        if !items.iter().any(|existing| existing.eq_ignore_ascii_case(item)) {
            items.push(item.to_string());
        }
    }
    items
}

fn content_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    line.trim().trim_start_matches(BULLET_MARKERS).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::extractor::extract_sections;

    #[test]
    fn test_form_from_full_resume() {
        let text = "Skills\nPython, SQL; Rust | Go\nExperience\n- Acme, 2 yrs\n\n* Built APIs\n\
                    Education\nBSc\nProjects\n• App";
        let form = ResumeForm::from_extraction(&extract_sections(text).unwrap());
        assert_eq!(form.skills, vec!["Python", "SQL", "Rust", "Go"]);
        assert_eq!(form.experience, vec!["Acme, 2 yrs", "Built APIs"]);
        assert_eq!(form.education, vec!["BSc"]);
        assert_eq!(form.projects, vec!["App"]);
        assert_eq!(form.confidence, 100);
        assert!(form.warnings.is_empty());
    }

    #[test]
    fn test_skills_deduplicated_case_insensitively() {
        assert_eq!(
            split_skills("Rust, rust\nSQL\n- sql\nDocker"),
            vec!["Rust", "SQL", "Docker"]
        );
    }

    #[test]
    fn test_absent_sections_are_empty() {
        let form = ResumeForm::from_extraction(&extract_sections("Experience\nWorked at X").unwrap());
        assert!(form.skills.is_empty());
        assert!(form.education.is_empty());
        assert!(form.projects.is_empty());
        assert_eq!(form.experience, vec!["Worked at X"]);
        assert_eq!(form.warnings.len(), 3);
    }

    #[test]
    fn test_hyphenated_lines_keep_inner_hyphens() {
        assert_eq!(content_lines("- 2019-2024 Acme\n"), vec!["2019-2024 Acme"]);
    }
}
