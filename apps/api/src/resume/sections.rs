use std::fmt;

use serde::{Deserialize, Serialize};

/// The four canonical resume sections tracked by the extractor.
///
/// Declaration order is the canonical order used for warnings and for the
/// serialized section map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    Skills,
    Experience,
    Education,
    Projects,
}

impl ResumeSection {
    pub const ALL: [ResumeSection; 4] = [
        ResumeSection::Skills,
        ResumeSection::Experience,
        ResumeSection::Education,
        ResumeSection::Projects,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResumeSection::Skills => "Skills",
            ResumeSection::Experience => "Experience",
            ResumeSection::Education => "Education",
            ResumeSection::Projects => "Projects",
        }
    }

    /// Confidence weight. The four weights sum to 100.
    pub fn weight(self) -> u32 {
        match self {
            ResumeSection::Skills => 30,
            ResumeSection::Experience => 30,
            ResumeSection::Education => 20,
            ResumeSection::Projects => 20,
        }
    }

    /// Lowercase ASCII header spellings recognized for this section.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ResumeSection::Skills => SKILLS_ALIASES,
            ResumeSection::Experience => EXPERIENCE_ALIASES,
            ResumeSection::Education => EDUCATION_ALIASES,
            ResumeSection::Projects => PROJECTS_ALIASES,
        }
    }
}

impl fmt::Display for ResumeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const SKILLS_ALIASES: &[&str] = &[
    "skills",
    "technical skills",
    "key skills",
    "core skills",
    "skills and abilities",
    "skills & abilities",
    "core competencies",
    "competencies",
    "technologies",
    "tech stack",
];

const EXPERIENCE_ALIASES: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "relevant experience",
    "employment",
    "employment history",
    "work history",
    "internships",
    "internship experience",
];

const EDUCATION_ALIASES: &[&str] = &[
    "education",
    "educational background",
    "educational qualifications",
    "academic background",
    "academics",
    "qualifications",
];

const PROJECTS_ALIASES: &[&str] = &[
    "projects",
    "personal projects",
    "academic projects",
    "key projects",
    "project work",
    "project experience",
];
