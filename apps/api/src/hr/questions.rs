use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HrCategory {
    Introduction,
    Behavioral,
    Motivation,
    StrengthsWeaknesses,
    Closing,
}

impl FromStr for HrCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "introduction" => Ok(HrCategory::Introduction),
            "behavioral" | "behavioural" => Ok(HrCategory::Behavioral),
            "motivation" => Ok(HrCategory::Motivation),
            "strengths_weaknesses" => Ok(HrCategory::StrengthsWeaknesses),
            "closing" => Ok(HrCategory::Closing),
            other => Err(format!("Unknown HR question category '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HrQuestion {
    pub id: &'static str,
    pub category: HrCategory,
    pub prompt: &'static str,
    pub tips: &'static [&'static str],
}

pub const HR_QUESTIONS: &[HrQuestion] = &[
    HrQuestion {
        id: "tell-me-about-yourself",
        category: HrCategory::Introduction,
        prompt: "Tell me about yourself.",
        tips: &[
            "Keep it to present, past, future in under two minutes",
            "Lead with the role you do now and one concrete achievement",
            "End with why this role is the next step",
        ],
    },
    HrQuestion {
        id: "walk-through-resume",
        category: HrCategory::Introduction,
        prompt: "Walk me through your resume.",
        tips: &[
            "Pick the two or three experiences most relevant to this role",
            "Explain each transition in one sentence",
        ],
    },
    HrQuestion {
        id: "conflict-with-teammate",
        category: HrCategory::Behavioral,
        prompt: "Describe a time you disagreed with a teammate. How did you resolve it?",
        tips: &[
            "Use STAR: situation, task, action, result",
            "Focus on what you did, not what they did wrong",
            "Close with the outcome and what you learned",
        ],
    },
    HrQuestion {
        id: "missed-deadline",
        category: HrCategory::Behavioral,
        prompt: "Tell me about a time you missed a deadline.",
        tips: &[
            "Own the miss without blaming others",
            "Show the concrete steps you took to recover",
            "Quantify the impact if you can",
        ],
    },
    HrQuestion {
        id: "led-without-authority",
        category: HrCategory::Behavioral,
        prompt: "Give an example of when you led a team without formal authority.",
        tips: &[
            "Name the goal and why people had to buy in",
            "Describe how you influenced decisions",
        ],
    },
    HrQuestion {
        id: "why-this-company",
        category: HrCategory::Motivation,
        prompt: "Why do you want to work here?",
        tips: &[
            "Reference something specific about the company's product or mission",
            "Connect it to your own experience or goals",
        ],
    },
    HrQuestion {
        id: "five-years",
        category: HrCategory::Motivation,
        prompt: "Where do you see yourself in five years?",
        tips: &[
            "Show ambition that fits the role's growth path",
            "Avoid naming a different job or company",
        ],
    },
    HrQuestion {
        id: "greatest-strength",
        category: HrCategory::StrengthsWeaknesses,
        prompt: "What is your greatest strength?",
        tips: &[
            "Pick one strength that matters for this role",
            "Back it with a short example",
        ],
    },
    HrQuestion {
        id: "greatest-weakness",
        category: HrCategory::StrengthsWeaknesses,
        prompt: "What is your greatest weakness?",
        tips: &[
            "Choose a real weakness that is not core to the role",
            "Explain what you are doing to improve it",
        ],
    },
    HrQuestion {
        id: "questions-for-us",
        category: HrCategory::Closing,
        prompt: "Do you have any questions for us?",
        tips: &[
            "Always ask at least one question",
            "Ask about team practices, success in the first 90 days, or next steps",
        ],
    },
];

pub fn find_question(id: &str) -> Option<&'static HrQuestion> {
    HR_QUESTIONS.iter().find(|q| q.id == id)
}

pub fn questions_in(category: Option<HrCategory>) -> Vec<&'static HrQuestion> {
    HR_QUESTIONS
        .iter()
        .filter(|q| category.map_or(true, |c| q.category == c))
        .collect()
}
