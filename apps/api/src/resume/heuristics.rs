//! Header-position heuristics: decide whether an alias occurrence is a section
//! header or incidental inline text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Characters allowed before a header on its line (markdown hashes, bullets,
/// rules). Numbered-heading prefixes such as `2.` or `3)` are handled by
/// `is_heading_prefix`.
const LEADING_DECORATION: &[char] = &['#', '*', '-', '•', '·', '>', '|', '=', '_'];

/// Characters allowed after a header on its line.
const TRAILING_DECORATION: &[char] = &[':', '-', '–', '—', '=', '*', '#', '|', '_'];

/// How strictly an alias occurrence must look like a header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderRule {
    /// Alias starts its line and only decoration follows it.
    #[default]
    OwnLine,
    /// Alias starts its line; inline content may follow (`Skills: Rust, Go`).
    LineStart,
    /// Alias anywhere, delimited by non-alphanumeric characters.
    Anywhere,
}

impl HeaderRule {
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderRule::OwnLine => "own_line",
            HeaderRule::LineStart => "line_start",
            HeaderRule::Anywhere => "anywhere",
        }
    }
}

impl fmt::Display for HeaderRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "own_line" => Ok(HeaderRule::OwnLine),
            "line_start" => Ok(HeaderRule::LineStart),
            "anywhere" => Ok(HeaderRule::Anywhere),
            other => Err(format!(
                "unknown header rule '{other}' (expected own_line, line_start or anywhere)"
            )),
        }
    }
}

/// Checks the alias occurrence at `[start, alias_end)` against `rule`.
///
/// Returns the offset where section content begins (the header end) when the
/// occurrence qualifies. Trailing decoration on the header line is consumed,
/// and so is the line break when nothing else remains on the line.
pub fn header_end(text: &str, start: usize, alias_end: usize, rule: HeaderRule) -> Option<usize> {
    let line_start = text[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = text[alias_end..]
        .find('\n')
        .map(|i| alias_end + i)
        .unwrap_or(text.len());

    let prefix = &text[line_start..start];
    let rest = &text[alias_end..line_end];

    let at_line_start = is_heading_prefix(prefix);
    let left_boundary = prefix
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let right_boundary = rest.chars().next().map_or(true, |c| !c.is_alphanumeric());

    let qualifies = match rule {
        HeaderRule::OwnLine => at_line_start && rest.chars().all(is_trailing),
        HeaderRule::LineStart => at_line_start && right_boundary,
        HeaderRule::Anywhere => left_boundary && right_boundary,
    };
    if !qualifies {
        return None;
    }

    let mut end = alias_end;
    for (i, c) in rest.char_indices() {
        if !is_trailing(c) {
            break;
        }
        end = alias_end + i + c.len_utf8();
    }
    if end == line_end && line_end < text.len() {
        end += 1;
    }
    Some(end)
}

/// True when `prefix` holds only whitespace, decoration and numbering. A digit
/// run counts as numbering only when `.` or `)` closes it, so `2019 Experience`
/// stays content.
fn is_heading_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            while chars.next_if(char::is_ascii_digit).is_some() {}
            if chars.next_if(|&c| c == '.' || c == ')').is_none() {
                return false;
            }
        } else if !(c.is_whitespace() || LEADING_DECORATION.contains(&c)) {
            return false;
        }
    }
    true
}

fn is_trailing(c: char) -> bool {
    c.is_whitespace() || TRAILING_DECORATION.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str, alias: &str, rule: HeaderRule) -> Option<usize> {
        let start = text.to_ascii_lowercase().find(alias).unwrap();
        header_end(text, start, start + alias.len(), rule)
    }

    #[test]
    fn test_own_line_header_consumes_line_break() {
        let text = "Skills\nRust";
        assert_eq!(check(text, "skills", HeaderRule::OwnLine), Some(7));
    }

    #[test]
    fn test_own_line_accepts_markdown_and_colon() {
        let text = "## Education:  \nBSc";
        let end = check(text, "education", HeaderRule::OwnLine).unwrap();
        assert_eq!(&text[end..], "BSc");
    }

    #[test]
    fn test_own_line_accepts_numbered_heading() {
        assert!(check("2. Projects\nApp", "projects", HeaderRule::OwnLine).is_some());
    }

    #[test]
    fn test_own_line_accepts_parenthesised_number() {
        assert!(check("# 3) Skills\nRust", "skills", HeaderRule::OwnLine).is_some());
        assert!(check("10. Education\nBSc", "education", HeaderRule::OwnLine).is_some());
    }

    #[test]
    fn test_bare_number_is_not_heading_prefix() {
        assert!(check("2019 Experience\nAcme", "experience", HeaderRule::OwnLine).is_none());
        assert!(check("3 Projects: shipped\n", "projects", HeaderRule::LineStart).is_none());
    }

    #[test]
    fn test_own_line_rejects_inline_mention() {
        assert!(check("I have 5 years experience\n", "experience", HeaderRule::OwnLine).is_none());
    }

    #[test]
    fn test_own_line_rejects_content_after_alias() {
        assert!(check("Skills: Rust, Go\n", "skills", HeaderRule::OwnLine).is_none());
    }

    #[test]
    fn test_line_start_accepts_inline_content() {
        let text = "Skills: Rust, Go\n";
        let end = check(text, "skills", HeaderRule::LineStart).unwrap();
        assert_eq!(&text[end..], "Rust, Go\n");
    }

    #[test]
    fn test_word_boundary_required() {
        assert!(check("Experienced engineer\n", "experience", HeaderRule::LineStart).is_none());
        assert!(check("my skillset", "skills", HeaderRule::Anywhere).is_none());
    }

    #[test]
    fn test_anywhere_accepts_inline() {
        assert!(check("see my projects below", "projects", HeaderRule::Anywhere).is_some());
    }

    #[test]
    fn test_header_at_end_of_text() {
        let text = "Skills\nRust\nProjects";
        assert_eq!(check(text, "projects", HeaderRule::OwnLine), Some(text.len()));
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "Skills\r\nRust";
        let end = check(text, "skills", HeaderRule::OwnLine).unwrap();
        assert_eq!(&text[end..], "Rust");
    }

    #[test]
    fn test_unicode_decoration() {
        let text = "• Experience —\nAcme";
        let end = check(text, "experience", HeaderRule::OwnLine).unwrap();
        assert_eq!(&text[end..], "Acme");
    }

    #[test]
    fn test_rule_from_str() {
        assert_eq!("own_line".parse::<HeaderRule>().unwrap(), HeaderRule::OwnLine);
        assert_eq!("Line-Start".parse::<HeaderRule>().unwrap(), HeaderRule::LineStart);
        assert_eq!("anywhere".parse::<HeaderRule>().unwrap(), HeaderRule::Anywhere);
        assert!("fuzzy".parse::<HeaderRule>().is_err());
    }
}
