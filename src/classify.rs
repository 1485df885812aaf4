use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})[ \t](.+)$").expect("valid heading regex"));
static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)[-*][ \t](.+)").expect("valid bullet regex"));

/// Classification of a single line, made without reference to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace only.
    Blank,
    Heading { level: u8, text: &'a str },
    /// `indent` is the width of the leading whitespace in characters.
    Bullet { indent: usize, text: &'a str },
    /// Anything else; carries the whole raw line.
    Paragraph(&'a str),
}

/// Classify one line. Headings win over bullets, bullets over paragraphs.
pub fn classify(line: &str) -> LineClass<'_> {
    if line.trim().is_empty() {
        return LineClass::Blank;
    }

    if let Some(caps) = HEADING.captures(line) {
        if let (Some(hashes), Some(text)) = (caps.get(1), caps.get(2)) {
            return LineClass::Heading {
                // At most six ASCII hashes.
                level: hashes.len() as u8,
                text: text.as_str(),
            };
        }
    }

    if let Some(caps) = BULLET.captures(line) {
        if let (Some(indent), Some(text)) = (caps.get(1), caps.get(2)) {
            return LineClass::Bullet {
                indent: indent.as_str().chars().count(),
                text: text.as_str(),
            };
        }
    }

    LineClass::Paragraph(line)
}
