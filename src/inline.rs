//! Inline-mark tokenizer.
//!
//! Splits the text of one line into runs. Each mark has a non-greedy
//! delimiter pattern; passes run in a fixed order and only ever rescan text
//! that no earlier pass has marked, so code span contents stay literal.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::adf::{Inline, Mark};
use crate::config::InlineDialect;

static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").expect("valid code span regex"));
static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid strong regex"));
static EM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid emphasis regex"));

/// Text plus the mark it carries, if any.
type Run = (String, Option<Mark>);

/// Tokenize `text` into inline runs.
///
/// Never fails: unmatched delimiters stay in the text, and a line that
/// splits into nothing comes back as one unmarked run of the full text.
pub fn tokenize(text: &str, dialect: InlineDialect) -> Vec<Inline> {
    let passes: Vec<(&Regex, Mark)> = match dialect {
        InlineDialect::Strong => vec![(&*STRONG, Mark::Strong)],
        InlineDialect::Extended => vec![
            (&*CODE, Mark::Code),
            (&*STRONG, Mark::Strong),
            (&*EM, Mark::Em),
        ],
    };

    let mut runs: Vec<Run> = vec![(text.to_string(), None)];
    for (pattern, mark) in passes {
        runs = split(runs, pattern, mark);
    }

    if runs.is_empty() {
        return vec![Inline::plain(text)];
    }

    runs.into_iter()
        .map(|(text, mark)| match mark {
            Some(mark) => Inline::marked(text, mark),
            None => Inline::plain(text),
        })
        .collect()
}

fn split(runs: Vec<Run>, pattern: &Regex, mark: Mark) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::with_capacity(runs.len());

    for (text, existing) in runs {
        if existing.is_some() {
            out.push((text, existing));
            continue;
        }

        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(whole) = caps.get(0) else { continue };
            let inner = caps.get(1).map_or("", |m| m.as_str());

            push_plain(&mut out, &text[last..whole.start()]);
            if inner.is_empty() {
                // An empty pair such as `****` is not a span.
                push_plain(&mut out, whole.as_str());
            } else {
                out.push((inner.to_string(), Some(mark)));
            }
            last = whole.end();
        }
        push_plain(&mut out, &text[last..]);
    }

    out
}

fn push_plain(out: &mut Vec<Run>, text: &str) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some((prev, None)) => prev.push_str(text),
        _ => out.push((text.to_string(), None)),
    }
}
