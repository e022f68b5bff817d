//! Math delimiter reformatting
//!
//! Display math (`$$...$$`) becomes a fenced ```` ```math ```` block with an
//! HTML anchor for its label; inline math (`$...$`) becomes `` $`...`$ ``.
//! Display math must be rewritten first: every `$$` pair also looks like two
//! empty inline spans, and running the inline pass first would split each
//! display block apart at its delimiters.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::trace;

use super::context::LabelStyle;

lazy_static! {
    static ref DISPLAY_MATH: Regex = Regex::new(r"(?s)\$\$\s*(.*?)\s*\$\$").unwrap();
    static ref INLINE_MATH: Regex = Regex::new(r"(?s)\$(.*?)\$").unwrap();
    static ref LABEL: Regex = Regex::new(r"\\label\{([^}]+)\}").unwrap();
}

/// Rewrite display math first, then inline math.
pub fn reformat_math(input: &str, style: LabelStyle) -> String {
    let text = reformat_display_math(input, style);
    reformat_inline_math(&text)
}

/// Replace every `$$...$$` span with a fenced math block.
pub fn reformat_display_math(input: &str, style: LabelStyle) -> String {
    DISPLAY_MATH
        .replace_all(input, |caps: &Captures| render_display_block(&caps[1], style))
        .into_owned()
}

/// Replace every `$...$` span with `` $`...`$ ``, content verbatim.
pub fn reformat_inline_math(input: &str) -> String {
    INLINE_MATH
        .replace_all(input, |caps: &Captures| format!("$`{}`$", &caps[1]))
        .into_owned()
}

/// Split off the first `\label{...}` of a math body.
///
/// Returns the body with every label directive removed, and the argument of
/// the first one. Later labels in the same body are dropped.
pub fn extract_label(content: &str) -> (String, Option<String>) {
    let label = LABEL.captures(content).map(|caps| caps[1].to_string());
    let stripped = LABEL.replace_all(content, "");
    (stripped.trim().to_string(), label)
}

fn render_display_block(raw: &str, style: LabelStyle) -> String {
    let (mut content, label) = extract_label(raw.trim());

    let mut paragraph = None;
    if let Some(label) = label.as_deref() {
        trace!(label, %style, "labelled display math");
        match style {
            LabelStyle::Tag => {
                content = inject_before_end(&content, &format!("\\tag{{{}}}", label));
            }
            LabelStyle::Quadd(count) => {
                let line = format!("{}\\text{{({})}}", "\\qquad".repeat(count.get()), label);
                content = inject_before_end(&content, &line);
            }
            LabelStyle::Paragraph => {
                paragraph = Some(format!("<p align=\"right\">({})</p>\n", label));
            }
        }
    }

    let mut block: Vec<String> = vec![String::new()];
    if let Some(label) = label {
        block.push(format!("<a id=\"{}\"></a>", label));
    }
    if let Some(paragraph) = paragraph {
        block.push(paragraph);
    }
    block.push("```math".to_string());
    block.push(content);
    block.push("```".to_string());
    block.push(String::new());
    block.join("\n")
}

/// Insert `line` before the last line containing `\end{`, or append it.
fn inject_before_end(content: &str, line: &str) -> String {
    let mut lines: Vec<&str> = content.lines().collect();
    match lines.iter().rposition(|l| l.contains("\\end{")) {
        Some(idx) => lines.insert(idx, line),
        None => lines.push(line),
    }
    lines.join("\n")
}
