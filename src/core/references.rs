//! Cross-reference normalization
//!
//! Reduces the reference notations pandoc leaves behind to a single
//! Markdown link form, `[label](#label)` or `[[label]](#label)`. Label text
//! is kept as-is here; equation numbering happens in a later pass.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::context::GfmOptions;

lazy_static! {
    /// `\ref{label}` and `\eqref{label}`
    static ref REF_COMMAND: Regex = Regex::new(r"\\(?:eq)?ref\{([^}]+)\}").unwrap();

    /// Pandoc anchor reference, optionally wrapped in parentheses:
    /// `(<a href="#eq:1" data-reference-type="ref" data-reference="eq:1">[eq:1]</a>)`
    static ref ANCHOR_REFERENCE: Regex = Regex::new(
        r##"(?i)(\()?<a\s+href="#([^"]+)"\s+[^>]*>\s*\[[^\]]+\]\s*</a>(\))?"##
    )
    .unwrap();
}

/// Run both reference rules over the whole text.
pub fn normalize_references(input: &str, options: &GfmOptions) -> String {
    let text = convert_ref_commands(input);
    simplify_anchor_references(&text, options.remove_parens, options.keep_link_brackets)
}

/// Convert `\ref{X}` / `\eqref{X}` into `[X](#X)`.
pub fn convert_ref_commands(input: &str) -> String {
    REF_COMMAND.replace_all(input, "[${1}](#${1})").into_owned()
}

/// Convert pandoc HTML anchor references into Markdown links.
///
/// The link is built from the `href` target; the bracketed visible text is
/// discarded. Without `keep_link_brackets` the label is double-bracketed.
/// Parentheses that surrounded the anchor are kept unless `remove_parens`.
pub fn simplify_anchor_references(
    input: &str,
    remove_parens: bool,
    keep_link_brackets: bool,
) -> String {
    ANCHOR_REFERENCE
        .replace_all(input, |caps: &Captures| {
            let label = &caps[2];
            let link = if keep_link_brackets {
                format!("[{}](#{})", label, label)
            } else {
                format!("[[{}]](#{})", label, label)
            };
            if remove_parens {
                return link;
            }
            let open = caps.get(1).map_or("", |m| m.as_str());
            let close = caps.get(3).map_or("", |m| m.as_str());
            format!("{}{}{}", open, link, close)
        })
        .into_owned()
}
