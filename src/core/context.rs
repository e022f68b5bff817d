//! Conversion options shared by every rewriting pass.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::utils::error::ConversionError;

// =============================================================================
// Label Rendering Style
// =============================================================================

/// How a `\label{...}` found inside display math is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// `\tag{label}` inside the math content
    #[default]
    Tag,
    /// `n` × `\qquad` followed by `\text{(label)}` inside the math content
    Quadd(NonZeroUsize),
    /// Right-aligned `<p>` line above the fenced block
    Paragraph,
}

impl FromStr for LabelStyle {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(count) = s.strip_prefix("quadd:") {
            let count: i64 = count.trim().parse().map_err(|_| {
                ConversionError::invalid_label_type(s, "quadd:<n> requires a positive integer n")
            })?;
            return usize::try_from(count)
                .ok()
                .and_then(NonZeroUsize::new)
                .map(LabelStyle::Quadd)
                .ok_or_else(|| {
                    ConversionError::invalid_label_type(
                        s,
                        "quadd:<n> requires a positive integer n",
                    )
                });
        }

        match s {
            "tag" => Ok(LabelStyle::Tag),
            "p" => Ok(LabelStyle::Paragraph),
            _ => Err(ConversionError::invalid_label_type(
                s,
                "expected one of tag, quadd:<n>, p",
            )),
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelStyle::Tag => write!(f, "tag"),
            LabelStyle::Quadd(n) => write!(f, "quadd:{}", n),
            LabelStyle::Paragraph => write!(f, "p"),
        }
    }
}

// =============================================================================
// Conversion Options
// =============================================================================

/// Options for LaTeX-Markdown to GFM conversion
#[derive(Debug, Clone, Default)]
pub struct GfmOptions {
    /// Drop the parentheses pandoc puts around its anchor references
    /// Default: false
    pub remove_parens: bool,

    /// Emit `[label](#label)` instead of `[[label]](#label)` for pandoc
    /// anchor references. Leaving this off keeps the double brackets.
    /// Default: false
    pub keep_link_brackets: bool,

    /// Rendering of equation labels inside display math
    /// Default: `LabelStyle::Tag`
    pub label_style: LabelStyle,
}

impl GfmOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remove_parens(mut self, remove_parens: bool) -> Self {
        self.remove_parens = remove_parens;
        self
    }

    pub fn with_keep_link_brackets(mut self, keep_link_brackets: bool) -> Self {
        self.keep_link_brackets = keep_link_brackets;
        self
    }

    pub fn with_label_style(mut self, label_style: LabelStyle) -> Self {
        self.label_style = label_style;
        self
    }
}
