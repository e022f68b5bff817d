//! texmd2gfm - rewrite pandoc's LaTeX-derived Markdown for GitHub
//!
//! Input is the output of `pandoc --from=latex --to=gfm+tex_math_dollars`.
//! Cross-references become Markdown links, display math becomes fenced
//! ```` ```math ```` blocks with anchors, inline math becomes `` $`...`$ ``,
//! and equation labels are replaced by sequential numbers.
//!
//! ```
//! use texmd2gfm::{convert, GfmOptions};
//!
//! let out = convert(r"See \eqref{eq:a}. $$x\label{eq:a}$$", &GfmOptions::default());
//! assert!(out.content.contains("[1](#eq:a)"));
//! ```

pub mod core;
pub mod utils;

use tracing::debug;

pub use crate::core::math::{reformat_display_math, reformat_inline_math, reformat_math};
pub use crate::core::numbering::{collect_equation_numbers, substitute_equation_numbers};
pub use crate::core::references::normalize_references;
pub use crate::core::{EquationMap, GfmOptions, LabelStyle};
pub use crate::utils::error::{ConversionError, ConversionResult};

/// Result of a full conversion: the rewritten text and the equation numbers
/// that were assigned while producing it.
#[derive(Debug, Clone)]
pub struct GfmConversion {
    /// The rewritten GitHub Flavored Markdown
    pub content: String,
    /// Equation label to display number, in document order
    pub equations: EquationMap,
}

/// Convert a whole document.
///
/// The passes are order-dependent and always run in this sequence:
///
/// 1. references: `\ref`/`\eqref` and pandoc anchors become `[label](#label)`
/// 2. display math: `$$...$$` becomes a fenced block, labels become anchors
/// 3. inline math: remaining `$...$` spans become `` $`...`$ ``
/// 4. numbering: anchors are numbered, then references are rewritten
///
/// Step 2 must precede step 3 (`$$` also matches the inline pattern), and
/// step 4 only sees the links and anchors produced by steps 1 and 2.
pub fn convert(input: &str, options: &GfmOptions) -> GfmConversion {
    let text = normalize_references(input, options);
    debug!(bytes = text.len(), "references normalized");

    let text = reformat_display_math(&text, options.label_style);
    let text = reformat_inline_math(&text);
    debug!(bytes = text.len(), style = %options.label_style, "math reformatted");

    let equations = collect_equation_numbers(&text);
    debug!(count = equations.len(), "equation labels numbered");

    let content = substitute_equation_numbers(&equations, &text);
    GfmConversion { content, equations }
}

/// Convert a whole document and return only the text.
pub fn latex_markdown_to_gfm(input: &str, options: &GfmOptions) -> String {
    convert(input, options).content
}
