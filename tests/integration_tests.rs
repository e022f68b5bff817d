//! Integration tests for the full texmd2gfm pipeline

use std::num::NonZeroUsize;
use texmd2gfm::{convert, latex_markdown_to_gfm, normalize_references, GfmOptions, LabelStyle};

fn quadd(n: usize) -> LabelStyle {
    LabelStyle::Quadd(NonZeroUsize::new(n).unwrap())
}

// ============================================================================
// References
// ============================================================================

mod references {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_without_references_is_unchanged() {
        let input = "# Title\n\nSome *prose* with [a link](https://example.com).\n";
        assert_eq!(normalize_references(input, &GfmOptions::default()), input);
    }

    #[test]
    fn test_pandoc_anchor_default_output() {
        let input = r##"As shown in (<a href="#eq:euler" data-reference-type="ref" data-reference="eq:euler">[eq:euler]</a>)."##;
        let out = normalize_references(input, &GfmOptions::default());
        assert_eq!(out, "As shown in ([[eq:euler]](#eq:euler)).");
    }

    #[test]
    fn test_non_equation_labels_pass_through_numbering() {
        let out = latex_markdown_to_gfm(r"See \ref{sec:intro}.", &GfmOptions::default());
        assert_eq!(out, "See [sec:intro](#sec:intro).");
    }
}

// ============================================================================
// Math blocks
// ============================================================================

mod math {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tag_block_is_numbered() {
        let out = latex_markdown_to_gfm("$$x+y\\label{eq:a}$$", &GfmOptions::default());
        assert_eq!(out, "\n<a id=\"eq:a\"></a>\n```math\nx+y\n\\tag{1}\n```\n");
    }

    #[test]
    fn test_quadd_block() {
        let opts = GfmOptions::new().with_label_style(quadd(2));
        let out = latex_markdown_to_gfm("$$x+y\\label{eq:a}$$", &opts);
        assert!(out.contains("x+y\n\\qquad\\qquad\\text{(1)}"), "got {}", out);
        assert!(!out.contains("\\label"));
    }

    #[test]
    fn test_paragraph_block() {
        let opts = GfmOptions::new().with_label_style(LabelStyle::Paragraph);
        let out = latex_markdown_to_gfm("$$x\\label{eq:a}$$", &opts);
        assert!(out.contains("<p align=\"right\">(1)</p>\n\n```math\nx\n```"));
    }

    #[test]
    fn test_inline_math_next_to_display_math() {
        let input = "Take $\\alpha$:\n\n$$\n\\beta\n$$\n";
        let out = latex_markdown_to_gfm(input, &GfmOptions::default());
        assert_eq!(out, "Take $`\\alpha`$:\n\n\n```math\n\\beta\n```\n\n");
    }
}

// ============================================================================
// Equation numbering
// ============================================================================

mod numbering {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOCUMENT: &str = r##"We have \eqref{eq:second} and (<a href="#eq:first" data-reference-type="ref" data-reference="eq:first">[eq:first]</a>).

$$
E = mc^2 \label{eq:first}
$$

$$
\begin{aligned}
a &= b \label{eq:second} \\
c &= d
\end{aligned}
$$

Unknown: [eq:missing](#eq:missing).
"##;

    #[test]
    fn test_sequential_numbers_in_document_order() {
        let result = convert(DOCUMENT, &GfmOptions::default());
        let pairs: Vec<_> = result.equations.iter().collect();
        assert_eq!(pairs, vec![("eq:first", "1"), ("eq:second", "2")]);
    }

    #[test]
    fn test_references_show_numbers_and_keep_targets() {
        let out = latex_markdown_to_gfm(DOCUMENT, &GfmOptions::default());
        assert!(out.contains("We have [2](#eq:second) and ([[1]](#eq:first))."));
        assert!(out.contains("<a id=\"eq:first\"></a>"));
        assert!(out.contains("<a id=\"eq:second\"></a>"));
        assert!(out.contains("E = mc^2\n\\tag{1}\n```"));
        assert!(out.contains("c &= d\n\\tag{2}\n\\end{aligned}"));
        assert!(out.contains("Unknown: [eq:missing](#eq:missing)."));
    }

    #[test]
    fn test_flags_change_reference_shape() {
        let opts = GfmOptions::new()
            .with_remove_parens(true)
            .with_keep_link_brackets(true);
        let out = latex_markdown_to_gfm(DOCUMENT, &opts);
        assert!(out.contains("We have [2](#eq:second) and [1](#eq:first)."));
    }

    #[test]
    fn test_only_anchored_labels_are_numbered() {
        let input = "[eq:a](#eq:a) [eq:b](#eq:b)\n\n$$y\\label{eq:a}$$";
        let out = latex_markdown_to_gfm(input, &GfmOptions::default());
        assert!(out.starts_with("[1](#eq:a) [eq:b](#eq:b)"));
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let first = convert(DOCUMENT, &GfmOptions::default());
        let second = convert(DOCUMENT, &GfmOptions::default());
        assert_eq!(first.content, second.content);
        assert_eq!(first.equations, second.equations);
    }
}
