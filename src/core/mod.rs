//! Rewriting passes
//!
//! - `references`: `\ref`, `\eqref` and pandoc anchor links to Markdown links
//! - `math`: `$$...$$` to fenced math blocks, `$...$` to `` $`...`$ ``
//! - `numbering`: equation labels to sequential numbers

pub mod context;
pub mod math;
pub mod numbering;
pub mod references;

pub use context::{GfmOptions, LabelStyle};
pub use numbering::EquationMap;
