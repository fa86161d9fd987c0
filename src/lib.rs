//! Heuristic asymptotic complexity estimation for Python source.
//!
//! The crate parses Python with tree-sitter, walks the syntax tree once to
//! collect structural signals (loop nesting depth, self-recursive call
//! sites, bulk collection literals), and maps those signals onto coarse
//! time and space classes together with flagged source locations and
//! improvement suggestions.
//!
//! ```
//! use bigo::analyze_source;
//!
//! let source = "for i in xs:\n    for j in ys:\n        total = i * j\n";
//! let report = analyze_source(source)?;
//! assert_eq!(report.time_class.to_string(), "O(n^2)");
//! # Ok::<(), bigo::Error>(())
//! ```

pub mod analyzers;
pub mod complexity;
pub mod core;

pub use crate::analyzers::{analyze_file, analyze_source, PythonAnalyzer};
pub use crate::complexity::{
    build_report, estimate_space_complexity, estimate_time_complexity, suggest_improvements,
    ComplexityVisitor,
};
pub use crate::core::{
    AnalysisReport, Error, Flag, Result, SpaceComplexity, Suggestion, TimeComplexity,
};
