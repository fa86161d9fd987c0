//! Analysis entry points

use crate::core::{AnalysisReport, Result};
use std::fs;
use std::path::Path;

pub mod python;

pub use python::PythonAnalyzer;

/// Analyze Python source text and produce a complexity report.
pub fn analyze_source(source: &str) -> Result<AnalysisReport> {
    PythonAnalyzer::new().analyze(source)
}

/// Read a file and analyze its contents.
pub fn analyze_file(path: &Path) -> Result<AnalysisReport> {
    let content = fs::read_to_string(path)?;
    analyze_source(&content)
}
