//! Classification rules turning structural signals into coarse asymptotic
//! classes and improvement suggestions. Pure functions over a finished walk.

use super::visitor::ComplexityVisitor;
use crate::core::types::{AnalysisReport, SpaceComplexity, Suggestion, TimeComplexity};

/// Estimate the time class from the collected signals.
///
/// Recursion signals outrank loop-depth signals: one self-recursive call
/// site reads as linear recursion, two or more as exponential branching,
/// regardless of any loops present elsewhere.
pub fn estimate_time_complexity(visitor: &ComplexityVisitor) -> TimeComplexity {
    if visitor.recursive_calls >= 2 {
        TimeComplexity::Exponential
    } else if visitor.recursive_calls == 1 {
        TimeComplexity::Linear
    } else {
        match visitor.max_loop_depth {
            0 => TimeComplexity::Constant,
            1 => TimeComplexity::Linear,
            2 => TimeComplexity::Quadratic,
            depth => TimeComplexity::Polynomial(depth),
        }
    }
}

/// Estimate the space class. Any list or dictionary literal anywhere in the
/// module reads as linear auxiliary space; this is a deliberately coarse
/// proxy and not scoped to loops or input size.
pub fn estimate_space_complexity(visitor: &ComplexityVisitor) -> SpaceComplexity {
    if visitor.bulk_literals > 0 {
        SpaceComplexity::Linear
    } else {
        SpaceComplexity::Constant
    }
}

/// Emit every suggestion whose trigger fired. The rules are independent and
/// the output order is stable.
pub fn suggest_improvements(visitor: &ComplexityVisitor) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    if visitor.max_loop_depth >= 2 {
        suggestions.push(Suggestion::HashNestedIteration);
    }
    if visitor.recursive_calls >= 1 {
        suggestions.push(Suggestion::Memoize);
    }
    if visitor.bulk_literals > 0 {
        suggestions.push(Suggestion::LazySequences);
    }
    if visitor.max_loop_depth == 0 && visitor.recursive_calls == 0 {
        suggestions.push(Suggestion::NoMajorComplexity);
    }
    suggestions
}

/// Assemble the caller-facing report from a finished walk. Flags keep their
/// traversal order; no further computation happens here.
pub fn build_report(visitor: ComplexityVisitor) -> AnalysisReport {
    let time_class = estimate_time_complexity(&visitor);
    let space_class = estimate_space_complexity(&visitor);
    let suggestions = suggest_improvements(&visitor);
    AnalysisReport {
        time_class,
        space_class,
        flags: visitor.flags,
        suggestions,
    }
}
