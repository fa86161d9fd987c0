pub mod classifier;
pub mod visitor;

pub use classifier::{
    build_report, estimate_space_complexity, estimate_time_complexity, suggest_improvements,
};
pub use visitor::ComplexityVisitor;
