//! Local text heuristics: severity scoring and specialist matching
//!
//! Both analyzers are pure functions over static keyword tables. They are
//! heuristics for ordering and routing, not medical judgments.

pub mod severity;
pub mod specialist;

pub use severity::{Severity, SeverityClassifier};
pub use specialist::{SpecialistMatcher, Specialization};
