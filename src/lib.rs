//! Deterministic problem filtering for contest-archive catalogs.
//!
//! `problemset-core` takes a problem catalog, a contest catalog and a
//! [`FilterSpec`](spec::FilterSpec), and returns the problems that match by
//! rating, contest category, position in contest and contest recency, in
//! catalog order and capped at a maximum count. Filtering is a pure in-memory
//! pass: identical inputs always produce identical outputs.

pub mod catalog;
pub mod filtering;
pub mod index;
pub mod spec;
pub mod types;

pub use catalog::{classify, Contest, ContestCategory, ContestPhase, Problem};
pub use filtering::{filter_problems, ProblemFilter};
pub use spec::{FilterSpec, SpecError};
pub use types::{FilterError, FilterResult};
