pub mod choices;
pub mod filter_spec;

pub use choices::FilterChoices;
pub use filter_spec::{FilterSpec, SpecError, POSITION_MAX, POSITION_MIN};
