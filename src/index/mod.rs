pub mod lookup;
pub mod recency;

pub use lookup::ContestIndex;
