pub mod filter_result;
pub mod identifiers;

pub use filter_result::{Check, FilterError, FilterMetadata, FilterResult, RecordKind};
pub use identifiers::{position_from_index, ContestId, GYM_CONTEST_ID_THRESHOLD};
