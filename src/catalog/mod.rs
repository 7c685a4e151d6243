pub mod category;
pub mod contest;
pub mod problem;
pub mod response;

pub use crate::types::identifiers::ContestId;
pub use category::{classify, Classifier, ContestCategory, DivisionClassifier};
pub use contest::{Contest, ContestPhase};
pub use problem::{Problem, PROBLEMSET_BASE_URL};
pub use response::{
    load_contests, load_contests_file, load_problemset, load_problemset_file, ApiResponse,
    ApiStatus, CatalogError,
};
