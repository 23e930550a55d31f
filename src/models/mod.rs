pub mod identity;
pub mod record;
pub mod score;

pub use identity::Identity;
pub use record::{GradeRecords, Record, SubproblemKey};
pub use score::Score;
