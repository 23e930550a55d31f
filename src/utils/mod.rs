pub mod letters;
pub mod logging;

pub use letters::encode_letters;
