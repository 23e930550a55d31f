pub mod identity_store;
pub mod record_writer;

pub use identity_store::IdentityStore;
pub use record_writer::{RecordWriter, WrittenFiles};
