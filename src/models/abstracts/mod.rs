pub mod store;
pub mod types;

pub use store::AbstractStore;
pub use types::{Abstract, AbstractForm, FileKind, FileUpload, MAX_CONTENT_CHARS, MAX_FILE_BYTES};
