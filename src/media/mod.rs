//! Media domain: the server's record schema, pre-flight batch validation,
//! MIME guessing for picked files, and preview planning.

pub mod mime;
pub mod preview;
pub mod schema;
pub mod validate;

pub use preview::{PreviewKind, PreviewPlan};
pub use schema::{Candidate, MediaRecord};
pub use validate::{validate_batch, Rejection};
