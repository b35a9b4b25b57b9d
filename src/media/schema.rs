use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored file record exactly as the server serializes it.
///
/// Records are immutable from the client's point of view: the client creates
/// and deletes them, never edits them. `file` is either a root-relative stored
/// path (`/media/...`) or an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: u64,
    pub file: String,
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
    #[serde(default)]
    pub category: String,
    pub uploaded_at: DateTime<Utc>,
}

/// A local file picked for upload.
///
/// Carries everything validation needs (name, size, MIME) without the bytes;
/// the transport reads the bytes from `path` at send time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime: String,
}
