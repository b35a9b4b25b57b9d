//! Pre-flight validation of a picked batch.
//!
//! All-or-nothing: a batch is accepted only when every file passes every
//! rule. The batch-level count rule runs first and short-circuits; after
//! that each file reports at most its first violated rule, but every file
//! in the batch is inspected so the user sees one reason per bad file.

use thiserror::Error;

use super::mime::extension;
use super::schema::Candidate;

/// Most files accepted in a single upload request.
pub const MAX_BATCH_FILES: usize = 10;
/// Smallest accepted file, 100 KB.
pub const MIN_FILE_BYTES: u64 = 100_000;
/// Largest accepted file, 10 MB.
pub const MAX_FILE_BYTES: u64 = 10_000_000;
/// File extensions the server accepts.
pub const VALID_EXTENSIONS: [&str; 6] = ["mp3", "mp4", "jpeg", "png", "gif", "jpg"];

/// One reason a batch was refused.
///
/// `TooManyFiles` applies to the whole batch; the other variants name the
/// offending file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("you can upload a maximum of 10 files (got {count})")]
    TooManyFiles { count: usize },
    #[error("invalid file type: {name}")]
    InvalidType { name: String },
    #[error("invalid file size: {name} (files must be between 100KB and 10MB)")]
    InvalidSize { name: String, size: u64 },
    #[error("invalid MIME type: {name} ({mime})")]
    InvalidMime { name: String, mime: String },
}

/// Validate a candidate batch against the server's upload rules.
///
/// Returns `Ok(())` when the whole batch is clean, otherwise every
/// rejection collected. Callers must discard a rejected batch in full and
/// keep whatever selection they had before.
pub fn validate_batch(batch: &[Candidate]) -> Result<(), Vec<Rejection>> {
    if batch.len() > MAX_BATCH_FILES {
        return Err(vec![Rejection::TooManyFiles { count: batch.len() }]);
    }

    let rejections: Vec<Rejection> = batch.iter().filter_map(check_file).collect();
    if rejections.is_empty() {
        Ok(())
    } else {
        Err(rejections)
    }
}

/// First violated rule for one file: extension, then size, then MIME.
fn check_file(file: &Candidate) -> Option<Rejection> {
    let ext = extension(&file.name);
    if !VALID_EXTENSIONS.contains(&ext.as_str()) {
        return Some(Rejection::InvalidType {
            name: file.name.clone(),
        });
    }

    if file.size < MIN_FILE_BYTES || file.size > MAX_FILE_BYTES {
        return Some(Rejection::InvalidSize {
            name: file.name.clone(),
            size: file.size,
        });
    }

    // Audio must be MP3 and video MP4/WebM; image MIME types are trusted
    // once the extension has passed.
    let mime = file.mime.to_lowercase();
    let bad_audio = mime.starts_with("audio/") && mime != "audio/mpeg";
    let bad_video = mime.starts_with("video/") && mime != "video/mp4" && mime != "video/webm";
    if bad_audio || bad_video {
        return Some(Rejection::InvalidMime {
            name: file.name.clone(),
            mime: file.mime.clone(),
        });
    }

    None
}
