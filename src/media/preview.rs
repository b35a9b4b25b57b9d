//! Choosing how a stored record can be shown to the user.
//!
//! Pure mapping, no I/O: the record's type string picks an affordance and
//! the stored path is resolved against the backend origin.

use super::schema::MediaRecord;

/// Extensions accepted when the server's type field is a bare extension
/// rather than a full MIME type.
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];
const VIDEO_EXTENSIONS: [&str; 2] = ["mp4", "webm"];
const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "m4a", "wav"];

/// How a record can be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Video,
    Audio,
    /// Not directly previewable; offer the file for download instead.
    Download,
}

impl PreviewKind {
    pub fn label(self) -> &'static str {
        match self {
            PreviewKind::Image => "image",
            PreviewKind::Video => "video",
            PreviewKind::Audio => "audio",
            PreviewKind::Download => "download",
        }
    }
}

/// A fully resolved preview decision for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPlan {
    pub kind: PreviewKind,
    pub url: String,
}

/// Map a record's type string to an affordance. MIME prefixes are checked
/// before the fixed extension lists; anything unrecognized downloads.
pub fn preview_kind(file_type: &str) -> PreviewKind {
    let t = file_type.to_lowercase();
    if t.starts_with("image/") || IMAGE_EXTENSIONS.contains(&t.as_str()) {
        PreviewKind::Image
    } else if t.starts_with("video/") || VIDEO_EXTENSIONS.contains(&t.as_str()) {
        PreviewKind::Video
    } else if t.starts_with("audio/") || AUDIO_EXTENSIONS.contains(&t.as_str()) {
        PreviewKind::Audio
    } else {
        PreviewKind::Download
    }
}

/// Resolve the viewable URL for a stored value.
///
/// Absolute URLs pass through untouched; root-relative stored paths are
/// concatenated onto the origin (the origin carries no trailing slash).
pub fn resolve_url(origin: &str, stored: &str) -> String {
    if stored.starts_with("http") {
        stored.to_string()
    } else {
        format!("{origin}{stored}")
    }
}

/// Preview plan for one record against a backend origin.
pub fn plan(record: &MediaRecord, origin: &str) -> PreviewPlan {
    PreviewPlan {
        kind: preview_kind(&record.file_type),
        url: resolve_url(origin, &record.file),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn record(file: &str, file_type: &str) -> MediaRecord {
        MediaRecord {
            id: 1,
            file: file.to_string(),
            file_name: "sample".to_string(),
            file_size: 150_000,
            file_type: file_type.to_string(),
            category: String::new(),
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn image_mime_renders_as_image() {
        assert_eq!(preview_kind("image/png"), PreviewKind::Image);
        assert_eq!(preview_kind("image/webp"), PreviewKind::Image);
    }

    #[test]
    fn bare_extension_types_are_recognized() {
        assert_eq!(preview_kind("jpg"), PreviewKind::Image);
        assert_eq!(preview_kind("mp4"), PreviewKind::Video);
        assert_eq!(preview_kind("wav"), PreviewKind::Audio);
    }

    #[test]
    fn mime_prefix_wins_over_extension_lists() {
        assert_eq!(preview_kind("video/quicktime"), PreviewKind::Video);
        assert_eq!(preview_kind("audio/ogg"), PreviewKind::Audio);
    }

    #[test]
    fn type_comparison_ignores_case() {
        assert_eq!(preview_kind("IMAGE/PNG"), PreviewKind::Image);
        assert_eq!(preview_kind("MP4"), PreviewKind::Video);
    }

    #[test]
    fn unrecognized_type_falls_back_to_download() {
        assert_eq!(preview_kind("application/pdf"), PreviewKind::Download);
        assert_eq!(preview_kind("txt"), PreviewKind::Download);
        assert_eq!(preview_kind(""), PreviewKind::Download);
    }

    #[test]
    fn relative_stored_path_is_prefixed_with_the_origin() {
        let plan = plan(&record("/media/uploads/a.png", "image/png"), "http://localhost:8000");
        assert_eq!(plan.url, "http://localhost:8000/media/uploads/a.png");
        assert_eq!(plan.kind, PreviewKind::Image);
    }

    #[test]
    fn absolute_stored_url_passes_through() {
        let plan = plan(
            &record("https://cdn.example.com/a.mp4", "video/mp4"),
            "http://localhost:8000",
        );
        assert_eq!(plan.url, "https://cdn.example.com/a.mp4");
    }
}
