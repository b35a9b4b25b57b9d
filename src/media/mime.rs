//! Extension handling and MIME guessing for picked files.
//!
//! The CLI stands in for a browser file picker, so the MIME type the
//! validator inspects is guessed here from the file name.

/// Lower-cased text after the final `.`.
///
/// A name without a dot is returned whole, so a bare `mp3` counts as having
/// the `mp3` extension.
pub fn extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or("").to_lowercase()
}

/// Guess a MIME type from the file name extension.
pub fn guess_type(name: &str) -> String {
    match extension(name).as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_takes_text_after_final_dot() {
        assert_eq!(extension("song.mp3"), "mp3");
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension("SHOUTY.MP4"), "mp4");
    }

    #[test]
    fn dotless_name_is_its_own_extension() {
        assert_eq!(extension("Makefile"), "makefile");
        assert_eq!(extension(".hidden"), "hidden");
        assert_eq!(extension("trailing."), "");
    }

    #[test]
    fn guesses_media_types() {
        assert_eq!(guess_type("track.mp3"), "audio/mpeg");
        assert_eq!(guess_type("clip.mp4"), "video/mp4");
        assert_eq!(guess_type("clip.webm"), "video/webm");
        assert_eq!(guess_type("photo.JPG"), "image/jpeg");
        assert_eq!(guess_type("photo.png"), "image/png");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(guess_type("notes.txt"), "application/octet-stream");
        assert_eq!(guess_type("binary"), "application/octet-stream");
    }
}
